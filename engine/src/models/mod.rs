pub mod grid;

pub use grid::{Grid, GridError, Position, Tile, NEIGHBOR_OFFSETS};
