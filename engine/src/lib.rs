//! Finds every word that can be traced on a Boggle-style letter grid.
//!
//! A [`Lexicon`] is built once from a word list; [`find_all`] then walks
//! every path of adjacent, distinct tiles and keeps the ones that spell a
//! lexicon word.
//!
//! ```
//! use boggle_engine::{find_all, Grid, Lexicon};
//!
//! let lexicon = Lexicon::from_words(["TEST", "SET"]);
//! let grid: Grid = "T---/-E--/--S-/---T".parse().unwrap();
//!
//! let words = find_all(&grid, &lexicon, 3);
//! assert!(words.contains("TEST"));
//! ```

pub mod config;
pub mod game;
pub mod lexicon;
pub mod models;
pub mod utils;

pub use game::{find_all, SearchOptions, Solver};
pub use lexicon::{Lexicon, LexiconError};
pub use models::{Grid, GridError, Position, Tile};
