use rand::{seq::SliceRandom, Rng};

use crate::{
    models::{Grid, Tile},
    utils::dice::DICE,
};

/// Side length of the standard board, one cube per cell
pub const GRID_SIZE: usize = 4;

pub struct GridGenerator;

impl GridGenerator {
    /// Roll a new 4x4 grid from the standard cubes
    pub fn generate() -> Grid {
        Self::generate_with(&mut rand::rng())
    }

    /// Shuffle the cubes into the grid and roll each one
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Grid {
        let mut dice: Vec<&Vec<Tile>> = DICE.iter().collect();
        dice.shuffle(rng);

        let tiles = dice
            .into_iter()
            .take(GRID_SIZE * GRID_SIZE)
            .map(|faces| faces[rng.random_range(0..faces.len())].clone())
            .collect();

        Grid::from_parts(GRID_SIZE, GRID_SIZE, tiles)
    }
}
