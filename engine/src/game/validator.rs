use std::collections::HashSet;

use crate::models::{Grid, Position};

pub struct PathValidator;

impl PathValidator {
    /// Validate that positions form a legal path on the grid
    pub fn is_valid_path(grid: &Grid, positions: &[Position]) -> bool {
        if positions.is_empty() {
            return false;
        }

        // Check that all positions are within bounds
        if !positions.iter().all(|pos| grid.contains(*pos)) {
            return false;
        }

        // Check that each position is adjacent to the previous one
        if !positions
            .windows(2)
            .all(|pair| pair[0].is_adjacent(&pair[1]))
        {
            return false;
        }

        // Check that no position is used twice
        let unique_positions: HashSet<_> = positions.iter().collect();
        unique_positions.len() == positions.len()
    }

    /// Concatenate the tiles under a path into a word
    pub fn spell(grid: &Grid, positions: &[Position]) -> String {
        positions
            .iter()
            .map(|pos| grid.tile(*pos).as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(cells: &[(usize, usize)]) -> Vec<Position> {
        cells.iter().map(|&(r, c)| Position::new(r, c)).collect()
    }

    #[test]
    fn test_diagonal_path_is_valid() {
        let grid: Grid = "T---/-E--/--S-/---T".parse().unwrap();
        let positions = path(&[(0, 0), (1, 1), (2, 2), (3, 3)]);

        assert!(PathValidator::is_valid_path(&grid, &positions));
        assert_eq!(PathValidator::spell(&grid, &positions), "TEST");
    }

    #[test]
    fn test_invalid_paths() {
        let grid: Grid = "AB/CD".parse().unwrap();

        assert!(!PathValidator::is_valid_path(&grid, &[]), "Empty path");
        assert!(
            !PathValidator::is_valid_path(&grid, &path(&[(0, 0), (0, 1), (0, 0)])),
            "Reused cell"
        );
        assert!(
            !PathValidator::is_valid_path(&grid, &path(&[(0, 0), (2, 0)])),
            "Off the grid"
        );

        let wide: Grid = "ABC".parse().unwrap();
        assert!(
            !PathValidator::is_valid_path(&wide, &path(&[(0, 0), (0, 2)])),
            "Jump over a cell"
        );
    }

    #[test]
    fn test_spell_digraph_tiles() {
        let grid: Grid = "[QU]I/TE".parse().unwrap();
        let positions = path(&[(0, 0), (0, 1), (1, 0)]);
        assert_eq!(PathValidator::spell(&grid, &positions), "QUIT");
    }
}
