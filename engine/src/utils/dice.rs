use once_cell::sync::Lazy;

use crate::models::Tile;

/// Faces of the sixteen classic letter cubes, one string per cube
pub const CUBES: [&str; 16] = [
    "DTYTSI", "JBOABO", "WEGHEN", "SIENUE", "VLREYD", "TUICMO", "XRDILE", "ANEGAE", "FKFPSA",
    "POCSHA", "OOATTW", "LNRZNH", "TIOSSE", "RYELTT", "WHTVER", "MNHQIU",
];

/// The cubes as rolled tiles. The `Q` face carries the `QU` digraph.
pub static DICE: Lazy<Vec<Vec<Tile>>> = Lazy::new(|| {
    CUBES
        .iter()
        .map(|cube| cube.chars().map(face_tile).collect())
        .collect()
});

/// Tile printed on a cube face for the given letter
pub fn face_tile(letter: char) -> Tile {
    match letter.to_ascii_uppercase() {
        'Q' => Tile::digraph('Q', 'U'),
        other => Tile::from(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cube_has_six_faces() {
        assert_eq!(DICE.len(), 16);
        assert!(DICE.iter().all(|die| die.len() == 6));
    }

    #[test]
    fn test_q_face_is_digraph() {
        assert_eq!(face_tile('q').as_str(), "QU");
        assert_eq!(face_tile('e').as_str(), "E");

        let qu_faces = DICE.iter().flatten().filter(|t| t.letters() == 2).count();
        assert_eq!(qu_faces, 1, "Only the Q face should be a digraph");
    }
}
