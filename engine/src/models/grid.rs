use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Row/column offsets of the eight cells surrounding a tile
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has no tiles")]
    EmptyRow { row: usize },
    #[error("row {row} has {found} tiles, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("tile face is empty")]
    EmptyTile,
    #[error("unclosed '[' in grid description")]
    UnclosedTile,
}

/// The letters printed on one face of a die.
/// Usually a single letter, but digraph faces such as "QU" are a single tile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tile(String);

impl Tile {
    /// Build a tile from a face, trimming whitespace and normalizing to uppercase
    pub fn new(face: &str) -> Result<Self, GridError> {
        let face = face.trim();
        if face.is_empty() {
            return Err(GridError::EmptyTile);
        }
        Ok(Self(face.to_uppercase()))
    }

    /// Two letters fused on one face, such as `QU`
    pub fn digraph(first: char, second: char) -> Self {
        Self(first.to_uppercase().chain(second.to_uppercase()).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters this tile contributes to a word
    pub fn letters(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<char> for Tile {
    fn from(letter: char) -> Self {
        Self(letter.to_uppercase().collect())
    }
}

impl TryFrom<String> for Tile {
    type Error = GridError;

    fn try_from(face: String) -> Result<Self, Self::Error> {
        Self::new(&face)
    }
}

impl From<Tile> for String {
    fn from(tile: Tile) -> Self {
        tile.0
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if two positions touch horizontally, vertically or diagonally
    pub fn is_adjacent(&self, other: &Position) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }
}

/// A rectangular board of tiles, stored row-major.
///
/// A `Grid` always has at least one row and one column and every row has the
/// same width; the constructors reject anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Build a grid from rows of tiles
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let cols = rows.first().ok_or(GridError::Empty)?.len();
        let row_count = rows.len();
        let mut tiles = Vec::with_capacity(row_count * cols);

        for (row, cells) in rows.into_iter().enumerate() {
            if cells.is_empty() {
                return Err(GridError::EmptyRow { row });
            }
            if cells.len() != cols {
                return Err(GridError::Jagged {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
            tiles.extend(cells);
        }

        Ok(Self {
            rows: row_count,
            cols,
            tiles,
        })
    }

    /// Build a grid from rows of tile faces, e.g. `[["T", "E"], ["S", "QU"]]`
    pub fn from_faces<R, S>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|face| Tile::new(face.as_ref()))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }

    /// Build a grid whose shape is already known to be valid
    pub(crate) fn from_parts(rows: usize, cols: usize, tiles: Vec<Tile>) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        debug_assert_eq!(tiles.len(), rows * cols);
        Self { rows, cols, tiles }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells on the board
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Row-major index of a position
    pub fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Tile at `pos`. Panics if the position is off the board.
    pub fn tile(&self, pos: Position) -> &Tile {
        assert!(self.contains(pos), "position {:?} is off the grid", pos);
        &self.tiles[self.index(pos)]
    }

    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.contains(pos).then(|| &self.tiles[self.index(pos)])
    }

    /// Every position on the board in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position { row, col }))
    }

    /// The position `(dr, dc)` away from `pos`, if it is on the board
    pub fn offset(&self, pos: Position, dr: isize, dc: isize) -> Option<Position> {
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let next = Position { row, col };
        self.contains(next).then_some(next)
    }

    /// All on-board cells adjacent to `pos`, diagonals included
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(dr, dc)| self.offset(pos, dr, dc))
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.cols)
    }
}

impl From<Grid> for Vec<Vec<Tile>> {
    fn from(grid: Grid) -> Self {
        grid.iter_rows().map(<[Tile]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

/// Parses boards like `"T---/-E--/--S-/---T"`.
///
/// Rows are separated by `/` or newlines; blank lines, a trailing `/` and
/// whitespace are ignored. Each character is one tile unless wrapped in
/// brackets: `"[QU]IT/ABCD"`.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();

        let segments = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .flat_map(|line| line.strip_suffix('/').unwrap_or(line).split('/'));

        for segment in segments {
            let mut row = Vec::new();
            let mut chars = segment.chars().filter(|c| !c.is_whitespace());

            while let Some(c) = chars.next() {
                if c == '[' {
                    let mut face = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == ']' {
                            closed = true;
                            break;
                        }
                        face.push(c);
                    }
                    if !closed {
                        return Err(GridError::UnclosedTile);
                    }
                    row.push(Tile::new(&face)?);
                } else {
                    row.push(Tile::from(c));
                }
            }

            rows.push(row);
        }

        Self::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.tiles.iter().map(Tile::letters).max().unwrap_or(1);

        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|t| format!("{:<width$}", t)).collect();
            write!(f, "{}", cells.join(" ").trim_end())?;
        }

        Ok(())
    }
}
