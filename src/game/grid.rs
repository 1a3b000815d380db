use std::fmt;

use crate::{
    error::GridError,
    models::{Position, Tile},
};

/// Offsets of the eight surrounding cells
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An immutable N x N board of lowercase letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    letters: Vec<char>,
}

impl Grid {
    /// Build a grid from N² cells in row-major order. Each cell must be a
    /// single alphabetic character; letters are stored lowercase.
    pub fn from_cells<I, S>(cells: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut letters = Vec::new();
        for (index, cell) in cells.into_iter().enumerate() {
            let value = cell.as_ref().trim();
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => letters.push(letter),
                _ => {
                    return Err(GridError::InvalidTile {
                        index,
                        value: value.to_string(),
                    })
                }
            }
        }

        Self::from_letters(letters)
    }

    /// Build a grid from N² letters in row-major order. Letters follow the
    /// same rules as [`Grid::from_cells`].
    pub fn from_letters(letters: Vec<char>) -> Result<Self, GridError> {
        let letters = letters
            .into_iter()
            .enumerate()
            .map(|(index, letter)| lowercase(index, letter))
            .collect::<Result<Vec<_>, _>>()?;

        let cells = letters.len();
        let size = (cells as f64).sqrt().round() as usize;
        if size == 0 || size * size != cells {
            return Err(GridError::NotSquare { cells });
        }

        Ok(Self { size, letters })
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn check(&self, pos: Position) -> Result<(), GridError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size,
            })
        }
    }

    pub fn letter_at(&self, pos: Position) -> Result<char, GridError> {
        self.check(pos)?;
        Ok(self.letter(pos))
    }

    pub fn tile_at(&self, pos: Position) -> Result<Tile, GridError> {
        Ok(Tile {
            letter: self.letter_at(pos)?,
            position: pos,
        })
    }

    /// Every in-bounds cell touching `pos`, diagonals included
    pub fn neighbors_of(&self, pos: Position) -> Result<Vec<Position>, GridError> {
        self.check(pos)?;
        Ok(self.neighbors(pos).collect())
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Position::new(row, col)))
    }

    /// Extract word from grid positions
    pub fn word_for(&self, positions: &[Position]) -> Result<String, GridError> {
        positions.iter().map(|pos| self.letter_at(*pos)).collect()
    }

    // Unchecked accessors for callers that only walk positions produced by
    // this grid.
    pub(crate) fn letter(&self, pos: Position) -> char {
        self.letters[pos.row * self.size + pos.col]
    }

    pub(crate) fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |(dr, dc)| {
            let row = pos.row.checked_add_signed(*dr)?;
            let col = pos.col.checked_add_signed(*dc)?;
            (row < self.size && col < self.size).then_some(Position::new(row, col))
        })
    }
}

/// Lowercase one board letter. Letters without a single-character lowercase
/// form (such as 'İ') are refused.
fn lowercase(index: usize, letter: char) -> Result<char, GridError> {
    let mut lower = letter.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(lower), None) if letter.is_alphabetic() => Ok(lower),
        _ => Err(GridError::InvalidTile {
            index,
            value: letter.to_string(),
        }),
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.letters.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = chunk.iter().map(|c| c.to_uppercase().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
