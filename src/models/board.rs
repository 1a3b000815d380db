use serde::{Deserialize, Serialize};

/// A cell coordinate on the board, zero-based from the top-left corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if two positions touch, including diagonals (Chebyshev distance 1).
    pub fn is_adjacent_to(&self, other: &Position) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }
}

/// Game-logic view of a single board cell: its letter and where it sits.
///
/// Hosts keep their own rendering handles keyed by `position`; the core
/// never holds one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Tile {
    pub letter: char,
    pub position: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_positions() {
        let pos1 = Position::new(0, 0);
        let pos2 = Position::new(0, 1);
        let pos3 = Position::new(1, 1);
        let pos4 = Position::new(2, 2);

        assert!(pos1.is_adjacent_to(&pos2));
        assert!(pos2.is_adjacent_to(&pos3));
        assert!(pos1.is_adjacent_to(&pos3));
        assert!(!pos1.is_adjacent_to(&pos4));
    }

    #[test]
    fn test_position_not_adjacent_to_itself() {
        let pos = Position::new(1, 1);
        assert!(!pos.is_adjacent_to(&pos));
    }
}
