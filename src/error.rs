use thiserror::Error;

/// Contract violations raised by the board and chain operations.
///
/// These indicate a caller bug (a coordinate that did not come from the
/// grid, or a malformed board) rather than a condition of normal play.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("position ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("board has {cells} cells, which is not a positive perfect square")]
    NotSquare { cells: usize },

    #[error("board cell {index} is {value:?}, expected a single letter")]
    InvalidTile { index: usize, value: String },
}
