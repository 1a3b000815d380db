pub mod board;
pub mod round;

pub use board::{Position, Tile};
pub use round::{Classification, ResultPayload, RoundSummary, SummaryWord};
