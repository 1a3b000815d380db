// Game engine modules

pub mod chain;
pub mod generator;
pub mod grid;
pub mod round;
pub mod scorer;
pub mod solver;

pub use chain::{ChainState, ChainTracker, EndOutcome, ExtendOutcome, IgnoreReason};
pub use generator::BoardGenerator;
pub use grid::Grid;
pub use round::{RoundContext, RoundObserver};
pub use scorer::{Scorer, MIN_WORD_LENGTH};
pub use solver::{BoardSolver, SolvedWordSet};
