//! Word-hunt game core: find every word on a letter grid, track the
//! player's drag across tiles, and score what they trace.
//!
//! Rendering, timers and transport live in the host; it feeds
//! [`HostEvent`]s into a [`RoundContext`] and renders the [`RoundEvent`]s
//! that come back.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;
pub mod session;
pub mod utils;

pub use dictionary::Dictionary;
pub use error::GridError;
pub use game::{
    BoardGenerator, BoardSolver, ChainTracker, Grid, RoundContext, Scorer, SolvedWordSet,
};
pub use models::{Classification, Position, ResultPayload, Tile};
pub use session::{HostEvent, RoundEvent};

/// Build a board from N² single-letter cells in row-major order
pub fn load_board<I, S>(cells: I) -> Result<Grid, GridError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Grid::from_cells(cells)
}

/// Build a dictionary from a newline-delimited word list
pub fn load_dictionary(raw_word_list: &str) -> Dictionary {
    Dictionary::parse(raw_word_list)
}

pub fn solve(grid: &Grid, dictionary: &Dictionary) -> SolvedWordSet {
    BoardSolver::solve(grid, dictionary)
}

pub fn score_for_word(word: &str) -> u32 {
    Scorer::score_for_word(word)
}
