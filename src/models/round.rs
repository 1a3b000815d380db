use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the live chain reads against the board's words and the words
/// already credited this round.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// No tiles selected
    Empty,
    /// A board word the player has already been credited for
    AlreadyFound,
    /// A board word not yet credited
    ValidNew,
    Invalid,
}

/// Round results as reported to the scoring backend.
///
/// `partial` is true for the running snapshots sent after each new word,
/// false for the final report when the round ends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultPayload {
    pub round_id: Uuid,
    pub score: u32,
    pub words: Vec<String>,
    pub partial: bool,
}

/// One board word on the results screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryWord {
    pub word: String,
    pub score: u32,
    pub found: bool,
}

/// End-of-round overview: every solvable word, longest first, flagged
/// with whether the player found it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummary {
    pub round_id: Uuid,
    pub score: u32,
    pub found_count: usize,
    pub total_count: usize,
    pub words: Vec<SummaryWord>,
}

impl RoundSummary {
    /// Board words the player never traced
    pub fn missed(&self) -> impl Iterator<Item = &SummaryWord> {
        self.words.iter().filter(|w| !w.found)
    }
}
