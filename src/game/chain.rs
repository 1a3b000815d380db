use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    error::GridError,
    game::{grid::Grid, scorer::Scorer, solver::SolvedWordSet},
    models::{Classification, Position},
};

/// Selection state of the tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainState {
    /// No drag in progress
    Idle,
    /// A drag is in progress; `tiles` holds at least one position, each
    /// distinct and adjacent to the one before it
    Active { tiles: Vec<Position> },
}

/// Why an `extend_chain` call left the chain untouched
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    Idle,
    Duplicate,
    NotAdjacent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtendOutcome {
    Appended,
    Ignored(IgnoreReason),
}

/// What happened when a drag was released
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndOutcome {
    /// There was no drag to end
    Idle,
    /// The chain spelled a board word not found before; it is now credited
    Credited {
        word: String,
        score: u32,
        total_score: u32,
    },
    /// The chain was not credited (already found, or not a board word)
    Rejected {
        word: String,
        classification: Classification,
    },
}

/// Tracks the player's live tile selection for one round and credits
/// completed words.
///
/// Ending a chain only ever happens through `end_chain`; passing back over
/// the first tile is treated like any other duplicate and ignored.
#[derive(Debug, Clone)]
pub struct ChainTracker {
    grid: Grid,
    words: SolvedWordSet,
    state: ChainState,
    found_order: Vec<String>,
    found: HashSet<String>,
    score: u32,
}

impl ChainTracker {
    pub fn new(grid: Grid, words: SolvedWordSet) -> Self {
        Self {
            grid,
            words,
            state: ChainState::Idle,
            found_order: Vec::new(),
            found: HashSet::new(),
            score: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn solved_words(&self) -> &SolvedWordSet {
        &self.words
    }

    pub fn state(&self) -> &ChainState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ChainState::Active { .. })
    }

    /// Selected positions in the order they were entered
    pub fn tiles(&self) -> &[Position] {
        match &self.state {
            ChainState::Idle => &[],
            ChainState::Active { tiles } => tiles,
        }
    }

    /// Words credited this round, in the order they were found
    pub fn found_words(&self) -> &[String] {
        &self.found_order
    }

    pub fn has_found(&self, word: &str) -> bool {
        self.found.contains(word)
    }

    /// Running total for the round
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Start a new drag at `pos`, discarding any chain already in progress.
    pub fn begin_chain(&mut self, pos: Position) -> Result<(), GridError> {
        self.grid.letter_at(pos)?;

        if self.is_active() {
            tracing::debug!("Chain restarted at ({}, {})", pos.row, pos.col);
        }
        self.state = ChainState::Active { tiles: vec![pos] };
        Ok(())
    }

    /// Add `pos` to the chain if it continues the drag.
    ///
    /// Idle tracker, a tile already in the chain, or a tile that does not
    /// touch the last one are all ignored; skipped tiles are never filled in.
    pub fn extend_chain(&mut self, pos: Position) -> Result<ExtendOutcome, GridError> {
        self.grid.letter_at(pos)?;

        let tiles = match &mut self.state {
            ChainState::Idle => return Ok(ExtendOutcome::Ignored(IgnoreReason::Idle)),
            ChainState::Active { tiles } => tiles,
        };

        if tiles.contains(&pos) {
            tracing::debug!("Duplicate tile detected, ignoring...");
            return Ok(ExtendOutcome::Ignored(IgnoreReason::Duplicate));
        }

        if let Some(last) = tiles.last() {
            if !last.is_adjacent_to(&pos) {
                tracing::debug!("Skipped tile detected, ignoring...");
                return Ok(ExtendOutcome::Ignored(IgnoreReason::NotAdjacent));
            }
        }

        tiles.push(pos);
        Ok(ExtendOutcome::Appended)
    }

    /// Letters of the current chain in selection order
    pub fn current_word(&self) -> String {
        self.word_of(self.tiles())
    }

    fn word_of(&self, tiles: &[Position]) -> String {
        tiles.iter().map(|pos| self.grid.letter(*pos)).collect()
    }

    pub fn classify_current(&self) -> Classification {
        let tiles = self.tiles();
        if tiles.is_empty() {
            return Classification::Empty;
        }
        self.classify_word(&self.word_of(tiles))
    }

    fn classify_word(&self, word: &str) -> Classification {
        if self.found.contains(word) {
            Classification::AlreadyFound
        } else if self.words.contains(word) {
            Classification::ValidNew
        } else {
            Classification::Invalid
        }
    }

    /// Points the current chain would earn if released now
    pub fn preview_score(&self) -> Option<u32> {
        match self.classify_current() {
            Classification::ValidNew => Some(Scorer::score_for_word(&self.current_word())),
            _ => None,
        }
    }

    /// Release the drag. Credits the word if it is a board word not found
    /// before; the chain is always cleared and the tracker returns to idle.
    pub fn end_chain(&mut self) -> EndOutcome {
        let tiles = match std::mem::replace(&mut self.state, ChainState::Idle) {
            ChainState::Idle => return EndOutcome::Idle,
            ChainState::Active { tiles } => tiles,
        };

        let word = self.word_of(&tiles);
        match self.classify_word(&word) {
            Classification::ValidNew => {
                let score = Scorer::score_for_word(&word);
                self.score += score;
                self.found.insert(word.clone());
                self.found_order.push(word.clone());

                tracing::debug!("Found word \"{}\" of score: {}", word, score);

                EndOutcome::Credited {
                    word,
                    score,
                    total_score: self.score,
                }
            }
            classification => EndOutcome::Rejected {
                word,
                classification,
            },
        }
    }
}
