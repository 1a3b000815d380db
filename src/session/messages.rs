use serde::{Deserialize, Serialize};

use crate::models::{Classification, Position, ResultPayload, RoundSummary};

/// Input events sent by the host, already mapped from pointer input to
/// board coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// Pointer pressed on a tile
    ChainStarted { tile: Position },
    /// Pointer dragged onto a tile
    TileEntered { tile: Position },
    /// Pointer released anywhere
    ChainEnded,
}

/// Events produced by a round, consumed by the rendering layer and the
/// results reporter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoundEvent {
    ChainUpdated {
        tiles: Vec<Position>,
        word: String,
        classification: Classification,
        preview_score: Option<u32>,
    },
    WordFound {
        word: String,
        score: u32,
        total_score: u32,
    },
    ChainRejected {
        word: String,
        classification: Classification,
    },
    /// Running results to report after each new word
    PartialResult { result: ResultPayload },
    RoundOver {
        result: ResultPayload,
        summary: RoundSummary,
    },
    Error {
        message: String,
    },
}
