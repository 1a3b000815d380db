use uuid::Uuid;

use crate::{
    error::GridError,
    game::{
        chain::{ChainTracker, EndOutcome, ExtendOutcome},
        grid::Grid,
        scorer::Scorer,
        solver::SolvedWordSet,
    },
    models::{ResultPayload, RoundSummary, SummaryWord},
    session::messages::{HostEvent, RoundEvent},
};

/// Callback notified of every event a round produces
pub type RoundObserver = Box<dyn FnMut(&RoundEvent) + Send>;

/// Everything one round of play needs: the board, its solved words, the
/// chain tracker with the player's found words and score, and the
/// observers that render or report what happens.
pub struct RoundContext {
    round_id: Uuid,
    tracker: ChainTracker,
    observers: Vec<RoundObserver>,
}

impl RoundContext {
    pub fn new(grid: Grid, words: SolvedWordSet) -> Self {
        Self::with_id(Uuid::new_v4(), grid, words)
    }

    pub fn with_id(round_id: Uuid, grid: Grid, words: SolvedWordSet) -> Self {
        tracing::info!(
            "Round {} started: {}x{} board, {} words",
            round_id,
            grid.size(),
            grid.size(),
            words.len()
        );

        Self {
            round_id,
            tracker: ChainTracker::new(grid, words),
            observers: Vec::new(),
        }
    }

    pub fn round_id(&self) -> Uuid {
        self.round_id
    }

    pub fn tracker(&self) -> &ChainTracker {
        &self.tracker
    }

    pub fn grid(&self) -> &Grid {
        self.tracker.grid()
    }

    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&RoundEvent) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Feed one host event into the tracker and return what it produced.
    ///
    /// Ignored tiles produce no events. An out-of-bounds tile is returned as
    /// an error and leaves the round unchanged.
    pub fn apply(&mut self, event: HostEvent) -> Result<Vec<RoundEvent>, GridError> {
        let events = match event {
            HostEvent::ChainStarted { tile } => {
                self.tracker.begin_chain(tile)?;
                vec![self.chain_updated()]
            }
            HostEvent::TileEntered { tile } => match self.tracker.extend_chain(tile)? {
                ExtendOutcome::Appended => vec![self.chain_updated()],
                ExtendOutcome::Ignored(_) => Vec::new(),
            },
            HostEvent::ChainEnded => match self.tracker.end_chain() {
                EndOutcome::Idle => Vec::new(),
                EndOutcome::Credited {
                    word,
                    score,
                    total_score,
                } => vec![
                    RoundEvent::WordFound {
                        word,
                        score,
                        total_score,
                    },
                    RoundEvent::PartialResult {
                        result: self.partial_result(),
                    },
                ],
                EndOutcome::Rejected {
                    word,
                    classification,
                } => vec![RoundEvent::ChainRejected {
                    word,
                    classification,
                }],
            },
        };

        self.notify(&events);
        Ok(events)
    }

    /// Close the round and produce the final report
    pub fn finish(&mut self) -> RoundEvent {
        let event = RoundEvent::RoundOver {
            result: self.final_result(),
            summary: self.summary(),
        };

        tracing::info!(
            "Round {} over: {} words for {} points",
            self.round_id,
            self.tracker.found_words().len(),
            self.tracker.score()
        );

        self.notify(std::slice::from_ref(&event));
        event
    }

    fn chain_updated(&self) -> RoundEvent {
        RoundEvent::ChainUpdated {
            tiles: self.tracker.tiles().to_vec(),
            word: self.tracker.current_word(),
            classification: self.tracker.classify_current(),
            preview_score: self.tracker.preview_score(),
        }
    }

    fn notify(&mut self, events: &[RoundEvent]) {
        for event in events {
            for observer in self.observers.iter_mut() {
                observer(event);
            }
        }
    }

    pub fn partial_result(&self) -> ResultPayload {
        self.result(true)
    }

    pub fn final_result(&self) -> ResultPayload {
        self.result(false)
    }

    fn result(&self, partial: bool) -> ResultPayload {
        ResultPayload {
            round_id: self.round_id,
            score: self.tracker.score(),
            words: self.tracker.found_words().to_vec(),
            partial,
        }
    }

    /// Every board word, longest first, marked found or missed
    pub fn summary(&self) -> RoundSummary {
        let words: Vec<SummaryWord> = self
            .tracker
            .solved_words()
            .sorted_for_display()
            .into_iter()
            .map(|word| SummaryWord {
                word: word.to_string(),
                score: Scorer::score_for_word(word),
                found: self.tracker.has_found(word),
            })
            .collect();

        RoundSummary {
            round_id: self.round_id,
            score: self.tracker.score(),
            found_count: self.tracker.found_words().len(),
            total_count: words.len(),
            words,
        }
    }
}
