use anyhow::{bail, Result};
use rand::Rng;

use crate::{
    dictionary::Dictionary,
    game::{
        grid::Grid,
        solver::{BoardSolver, SolvedWordSet},
    },
    utils::letters::{letter_for, total_weight},
};

/// Draws frequency-weighted random boards until one is worth playing.
pub struct BoardGenerator<'a> {
    dictionary: &'a Dictionary,
    size: usize,
    min_words: usize,
    max_attempts: usize,
}

impl<'a> BoardGenerator<'a> {
    pub fn new(dictionary: &'a Dictionary, size: usize) -> Self {
        Self {
            dictionary,
            size,
            min_words: 1,
            max_attempts: 100,
        }
    }

    /// Require at least this many solvable words (default 1)
    pub fn min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    /// Give up after this many boards (default 100)
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn generate(&self) -> Result<(Grid, SolvedWordSet)> {
        self.generate_with(&mut rand::rng())
    }

    /// Generate with a caller-supplied RNG, e.g. a seeded one for replays
    pub fn generate_with(&self, rng: &mut impl Rng) -> Result<(Grid, SolvedWordSet)> {
        if self.size == 0 {
            bail!("board size must be at least 1");
        }

        for attempt in 1..=self.max_attempts {
            let grid = Self::random_grid(self.size, rng)?;
            let words = BoardSolver::solve(&grid, self.dictionary);

            if words.len() >= self.min_words {
                tracing::info!(
                    "Generated {}x{} board with {} words after {} attempt(s)",
                    self.size,
                    self.size,
                    words.len(),
                    attempt
                );
                return Ok((grid, words));
            }

            tracing::debug!(
                "Board attempt {} has {} words (need {}), regenerating",
                attempt,
                words.len(),
                self.min_words
            );
        }

        bail!(
            "no {}x{} board with at least {} words after {} attempts",
            self.size,
            self.size,
            self.min_words,
            self.max_attempts
        )
    }

    /// Generate a grid of weighted random letters
    pub fn random_grid(size: usize, rng: &mut impl Rng) -> Result<Grid> {
        let total = total_weight();
        let letters = (0..size * size)
            .map(|_| letter_for(rng.random::<f32>() * total))
            .collect();

        Ok(Grid::from_letters(letters)?)
    }
}
