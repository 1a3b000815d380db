use std::collections::BTreeSet;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    dictionary::{Dictionary, PrefixNode},
    game::{grid::Grid, scorer::MIN_WORD_LENGTH},
    models::Position,
};

/// Every dictionary word that can be traced on a board, kept in
/// alphabetical order so iteration is deterministic. Words are stored
/// lowercase, like the grid's letters, however they were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SolvedWordSet {
    words: BTreeSet<String>,
}

impl SolvedWordSet {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words ordered for a results screen: longest first, ties alphabetical
    pub fn sorted_for_display(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });
        words
    }
}

impl<S: Into<String>> FromIterator<S> for SolvedWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(|word| word.into().to_lowercase()).collect(),
        }
    }
}

impl From<Vec<String>> for SolvedWordSet {
    fn from(words: Vec<String>) -> Self {
        words.into_iter().collect()
    }
}

impl From<SolvedWordSet> for Vec<String> {
    fn from(set: SolvedWordSet) -> Self {
        set.words.into_iter().collect()
    }
}

/// Exhaustive depth-first search for words over a grid.
///
/// Paths are simple: a cell is marked visited only for the lineage of the
/// current path and released on backtrack, so the same cell can appear in
/// sibling branches and in searches from other roots.
pub struct BoardSolver<'a> {
    grid: &'a Grid,
    dictionary: &'a Dictionary,
}

impl<'a> BoardSolver<'a> {
    pub fn new(grid: &'a Grid, dictionary: &'a Dictionary) -> Self {
        Self { grid, dictionary }
    }

    /// Find every word of at least three letters reachable on `grid`.
    /// An empty result is a normal outcome, not an error.
    pub fn solve(grid: &Grid, dictionary: &Dictionary) -> SolvedWordSet {
        BoardSolver::new(grid, dictionary).run()
    }

    /// Run the search on the blocking thread pool so the caller's event loop
    /// keeps handling input while a large board is solved.
    pub async fn solve_async(grid: Arc<Grid>, dictionary: Arc<Dictionary>) -> Result<SolvedWordSet> {
        tokio::task::spawn_blocking(move || Self::solve(&grid, &dictionary))
            .await
            .context("board solver task failed")
    }

    fn run(&self) -> SolvedWordSet {
        let mut found = BTreeSet::new();
        let mut visited = vec![false; self.grid.size() * self.grid.size()];
        let mut word = String::new();

        for start in self.grid.positions() {
            self.search(start, self.dictionary.root(), 1, &mut visited, &mut word, &mut found);
        }

        tracing::debug!(
            "Solved {}x{} board: {} words",
            self.grid.size(),
            self.grid.size(),
            found.len()
        );

        SolvedWordSet { words: found }
    }

    fn search(
        &self,
        pos: Position,
        parent: PrefixNode,
        length: usize,
        visited: &mut [bool],
        word: &mut String,
        found: &mut BTreeSet<String>,
    ) {
        let letter = self.grid.letter(pos);
        // Dead branch once no word starts with these letters
        let Some(node) = self.dictionary.advance(parent, letter) else {
            return;
        };

        let idx = pos.row * self.grid.size() + pos.col;
        visited[idx] = true;
        word.push(letter);

        if length >= MIN_WORD_LENGTH
            && self.dictionary.is_word_at(node)
            && !found.contains(word.as_str())
        {
            found.insert(word.clone());
        }

        if self.dictionary.has_longer_words(node) {
            for next in self.grid.neighbors(pos) {
                if !visited[next.row * self.grid.size() + next.col] {
                    self.search(next, node, length + 1, visited, word, found);
                }
            }
        }

        word.pop();
        visited[idx] = false;
    }
}
