use anyhow::{bail, Context, Result};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dictionary_path: String,
    pub board: BoardConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub grid_size: usize,
    pub max_generation_attempts: usize,
    pub min_board_words: usize,
    /// Fixed board letters, row-major; generated when absent
    pub letters: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup (the environment in
    /// production, a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dictionary_path = lookup("DICTIONARY_PATH")
            .unwrap_or_else(|| "./dictionary.txt".to_string());

        let grid_size: usize = lookup("GRID_SIZE")
            .unwrap_or_else(|| "4".to_string())
            .parse()
            .context("GRID_SIZE must be a number")?;
        if grid_size == 0 {
            bail!("GRID_SIZE must be at least 1");
        }

        let board = BoardConfig {
            grid_size,
            max_generation_attempts: lookup("MAX_GENERATION_ATTEMPTS")
                .unwrap_or_else(|| "100".to_string())
                .parse()
                .context("MAX_GENERATION_ATTEMPTS must be a number")?,
            min_board_words: lookup("MIN_BOARD_WORDS")
                .unwrap_or_else(|| "1".to_string())
                .parse()
                .context("MIN_BOARD_WORDS must be a number")?,
            letters: lookup("BOARD").map(|raw| parse_board_letters(&raw)),
        };

        Ok(Config {
            dictionary_path,
            board,
        })
    }
}

/// Split a board given as `"a,b,c,d"` or `"a b c d"` into its cells
fn parse_board_letters(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}
