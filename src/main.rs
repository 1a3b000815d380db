use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use word_hunt::{
    config::Config,
    session::run_round,
    BoardGenerator, BoardSolver, Dictionary, Grid, RoundContext,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout carries the event stream, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_hunt=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting word hunt round...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load dictionary; a generated board needs words, a fixed BOARD can
    // still be played without them
    let board = config.board;
    let dictionary = Dictionary::load_or_empty(&config.dictionary_path, board.letters.is_some())
        .await
        .context("no board can be generated without a dictionary; set BOARD to play a fixed board")?;

    let (grid, words) = match board.letters {
        Some(letters) => {
            let grid = Grid::from_cells(&letters).context("invalid BOARD")?;
            let words = BoardSolver::solve_async(Arc::new(grid.clone()), Arc::new(dictionary))
                .await?;
            (grid, words)
        }
        None => tokio::task::spawn_blocking(move || {
            BoardGenerator::new(&dictionary, board.grid_size)
                .min_words(board.min_board_words)
                .max_attempts(board.max_generation_attempts)
                .generate()
        })
        .await
        .context("board generator task failed")??,
    };

    tracing::info!("Board:\n{}", grid);

    let mut round = RoundContext::new(grid, words);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    let result = run_round(stdin, &mut stdout, &mut round).await?;
    tracing::info!(
        "Final score {} with {} words",
        result.score,
        result.words.len()
    );

    Ok(())
}
