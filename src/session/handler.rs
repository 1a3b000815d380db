use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{
    game::RoundContext,
    models::ResultPayload,
    session::messages::{HostEvent, RoundEvent},
};

/// Drive one round from a stream of JSON host events, one per line.
///
/// Every event the round produces is written back as one JSON line. Bad
/// lines and out-of-bounds tiles are answered with an `error` line and the
/// stream continues. At end of input the final results are written and
/// returned.
pub async fn run_round<R, W>(
    reader: R,
    writer: &mut W,
    ctx: &mut RoundContext,
) -> Result<ResultPayload>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await.context("failed to read host event")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<HostEvent>(line) {
            Ok(event) => match ctx.apply(event) {
                Ok(events) => {
                    for event in &events {
                        send(writer, event).await?;
                    }
                }
                Err(e) => {
                    tracing::error!("Error handling event: {}", e);
                    send(writer, &RoundEvent::Error { message: e.to_string() }).await?;
                }
            },
            Err(e) => {
                tracing::warn!("Failed to parse event: {}", e);
                let error_msg = RoundEvent::Error {
                    message: format!("Invalid event format: {}", e),
                };
                send(writer, &error_msg).await?;
            }
        }
    }

    let round_over = ctx.finish();
    send(writer, &round_over).await?;
    writer.flush().await?;

    Ok(ctx.final_result())
}

async fn send<W>(writer: &mut W, event: &RoundEvent) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut json = serde_json::to_string(event).context("failed to serialize round event")?;
    json.push('\n');
    writer
        .write_all(json.as_bytes())
        .await
        .context("failed to write round event")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dictionary::Dictionary,
        game::{BoardSolver, Grid},
        models::Classification,
    };
    use serde_json::Value;
    use tokio::io::BufReader;

    fn cat_round() -> RoundContext {
        let grid = Grid::from_cells(["a", "t", "c", "t"]).unwrap();
        let words = BoardSolver::solve(&grid, &Dictionary::parse("cat\nact\ntact"));
        RoundContext::new(grid, words)
    }

    fn output_lines(output: &[u8]) -> Vec<Value> {
        std::str::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_full_round_over_json_lines() {
        let input = concat!(
            r#"{"type":"chain_started","tile":{"row":1,"col":0}}"#, "\n",
            r#"{"type":"tile_entered","tile":{"row":0,"col":0}}"#, "\n",
            r#"{"type":"tile_entered","tile":{"row":0,"col":1}}"#, "\n",
            r#"{"type":"chain_ended"}"#, "\n",
        );
        let mut round = cat_round();
        let mut output = Vec::new();

        let result = run_round(BufReader::new(input.as_bytes()), &mut output, &mut round)
            .await
            .unwrap();

        assert_eq!(result.score, 100);
        assert_eq!(result.words, vec!["cat".to_string()]);
        assert!(!result.partial);

        let lines = output_lines(&output);
        let types: Vec<&str> = lines.iter().map(|v| v["type"].as_str().unwrap()).collect();
        assert_eq!(
            types,
            vec![
                "chain_updated",
                "chain_updated",
                "chain_updated",
                "word_found",
                "partial_result",
                "round_over"
            ]
        );
        assert_eq!(lines[2]["word"], "cat");
        assert_eq!(lines[2]["classification"], "valid_new");
        assert_eq!(lines[4]["result"]["partial"], true);
        assert_eq!(lines[5]["result"]["score"], 100);
    }

    #[tokio::test]
    async fn test_bad_lines_are_reported_and_skipped() {
        let input = concat!(
            "not json\n",
            "\n",
            r#"{"type":"chain_started","tile":{"row":9,"col":9}}"#, "\n",
            r#"{"type":"chain_started","tile":{"row":0,"col":0}}"#, "\n",
            r#"{"type":"chain_ended"}"#, "\n",
        );
        let mut round = cat_round();
        let mut output = Vec::new();

        run_round(BufReader::new(input.as_bytes()), &mut output, &mut round)
            .await
            .unwrap();

        let lines = output_lines(&output);
        assert_eq!(lines[0]["type"], "error");
        assert!(lines[0]["message"].as_str().unwrap().starts_with("Invalid event format"));
        assert_eq!(lines[1]["type"], "error");
        assert!(lines[1]["message"].as_str().unwrap().contains("outside"));
        assert_eq!(lines[2]["type"], "chain_updated");
        assert_eq!(lines[3]["type"], "chain_rejected");
        assert_eq!(lines[3]["classification"], "invalid");
        assert_eq!(lines[4]["type"], "round_over");
    }

    #[test]
    fn test_event_wire_format() {
        let event: HostEvent =
            serde_json::from_str(r#"{"type":"tile_entered","tile":{"row":2,"col":3}}"#).unwrap();
        assert_eq!(
            event,
            HostEvent::TileEntered {
                tile: crate::models::Position::new(2, 3)
            }
        );

        let json = serde_json::to_value(RoundEvent::ChainRejected {
            word: "ta".to_string(),
            classification: Classification::AlreadyFound,
        })
        .unwrap();
        assert_eq!(json["type"], "chain_rejected");
        assert_eq!(json["classification"], "already_found");
    }

    #[test]
    fn test_runs_on_a_blocking_runtime() {
        let mut round = cat_round();
        let mut output = Vec::new();
        let input = "{\"type\":\"chain_ended\"}\n";

        let result = tokio_test::block_on(run_round(
            BufReader::new(input.as_bytes()),
            &mut output,
            &mut round,
        ))
        .unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(output_lines(&output).len(), 1);
    }
}
