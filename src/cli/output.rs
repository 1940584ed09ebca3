//! Output formatting utilities for CLI.

use serde::Serialize;
use snakegrid::sim::SnakeSummary;
use snakegrid::{GameState, SimResult};

/// JSON-serializable run result.
#[derive(Debug, Serialize)]
pub(super) struct JsonRunResult<'a> {
    /// Ticks applied during the run.
    pub(super) ticks_played: u32,
    /// Snakes still alive.
    pub(super) survivors: usize,
    /// Per-snake results.
    pub(super) snakes: &'a [SnakeSummary],
    /// Final board, one string per row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) board: Option<Vec<String>>,
}

impl<'a> JsonRunResult<'a> {
    /// Create from a simulation result and, unless quiet, the final board.
    pub(super) fn new(result: &'a SimResult, state: Option<&GameState>) -> Self {
        Self {
            ticks_played: result.ticks_played,
            survivors: result.survivors(),
            snakes: &result.snakes,
            board: state.map(|s| s.to_string().lines().map(str::to_owned).collect()),
        }
    }
}

/// Format a simulation result as human-readable text.
pub(super) fn format_text(result: &SimResult) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Simulation Result ({} ticks, {}/{} alive)\n",
        result.ticks_played,
        result.survivors(),
        result.snakes.len()
    ));

    for snake in &result.snakes {
        let status = match snake.crashed_at {
            Some(tick) => format!("crashed tick {tick}"),
            None if snake.alive => "alive".to_string(),
            None => "crashed".to_string(),
        };
        let length = snake
            .length
            .map_or_else(|| "?".to_string(), |len| len.to_string());
        output.push_str(&format!(
            "  Snake {}: {status}, length {length}, tail {} head {}\n",
            snake.id, snake.tail, snake.head
        ));
    }

    output
}

/// Outcome of one board in a batch.
#[derive(Debug, Serialize)]
pub(super) struct BatchEntry {
    /// Board file name.
    pub(super) board: String,
    /// Ticks applied, zero if the board failed to load.
    pub(super) ticks_played: u32,
    /// Snakes found on the board.
    pub(super) snakes: usize,
    /// Snakes alive at the end.
    pub(super) survivors: usize,
    /// Load error, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) error: Option<String>,
}

impl BatchEntry {
    /// Create from a finished run.
    pub(super) fn finished(board: String, result: &SimResult) -> Self {
        Self {
            board,
            ticks_played: result.ticks_played,
            snakes: result.snakes.len(),
            survivors: result.survivors(),
            error: None,
        }
    }

    /// Create for a board that could not be loaded.
    pub(super) fn failed(board: String, error: String) -> Self {
        Self {
            board,
            ticks_played: 0,
            snakes: 0,
            survivors: 0,
            error: Some(error),
        }
    }
}

/// Aggregated batch statistics.
#[derive(Debug, Default, Serialize)]
pub(super) struct BatchStats {
    /// Boards that ran to completion.
    pub(super) boards_run: u64,
    /// Boards that failed to load.
    pub(super) boards_failed: u64,
    /// Snakes across all boards.
    pub(super) snakes: u64,
    /// Survivors across all boards.
    pub(super) survivors: u64,
    /// Ticks across all boards.
    pub(super) total_ticks: u64,
}

impl BatchStats {
    /// Aggregate a list of entries.
    pub(super) fn from_entries(entries: &[BatchEntry]) -> Self {
        let mut stats = Self::default();
        for entry in entries {
            if entry.error.is_some() {
                stats.boards_failed += 1;
                continue;
            }
            stats.boards_run += 1;
            stats.snakes += entry.snakes as u64;
            stats.survivors += entry.survivors as u64;
            stats.total_ticks += u64::from(entry.ticks_played);
        }
        stats
    }

    /// Average ticks per completed board.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn avg_ticks(&self) -> f64 {
        if self.boards_run == 0 {
            return 0.0;
        }
        self.total_ticks as f64 / self.boards_run as f64
    }
}

/// JSON-serializable batch result.
#[derive(Debug, Serialize)]
pub(super) struct JsonBatchResult<'a> {
    /// Aggregate statistics.
    pub(super) summary: &'a BatchStats,
    /// Per-board results in input order.
    pub(super) boards: &'a [BatchEntry],
}

/// Format batch results as human-readable text.
pub(super) fn format_batch_text(stats: &BatchStats, entries: &[BatchEntry]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Batch Results ({} boards, {} failed)\n",
        stats.boards_run, stats.boards_failed
    ));
    output.push_str("========================================\n\n");

    for entry in entries {
        match &entry.error {
            Some(error) => output.push_str(&format!("  {}: FAILED ({error})\n", entry.board)),
            None => output.push_str(&format!(
                "  {}: {}/{} alive after {} ticks\n",
                entry.board, entry.survivors, entry.snakes, entry.ticks_played
            )),
        }
    }

    output.push_str(&format!(
        "\nSurvivors: {}/{}\nAverage Run Length: {:.1} ticks\n",
        stats.survivors,
        stats.snakes,
        stats.avg_ticks()
    ));

    output
}

/// Format batch results as CSV.
pub(super) fn format_batch_csv(entries: &[BatchEntry]) -> String {
    let mut output = String::new();

    // Header
    output.push_str("board,ticks_played,snakes,survivors,error\n");

    // Data rows
    for entry in entries {
        output.push_str(&format!(
            "{},{},{},{},{}\n",
            csv_field(&entry.board),
            entry.ticks_played,
            entry.snakes,
            entry.survivors,
            csv_field(entry.error.as_deref().unwrap_or(""))
        ));
    }

    output
}

/// Quote a CSV field if it contains a separator, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snakegrid::{SimConfig, run_simulation};

    fn finished_run() -> (GameState, SimResult) {
        let mut game = GameState::default_scenario();
        let config = SimConfig {
            max_ticks: 2,
            ..SimConfig::default()
        };
        let result = run_simulation(&mut game, &config);
        (game, result)
    }

    #[test]
    fn test_format_text() {
        let (_, result) = finished_run();
        let text = format_text(&result);
        assert!(text.starts_with("Simulation Result (2 ticks, 1/1 alive)"));
        assert!(text.contains("Snake 0: alive, length 3, tail (2, 4) head (2, 6)"));
    }

    #[test]
    fn test_json_run_result_board() {
        let (game, result) = finished_run();
        let json = serde_json::to_value(JsonRunResult::new(&result, Some(&game))).unwrap();
        assert_eq!(json["board"][2], "#   d>D  *         #");

        let quiet = serde_json::to_value(JsonRunResult::new(&result, None)).unwrap();
        assert!(quiet.get("board").is_none());
    }

    #[test]
    fn test_batch_stats() {
        let (_, result) = finished_run();
        let entries = vec![
            BatchEntry::finished("a.txt".to_string(), &result),
            BatchEntry::failed("b.txt".to_string(), "board is empty".to_string()),
        ];
        let stats = BatchStats::from_entries(&entries);
        assert_eq!(stats.boards_run, 1);
        assert_eq!(stats.boards_failed, 1);
        assert_eq!(stats.survivors, 1);
        assert!((stats.avg_ticks() - 2.0).abs() < f64::EPSILON);

        let text = format_batch_text(&stats, &entries);
        assert!(text.contains("b.txt: FAILED (board is empty)"));
    }

    #[test]
    fn test_batch_csv_quotes_fields() {
        let entries = vec![BatchEntry::failed(
            "odd,name.txt".to_string(),
            "row 1 has 2 columns, expected 3".to_string(),
        )];
        let csv = format_batch_csv(&entries);
        assert_eq!(
            csv.lines().nth(1),
            Some("\"odd,name.txt\",0,0,0,\"row 1 has 2 columns, expected 3\"")
        );
    }
}
