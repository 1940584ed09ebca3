//! Batch command implementation.

use super::output::{BatchEntry, BatchStats, JsonBatchResult, format_batch_csv, format_batch_text};
use super::{BatchFormat, CliError};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use snakegrid::{FoodMode, SimConfig, load_board, run_simulation};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Execute the batch command.
///
/// Boards run independently in parallel; board `i` uses seed `seed + i`.
///
/// # Errors
///
/// Returns an error if output serialization fails. Boards that fail to load
/// are reported in the output rather than aborting the batch.
pub(crate) fn execute(
    boards: &[PathBuf],
    ticks: u32,
    seed: u64,
    threads: Option<usize>,
    format: BatchFormat,
    progress: bool,
) -> Result<(), CliError> {
    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    // Progress bar
    let pb = if progress {
        let pb = ProgressBar::new(boards.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} boards ({per_sec})")
                .expect("valid template")
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();

    let entries: Vec<BatchEntry> = boards
        .par_iter()
        .enumerate()
        .map(|(i, path)| {
            let entry = run_one(path, ticks, seed.wrapping_add(i as u64));
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            entry
        })
        .collect();

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();
    let stats = BatchStats::from_entries(&entries);

    // Output based on format
    match format {
        BatchFormat::Text => {
            println!();
            print!("{}", format_batch_text(&stats, &entries));
            println!();
            println!("Duration: {:.2}s", duration.as_secs_f64());
        }
        BatchFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonBatchResult {
                summary: &stats,
                boards: &entries,
            })?;
            println!("{json}");
        }
        BatchFormat::Csv => {
            print!("{}", format_batch_csv(&entries));
        }
    }

    Ok(())
}

/// Load and simulate one board.
fn run_one(path: &Path, ticks: u32, seed: u64) -> BatchEntry {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string());

    let config = SimConfig {
        max_ticks: ticks,
        food: FoodMode::Random,
        seed,
        stop_when_all_crashed: true,
    };

    match load_board(path) {
        Ok(mut game) => {
            let result = run_simulation(&mut game, &config);
            BatchEntry::finished(name, &result)
        }
        Err(e) => BatchEntry::failed(name, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snakegrid::{GameState, save_board};

    #[test]
    fn test_run_one_reports_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ragged.txt");
        std::fs::write(&path, "###\n##\n").unwrap();

        let entry = run_one(&path, 10, 1);
        assert_eq!(entry.board, "ragged.txt");
        assert_eq!(
            entry.error.as_deref(),
            Some("row 1 has 2 columns, expected 3")
        );
    }

    #[test]
    fn test_run_one_runs_board() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.txt");
        save_board(&GameState::default_scenario(), &path).unwrap();

        let entry = run_one(&path, 3, 1);
        assert!(entry.error.is_none());
        assert_eq!(entry.ticks_played, 3);
        assert_eq!(entry.snakes, 1);
        assert_eq!(entry.survivors, 1);
    }
}
