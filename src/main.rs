//! Snakegrid CLI - Command-line interface for running and checking boards.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Snakegrid - a deterministic multi-snake simulation on a character grid
#[derive(Parser, Debug)]
#[command(name = "snakegrid")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a simulation and print the final board
    Run {
        /// Board file (default: the built-in scenario)
        board: Option<PathBuf>,

        /// Maximum ticks (default: 100, or the config file's value)
        #[arg(short, long)]
        ticks: Option<u32>,

        /// Food placement after a snake eats
        #[arg(long)]
        food: Option<cli::FoodArg>,

        /// Random seed for food placement
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON simulation config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Write the final board to a file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print only the summary, not the board
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print or save the built-in starting board
    Default {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that a board file decodes and its snakes are consistent
    Validate {
        /// Board file to validate
        #[arg(required = true)]
        board: PathBuf,
    },

    /// Run many boards in parallel and summarize the results
    Batch {
        /// Board files
        #[arg(required = true)]
        boards: Vec<PathBuf>,

        /// Maximum ticks per board (default: 100)
        #[arg(short, long, default_value = "100")]
        ticks: u32,

        /// Random seed for food placement
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::BatchFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let result = match args.command {
        Commands::Run {
            board,
            ticks,
            food,
            seed,
            config,
            format,
            output,
            quiet,
        } => {
            let options = cli::run::RunOptions {
                ticks,
                food,
                seed,
                config,
                format,
                output,
                quiet,
            };
            cli::run::execute(board.as_deref(), &options)
        }

        Commands::Default { output } => cli::default::execute(output.as_deref()),

        Commands::Validate { board } => cli::validate::execute(&board),

        Commands::Batch {
            boards,
            ticks,
            seed,
            threads,
            format,
            progress,
        } => cli::batch::execute(&boards, ticks, seed, threads, format, progress),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
