//! Run command implementation.

use super::output::{JsonRunResult, format_text};
use super::{CliError, FoodArg, OutputFormat};
use snakegrid::{GameState, SimConfig, load_board, run_simulation, save_board};
use std::path::{Path, PathBuf};

/// Options for the run command.
#[derive(Debug)]
pub(crate) struct RunOptions {
    /// Tick limit override.
    pub(crate) ticks: Option<u32>,
    /// Food mode override.
    pub(crate) food: Option<FoodArg>,
    /// Seed override.
    pub(crate) seed: Option<u64>,
    /// JSON config file.
    pub(crate) config: Option<PathBuf>,
    /// Output format.
    pub(crate) format: OutputFormat,
    /// Where to save the final board.
    pub(crate) output: Option<PathBuf>,
    /// Suppress the board printout.
    pub(crate) quiet: bool,
}

impl RunOptions {
    /// Build the simulation config: file values first, then flags on top.
    fn sim_config(&self) -> Result<SimConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => SimConfig::from_file(path)?,
            None => SimConfig::default(),
        };
        if let Some(ticks) = self.ticks {
            config.max_ticks = ticks;
        }
        if let Some(food) = self.food {
            config.food = food.into();
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }
}

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the board or config cannot be loaded, or the final
/// board cannot be saved.
pub(crate) fn execute(board: Option<&Path>, options: &RunOptions) -> Result<(), CliError> {
    let config = options.sim_config()?;
    let mut game = match board {
        Some(path) => load(path)?,
        None => GameState::default_scenario(),
    };

    let result = run_simulation(&mut game, &config);

    if let Some(path) = &options.output {
        save_board(&game, path).map_err(|e| {
            CliError::new(format!("Failed to save {}: {e}", path.display()))
        })?;
    }

    // Output based on format
    match options.format {
        OutputFormat::Text => {
            if !options.quiet {
                print!("{game}");
                println!();
            }
            print!("{}", format_text(&result));
        }
        OutputFormat::Json => {
            let shown = (!options.quiet).then_some(&game);
            let json = serde_json::to_string_pretty(&JsonRunResult::new(&result, shown))?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Load a board, naming the file in the error.
pub(super) fn load(path: &Path) -> Result<GameState, CliError> {
    load_board(path).map_err(|e| CliError::new(format!("Failed to load {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use snakegrid::FoodMode;
    use std::fs;

    fn options() -> RunOptions {
        RunOptions {
            ticks: None,
            food: None,
            seed: None,
            config: None,
            format: OutputFormat::Text,
            output: None,
            quiet: true,
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim.json");
        fs::write(&path, r#"{"max_ticks": 9, "food": "none", "seed": 5}"#).unwrap();

        let mut opts = options();
        opts.config = Some(path);
        opts.seed = Some(11);
        let config = opts.sim_config().unwrap();
        assert_eq!(config.max_ticks, 9);
        assert_eq!(config.food, FoodMode::None);
        assert_eq!(config.seed, 11);
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let mut opts = options();
        opts.config = Some(PathBuf::from("/nonexistent/sim.json"));
        assert!(opts.sim_config().is_err());
    }

    #[test]
    fn test_run_saves_final_board() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("final.txt");
        let mut opts = options();
        opts.ticks = Some(1);
        opts.output = Some(out.clone());

        execute(None, &opts).unwrap();
        let saved = fs::read_to_string(out).unwrap();
        assert_eq!(saved.lines().nth(2), Some("#  d>D   *         #"));
    }
}
