//! Multi-tick simulation runner.
//!
//! Provides a pure function interface: `(state, config) -> SimResult`
//!
//! The runner handles:
//! - Building the configured food policy
//! - Ticking until the tick limit or until every snake has crashed
//! - Summarizing each snake's final position and traced length

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::game::{Coord, FirstEmpty, FoodPolicy, GameState, NoFood, SeededFood, SnakeId};

/// How replacement food is placed after a snake eats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodMode {
    /// Never place food.
    None,
    /// First empty cell in row-major order.
    First,
    /// Uniformly random empty cell from the configured seed.
    Random,
}

impl FoodMode {
    /// Build the policy for this mode.
    #[must_use]
    pub fn policy(self, seed: u64) -> Box<dyn FoodPolicy + Send> {
        match self {
            FoodMode::None => Box::new(NoFood),
            FoodMode::First => Box::new(FirstEmpty),
            FoodMode::Random => Box::new(SeededFood::new(seed)),
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Maximum ticks before the run ends.
    pub max_ticks: u32,
    /// Food placement after a snake eats.
    pub food: FoodMode,
    /// Seed for random food placement.
    pub seed: u64,
    /// End the run early once no snake is alive.
    pub stop_when_all_crashed: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_ticks: 100,
            food: FoodMode::Random,
            seed: 42,
            stop_when_all_crashed: true,
        }
    }
}

impl SimConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&json).map_err(ConfigError::Parse)
    }
}

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(io::Error),
    /// The file is not valid configuration JSON.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

/// Final state of one snake after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnakeSummary {
    /// Index in discovery order.
    pub id: SnakeId,
    /// Whether the snake survived.
    pub alive: bool,
    /// Head position.
    pub head: Coord,
    /// Tail position.
    pub tail: Coord,
    /// Cells from tail to head, if the path still traces.
    pub length: Option<usize>,
    /// Tick on which the snake crashed during this run.
    pub crashed_at: Option<u64>,
}

/// Result of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimResult {
    /// Ticks applied during this run.
    pub ticks_played: u32,
    /// Per-snake summaries in discovery order.
    pub snakes: Vec<SnakeSummary>,
}

impl SimResult {
    /// Number of snakes alive at the end.
    #[must_use]
    pub fn survivors(&self) -> usize {
        self.snakes.iter().filter(|s| s.alive).count()
    }
}

/// Run a simulation in place according to `config`.
#[must_use]
pub fn run_simulation(state: &mut GameState, config: &SimConfig) -> SimResult {
    let mut food = config.food.policy(config.seed);
    let mut crashed_at: Vec<Option<u64>> = vec![None; state.snakes().len()];
    let mut ticks_played = 0;

    while ticks_played < config.max_ticks {
        if config.stop_when_all_crashed && state.alive_snakes().next().is_none() {
            debug!(ticks_played, "no snakes alive");
            break;
        }

        let report = state.tick(&mut *food);
        for id in report.crashed() {
            crashed_at[id] = Some(report.tick);
        }
        ticks_played += 1;
    }

    let result = summarize(state, ticks_played, &crashed_at);
    info!(
        ticks = result.ticks_played,
        survivors = result.survivors(),
        snakes = result.snakes.len(),
        "simulation finished"
    );
    result
}

/// Build the per-snake summaries.
fn summarize(state: &GameState, ticks_played: u32, crashed_at: &[Option<u64>]) -> SimResult {
    let snakes = state
        .snakes()
        .iter()
        .enumerate()
        .map(|(id, snake)| SnakeSummary {
            id,
            alive: snake.alive,
            head: snake.head,
            tail: snake.tail,
            length: snake.length(state.board()).ok(),
            crashed_at: crashed_at.get(id).copied().flatten(),
        })
        .collect();

    SimResult {
        ticks_played,
        snakes,
    }
}
