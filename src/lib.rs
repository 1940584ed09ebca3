// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Snakegrid: a deterministic multi-snake simulation on a character grid.
//!
//! The board is the only data structure. Every snake path is encoded as
//! direction symbols in the cells it occupies; the snake records hold just a
//! head and a tail, and everything else is recovered by following the
//! symbols.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Simulation runner / CLI batch     │
//! ├─────────────────────────────────────┤
//! │   Tick engine + food policies       │
//! ├─────────────────────────────────────┤
//! │   Tracer        │   Text format     │
//! ├─────────────────────────────────────┤
//! │   Cell codec + Board                │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use snakegrid::{GameState, NoFood};
//!
//! let mut game: GameState = "#####\n#d>D#\n#####\n".parse().unwrap();
//! game.tick(&mut NoFood);
//! assert_eq!(game.to_string(), "#####\n#d>x#\n#####\n");
//! ```

pub mod error;
pub mod format;
pub mod game;
pub mod sim;

pub use error::{LoadError, TraceError};
pub use format::{load_board, read_board, render_board, save_board, write_board};

// Re-export key game types at crate root for convenience
pub use game::{
    Board, Coord, Direction, FirstEmpty, FoodPolicy, GameState, NoFood, SeededFood, Snake,
    SnakeId, SnakeOutcome, TickReport,
};
pub use sim::{FoodMode, SimConfig, SimResult, run_simulation};
