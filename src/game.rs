//! Game layer for snakegrid.
//!
//! The board is the only store of snake shape:
//! - Cell alphabet and direction mappings (`cell`)
//! - Board and coordinates
//! - Snake records and the tracer that rebuilds them from tails
//! - Tick engine with injected food placement
//! - Invariant checks

pub mod cell;

mod board;
mod food;
mod invariants;
mod snake;
mod state;
mod trace;

pub use crate::error::TraceError;
pub use board::{Board, Coord};
pub use cell::Direction;
pub use food::{FirstEmpty, FoodPolicy, NoFood, SeededFood};
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use snake::{Snake, SnakeId};
pub use state::{GameState, SnakeOutcome, TickReport};
pub use trace::{discover_snakes, find_head, trace_path};
