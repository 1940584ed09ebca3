//! Snake records.

use crate::game::{Board, Coord, TraceError, trace_path};

/// Index of a snake within a [`GameState`](crate::game::GameState).
pub type SnakeId = usize;

/// Where a snake's head and tail currently are.
///
/// The path between them lives only in the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snake {
    /// Cell holding the head symbol.
    pub head: Coord,
    /// Cell holding the tail symbol.
    pub tail: Coord,
    /// Whether the snake still moves.
    pub alive: bool,
}

impl Snake {
    /// Create a live snake.
    #[must_use]
    pub const fn new(tail: Coord, head: Coord) -> Self {
        Self {
            head,
            tail,
            alive: true,
        }
    }

    /// Mark this snake as crashed.
    pub fn crash(&mut self) {
        self.alive = false;
    }

    /// Number of cells from tail to head inclusive, traced through `board`.
    ///
    /// # Errors
    ///
    /// Returns the tracer's error if the chain from the tail is broken.
    pub fn length(&self, board: &Board) -> Result<usize, TraceError> {
        trace_path(board, self.tail).map(|path| path.len())
    }
}
