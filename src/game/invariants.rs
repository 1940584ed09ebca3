//! Game invariants - sanity checks that detect corrupted states.
//!
//! A state built by decoding a well-formed board and advanced only through
//! [`GameState::tick`] should never violate these. They are bug detectors
//! for the engine and for hand-built boards, not gameplay rules.

use crate::game::{GameState, cell, trace_path};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let board = state.board();
    let mut violations = Vec::new();
    let mut push = |message: String| violations.push(InvariantViolation { message });

    // Alphabet
    for (coord, symbol) in board.iter_cells() {
        if !cell::is_known(symbol) {
            push(format!(
                "Cell at {coord} holds unknown symbol {:?}",
                char::from(symbol)
            ));
        }
    }

    // Each snake's ends and path; record which snake owns each cell
    let mut owner: Vec<Option<usize>> = vec![None; board.cell_count()];
    for (id, snake) in state.snakes().iter().enumerate() {
        let head_symbol = board.get(snake.head);
        if snake.alive {
            if !head_symbol.is_some_and(|c| cell::is_head(c) && c != cell::CRASHED) {
                push(format!(
                    "Live snake {id} head at {} is not a head symbol",
                    snake.head
                ));
            }
        } else if head_symbol != Some(cell::CRASHED) {
            push(format!(
                "Dead snake {id} head at {} is not the crashed marker",
                snake.head
            ));
        }

        if !board.get(snake.tail).is_some_and(cell::is_tail) {
            push(format!("Snake {id} tail at {} is not a tail symbol", snake.tail));
            continue;
        }

        let path = match trace_path(board, snake.tail) {
            Ok(path) => path,
            Err(e) => {
                push(format!("Snake {id} cannot be traced: {e}"));
                continue;
            }
        };
        if path.last() != Some(&snake.head) {
            push(format!(
                "Snake {id} traces to {:?} but records head {}",
                path.last(),
                snake.head
            ));
        }

        for coord in path {
            let Some(idx) = board.index_of(coord) else {
                continue;
            };
            match owner[idx] {
                Some(other) => push(format!("Snakes {other} and {id} both occupy {coord}")),
                None => owner[idx] = Some(id),
            }
        }
    }

    // Snake cells that no record accounts for
    for (coord, symbol) in board.iter_cells() {
        if !cell::is_snake(symbol) {
            continue;
        }
        let owned = board.index_of(coord).is_some_and(|idx| owner[idx].is_some());
        if !owned {
            push(format!(
                "Snake symbol {:?} at {coord} belongs to no snake",
                char::from(symbol)
            ));
        }
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}
