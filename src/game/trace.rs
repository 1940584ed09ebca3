//! Reconstructing snakes from the direction chains embedded in a board.
//!
//! A snake is discovered by its tail symbol. From there each cell's
//! direction points at the next cell, until a head symbol is reached.
//! Walks are bounded by the number of cells on the board, so a looping or
//! dangling chain becomes a [`TraceError`] instead of an endless walk.

use crate::error::TraceError;
use crate::game::{Board, Coord, Snake, cell};

/// Trace the path from a tail cell to its head, both ends included.
///
/// # Errors
///
/// Returns an error if `tail` is not a tail cell, the chain leaves the board,
/// passes through a non-body cell, or revisits a cell.
pub fn trace_path(board: &Board, tail: Coord) -> Result<Vec<Coord>, TraceError> {
    let mut visited = vec![false; board.cell_count()];
    trace_claiming(board, tail, &mut visited)
}

/// Find the head reached by following the chain from `tail`.
///
/// # Errors
///
/// Same as [`trace_path`].
pub fn find_head(board: &Board, tail: Coord) -> Result<Coord, TraceError> {
    let path = trace_path(board, tail)?;
    path.last().copied().ok_or(TraceError::NotATail { at: tail })
}

/// Discover every snake on the board.
///
/// Snakes are created in row-major order of their tail cells, top to bottom
/// and left to right; callers may rely on this ordering for indexing. A snake
/// whose head cell already holds the crashed marker is created dead.
///
/// # Errors
///
/// Returns the first tracing error, including any cell claimed by two paths.
pub fn discover_snakes(board: &Board) -> Result<Vec<Snake>, TraceError> {
    let mut claimed = vec![false; board.cell_count()];
    let mut snakes = Vec::new();

    for (coord, symbol) in board.iter_cells() {
        if !cell::is_tail(symbol) {
            continue;
        }
        let path = trace_claiming(board, coord, &mut claimed)?;
        let head = *path.last().ok_or(TraceError::NotATail { at: coord })?;
        let mut snake = Snake::new(coord, head);
        if board.get(head) == Some(cell::CRASHED) {
            snake.crash();
        }
        snakes.push(snake);
    }

    Ok(snakes)
}

/// Walk from `tail` to a head, marking each visited cell in `claimed`.
///
/// A cell already marked is an overlap, whether it was claimed by an
/// earlier snake or earlier in this same walk.
fn trace_claiming(
    board: &Board,
    tail: Coord,
    claimed: &mut [bool],
) -> Result<Vec<Coord>, TraceError> {
    let symbol = board.get(tail).ok_or(TraceError::NotATail { at: tail })?;
    if !cell::is_tail(symbol) {
        return Err(TraceError::NotATail { at: tail });
    }

    let budget = board.cell_count();
    let mut path = Vec::new();
    let mut at = tail;
    let mut symbol = symbol;

    loop {
        let idx = board.index_of(at).ok_or(TraceError::OffBoard { tail, from: at })?;
        if claimed[idx] {
            return Err(TraceError::Overlap { tail, at });
        }
        claimed[idx] = true;
        path.push(at);

        if cell::is_head(symbol) {
            return Ok(path);
        }
        if path.len() >= budget {
            return Err(TraceError::TooLong {
                tail,
                steps: path.len(),
            });
        }

        let next = board
            .step(at, symbol)
            .ok_or(TraceError::OffBoard { tail, from: at })?;
        let next_symbol = board
            .get(next)
            .ok_or(TraceError::OffBoard { tail, from: at })?;
        if !cell::is_body(next_symbol) && !cell::is_head(next_symbol) {
            return Err(TraceError::BrokenChain {
                tail,
                at: next,
                symbol: next_symbol,
            });
        }

        at = next;
        symbol = next_symbol;
    }
}
