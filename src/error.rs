//! Error types for board loading and snake tracing.

use std::fmt;
use std::io;

use crate::game::Coord;

/// Why a tail's direction chain could not be followed to a head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceError {
    /// The starting cell does not hold a tail symbol.
    NotATail {
        /// The cell that was expected to be a tail.
        at: Coord,
    },
    /// The chain stepped off the edge of the board.
    OffBoard {
        /// Tail the walk started from.
        tail: Coord,
        /// Last cell inside the board.
        from: Coord,
    },
    /// The chain reached a cell that is neither body nor head.
    BrokenChain {
        /// Tail the walk started from.
        tail: Coord,
        /// The offending cell.
        at: Coord,
        /// Symbol found there.
        symbol: u8,
    },
    /// The chain reached a cell already claimed by another path or itself.
    Overlap {
        /// Tail the walk started from.
        tail: Coord,
        /// The cell claimed twice.
        at: Coord,
    },
    /// The walk exhausted its step budget.
    TooLong {
        /// Tail the walk started from.
        tail: Coord,
        /// Cells visited before giving up.
        steps: usize,
    },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::NotATail { at } => write!(f, "no tail symbol at {at}"),
            TraceError::OffBoard { tail, from } => {
                write!(f, "snake from tail {tail} runs off the board at {from}")
            }
            TraceError::BrokenChain { tail, at, symbol } => write!(
                f,
                "snake from tail {tail} is broken at {at} by {:?}",
                char::from(*symbol)
            ),
            TraceError::Overlap { tail, at } => {
                write!(f, "snake from tail {tail} overlaps another path at {at}")
            }
            TraceError::TooLong { tail, steps } => {
                write!(f, "snake from tail {tail} has no head within {steps} cells")
            }
        }
    }
}

impl std::error::Error for TraceError {}

/// Errors produced while decoding a text board.
#[derive(Debug)]
pub enum LoadError {
    /// Reading the underlying stream failed.
    Io(io::Error),
    /// The stream held no rows.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of this row.
        found: usize,
    },
    /// A cell holds a character outside the board alphabet.
    UnknownSymbol {
        /// Where it was found.
        at: Coord,
        /// The character.
        symbol: char,
    },
    /// The board has more rows or columns than a coordinate can address.
    TooLarge {
        /// Number of rows read.
        rows: usize,
        /// Length of the widest row.
        cols: usize,
    },
    /// A snake's chain is malformed.
    Trace(TraceError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read board: {e}"),
            LoadError::Empty => write!(f, "board is empty"),
            LoadError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} columns, expected {expected}"
            ),
            LoadError::UnknownSymbol { at, symbol } => {
                write!(f, "unknown symbol {symbol:?} at {at}")
            }
            LoadError::TooLarge { rows, cols } => {
                write!(f, "board of {rows}x{cols} exceeds {} cells per side", u16::MAX)
            }
            LoadError::Trace(e) => write!(f, "malformed snake: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Trace(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<TraceError> for LoadError {
    fn from(e: TraceError) -> Self {
        LoadError::Trace(e)
    }
}
