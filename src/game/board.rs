//! Board and coordinate types.

use serde::{Deserialize, Serialize};

use crate::game::cell;

/// A cell position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0 at the top.
    pub row: u16,
    /// Column index, 0 at the left.
    pub col: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Offset by a signed delta, or `None` if either component would leave `u16`.
    #[must_use]
    pub fn offset(self, d_row: i16, d_col: i16) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self { row, col })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A rectangular grid of cell symbols.
///
/// Cells are stored row-major. The board does not enforce the alphabet;
/// [`GameState::from_board`](crate::GameState::from_board) and decoding do,
/// and the invariant checker reports strays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Width of the board in cells.
    width: u16,
    /// Height of the board in cells.
    height: u16,
    /// Cells stored in row-major order.
    cells: Vec<u8>,
}

impl Board {
    /// Create a new board filled with empty floor.
    ///
    /// Returns `None` if width or height is zero.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let size = usize::from(width) * usize::from(height);
        Some(Self {
            width,
            height,
            cells: vec![cell::EMPTY; size],
        })
    }

    /// Build a board from already-validated rows of equal, non-zero length.
    ///
    /// Returns `None` if there are no rows, a row is empty, the rows differ
    /// in length or a dimension does not fit in `u16`.
    #[must_use]
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Option<Self> {
        let first = rows.first()?.as_ref().len();
        let width = u16::try_from(first).ok().filter(|&w| w > 0)?;
        let height = u16::try_from(rows.len()).ok()?;

        let mut cells = Vec::with_capacity(usize::from(width) * usize::from(height));
        for row in rows {
            let row = row.as_ref();
            if row.len() != first {
                return None;
            }
            cells.extend_from_slice(row);
        }

        Some(Self {
            width,
            height,
            cells,
        })
    }

    /// Get the width of the board.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the height of the board.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Raw cells in row-major order.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Check if a coordinate is within the board bounds.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// Convert a coordinate to an index into the cells array.
    #[must_use]
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(usize::from(coord.row) * usize::from(self.width) + usize::from(coord.col))
        } else {
            None
        }
    }

    /// Get the symbol at the given coordinate.
    #[must_use]
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<u8> {
        self.index_of(coord).map(|idx| self.cells[idx])
    }

    /// Set the symbol at the given coordinate.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub fn set(&mut self, coord: Coord, symbol: u8) -> bool {
        if let Some(idx) = self.index_of(coord) {
            self.cells[idx] = symbol;
            true
        } else {
            false
        }
    }

    /// The cell one step from `coord` along the direction encoded by `symbol`.
    ///
    /// Non-directional symbols yield `coord` itself. Returns `None` if the
    /// step leaves the board.
    #[must_use]
    pub fn step(&self, coord: Coord, symbol: u8) -> Option<Coord> {
        coord
            .offset(cell::row_delta(symbol), cell::col_delta(symbol))
            .filter(|&next| self.in_bounds(next))
    }

    /// A single row as a byte slice.
    #[must_use]
    pub fn row(&self, row: u16) -> Option<&[u8]> {
        if row >= self.height {
            return None;
        }
        let start = usize::from(row) * usize::from(self.width);
        Some(&self.cells[start..start + usize::from(self.width)])
    }

    /// Iterate over rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(usize::from(self.width))
    }

    /// Iterate over all coordinates and symbols in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord, u8)> + '_ {
        let width = usize::from(self.width);
        self.cells.iter().enumerate().map(move |(idx, &symbol)| {
            // Both quotients are bounded by the u16 dimensions.
            #[allow(clippy::cast_possible_truncation)]
            let coord = Coord::new((idx / width) as u16, (idx % width) as u16);
            (coord, symbol)
        })
    }

    /// Iterate over the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter_cells()
            .filter(|&(_, symbol)| symbol == cell::EMPTY)
            .map(|(coord, _)| coord)
    }

    /// Count cells holding `symbol`.
    #[must_use]
    pub fn count(&self, symbol: u8) -> usize {
        self.cells.iter().filter(|&&c| c == symbol).count()
    }
}
