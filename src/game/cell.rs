//! Cell alphabet and the pure mappings between directional symbols.
//!
//! Every function here is total: it accepts any byte and returns a defined
//! value, so the tracer and tick engine never hit undefined behavior on a
//! malformed board. Non-snake bytes map to zero deltas and to [`EMPTY`].

/// Wall or boundary.
pub const WALL: u8 = b'#';
/// Empty floor.
pub const EMPTY: u8 = b' ';
/// Food.
pub const FOOD: u8 = b'*';
/// Terminal marker left where a snake's head crashed.
pub const CRASHED: u8 = b'x';

/// One of the four directions a snake segment can point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// Decode the direction carried by a body, tail or live head symbol.
    ///
    /// The crashed marker carries no direction.
    #[must_use]
    pub const fn from_symbol(c: u8) -> Option<Self> {
        match c {
            b'^' | b'w' | b'W' => Some(Direction::Up),
            b'v' | b's' | b'S' => Some(Direction::Down),
            b'<' | b'a' | b'A' => Some(Direction::Left),
            b'>' | b'd' | b'D' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Returns the (row, col) delta for one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Body symbol travelling in this direction.
    #[must_use]
    pub const fn body(self) -> u8 {
        match self {
            Direction::Up => b'^',
            Direction::Down => b'v',
            Direction::Left => b'<',
            Direction::Right => b'>',
        }
    }

    /// Tail symbol about to move in this direction.
    #[must_use]
    pub const fn tail(self) -> u8 {
        match self {
            Direction::Up => b'w',
            Direction::Down => b's',
            Direction::Left => b'a',
            Direction::Right => b'd',
        }
    }
}

/// Row delta of a directional symbol: +1 for `v s S`, -1 for `^ w W`, else 0.
#[must_use]
pub const fn row_delta(c: u8) -> i16 {
    match Direction::from_symbol(c) {
        Some(direction) => direction.delta().0,
        None => 0,
    }
}

/// Column delta of a directional symbol: +1 for `> d D`, -1 for `< a A`, else 0.
#[must_use]
pub const fn col_delta(c: u8) -> i16 {
    match Direction::from_symbol(c) {
        Some(direction) => direction.delta().1,
        None => 0,
    }
}

/// Convert a body symbol to the tail symbol pointing the same way.
#[must_use]
pub const fn body_to_tail(c: u8) -> u8 {
    match Direction::from_symbol(c) {
        Some(direction) if is_body(c) => direction.tail(),
        _ => EMPTY,
    }
}

/// Convert a live head symbol to the body symbol pointing the same way.
#[must_use]
pub const fn head_to_body(c: u8) -> u8 {
    match Direction::from_symbol(c) {
        Some(direction) if is_head(c) => direction.body(),
        _ => EMPTY,
    }
}

/// `w a s d`
#[must_use]
pub const fn is_tail(c: u8) -> bool {
    matches!(c, b'w' | b'a' | b's' | b'd')
}

/// `W A S D` and the crashed marker `x`.
#[must_use]
pub const fn is_head(c: u8) -> bool {
    matches!(c, b'W' | b'A' | b'S' | b'D' | CRASHED)
}

/// `^ < v >`
#[must_use]
pub const fn is_body(c: u8) -> bool {
    matches!(c, b'^' | b'<' | b'v' | b'>')
}

/// Any part of a snake, dead or alive.
#[must_use]
pub const fn is_snake(c: u8) -> bool {
    is_tail(c) || is_head(c) || is_body(c)
}

/// Whether `c` belongs to the board alphabet at all.
#[must_use]
pub const fn is_known(c: u8) -> bool {
    matches!(c, WALL | EMPTY | FOOD) || is_snake(c)
}
