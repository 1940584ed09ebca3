//! Food placement policies.
//!
//! The tick engine calls a policy once each time a snake eats. Placement is
//! the policy's business: random, deterministic or fixed by a test.

use crate::game::{Board, Coord, cell};

/// Places new food after a snake eats.
pub trait FoodPolicy {
    /// Write at most one food symbol into an empty cell of `board`.
    ///
    /// Returns the cell written, or `None` if nothing was placed.
    fn place_food(&mut self, board: &mut Board) -> Option<Coord>;
}

impl<F> FoodPolicy for F
where
    F: FnMut(&mut Board) -> Option<Coord>,
{
    fn place_food(&mut self, board: &mut Board) -> Option<Coord> {
        self(board)
    }
}

/// Never places food.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFood;

impl FoodPolicy for NoFood {
    fn place_food(&mut self, _board: &mut Board) -> Option<Coord> {
        None
    }
}

/// Places food in the first empty cell, scanning row-major.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEmpty;

impl FoodPolicy for FirstEmpty {
    fn place_food(&mut self, board: &mut Board) -> Option<Coord> {
        let coord = board.empty_cells().next()?;
        board.set(coord, cell::FOOD);
        Some(coord)
    }
}

/// Places food in a uniformly chosen empty cell using a seeded PRNG.
///
/// Two policies built from the same seed make the same placements on the
/// same sequence of boards.
#[derive(Debug, Clone, Copy)]
pub struct SeededFood {
    rng: Rng,
}

impl SeededFood {
    /// Create a policy seeded with `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            rng: Rng::new(seed),
        }
    }
}

impl FoodPolicy for SeededFood {
    fn place_food(&mut self, board: &mut Board) -> Option<Coord> {
        let empty = board.empty_cells().count();
        if empty == 0 {
            return None;
        }
        let pick = self.rng.below(empty);
        let coord = board.empty_cells().nth(pick)?;
        board.set(coord, cell::FOOD);
        Some(coord)
    }
}

/// Deterministic PRNG using xorshift64.
#[derive(Debug, Clone, Copy)]
struct Rng {
    state: u64,
}

impl Rng {
    /// Create a new RNG with the given seed.
    const fn new(seed: u64) -> Self {
        // Zero is a fixed point of xorshift
        let state = if seed == 0 { 0x5555_5555_5555_5555 } else { seed };
        Self { state }
    }

    /// Generate next random u64.
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random index in [0, max). `max` must be non-zero.
    fn below(&mut self, max: usize) -> usize {
        // The remainder is < max, which came from a usize.
        #[allow(clippy::cast_possible_truncation)]
        let idx = (self.next_u64() % max as u64) as usize;
        idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walled(width: u16, height: u16) -> Board {
        let mut board = Board::new(width, height).unwrap();
        for (coord, _) in board.clone().iter_cells() {
            if coord.row == 0 || coord.col == 0 || coord.row + 1 == height || coord.col + 1 == width
            {
                board.set(coord, cell::WALL);
            }
        }
        board
    }

    #[test]
    fn test_no_food() {
        let mut board = walled(5, 5);
        let before = board.clone();
        assert_eq!(NoFood.place_food(&mut board), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_first_empty() {
        let mut board = walled(5, 5);
        assert_eq!(FirstEmpty.place_food(&mut board), Some(Coord::new(1, 1)));
        assert_eq!(board.get(Coord::new(1, 1)), Some(cell::FOOD));
        assert_eq!(FirstEmpty.place_food(&mut board), Some(Coord::new(1, 2)));
    }

    #[test]
    fn test_full_board_places_nothing() {
        let mut board = walled(2, 2);
        assert_eq!(FirstEmpty.place_food(&mut board), None);
        assert_eq!(SeededFood::new(7).place_food(&mut board), None);
        assert_eq!(board.count(cell::FOOD), 0);
    }

    #[test]
    fn test_seeded_places_on_empty_cell() {
        let mut board = walled(10, 10);
        let mut policy = SeededFood::new(42);
        for _ in 0..20 {
            let before = board.clone();
            let coord = policy.place_food(&mut board).unwrap();
            assert_eq!(before.get(coord), Some(cell::EMPTY));
            assert_eq!(board.get(coord), Some(cell::FOOD));
        }
        assert_eq!(board.count(cell::FOOD), 20);
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = walled(12, 12);
        let mut b = walled(12, 12);
        let mut pa = SeededFood::new(1234);
        let mut pb = SeededFood::new(1234);
        for _ in 0..10 {
            assert_eq!(pa.place_food(&mut a), pb.place_food(&mut b));
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_seed_still_moves() {
        let mut rng = Rng::new(0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn test_closure_policy() {
        let mut board = walled(5, 5);
        let mut calls = 0;
        let mut policy = |b: &mut Board| {
            calls += 1;
            let at = Coord::new(3, 3);
            b.set(at, cell::FOOD);
            Some(at)
        };
        assert_eq!(policy.place_food(&mut board), Some(Coord::new(3, 3)));
        assert_eq!(calls, 1);
    }
}
