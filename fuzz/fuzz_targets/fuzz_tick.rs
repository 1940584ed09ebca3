#![no_main]

//! Tick engine fuzzer.
//!
//! Builds small boards from the cell alphabet, keeps those that trace cleanly
//! and hold every invariant, then ticks them with seeded food and checks the
//! invariants after each tick.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use snakegrid::game::check_invariants;
use snakegrid::{Board, GameState, SeededFood};

const ALPHABET: &[u8] = b"# *^<v>wasdWASDx";

/// Structured input for tick fuzzing.
#[derive(Arbitrary, Debug)]
struct TickInput {
    /// Board width, reduced to 1..=16.
    width: u8,
    /// Cells as alphabet indices, row-major.
    cells: Vec<u8>,
    /// Food placement seed.
    seed: u64,
    /// Number of ticks to run.
    ticks: u8,
}

fuzz_target!(|input: TickInput| {
    let width = usize::from(input.width % 16) + 1;
    let height = input.cells.len() / width;
    if height == 0 {
        return;
    }

    let rows: Vec<Vec<u8>> = input.cells[..width * height]
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(|&i| ALPHABET[usize::from(i) % ALPHABET.len()])
                .collect()
        })
        .collect();

    let Some(board) = Board::from_rows(&rows) else {
        return;
    };
    let Ok(mut game) = GameState::from_board(board) else {
        return;
    };
    if !check_invariants(&game).is_empty() {
        return;
    }

    let mut food = SeededFood::new(input.seed);
    for _ in 0..input.ticks {
        let before = game.snakes().to_vec();
        let report = game.tick(&mut food);
        assert_eq!(report.outcomes.len(), before.len());

        let violations = check_invariants(&game);
        assert!(violations.is_empty(), "{violations:?}");

        // A crashed snake never comes back.
        for (old, new) in before.iter().zip(game.snakes()) {
            assert!(old.alive || !new.alive);
        }
    }
});
