//! Property-based tests for board decoding and the tick engine.
//!
//! Boards are generated walled, with snakes laid down as random walks that
//! turn corners, run vertically and pack against each other, plus scattered
//! food. Every generated board is well formed.
//! Run with: cargo test --release prop_board

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::collection::vec;
use proptest::prelude::*;

use snakegrid::game::{check_invariants, trace_path};
use snakegrid::{GameState, NoFood, SeededFood, SnakeOutcome, render_board};

/// A snake's start cell seeds and its turn bytes.
type WalkSpec = (usize, usize, Vec<u8>);

/// Row and column steps for up, down, left, right.
const STEPS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const TAILS: &[u8; 4] = b"wsad";
const BODIES: &[u8; 4] = b"^v<>";
const HEADS: &[u8; 4] = b"WSAD";

/// Walk from `start`, taking each turn only onto an empty cell not yet on
/// the path.
fn walk(
    grid: &[Vec<u8>],
    start: (usize, usize),
    turns: &[u8],
) -> (Vec<(usize, usize)>, Vec<usize>) {
    let mut path = vec![start];
    let mut dirs = Vec::new();
    for &turn in turns {
        let dir = usize::from(turn % 4);
        let (row, col) = path[path.len() - 1];
        let next = (
            row.wrapping_add_signed(STEPS[dir].0),
            col.wrapping_add_signed(STEPS[dir].1),
        );
        if grid[next.0][next.1] == b' ' && !path.contains(&next) {
            path.push(next);
            dirs.push(dir);
        }
    }
    (path, dirs)
}

/// Build the board text and the expected snake lengths in discovery order.
fn build(
    width: usize,
    height: usize,
    walks: &[WalkSpec],
    food: &[(usize, usize)],
) -> (String, Vec<usize>) {
    let mut grid = vec![vec![b'#'; width]; height];
    for row in &mut grid[1..height - 1] {
        row[1..width - 1].fill(b' ');
    }
    let (inner_h, inner_w) = (height - 2, width - 2);

    let mut tails = Vec::new();
    for (row, col, turns) in walks {
        let start = (1 + row % inner_h, 1 + col % inner_w);
        if grid[start.0][start.1] != b' ' {
            continue;
        }
        let (path, dirs) = walk(&grid, start, turns);
        if path.len() < 2 {
            continue;
        }
        // Each cell points at the next one; the head keeps the last heading.
        let last = path.len() - 1;
        for (i, &(r, c)) in path.iter().enumerate() {
            grid[r][c] = match i {
                0 => TAILS[dirs[0]],
                i if i == last => HEADS[dirs[last - 1]],
                i => BODIES[dirs[i]],
            };
        }
        tails.push((start, path.len()));
    }

    for &(row, col) in food {
        let at = (1 + row % inner_h, 1 + col % inner_w);
        if grid[at.0][at.1] == b' ' {
            grid[at.0][at.1] = b'*';
        }
    }

    // Discovery scans tails in row-major order.
    tails.sort_unstable();
    let lengths = tails.into_iter().map(|(_, len)| len).collect();

    let mut text = String::new();
    for row in &grid {
        text.push_str(std::str::from_utf8(row).unwrap());
        text.push('\n');
    }
    (text, lengths)
}

fn board_strategy() -> impl Strategy<Value = (String, Vec<usize>)> {
    (5usize..14, 5usize..12).prop_flat_map(|(width, height)| {
        let walks = vec((any::<usize>(), any::<usize>(), vec(any::<u8>(), 1..20)), 0..6);
        let food = vec((any::<usize>(), any::<usize>()), 0..5);
        (walks, food).prop_map(move |(walks, food)| build(width, height, &walks, &food))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Tracing recovers every generated snake with its exact length.
    #[test]
    fn prop_trace_recovers_lengths((text, lengths) in board_strategy()) {
        let game: GameState = text.parse().unwrap();
        let traced: Vec<usize> = game
            .snakes()
            .iter()
            .map(|s| s.length(game.board()).unwrap())
            .collect();
        prop_assert_eq!(traced, lengths);
        prop_assert!(check_invariants(&game).is_empty());
    }

    /// Decoding then encoding reproduces the input byte for byte.
    #[test]
    fn prop_text_round_trip((text, _) in board_strategy()) {
        let game: GameState = text.parse().unwrap();
        prop_assert_eq!(render_board(&game), text);
    }

    /// Length grows by one exactly when a snake eats and never otherwise.
    #[test]
    fn prop_length_tracks_eating((text, _) in board_strategy(), ticks in 1usize..30) {
        let mut game: GameState = text.parse().unwrap();
        for _ in 0..ticks {
            let before: Vec<usize> = game
                .snakes()
                .iter()
                .map(|s| s.length(game.board()).unwrap())
                .collect();
            let report = game.tick(&mut NoFood);
            for (id, snake) in game.snakes().iter().enumerate() {
                let after = snake.length(game.board()).unwrap();
                let grew = usize::from(report.outcomes[id] == SnakeOutcome::Ate);
                prop_assert_eq!(after, before[id] + grew);
            }
        }
    }

    /// A crashed snake stays dead and its cells never change.
    #[test]
    fn prop_crash_is_terminal((text, _) in board_strategy(), ticks in 1usize..40) {
        let mut game: GameState = text.parse().unwrap();
        let mut frozen: Vec<Option<Vec<_>>> = vec![None; game.snakes().len()];

        for _ in 0..ticks {
            game.tick(&mut NoFood);
            for (id, snake) in game.snakes().iter().enumerate() {
                let path = trace_path(game.board(), snake.tail).unwrap();
                match &frozen[id] {
                    Some(dead) => {
                        prop_assert!(!snake.alive);
                        prop_assert_eq!(&path, dead);
                    }
                    None if !snake.alive => frozen[id] = Some(path),
                    None => {}
                }
            }
        }
    }

    /// Invariants hold after every tick with random food placement.
    #[test]
    fn prop_invariants_hold(
        (text, _) in board_strategy(),
        seed in any::<u64>(),
        ticks in 1usize..50
    ) {
        let mut game: GameState = text.parse().unwrap();
        let mut food = SeededFood::new(seed);
        for _ in 0..ticks {
            game.tick(&mut food);
            let violations = check_invariants(&game);
            prop_assert!(violations.is_empty(), "{violations:?}");
        }
    }

    /// The same board and seed always give the same run.
    #[test]
    fn prop_deterministic((text, _) in board_strategy(), seed in any::<u64>()) {
        let mut a: GameState = text.parse().unwrap();
        let mut b = a.clone();
        let mut food_a = SeededFood::new(seed);
        let mut food_b = SeededFood::new(seed);
        for _ in 0..25 {
            prop_assert_eq!(a.tick(&mut food_a), b.tick(&mut food_b));
        }
        prop_assert_eq!(a, b);
    }
}
