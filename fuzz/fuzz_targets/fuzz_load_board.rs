#![no_main]

//! Board decoder fuzzer.
//!
//! Feeds arbitrary bytes to the text decoder. Decoding must never panic, and
//! any board it accepts must re-encode to text that decodes to the same state.

use libfuzzer_sys::fuzz_target;
use snakegrid::game::check_invariants;
use snakegrid::{GameState, read_board, render_board};

fuzz_target!(|data: &[u8]| {
    let Ok(game) = read_board(data) else {
        return;
    };

    let text = render_board(&game);
    let reloaded: GameState = read_board(text.as_bytes()).expect("rendered board must decode");
    assert_eq!(reloaded.board(), game.board());
    assert_eq!(reloaded.snakes(), game.snakes());

    // Tracing accounts for every snake it found; only orphan cells may remain.
    for violation in check_invariants(&game) {
        assert!(
            violation.message.contains("belongs to no snake"),
            "{violation}"
        );
    }
});
