//! Board validation command implementation.

use super::CliError;
use super::run::load;
use snakegrid::game::check_invariants;
use std::path::Path;

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if the board cannot be loaded or breaks an invariant.
pub(crate) fn execute(board: &Path) -> Result<(), CliError> {
    println!("Validating: {}", board.display());
    println!();

    let game = match load(board) {
        Ok(game) => {
            print_check("Decodes and traces", true);
            game
        }
        Err(e) => {
            print_check("Decodes and traces", false);
            return Err(e);
        }
    };

    let violations = check_invariants(&game);
    print_check("Snake invariants", violations.is_empty());
    if !violations.is_empty() {
        for violation in &violations {
            println!("      {}", violation.message);
        }
        return Err(CliError::new(format!(
            "{} invariant violation(s)",
            violations.len()
        )));
    }

    println!();
    println!("Summary:");
    println!(
        "  Size:         {}x{}",
        game.board().width(),
        game.board().height()
    );
    println!("  Snakes:       {}", game.snakes().len());
    println!("  Alive:        {}", game.alive_snakes().count());
    println!("  Food:         {}", game.board().count(snakegrid::game::cell::FOOD));
    println!();
    println!("Validation successful!");

    Ok(())
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    println!("  {symbol} {name}: {status}");
}
