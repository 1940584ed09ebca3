//! Default board command implementation.

use super::CliError;
use snakegrid::{GameState, save_board};
use std::path::Path;

/// Execute the default command: print or save the built-in starting board.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub(crate) fn execute(output: Option<&Path>) -> Result<(), CliError> {
    let game = GameState::default_scenario();

    match output {
        Some(path) => {
            save_board(&game, path).map_err(|e| {
                CliError::new(format!("Failed to save {}: {e}", path.display()))
            })?;
            println!("Default board saved to: {}", path.display());
        }
        None => print!("{game}"),
    }

    Ok(())
}
