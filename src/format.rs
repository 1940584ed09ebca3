//! Text board format.
//!
//! A board is plain text, one line per row, using only the cell alphabet.
//! There is no header: dimensions come from the line count and length, and
//! snakes are rediscovered by tracing after every load.
//!
//! ```text
//! ######
//! #d>D*#
//! ######
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use crate::error::LoadError;
use crate::game::{Board, Coord, GameState, cell};

/// Decode a board from a line-oriented reader and trace its snakes.
///
/// Lines may end in `\n` or `\r\n`; the last line may lack a terminator.
/// Empty lines are skipped.
///
/// # Errors
///
/// Returns [`LoadError`] on read failure, empty input, rows of different
/// lengths, symbols outside the alphabet, oversized boards or malformed
/// snakes.
pub fn read_board<R: BufRead>(reader: R) -> Result<GameState, LoadError> {
    let mut rows: Vec<Vec<u8>> = Vec::new();

    for line in reader.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if line.is_empty() {
            continue;
        }

        let row = rows.len();
        if row > usize::from(u16::MAX) - 1 || line.len() > usize::from(u16::MAX) {
            return Err(LoadError::TooLarge {
                rows: row + 1,
                cols: line.len(),
            });
        }
        if let Some(first) = rows.first()
            && first.len() != line.len()
        {
            return Err(LoadError::RaggedRow {
                row,
                expected: first.len(),
                found: line.len(),
            });
        }
        if let Some(col) = line.iter().position(|&c| !cell::is_known(c)) {
            let symbol = String::from_utf8_lossy(&line[col..])
                .chars()
                .next()
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            // Both indices were bounds-checked against u16 above.
            #[allow(clippy::cast_possible_truncation)]
            let at = Coord::new(row as u16, col as u16);
            return Err(LoadError::UnknownSymbol { at, symbol });
        }

        rows.push(line);
    }

    let board = Board::from_rows(&rows).ok_or(LoadError::Empty)?;
    let state = GameState::from_board(board)?;
    info!(
        rows = state.board().height(),
        cols = state.board().width(),
        snakes = state.snakes().len(),
        "board loaded"
    );
    Ok(state)
}

/// Encode the board, one row per line, each followed by `\n`.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_board<W: Write>(state: &GameState, mut writer: W) -> io::Result<()> {
    for row in state.board().rows() {
        writer.write_all(row)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Encode the board into a string.
#[must_use]
pub fn render_board(state: &GameState) -> String {
    let board = state.board();
    let mut bytes = Vec::with_capacity(board.cell_count() + usize::from(board.height()));
    for row in board.rows() {
        bytes.extend_from_slice(row);
        bytes.push(b'\n');
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Load a board from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load_board(path: &Path) -> Result<GameState, LoadError> {
    let file = File::open(path)?;
    read_board(BufReader::new(file))
}

/// Save the board to a file, replacing it if present.
///
/// # Errors
///
/// Returns an error if file operations fail.
pub fn save_board(state: &GameState, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_board(state, &mut writer)?;
    writer.flush()?;
    info!(path = %path.display(), "board saved");
    Ok(())
}

impl FromStr for GameState {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_board(s.as_bytes())
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Snake;

    #[test]
    fn test_load_walls_only() {
        let game = read_board("##\n##\n".as_bytes()).unwrap();
        assert_eq!(game.board().height(), 2);
        assert_eq!(game.board().width(), 2);
        assert!(game.snakes().is_empty());
    }

    #[test]
    fn test_missing_final_newline() {
        let game = read_board("####\n#dD#\n####".as_bytes()).unwrap();
        assert_eq!(game.board().height(), 3);
        assert_eq!(
            game.snakes(),
            &[Snake::new(Coord::new(1, 1), Coord::new(1, 2))]
        );
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let game = read_board("###\r\n# #\r\n\r\n###\r\n\n".as_bytes()).unwrap();
        assert_eq!(game.board().height(), 3);
        assert_eq!(game.board().width(), 3);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(read_board("".as_bytes()), Err(LoadError::Empty)));
        assert!(matches!(read_board("\n\n".as_bytes()), Err(LoadError::Empty)));
    }

    #[test]
    fn test_ragged_rows() {
        let err = read_board("###\n##\n###\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_unknown_symbol() {
        // 'é' is two bytes, so this row is three bytes wide.
        let err = read_board("###\n#é\n###\n".as_bytes()).unwrap_err();
        match err {
            LoadError::UnknownSymbol { at, symbol } => {
                assert_eq!(at, Coord::new(1, 1));
                assert_eq!(symbol, 'é');
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_snake() {
        let err = read_board("#####\n#d> #\n#####\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Trace(_)));
    }

    #[test]
    fn test_read_error_is_reported() {
        struct Failing;
        impl io::Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk on fire"))
            }
        }
        let err = read_board(BufReader::new(Failing)).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_write_board() {
        let game = GameState::default_scenario();
        let mut out = Vec::new();
        write_board(&game, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 18);
        assert!(text.ends_with("####################\n"));
        assert!(!text.ends_with("\n\n"));
        assert_eq!(text.lines().nth(2), Some("# d>D    *         #"));
        assert_eq!(text, render_board(&game));
    }

    #[test]
    fn test_round_trip() {
        let game = GameState::default_scenario();
        let reloaded: GameState = game.to_string().parse().unwrap();
        assert_eq!(reloaded.board(), game.board());
        assert_eq!(reloaded.snakes(), game.snakes());
    }
}
