//! Turns a line typed by the player into a command for the game.

use thiserror::Error;

use crate::game::mv::SquareParseError;
use crate::game::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Square, Square),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no move entered")]
    Empty,
    #[error("missing destination square")]
    MissingDestination,
    #[error("unexpected input after the move: {0:?}")]
    TrailingInput(String),
    #[error(transparent)]
    Square(#[from] SquareParseError),
}

/// Parse `"e2 e4"` style input.
///
/// The quit word ends the game wherever it appears among the first two tokens
/// and is matched without regard to case.
pub fn parse_command(line: &str, quit_word: &str) -> Result<Command, InputError> {
    let mut tokens = line.split_whitespace();
    let is_quit = |token: &str| token.eq_ignore_ascii_case(quit_word);

    let from = tokens.next().ok_or(InputError::Empty)?;
    if is_quit(from) {
        return Ok(Command::Quit);
    }
    let to = tokens.next().ok_or(InputError::MissingDestination)?;
    if is_quit(to) {
        return Ok(Command::Quit);
    }
    if let Some(extra) = tokens.next() {
        return Err(InputError::TrailingInput(extra.to_string()));
    }
    Ok(Command::Move(from.parse()?, to.parse()?))
}
