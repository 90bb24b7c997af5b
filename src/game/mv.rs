//! Board coordinates, move representation and error types.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A board cell by internal indices, each in `0..8`.
///
/// Rank index 0 is the black back row (rank 8 in algebraic notation) and file
/// index 0 is file `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub rank: usize,
    pub file: usize,
}

impl Square {
    pub const fn new(rank: usize, file: usize) -> Self {
        Square { rank, file }
    }

    /// Square displaced by a signed rank/file step, or `None` when off the board.
    pub fn offset(self, d_rank: i32, d_file: i32) -> Option<Square> {
        let rank = self.rank.checked_add_signed(d_rank as isize)?;
        let file = self.file.checked_add_signed(d_file as isize)?;
        (rank < 8 && file < 8).then_some(Square { rank, file })
    }

    /// Signed (rank, file) distance from `self` to `to`.
    pub fn delta(self, to: Square) -> (i32, i32) {
        (
            to.rank as i32 - self.rank as i32,
            to.file as i32 - self.file as i32,
        )
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file as u8) as char;
        write!(f, "{}{}", file, 8 - self.rank)
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    /// Parse algebraic notation such as `e2` into `(6, 4)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file.to_ascii_lowercase(), rank),
            _ => return Err(SquareParseError::Length(s.to_string())),
        };
        if !('a'..='h').contains(&file) {
            return Err(SquareParseError::File(file));
        }
        if !('1'..='8').contains(&rank) {
            return Err(SquareParseError::Rank(rank));
        }
        Ok(Square {
            rank: 8 - (rank as usize - '0' as usize),
            file: file as usize - 'a' as usize,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

/// Why a move attempt was turned down. None of these change the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The origin is empty or holds a piece of the side not on move.
    #[error("invalid selection")]
    InvalidSelection,
    /// The piece cannot make this move on the current board.
    #[error("illegal move")]
    IllegalMove,
    #[error("game is over")]
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareParseError {
    #[error("expected a file letter and a rank digit, got {0:?}")]
    Length(String),
    #[error("file {0:?} is not between a and h")]
    File(char),
    #[error("rank {0:?} is not between 1 and 8")]
    Rank(char),
}
