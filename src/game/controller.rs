use log::{debug, trace};
use serde::Serialize;

use super::board::Board;
use super::mv::{Move, MoveError, Square};
use super::piece::{Color, Piece};
use super::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    AwaitingMove,
    Terminated,
}

/// One game: the board, whose turn it is, and what each side has captured.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    captured: [Vec<Piece>; 2],
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game at the starting position with white to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    /// A game from an arbitrary position.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Game {
            board,
            side_to_move,
            captured: [Vec::new(), Vec::new()],
            status: GameStatus::AwaitingMove,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Pieces taken by `color`, oldest capture first.
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    /// Try to play a move for the side on move.
    ///
    /// On success the captured piece, if any, is returned after it has been
    /// appended to the mover's capture list. On failure nothing changes.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<Option<&Piece>, MoveError> {
        if self.status == GameStatus::Terminated {
            return Err(MoveError::GameOver);
        }
        let mover = match self.board.get(from) {
            Some(piece) if piece.color == self.side_to_move => piece,
            _ => {
                trace!("{} rejected: invalid selection", Move::new(from, to));
                return Err(MoveError::InvalidSelection);
            }
        };
        if !rules::is_legal_move(&self.board, mover, from, to) {
            trace!("{} rejected: illegal for {}", Move::new(from, to), mover);
            return Err(MoveError::IllegalMove);
        }

        let color = self.side_to_move;
        let target = self.board.take(to);
        let piece = self.board.take(from);
        debug!("{} plays {}", color, Move::new(from, to));
        self.board.set(to, piece);
        self.side_to_move = !color;

        match target {
            Some(target) => {
                debug!("{} captured {}", color, target);
                let list = &mut self.captured[color.index()];
                list.push(target);
                Ok(list.last())
            }
            None => Ok(None),
        }
    }

    /// Stop accepting moves. Every later `attempt_move` fails with `GameOver`.
    pub fn quit(&mut self) {
        debug!("game terminated with {} to move", self.side_to_move);
        self.status = GameStatus::Terminated;
    }

    pub fn snapshot(&self) -> Snapshot {
        let symbols = |color: Color| -> Vec<char> {
            self.captured_by(color).iter().map(Piece::symbol).collect()
        };
        Snapshot {
            cells: self.board.symbols(),
            white_captured: symbols(Color::White),
            black_captured: symbols(Color::Black),
            side_to_move: self.side_to_move,
            status: self.status,
        }
    }
}

/// Everything a renderer needs to show the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Piece symbols indexed `[rank][file]`, rank index 0 being rank 8.
    pub cells: [[Option<char>; 8]; 8],
    pub white_captured: Vec<char>,
    pub black_captured: Vec<char>,
    pub side_to_move: Color,
    pub status: GameStatus,
}
