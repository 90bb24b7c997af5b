pub mod board;
pub mod controller;
pub mod mv;
pub mod piece;
pub mod rules;

pub use board::Board;
pub use controller::{Game, GameStatus, Snapshot};
pub use mv::{Move, MoveError, Square};
pub use piece::{Color, Piece, PieceKind};
