//! Move legality per piece kind.
//!
//! Every check is a pure function of the board: no history, no side effects, and
//! no king safety. An illegal move is an ordinary `false`, never an error.

use super::board::Board;
use super::mv::Square;
use super::piece::{Color, Piece, PieceKind};

/// Whether `piece` standing on `from` may move to `to` on this board.
pub fn is_legal_move(board: &Board, piece: &Piece, from: Square, to: Square) -> bool {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => pawn_move(board, color, from, to),
        PieceKind::Rook => rook_move(board, color, from, to),
        PieceKind::Knight => knight_move(board, color, from, to),
        PieceKind::Bishop => bishop_move(board, color, from, to),
        PieceKind::Queen => queen_move(board, color, from, to),
        PieceKind::King => king_move(board, color, from, to),
    }
}

/// Final gate shared by every kind: the destination is empty or holds an enemy.
fn can_land(board: &Board, color: Color, to: Square) -> bool {
    board.get(to).map_or(true, |target| target.color != color)
}

pub fn pawn_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let dir = color.forward();
    let (d_rank, d_file) = from.delta(to);

    if d_file == 0 && board.is_empty(to) {
        if d_rank == dir {
            return true;
        }
        if from.rank == color.pawn_home_rank() && d_rank == 2 * dir {
            return from.offset(dir, 0).map_or(false, |mid| board.is_empty(mid));
        }
    }
    if d_file.abs() == 1 && d_rank == dir {
        // Diagonal steps only capture; there is no en passant.
        return board.get(to).map_or(false, |target| target.color != color);
    }
    false
}

pub fn rook_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    if from.rank != to.rank && from.file != to.file {
        return false;
    }
    let (d_rank, d_file) = from.delta(to);
    let (step_rank, step_file) = (d_rank.signum(), d_file.signum());
    let (to_rank, to_file) = (to.rank as i32, to.file as i32);

    let (mut rank, mut file) = (from.rank as i32 + step_rank, from.file as i32 + step_file);
    while rank != to_rank || file != to_file {
        if !board.is_empty(Square::new(rank as usize, file as usize)) {
            return false;
        }
        rank += step_rank;
        file += step_file;
    }
    can_land(board, color, to)
}

pub fn knight_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let (d_rank, d_file) = from.delta(to);
    match (d_rank.abs(), d_file.abs()) {
        (2, 1) | (1, 2) => can_land(board, color, to),
        _ => false,
    }
}

pub fn bishop_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let (d_rank, d_file) = from.delta(to);
    if d_rank.abs() != d_file.abs() {
        return false;
    }
    let (step_rank, step_file) = (d_rank.signum(), d_file.signum());
    let (to_rank, to_file) = (to.rank as i32, to.file as i32);

    // Both axes move in lockstep on a diagonal, so stopping when either one
    // reaches the target is the same as stopping at the target.
    let (mut rank, mut file) = (from.rank as i32 + step_rank, from.file as i32 + step_file);
    while rank != to_rank && file != to_file {
        if !board.is_empty(Square::new(rank as usize, file as usize)) {
            return false;
        }
        rank += step_rank;
        file += step_file;
    }
    can_land(board, color, to)
}

/// A queen moves like a rook or like a bishop from the same square.
pub fn queen_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    rook_move(board, color, from, to) || bishop_move(board, color, from, to)
}

/// One step in any direction. A null move fails the landing gate because the
/// king itself occupies `to`.
pub fn king_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let (d_rank, d_file) = from.delta(to);
    d_rank.abs() <= 1 && d_file.abs() <= 1 && can_land(board, color, to)
}
