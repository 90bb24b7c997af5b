// Board state: an 8x8 grid of optional pieces.
// No rule checking happens here; that is the job of `rules`.

use super::mv::Square;
use super::piece::{Color, Piece, PieceKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// An empty board. Useful for setting up test positions.
    pub fn new() -> Self {
        Board::default()
    }

    /// A board holding the standard starting position.
    pub fn standard() -> Self {
        let mut board = Board::new();
        board.initialize();
        board
    }

    /// Place every piece of the starting position, overwriting the rows it uses.
    pub fn initialize(&mut self) {
        for color in [Color::White, Color::Black] {
            // Pawns
            for file in 0..8 {
                self.squares[color.pawn_home_rank()][file] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
            // Rooks, knights, bishops, queen, king
            for (file, kind) in PieceKind::BACK_ROW.into_iter().enumerate() {
                self.squares[color.back_rank()][file] = Some(Piece::new(kind, color));
            }
        }
    }

    /// Return the piece on a square, if any.
    pub fn get(&self, square: Square) -> Option<&Piece> {
        self.squares[square.rank][square.file].as_ref()
    }

    /// Overwrite a square. Whatever was there is dropped.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.rank][square.file] = piece;
    }

    /// Remove and return the piece on a square, leaving it empty.
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.rank][square.file].take()
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Every occupied square with its piece, rank index 0 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(rank, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(file, cell)| cell.as_ref().map(|p| (Square::new(rank, file), p)))
        })
    }

    /// Symbol grid for rendering, indexed `[rank][file]`.
    pub fn symbols(&self) -> [[Option<char>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for (square, piece) in self.pieces() {
            grid[square.rank][square.file] = Some(piece.symbol());
        }
        grid
    }
}
