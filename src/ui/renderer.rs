use crate::game::{Color, Game, Piece, Snapshot};

/// Simple text renderer for the board and the capture score.
#[derive(Debug, Clone)]
pub struct BoardRenderer {
    /// Glyph for an empty cell.
    pub empty: char,
    /// Whether to print the `a b c d e f g h` legend under the board.
    pub show_files: bool,
}

impl Default for BoardRenderer {
    fn default() -> Self {
        BoardRenderer {
            empty: '-',
            show_files: true,
        }
    }
}

impl BoardRenderer {
    /// Rank 8 on top, each row prefixed by its rank digit.
    pub fn render(&self, snapshot: &Snapshot) -> String {
        let mut output = String::new();
        for (rank, row) in snapshot.cells.iter().enumerate() {
            output.push_str(&format!("{} ", 8 - rank));
            for cell in row {
                output.push(cell.unwrap_or(self.empty));
                output.push(' ');
            }
            output.push('\n');
        }
        if self.show_files {
            output.push_str("  a b c d e f g h\n");
        }
        output
    }

    /// Two lines listing what each side has taken, in capture order.
    pub fn render_score(&self, snapshot: &Snapshot) -> String {
        let line = |color: Color, captured: &[char]| {
            let mut line = format!("{} captured: ", color);
            for symbol in captured {
                line.push(*symbol);
                line.push(' ');
            }
            line.push('\n');
            line
        };
        line(Color::White, &snapshot.white_captured) + &line(Color::Black, &snapshot.black_captured)
    }

    pub fn render_prompt(&self, game: &Game) -> String {
        format!("{} to move. Format: e2 e4", game.side_to_move())
    }

    pub fn render_capture(&self, color: Color, captured: &Piece) -> String {
        format!("{} captured {}", color, captured)
    }
}
