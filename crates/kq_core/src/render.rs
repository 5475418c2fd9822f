use crate::{board::Board, types::*};

/// Characters used to draw a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub white_king: char,
    pub white_queen: char,
    pub black_king: char,
    pub black_queen: char,
    pub empty: char,
}

impl Glyphs {
    /// Unicode chess symbols with an em quad for empty squares.
    pub const fn unicode() -> Self {
        Self {
            white_king: '\u{2654}',
            white_queen: '\u{2655}',
            black_king: '\u{265A}',
            black_queen: '\u{265B}',
            empty: '\u{2001}',
        }
    }

    pub const fn ascii() -> Self {
        Self {
            white_king: 'K',
            white_queen: 'Q',
            black_king: 'k',
            black_queen: 'q',
            empty: '.',
        }
    }

    pub fn piece(&self, p: &Piece) -> char {
        match (p.color, p.kind) {
            (Color::White, PieceKind::King) => self.white_king,
            (Color::White, PieceKind::Queen) => self.white_queen,
            (Color::Black, PieceKind::King) => self.black_king,
            (Color::Black, PieceKind::Queen) => self.black_queen,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::unicode()
    }
}

pub fn render(board: &Board) -> String {
    render_with(board, &Glyphs::unicode())
}

/// Draws the board with the highest row first, one line per row.
pub fn render_with(board: &Board, glyphs: &Glyphs) -> String {
    let size = board.size();
    (1..=size)
        .rev()
        .map(|y| {
            (1..=size)
                .map(|x| board.piece_at(x, y).map_or(glyphs.empty, |p| glyphs.piece(p)))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
