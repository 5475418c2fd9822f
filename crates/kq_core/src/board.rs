use std::fmt;

use crate::error::{BoardError, RulesError};
use crate::types::*;

/// An immutable position: board edge length plus the pieces on it.
///
/// Every move produces a fresh `Board`; nothing here mutates in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: u8,
    pieces: Vec<Piece>,
}

impl Board {
    /// Builds a board, checking size range, bounds and square uniqueness.
    ///
    /// King counts are left to the file loader so that hypothetical boards
    /// (for example after a King capture) stay representable.
    pub fn new(size: u8, pieces: Vec<Piece>) -> Result<Self, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        for (i, p) in pieces.iter().enumerate() {
            if !(1..=size).contains(&p.x) || !(1..=size).contains(&p.y) {
                return Err(BoardError::OutOfBounds {
                    x: p.x,
                    y: p.y,
                    size,
                });
            }
            if pieces[..i].iter().any(|q| q.square() == p.square()) {
                return Err(BoardError::SquareTaken { x: p.x, y: p.y });
            }
        }
        Ok(Self { size, pieces })
    }

    /// Successor boards built by `Piece::move_to` skip validation.
    pub(crate) fn from_parts(size: u8, pieces: Vec<Piece>) -> Self {
        Self { size, pieces }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn pieces_of(&self, c: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |p| p.color == c)
    }

    pub fn contains(&self, x: u8, y: u8) -> bool {
        (1..=self.size).contains(&x) && (1..=self.size).contains(&y)
    }

    pub fn piece_at(&self, x: u8, y: u8) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.x == x && p.y == y)
    }

    pub fn is_piece_at(&self, x: u8, y: u8) -> bool {
        self.piece_at(x, y).is_some()
    }

    /// The unique King of `c`.
    pub fn king_of(&self, c: Color) -> Result<Piece, RulesError> {
        let mut kings = self
            .pieces_of(c)
            .filter(|p| p.kind == PieceKind::King)
            .copied();
        match (kings.next(), kings.next()) {
            (Some(k), None) => Ok(k),
            (None, _) => Err(RulesError::MissingKing(c)),
            (Some(_), Some(_)) => Err(RulesError::MultipleKings(c)),
        }
    }

    /// All squares of the board, column-major, `(1, 1)` first.
    pub fn squares(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        let size = self.size;
        (1..=size).flat_map(move |x| (1..=size).map(move |y| (x, y)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render(self))
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
