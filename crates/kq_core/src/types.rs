use std::fmt;

use crate::error::LocationError;

/// Largest board edge; also the range of the location codec.
pub const MAX_SIZE: u8 = 26;
pub const MIN_SIZE: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn is_white(self) -> bool {
        self == Color::White
    }
    pub fn from_is_white(white: bool) -> Color {
        if white { Color::White } else { Color::Black }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
}

impl PieceKind {
    /// Letter used by the board file format.
    pub fn letter(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
        }
    }
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c {
            'K' => Some(PieceKind::King),
            'Q' => Some(PieceKind::Queen),
            _ => None,
        }
    }
}

/// A piece standing on a square. Moving never mutates a piece; the board
/// receives a relocated copy instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub x: u8, // column, 1-based
    pub y: u8, // row, 1-based
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, x: u8, y: u8) -> Self {
        Self { color, kind, x, y }
    }
    pub fn king(color: Color, x: u8, y: u8) -> Self {
        Self::new(PieceKind::King, color, x, y)
    }
    pub fn queen(color: Color, x: u8, y: u8) -> Self {
        Self::new(PieceKind::Queen, color, x, y)
    }

    /// Same kind and color, standing on `(x, y)`.
    pub fn at(self, x: u8, y: u8) -> Self {
        Self { x, y, ..self }
    }

    pub fn square(&self) -> (u8, u8) {
        (self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: (u8, u8),
    pub to: (u8, u8),
}

impl Move {
    pub fn new(from: (u8, u8), to: (u8, u8)) -> Self {
        Self { from, to }
    }
}

/// Converts a location such as `b12` into 1-based `(column, row)`.
///
/// The column is a lowercase letter, the row a decimal number in 1..=26.
/// Rows are checked against the codec range only, not against a board size.
pub fn location_to_index(loc: &str) -> Result<(u8, u8), LocationError> {
    let invalid = || LocationError::InvalidLocation(loc.to_string());

    let mut chars = loc.chars();
    let col = chars.next().ok_or_else(invalid)?;
    let row = chars.as_str();
    if !col.is_ascii_lowercase() || row.is_empty() || !row.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let y: u32 = row.parse().map_err(|_| invalid())?;
    if !(1..=MAX_SIZE as u32).contains(&y) {
        return Err(invalid());
    }
    let x = col as u8 - b'a' + 1;
    Ok((x, y as u8))
}

/// Inverse of [`location_to_index`].
pub fn index_to_location(x: u8, y: u8) -> Result<String, LocationError> {
    if !(1..=MAX_SIZE).contains(&x) || !(1..=MAX_SIZE).contains(&y) {
        return Err(LocationError::InvalidCoordinates { x, y });
    }
    let col = (b'a' + x - 1) as char;
    Ok(format!("{col}{y}"))
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
