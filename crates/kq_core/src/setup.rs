//! Plain-text board files.
//!
//! ```text
//! 5
//! Ka1, Qb2
//! Ke5
//! ```
//!
//! The first line is the board size, the second lists White's pieces and the
//! third Black's. A token is `K` or `Q` followed by a location.

use std::fs;
use std::path::Path;

use crate::{
    board::Board,
    error::SetupError,
    types::*,
};

fn invalid(msg: impl Into<String>) -> SetupError {
    SetupError::InvalidConfiguration(msg.into())
}

/// Parses a board file, enforcing one King per side and unique squares.
pub fn parse_board(text: &str) -> Result<Board, SetupError> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    if lines.len() < 3 {
        return Err(invalid(
            "expected three lines: size, white pieces, black pieces",
        ));
    }

    let size: u8 = lines[0]
        .parse()
        .map_err(|_| invalid(format!("board size {:?} is not an integer", lines[0])))?;
    if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        return Err(invalid(format!(
            "board size {size} is outside {MIN_SIZE}..={MAX_SIZE}"
        )));
    }

    let mut pieces = parse_side(lines[1], Color::White, size)?;
    pieces.extend(parse_side(lines[2], Color::Black, size)?);

    for c in [Color::White, Color::Black] {
        let kings = pieces
            .iter()
            .filter(|p| p.color == c && p.kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(invalid(format!("{c} has {kings} kings, expected exactly one")));
        }
    }

    Ok(Board::new(size, pieces)?)
}

fn parse_side(line: &str, color: Color, size: u8) -> Result<Vec<Piece>, SetupError> {
    let mut out = Vec::new();
    for tok in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let mut chars = tok.chars();
        let kind = chars
            .next()
            .and_then(PieceKind::from_letter)
            .ok_or_else(|| invalid(format!("unknown piece in token {tok:?}")))?;
        let (x, y) = location_to_index(chars.as_str())?;
        if x > size || y > size {
            return Err(invalid(format!("{tok} lies outside a {size}x{size} board")));
        }
        out.push(Piece::new(kind, color, x, y));
    }
    Ok(out)
}

/// Serialises a board in the format read by [`parse_board`].
///
/// Tokens are sorted within each side so equal boards produce equal text.
pub fn format_board(board: &Board) -> String {
    let tokens = |c: Color| {
        let mut toks: Vec<String> = board
            .pieces_of(c)
            .map(|p| {
                // on-board pieces always encode
                let loc = index_to_location(p.x, p.y).unwrap_or_default();
                format!("{}{loc}", p.kind.letter())
            })
            .collect();
        toks.sort();
        toks.join(", ")
    };
    format!(
        "{}\n{}\n{}",
        board.size(),
        tokens(Color::White),
        tokens(Color::Black)
    )
}

pub fn read_board(path: impl AsRef<Path>) -> Result<Board, SetupError> {
    let text = fs::read_to_string(path)?;
    parse_board(&text)
}

pub fn save_board(path: impl AsRef<Path>, board: &Board) -> Result<(), SetupError> {
    fs::write(path, format_board(board))?;
    Ok(())
}

#[cfg(test)]
#[path = "setup_tests.rs"]
mod setup_tests;
