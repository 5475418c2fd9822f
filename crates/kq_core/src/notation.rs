use crate::{error::NotationError, types::*};

/// Parses move text such as `a1b2` or `c10c12`.
///
/// Each half is a lowercase column followed by a one- or two-digit row.
pub fn parse_move(txt: &str) -> Result<Move, NotationError> {
    let txt = txt.trim();
    let bad = || NotationError::InvalidMoveFormat(txt.to_string());

    let b = txt.as_bytes();
    let first = split_location(b).ok_or_else(bad)?;
    let second = split_location(&b[first..]).ok_or_else(bad)?;
    if first + second != b.len() {
        return Err(bad());
    }

    let from = location_to_index(&txt[..first])?;
    let to = location_to_index(&txt[first..])?;
    Ok(Move::new(from, to))
}

/// Length of the location at the start of `b`: one letter plus one or two
/// digits, preferring two when the following byte is a digit.
fn split_location(b: &[u8]) -> Option<usize> {
    if !b.first()?.is_ascii_lowercase() {
        return None;
    }
    let digits = b[1..].iter().take(2).take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 { None } else { Some(1 + digits) }
}

pub fn move_to_string(mv: Move) -> Result<String, NotationError> {
    let mut s = index_to_location(mv.from.0, mv.from.1)?;
    s.push_str(&index_to_location(mv.to.0, mv.to.1)?);
    Ok(s)
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
