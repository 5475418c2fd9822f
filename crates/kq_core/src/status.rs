//! Position classification: check, checkmate and stalemate.

use crate::{
    attacks::is_square_attacked, board::Board, error::RulesError, movegen::has_legal_move,
    types::Color,
};
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// Whether the King of `c` is reachable by an opposing piece.
///
/// Uses reachability only, so the attacker's own King safety is ignored.
pub fn is_check(c: Color, board: &Board) -> Result<bool, RulesError> {
    let king = board.king_of(c)?;
    Ok(is_square_attacked(king.x, king.y, c.other(), board))
}

/// `c` is in check and has no legal move.
pub fn is_checkmate(c: Color, board: &Board) -> Result<bool, RulesError> {
    if !is_check(c, board)? {
        return Ok(false);
    }
    Ok(!has_legal_move(c, board)?)
}

/// `c` is not in check and has no legal move.
pub fn is_stalemate(c: Color, board: &Board) -> Result<bool, RulesError> {
    if is_check(c, board)? {
        return Ok(false);
    }
    Ok(!has_legal_move(c, board)?)
}

/// Classifies the position from the point of view of `c`, the side to move.
pub fn status(c: Color, board: &Board) -> Result<GameStatus, RulesError> {
    let check = is_check(c, board)?;
    let can_move = has_legal_move(c, board)?;
    let result = match (check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Ongoing,
    };
    trace!(side = %c, status = ?result, "classified position");
    Ok(result)
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
