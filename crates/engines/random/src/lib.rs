//! Random Move Engine
//!
//! Picks some legal move by scanning the side's pieces and the board squares
//! in shuffled order. Used as the automated opponent of the puzzle driver.
//! Repeated calls on the same position may return different moves.

use kq_core::{Board, Color, Engine, Piece, RulesError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::trace;

#[cfg(test)]
mod lib_tests;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The caller asked for a move in a finished position.
    #[error("no legal move for {0}, although one was assumed to exist")]
    NoLegalMove(Color),

    #[error(transparent)]
    Rules(#[from] RulesError),
}

/// Returns some legal move for `side`: the piece and its destination.
///
/// Callers must check for checkmate and stalemate first; a side without any
/// legal move yields [`EngineError::NoLegalMove`].
pub fn find_move<R: Rng + ?Sized>(
    side: Color,
    board: &Board,
    rng: &mut R,
) -> Result<(Piece, u8, u8), EngineError> {
    let mut pieces: Vec<Piece> = board.pieces_of(side).copied().collect();
    pieces.shuffle(rng);
    let mut squares: Vec<(u8, u8)> = board.squares().collect();
    squares.shuffle(rng);

    for p in &pieces {
        for &(x, y) in &squares {
            if p.can_move_to(x, y, board)? {
                trace!(?p, x, y, "random move found");
                return Ok((*p, x, y));
            }
        }
    }
    Err(EngineError::NoLegalMove(side))
}

/// An engine that plays random legal moves.
///
/// Seed it with [`RandomEngine::with_seed`] for reproducible games.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    type Error = EngineError;

    fn choose_move(&mut self, side: Color, board: &Board) -> Result<(Piece, u8, u8), EngineError> {
        find_move(side, board, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
