use crate::{board::Board, error::RulesError, status::is_check, types::*};

impl Piece {
    /// Full legality: reachable, and the resulting board does not leave
    /// this piece's own King in check.
    pub fn can_move_to(&self, x: u8, y: u8, board: &Board) -> Result<bool, RulesError> {
        if !self.can_reach(x, y, board) {
            return Ok(false);
        }
        let next = self.move_to(x, y, board);
        Ok(!is_check(self.color, &next)?)
    }

    /// Board after moving this piece to `(x, y)`. The move is not validated.
    ///
    /// An opposing piece on the target square is removed; the mover keeps its
    /// slot in the piece order and every other piece is copied unchanged.
    pub fn move_to(&self, x: u8, y: u8, board: &Board) -> Board {
        let pieces = board
            .pieces()
            .iter()
            .filter(|p| !(p.square() == (x, y) && p.color != self.color))
            .map(|p| if p == self { self.at(x, y) } else { *p })
            .collect();
        Board::from_parts(board.size(), pieces)
    }
}

/// Every legal move of `c`, ordered by piece then target square.
pub fn legal_moves(c: Color, board: &Board) -> Result<Vec<Move>, RulesError> {
    let mut out = Vec::new();
    for p in board.pieces_of(c) {
        for (x, y) in p.reachable_squares(board) {
            if p.can_move_to(x, y, board)? {
                out.push(Move::new(p.square(), (x, y)));
            }
        }
    }
    Ok(out)
}

/// Whether `c` has at least one legal move. Stops at the first one found.
pub fn has_legal_move(c: Color, board: &Board) -> Result<bool, RulesError> {
    for p in board.pieces_of(c) {
        for (x, y) in board.squares() {
            if p.can_move_to(x, y, board)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Applies `mv` if a piece of `c` stands on its source square and the move
/// is legal. Returns `None` for any illegal request.
pub fn try_move(c: Color, mv: Move, board: &Board) -> Result<Option<Board>, RulesError> {
    let (fx, fy) = mv.from;
    let (tx, ty) = mv.to;
    let piece = match board.piece_at(fx, fy) {
        Some(p) if p.color == c => *p,
        _ => return Ok(None),
    };
    if !piece.can_move_to(tx, ty, board)? {
        return Ok(None);
    }
    Ok(Some(piece.move_to(tx, ty, board)))
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
