//! Reachability: whether a piece could travel to a square, ignoring whether
//! the move would leave its own King in check.

use crate::board::Board;
use crate::types::*;

// Column-major, matching `Board::squares`.
const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Piece {
    /// Geometric and occupancy test for moving this piece to `(x, y)`.
    ///
    /// False for squares off the board, for the null move and for squares
    /// held by a friendly piece. Queens additionally need a clear line.
    pub fn can_reach(&self, x: u8, y: u8, board: &Board) -> bool {
        if !board.contains(x, y) {
            return false;
        }
        if (x, y) == self.square() {
            return false;
        }
        if let Some(other) = board.piece_at(x, y)
            && other.color == self.color
        {
            return false;
        }

        let dx = x as i8 - self.x as i8;
        let dy = y as i8 - self.y as i8;
        match self.kind {
            PieceKind::King => dx.abs().max(dy.abs()) == 1,
            PieceKind::Queen => {
                if dx != 0 && dy != 0 && dx.abs() != dy.abs() {
                    return false;
                }
                line_is_clear(self.square(), (x, y), board)
            }
        }
    }

    /// Squares this piece reaches on `board`, in column-major order.
    pub fn reachable_squares(&self, board: &Board) -> Vec<(u8, u8)> {
        match self.kind {
            PieceKind::King => KING_DELTAS
                .iter()
                .filter_map(|&(dx, dy)| offset(self.square(), dx, dy))
                .filter(|&(x, y)| self.can_reach(x, y, board))
                .collect(),
            PieceKind::Queen => board
                .squares()
                .filter(|&(x, y)| self.can_reach(x, y, board))
                .collect(),
        }
    }
}

/// True iff `(x, y)` is reachable by any piece of `by`.
pub fn is_square_attacked(x: u8, y: u8, by: Color, board: &Board) -> bool {
    board.pieces_of(by).any(|p| p.can_reach(x, y, board))
}

/// Every square strictly between `from` and `to` is empty. The two squares
/// must share a rank, file or diagonal.
fn line_is_clear(from: (u8, u8), to: (u8, u8), board: &Board) -> bool {
    let step_x = (to.0 as i8 - from.0 as i8).signum();
    let step_y = (to.1 as i8 - from.1 as i8).signum();
    let mut cur = from;
    loop {
        cur = match offset(cur, step_x, step_y) {
            Some(sq) => sq,
            None => return false,
        };
        if cur == to {
            return true;
        }
        if board.is_piece_at(cur.0, cur.1) {
            return false;
        }
    }
}

fn offset(sq: (u8, u8), dx: i8, dy: i8) -> Option<(u8, u8)> {
    let x = sq.0.checked_add_signed(dx)?;
    let y = sq.1.checked_add_signed(dy)?;
    Some((x, y))
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
