//! Exhaustive rule checks over every small position.
//!
//! All placements of both Kings plus one White and one Black Queen on a 3x3
//! board, and Kings plus one White Queen on 4x4. Positions are independent,
//! so they are checked in parallel.

use rayon::prelude::*;

use kq_core::{
    Board, Color, GameStatus, Piece, is_check, is_checkmate, is_stalemate, legal_moves, status,
};

fn placements(size: u8, kinds: &[fn(u8, u8) -> Piece]) -> Vec<Board> {
    fn go(size: u8, kinds: &[fn(u8, u8) -> Piece], acc: &mut Vec<Piece>, out: &mut Vec<Board>) {
        let Some((make, rest)) = kinds.split_first() else {
            out.push(Board::new(size, acc.clone()).expect("distinct on-board squares"));
            return;
        };
        for x in 1..=size {
            for y in 1..=size {
                if acc.iter().any(|p| p.square() == (x, y)) {
                    continue;
                }
                acc.push(make(x, y));
                go(size, rest, acc, out);
                acc.pop();
            }
        }
    }
    let mut out = Vec::new();
    go(size, kinds, &mut Vec::new(), &mut out);
    out
}

fn white_king(x: u8, y: u8) -> Piece {
    Piece::king(Color::White, x, y)
}
fn black_king(x: u8, y: u8) -> Piece {
    Piece::king(Color::Black, x, y)
}
fn white_queen(x: u8, y: u8) -> Piece {
    Piece::queen(Color::White, x, y)
}
fn black_queen(x: u8, y: u8) -> Piece {
    Piece::queen(Color::Black, x, y)
}

fn all_boards() -> Vec<Board> {
    let mut boards = placements(3, &[white_king, black_king, white_queen, black_queen]);
    boards.extend(placements(4, &[white_king, black_king, white_queen]));
    boards
}

#[test]
fn legality_implies_reachability() {
    all_boards().par_iter().for_each(|b| {
        for p in b.pieces() {
            for (x, y) in b.squares() {
                if p.can_move_to(x, y, b).unwrap() {
                    assert!(p.can_reach(x, y, b), "{p:?} -> ({x}, {y})\n{b}");
                }
            }
            assert!(!p.can_reach(p.x, p.y, b));
            assert!(!p.can_reach(b.size() + 1, p.y, b));
        }
    });
}

#[test]
fn legal_moves_never_leave_own_king_attacked() {
    all_boards().par_iter().for_each(|b| {
        for c in [Color::White, Color::Black] {
            for mv in legal_moves(c, b).unwrap() {
                let p = b.piece_at(mv.from.0, mv.from.1).unwrap();
                let next = p.move_to(mv.to.0, mv.to.1, b);
                assert!(!is_check(c, &next).unwrap());
                assert_eq!(next.piece_at(mv.to.0, mv.to.1), Some(&p.at(mv.to.0, mv.to.1)));
                assert!(!next.is_piece_at(mv.from.0, mv.from.1));
            }
        }
    });
}

#[test]
fn classifier_predicates_are_consistent() {
    let counts: Vec<(usize, usize)> = all_boards()
        .par_iter()
        .map(|b| {
            let mut mates = 0;
            let mut stales = 0;
            for c in [Color::White, Color::Black] {
                let check = is_check(c, b).unwrap();
                let mate = is_checkmate(c, b).unwrap();
                let stale = is_stalemate(c, b).unwrap();
                assert!(!mate || check);
                assert!(!stale || !check);
                assert!(!(mate && stale));

                let expected = match (mate, stale, check) {
                    (true, _, _) => GameStatus::Checkmate,
                    (_, true, _) => GameStatus::Stalemate,
                    (_, _, true) => GameStatus::Check,
                    _ => GameStatus::Ongoing,
                };
                assert_eq!(status(c, b).unwrap(), expected);
                mates += mate as usize;
                stales += stale as usize;
            }
            (mates, stales)
        })
        .collect();

    // the sweep must actually visit terminal positions
    assert!(counts.iter().any(|&(m, _)| m > 0));
    assert!(counts.iter().any(|&(_, s)| s > 0));
}
