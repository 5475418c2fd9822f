use super::*;
use crate::types::Piece;

fn board(size: u8, pieces: &[Piece]) -> Board {
    Board::new(size, pieces.to_vec()).unwrap()
}

#[test]
fn test_bare_kings_are_ongoing() {
    let b = board(
        8,
        &[Piece::king(Color::White, 1, 1), Piece::king(Color::Black, 8, 8)],
    );
    for c in [Color::White, Color::Black] {
        assert_eq!(is_check(c, &b), Ok(false));
        assert_eq!(is_checkmate(c, &b), Ok(false));
        assert_eq!(is_stalemate(c, &b), Ok(false));
        assert_eq!(status(c, &b), Ok(GameStatus::Ongoing));
    }
}

#[test]
fn test_queen_mate_on_three_by_three() {
    let b = board(
        3,
        &[
            Piece::queen(Color::White, 2, 2),
            Piece::king(Color::White, 1, 1),
            Piece::king(Color::Black, 3, 3),
        ],
    );
    assert_eq!(is_check(Color::Black, &b), Ok(true));
    assert_eq!(is_checkmate(Color::Black, &b), Ok(true));
    assert_eq!(is_stalemate(Color::Black, &b), Ok(false));
    assert_eq!(status(Color::Black, &b), Ok(GameStatus::Checkmate));
    assert!(status(Color::Black, &b).unwrap().is_over());
}

#[test]
fn test_check_with_escape() {
    let b = board(
        5,
        &[
            Piece::king(Color::White, 1, 1),
            Piece::queen(Color::White, 1, 5),
            Piece::king(Color::Black, 3, 5),
        ],
    );
    assert_eq!(is_check(Color::Black, &b), Ok(true));
    assert_eq!(is_checkmate(Color::Black, &b), Ok(false));
    assert_eq!(status(Color::Black, &b), Ok(GameStatus::Check));
}

#[test]
fn test_corner_stalemate() {
    // Black king a8, White queen b6, White king c7
    let b = board(
        8,
        &[
            Piece::king(Color::Black, 1, 8),
            Piece::queen(Color::White, 2, 6),
            Piece::king(Color::White, 3, 7),
        ],
    );
    assert_eq!(is_check(Color::Black, &b), Ok(false));
    assert_eq!(is_stalemate(Color::Black, &b), Ok(true));
    assert_eq!(is_checkmate(Color::Black, &b), Ok(false));
    assert_eq!(status(Color::Black, &b), Ok(GameStatus::Stalemate));
}

#[test]
fn test_black_queen_can_block_check() {
    // Check along the back rank, the black queen interposes on b8
    let b = board(
        8,
        &[
            Piece::king(Color::Black, 1, 8),
            Piece::queen(Color::Black, 2, 1),
            Piece::queen(Color::White, 8, 8),
            Piece::king(Color::White, 3, 6),
        ],
    );
    assert_eq!(is_check(Color::Black, &b), Ok(true));
    assert_eq!(is_checkmate(Color::Black, &b), Ok(false));
}

#[test]
fn test_attacker_pin_does_not_matter_for_check() {
    // White queen is pinned against its own king, yet still gives check
    let b = board(
        6,
        &[
            Piece::king(Color::White, 1, 1),
            Piece::queen(Color::White, 3, 3),
            Piece::queen(Color::Black, 6, 6),
            Piece::king(Color::Black, 3, 6),
        ],
    );
    assert_eq!(is_check(Color::Black, &b), Ok(true));
}

#[test]
fn test_missing_and_multiple_kings() {
    let b = board(3, &[Piece::king(Color::White, 1, 1)]);
    assert_eq!(
        is_check(Color::Black, &b),
        Err(RulesError::MissingKing(Color::Black))
    );
    let b = board(
        4,
        &[
            Piece::king(Color::White, 1, 1),
            Piece::king(Color::Black, 4, 4),
            Piece::king(Color::Black, 4, 1),
        ],
    );
    assert_eq!(
        is_stalemate(Color::Black, &b),
        Err(RulesError::MultipleKings(Color::Black))
    );
}
