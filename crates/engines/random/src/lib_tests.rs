use super::*;
use kq_core::parse_board;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::with_seed(7);
    let board = parse_board("8\nKa1, Qd4\nKh8, Qe7").unwrap();

    for _ in 0..20 {
        let (piece, x, y) = engine.choose_move(Color::Black, &board).unwrap();
        assert_eq!(piece.color, Color::Black);
        assert_eq!(board.piece_at(piece.x, piece.y), Some(&piece));
        assert!(piece.can_move_to(x, y, &board).unwrap());
    }
}

#[test]
fn random_engine_varies_its_choice() {
    let mut engine = RandomEngine::with_seed(1);
    let board = parse_board("8\nKa1\nKe5, Qd4").unwrap();

    let picks: std::collections::HashSet<_> = (0..40)
        .map(|_| engine.choose_move(Color::Black, &board).unwrap())
        .collect();
    assert!(picks.len() > 1);
}

#[test]
fn same_seed_same_moves() {
    let board = parse_board("10\nKa1, Qc3\nKj10, Qh8").unwrap();
    let mut a = RandomEngine::with_seed(42);
    let mut b = RandomEngine::with_seed(42);
    for _ in 0..10 {
        assert_eq!(
            a.choose_move(Color::White, &board),
            b.choose_move(Color::White, &board)
        );
    }
}

#[test]
fn only_escape_is_found() {
    // Black king on d4 in check from c3; the only legal move is Kxc3
    let board = parse_board("4\nKa1, Qc3\nKd4").unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let (piece, x, y) = find_move(Color::Black, &board, &mut rng).unwrap();
    assert_eq!(piece, Piece::king(Color::Black, 4, 4));
    assert_eq!((x, y), (3, 3));
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::with_seed(0);
    let board = parse_board("3\nQb2, Ka1\nKc3").unwrap();

    assert_eq!(
        engine.choose_move(Color::Black, &board),
        Err(EngineError::NoLegalMove(Color::Black))
    );
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::new();
    let board = parse_board("8\nKc7, Qb6\nKa8").unwrap();

    assert!(matches!(
        engine.choose_move(Color::Black, &board),
        Err(EngineError::NoLegalMove(_))
    ));
}
