use soroban_sdk::Env;

use crate::types::{Board, ChessMove, Color, EngineError, Mode, Outcome, PieceKind, Promotion};
use crate::{apply_move, claim_fifty_move, claim_repetition, has_any_legal_move, is_in_check};

fn mv(from_row: u32, from_col: u32, to_row: u32, to_col: u32) -> ChessMove {
    ChessMove {
        from_row,
        from_col,
        to_row,
        to_col,
        promotion: Promotion::None,
    }
}

fn mv_promote(from_row: u32, from_col: u32, to_row: u32, to_col: u32, promotion: Promotion) -> ChessMove {
    ChessMove {
        from_row,
        from_col,
        to_row,
        to_col,
        promotion,
    }
}

/// A bare board (no pieces, White king on e1, Black king on e8, White to
/// move) for tests that want to construct a specific position directly
/// rather than walking there through legal moves.
fn empty_board(env: &Env) -> Board {
    let mut board = Board::initial(env);
    for row in 0..8u32 {
        for col in 0..8u32 {
            board.set(row, col, 0);
        }
    }
    board.set(0, 4, PieceKind::King as i32);
    board.set(7, 4, -(PieceKind::King as i32));
    board.white_king_row = 0;
    board.white_king_col = 4;
    board.black_king_row = 7;
    board.black_king_col = 4;
    board
}

// ---------------------------------------------------------------------
// S1: Fool's mate
// ---------------------------------------------------------------------

#[test]
fn fools_mate_ends_in_checkmate() {
    let env = Env::default();
    let mut board = Board::initial(&env);
    let mut side = Color::White;

    let sequence = [
        (mv(1, 5, 2, 5), Color::White),  // f2-f3
        (mv(6, 4, 4, 4), Color::Black),  // e7-e5
        (mv(1, 6, 3, 6), Color::White),  // g2-g4
        (mv(7, 3, 3, 7), Color::Black),  // d8-h4
    ];

    let mut last = None;
    for (m, expected_side) in sequence {
        assert_eq!(side, expected_side);
        let applied = apply_move(&env, &board, side, &m, Mode::Tournament).expect("legal move");
        board = applied.board.clone();
        side = side.opposite();
        last = Some(applied);
    }

    let applied = last.unwrap();
    assert!(applied.is_mate);
    assert_eq!(applied.outcome, Outcome::BlackWins);
}

// ---------------------------------------------------------------------
// S2: threefold repetition
// ---------------------------------------------------------------------

#[test]
fn threefold_repetition_is_claimable_after_three_cycles() {
    let env = Env::default();
    let mut board = Board::initial(&env);
    let mut side = Color::White;

    // Nb1-c3, Nb8-c6, Nc3-b1, Nc6-b8, repeated three times returns to the
    // starting position each time.
    let cycle = [
        mv(0, 1, 2, 2),
        mv(7, 1, 5, 2),
        mv(2, 2, 0, 1),
        mv(5, 2, 7, 1),
    ];

    for _ in 0..3 {
        for m in cycle {
            let applied = apply_move(&env, &board, side, &m, Mode::Tournament).expect("legal move");
            board = applied.board;
            side = side.opposite();
        }
    }

    assert!(board.max_repetition >= 3);
    assert!(claim_repetition(&env, &board).is_ok());
}

#[test]
fn claim_repetition_fails_once_the_game_has_moved_on_from_the_repeated_position() {
    let env = Env::default();
    let mut board = Board::initial(&env);
    let mut side = Color::White;

    let cycle = [
        mv(0, 1, 2, 2),
        mv(7, 1, 5, 2),
        mv(2, 2, 0, 1),
        mv(5, 2, 7, 1),
    ];
    for _ in 0..3 {
        for m in cycle {
            let applied = apply_move(&env, &board, side, &m, Mode::Tournament).expect("legal move");
            board = applied.board;
            side = side.opposite();
        }
    }
    assert!(board.max_repetition >= 3);

    // Move to a brand new position: the starting fingerprint has now been
    // seen 3 times (reflected in `max_repetition`), but the *current*
    // position has only been seen once, so the claim must fail.
    let applied = apply_move(&env, &board, side, &mv(1, 4, 3, 4), Mode::Tournament).expect("legal move");
    board = applied.board;

    assert!(board.max_repetition >= 3);
    assert!(claim_repetition(&env, &board).is_err());
}

// ---------------------------------------------------------------------
// S3: kingside castling
// ---------------------------------------------------------------------

#[test]
fn kingside_castling_relocates_king_and_rook() {
    let env = Env::default();
    let mut board = Board::initial(&env);
    let mut side = Color::White;

    for m in [
        mv(1, 4, 2, 4), // e2-e3, vacate for bishop/king
        mv(6, 4, 4, 4), // e7-e5
        mv(0, 5, 3, 2), // Bf1-c4
        mv(7, 6, 5, 5), // Ng8-f6
        mv(0, 6, 2, 5), // Ng1-f3
        mv(6, 3, 5, 3), // d7-d6 (filler, keeps black legal)
    ] {
        let applied = apply_move(&env, &board, side, &m, Mode::Tournament).expect("legal move");
        board = applied.board;
        side = side.opposite();
    }

    assert!(!board.king_moved(Color::White));
    let applied = apply_move(&env, &board, Color::White, &mv(0, 4, 0, 6), Mode::Tournament)
        .expect("kingside castle is legal");
    let after = applied.board;

    assert_eq!(after.get(0, 6), PieceKind::King as i32);
    assert_eq!(after.get(0, 5), PieceKind::Rook as i32);
    assert_eq!(after.get(0, 4), 0);
    assert_eq!(after.get(0, 7), 0);
    assert!(after.white_king_moved);
    assert_eq!(after.king_position(Color::White), (0, 6));
}

// ---------------------------------------------------------------------
// S4: en passant
// ---------------------------------------------------------------------

#[test]
fn en_passant_capture_removes_the_passed_pawn() {
    let env = Env::default();
    let mut board = Board::initial(&env);

    // March the white a-pawn to a5 while Black shuffles a different pawn,
    // then Black plays b7-b5 (a double step) giving White the en-passant
    // capture on b6.
    for m in [mv(1, 0, 3, 0), mv(6, 2, 5, 2)] {
        let applied = apply_move(&env, &board, board.side_to_move, &m, Mode::Tournament).unwrap();
        board = applied.board;
    }
    let applied = apply_move(&env, &board, Color::White, &mv(3, 0, 4, 0), Mode::Tournament).unwrap();
    board = applied.board;
    let applied = apply_move(&env, &board, Color::Black, &mv(6, 1, 4, 1), Mode::Tournament).unwrap();
    board = applied.board;
    assert_eq!(board.en_passant_row, 5);
    assert_eq!(board.en_passant_col, 1);

    let applied = apply_move(&env, &board, Color::White, &mv(4, 0, 5, 1), Mode::Tournament)
        .expect("en passant capture is legal");
    assert!(applied.is_en_passant);
    assert_eq!(applied.board.get(4, 1), 0, "captured pawn removed");
    assert_eq!(applied.board.get(5, 1), PieceKind::Pawn as i32);
    assert_eq!(applied.board.en_passant_row, -1);
    assert_eq!(applied.board.en_passant_col, -1);
}

// ---------------------------------------------------------------------
// Promotion
// ---------------------------------------------------------------------

#[test]
fn pawn_promotes_to_requested_piece() {
    let env = Env::default();
    let mut board = empty_board(&env);
    board.set(6, 0, PieceKind::Pawn as i32);

    let applied = apply_move(
        &env,
        &board,
        Color::White,
        &mv_promote(6, 0, 7, 0, Promotion::Queen),
        Mode::Tournament,
    )
    .expect("promotion to queen is legal");
    assert_eq!(applied.board.get(7, 0), PieceKind::Queen as i32);
    assert_eq!(applied.promotion_piece, PieceKind::Queen as i32);

    let result = apply_move(&env, &board, Color::White, &mv(6, 0, 7, 0), Mode::Tournament);
    assert_eq!(result, Err(EngineError::InvalidPromotion));
}

// ---------------------------------------------------------------------
// Mode policy
// ---------------------------------------------------------------------

#[test]
fn friendly_mode_rejects_self_check_moves() {
    let env = Env::default();
    // White king e1, a White knight pinned on e4 by a Black rook on e8:
    // moving the knight off the e-file exposes the king.
    let mut pinned = empty_board(&env);
    pinned.set(3, 4, PieceKind::Knight as i32);
    pinned.set(7, 4, -(PieceKind::Rook as i32));
    pinned.black_king_row = 7;
    pinned.black_king_col = 7;
    pinned.set(0, 4, PieceKind::King as i32);
    pinned.set(7, 7, -(PieceKind::King as i32));

    assert!(!is_in_check(&pinned, Color::White));

    let result = apply_move(&env, &pinned, Color::White, &mv(3, 4, 5, 5), Mode::Friendly);
    assert_eq!(result, Err(EngineError::MoveLeavesKingInCheck));

    let result = apply_move(&env, &pinned, Color::White, &mv(3, 4, 5, 5), Mode::Tournament)
        .expect("tournament mode forfeits instead of erroring");
    assert!(result.is_forced_forfeit);
    assert_eq!(result.outcome, Outcome::BlackWins);
}

// ---------------------------------------------------------------------
// Failure model
// ---------------------------------------------------------------------

#[test]
fn wrong_turn_is_rejected() {
    let env = Env::default();
    let board = Board::initial(&env);
    let result = apply_move(&env, &board, Color::Black, &mv(6, 4, 4, 4), Mode::Tournament);
    assert_eq!(result, Err(EngineError::WrongTurn));
}

#[test]
fn out_of_bounds_coordinates_are_rejected() {
    let env = Env::default();
    let board = Board::initial(&env);
    let result = apply_move(&env, &board, Color::White, &mv(1, 0, 8, 0), Mode::Tournament);
    assert_eq!(result, Err(EngineError::OutOfBounds));
}

#[test]
fn moving_an_empty_square_is_rejected() {
    let env = Env::default();
    let board = Board::initial(&env);
    let result = apply_move(&env, &board, Color::White, &mv(3, 3, 4, 3), Mode::Tournament);
    assert_eq!(result, Err(EngineError::EmptySourceSquare));
}

#[test]
fn fifty_move_claim_requires_the_threshold() {
    let env = Env::default();
    let mut board = Board::initial(&env);
    board.half_move_clock = 99;
    assert_eq!(claim_fifty_move(&board), Err(EngineError::NoFiftyMoveClaim));
    board.half_move_clock = 100;
    assert!(claim_fifty_move(&board).is_ok());
}

// ---------------------------------------------------------------------
// Universal invariants
// ---------------------------------------------------------------------

#[test]
fn half_move_clock_resets_on_pawn_move_and_increments_otherwise() {
    let env = Env::default();
    let mut board = Board::initial(&env);
    let applied = apply_move(&env, &board, Color::White, &mv(1, 4, 3, 4), Mode::Tournament).unwrap();
    assert_eq!(applied.board.half_move_clock, 0);
    board = applied.board;
    let applied = apply_move(&env, &board, Color::Black, &mv(7, 6, 5, 5), Mode::Tournament).unwrap();
    assert_eq!(applied.board.half_move_clock, 1);
}

#[test]
fn king_cache_matches_board_after_every_move() {
    let env = Env::default();
    let mut board = Board::initial(&env);
    for m in [mv(1, 4, 3, 4), mv(6, 4, 4, 4)] {
        let applied = apply_move(&env, &board, board.side_to_move, &m, Mode::Tournament).unwrap();
        board = applied.board;
        let (wr, wc) = board.king_position(Color::White);
        assert_eq!(board.get(wr, wc), PieceKind::King as i32);
        let (br, bc) = board.king_position(Color::Black);
        assert_eq!(board.get(br, bc), -(PieceKind::King as i32));
    }
}

#[test]
fn side_to_move_strictly_alternates() {
    let env = Env::default();
    let board = Board::initial(&env);
    assert!(!is_in_check(&board, Color::White));
    assert!(has_any_legal_move(&board, Color::White));
    let applied = apply_move(&env, &board, Color::White, &mv(1, 4, 3, 4), Mode::Tournament).unwrap();
    assert_eq!(applied.board.side_to_move, Color::Black);
}

#[test]
fn king_side_step_off_the_checking_file_counts_as_a_legal_escape() {
    let env = Env::default();
    let mut board = empty_board(&env);
    // Black rook on e6 checks the White king on e1 along the e-file (the
    // Black king stays on e8, out of the way). The only legal replies are
    // for the king to step off that file (d1 or f1); neither destination
    // is itself attacked. A candidate-move simulation that forgets to move
    // the king cache to its new square would still test the vacated e1
    // square (still on the rook's ray) and wrongly reject every escape,
    // misreporting checkmate.
    board.set(5, 4, -(PieceKind::Rook as i32));
    assert!(is_in_check(&board, Color::White));
    assert!(has_any_legal_move(&board, Color::White));
}
