use soroban_sdk::Env;

use crate::attacks::is_in_check;
use crate::castling::{relocate_rook, validate_castling};
use crate::fingerprint::position_fingerprint;
use crate::moves::validate_pattern;
use crate::termination::{has_any_legal_move, is_stalemate_or_mate};
use crate::types::{Board, ChessMove, Color, EngineError, Mode, MoveApplied, Outcome, PieceKind, Promotion};

const REPETITION_CLAIM_THRESHOLD: u32 = 3;
const FIFTY_MOVE_HALFMOVES: u32 = 100;
/// FIDE's 75-move rule: forced, not merely claimable, at 150 half-moves.
const FORCED_DRAW_HALFMOVES: u32 = 150;

/// Applies `mv` for `side_to_move` against `board`, returning the resulting
/// position and its termination classification.
///
/// Pseudo-legal failures (out of bounds, wrong piece, blocked path, and so
/// on) are always `Err`. A move that is pseudo-legal but leaves the mover's
/// own king in check is handled according to `mode`: in `Friendly` play it
/// is also an `Err`; in `Tournament` play the game is forfeited to the
/// opponent instead, without touching the board.
pub fn apply_move(
    env: &Env,
    board: &Board,
    side_to_move: Color,
    mv: &ChessMove,
    mode: Mode,
) -> Result<MoveApplied, EngineError> {
    if side_to_move != board.side_to_move {
        return Err(EngineError::WrongTurn);
    }

    let pattern = validate_pattern(board, mv, side_to_move)?;

    if pattern.is_castling_kingside {
        validate_castling(board, side_to_move, true)?;
    } else if pattern.is_castling_queenside {
        validate_castling(board, side_to_move, false)?;
    }

    let moving_piece = board.get(mv.from_row, mv.from_col);
    let mut next = board.clone();

    let captured_piece = if pattern.is_en_passant_capture {
        let captured_row = (mv.from_row as i32) as u32;
        let captured = next.get(captured_row, mv.to_col);
        next.set(captured_row, mv.to_col, 0);
        captured
    } else {
        next.get(mv.to_row, mv.to_col)
    };

    next.set(mv.from_row, mv.from_col, 0);

    let mut promotion_piece = 0;
    if PieceKind::from_magnitude(moving_piece) == Some(PieceKind::Pawn)
        && mv.to_row == side_to_move.promotion_row()
    {
        let kind = mv.promotion.to_kind().ok_or(EngineError::InvalidPromotion)?;
        promotion_piece = side_to_move.sign() * (kind as i32);
        next.set(mv.to_row, mv.to_col, promotion_piece);
    } else if mv.promotion != Promotion::None {
        return Err(EngineError::InvalidPromotion);
    } else {
        next.set(mv.to_row, mv.to_col, moving_piece);
    }

    if pattern.is_castling_kingside {
        relocate_rook(&mut next, side_to_move, true);
    } else if pattern.is_castling_queenside {
        relocate_rook(&mut next, side_to_move, false);
    }

    if PieceKind::from_magnitude(moving_piece) == Some(PieceKind::King) {
        next.set_king_position(side_to_move, mv.to_row, mv.to_col);
        next.set_king_moved(side_to_move);
    }
    if mv.from_row == side_to_move.back_rank() && mv.from_col == 0 {
        next.set_a_rook_moved(side_to_move);
    }
    if mv.from_row == side_to_move.back_rank() && mv.from_col == 7 {
        next.set_h_rook_moved(side_to_move);
    }

    // Moving into a corner also retires the opponent's matching castling right.
    let opponent = side_to_move.opposite();
    if mv.to_row == opponent.back_rank() && mv.to_col == 0 {
        next.set_a_rook_moved(opponent);
    }
    if mv.to_row == opponent.back_rank() && mv.to_col == 7 {
        next.set_h_rook_moved(opponent);
    }

    if is_in_check(&next, side_to_move) {
        return match mode {
            Mode::Friendly => Err(EngineError::MoveLeavesKingInCheck),
            Mode::Tournament => Ok(forced_forfeit(board, side_to_move)),
        };
    }

    next.en_passant_row = -1;
    next.en_passant_col = -1;
    if pattern.is_double_pawn_push {
        next.en_passant_row = ((mv.from_row as i32) + side_to_move.pawn_direction()) as i32;
        next.en_passant_col = mv.to_col as i32;
    }

    let is_pawn_move = PieceKind::from_magnitude(moving_piece) == Some(PieceKind::Pawn);
    if is_pawn_move || pattern.is_capture {
        next.half_move_clock = 0;
    } else {
        next.half_move_clock += 1;
    }

    next.side_to_move = opponent;

    let fingerprint = position_fingerprint(env, &next, opponent.sign());
    let count = next.repetition.get(fingerprint.clone()).unwrap_or(0) + 1;
    next.repetition.set(fingerprint, count);
    if count > next.max_repetition {
        next.max_repetition = count;
    }

    let opponent_in_check = is_in_check(&next, opponent);
    let opponent_has_move = has_any_legal_move(&next, opponent);
    let (is_mate, mut outcome) = is_stalemate_or_mate(opponent_in_check, opponent_has_move, side_to_move);

    // Mate delivered by this move always wins, even at the 150-half-move
    // boundary; the forced draw only kicks in when the move itself neither
    // mates nor resets the clock (pawn move / capture already reset it above).
    if !is_mate && outcome == Outcome::InProgress && next.half_move_clock >= FORCED_DRAW_HALFMOVES {
        outcome = Outcome::Draw;
    }

    Ok(MoveApplied {
        board: next,
        piece: moving_piece,
        captured_piece,
        promotion_piece,
        is_check: opponent_in_check,
        is_mate,
        is_castling: pattern.is_castling_kingside || pattern.is_castling_queenside,
        is_en_passant: pattern.is_en_passant_capture,
        is_forced_forfeit: false,
        outcome,
    })
}

fn forced_forfeit(board: &Board, side_to_move: Color) -> MoveApplied {
    let outcome = match side_to_move {
        Color::White => Outcome::BlackWins,
        Color::Black => Outcome::WhiteWins,
    };
    MoveApplied {
        board: board.clone(),
        piece: 0,
        captured_piece: 0,
        promotion_piece: 0,
        is_check: false,
        is_mate: false,
        is_castling: false,
        is_en_passant: false,
        is_forced_forfeit: true,
        outcome,
    }
}

/// Claims a draw by threefold repetition. Either player may call this when
/// the *current* position (the one on the board right now, regardless of
/// whose move produced it) has itself occurred three or more times — not
/// merely when some earlier position in the game reached that count.
pub fn claim_repetition(env: &Env, board: &Board) -> Result<(), EngineError> {
    let fingerprint = position_fingerprint(env, board, board.side_to_move.sign());
    let count = board.repetition.get(fingerprint).unwrap_or(0);
    if count >= REPETITION_CLAIM_THRESHOLD {
        Ok(())
    } else {
        Err(EngineError::NoRepetitionClaim)
    }
}

/// Claims a draw under the fifty-move rule: 100 half-moves without a pawn
/// move or capture.
pub fn claim_fifty_move(board: &Board) -> Result<(), EngineError> {
    if board.half_move_clock >= FIFTY_MOVE_HALFMOVES {
        Ok(())
    } else {
        Err(EngineError::NoFiftyMoveClaim)
    }
}
