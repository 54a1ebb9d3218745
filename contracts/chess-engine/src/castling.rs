use crate::attacks::is_square_attacked;
use crate::types::{Board, Color, EngineError, PieceKind};

/// Validates castling rights and path, short of the final "does the king
/// end up in check" test (which `legality.rs` performs the same way as for
/// any other move, by simulating and calling `is_in_check`).
pub fn validate_castling(board: &Board, mover: Color, kingside: bool) -> Result<(), EngineError> {
    if board.king_moved(mover) {
        return Err(EngineError::CastlingRightsLost);
    }
    if kingside && board.h_rook_moved(mover) {
        return Err(EngineError::CastlingRightsLost);
    }
    if !kingside && board.a_rook_moved(mover) {
        return Err(EngineError::CastlingRightsLost);
    }

    let rank = mover.back_rank();
    let rook_col = if kingside { 7 } else { 0 };
    let expected_rook = mover.sign() * PieceKind::Rook as i32;
    if board.get(rank, rook_col) != expected_rook {
        return Err(EngineError::CastlingRightsLost);
    }

    let path_cols: &[u32] = if kingside { &[5, 6] } else { &[1, 2, 3] };
    for &col in path_cols {
        if board.get(rank, col) != 0 {
            return Err(EngineError::CastlingPathBlocked);
        }
    }

    if is_square_attacked(board, rank, 4, mover.opposite()) {
        return Err(EngineError::CastlingThroughAttack);
    }
    let transit_cols: &[u32] = if kingside { &[5, 6] } else { &[2, 3] };
    for &col in transit_cols {
        if is_square_attacked(board, rank, col, mover.opposite()) {
            return Err(EngineError::CastlingThroughAttack);
        }
    }

    Ok(())
}

/// Moves the rook to its post-castling square. The king's own relocation is
/// handled by the generic move-application path in `legality.rs`.
pub fn relocate_rook(board: &mut Board, mover: Color, kingside: bool) {
    let rank = mover.back_rank();
    let (from_col, to_col) = if kingside { (7, 5) } else { (0, 3) };
    let rook = board.get(rank, from_col);
    board.set(rank, from_col, 0);
    board.set(rank, to_col, rook);
}
