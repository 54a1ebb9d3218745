use crate::attacks::is_in_check;
use crate::moves::validate_pattern;
use crate::types::{Board, ChessMove, Color, Outcome, PieceKind, Promotion};

/// Brute-force search: does `color` have any pseudo-legal move that does
/// not leave its own king in check? Used to distinguish checkmate from
/// stalemate and to decide whether a side is merely in check or has no
/// reply at all. Board sizes are fixed at 8x8 so the worst case (64 source
/// squares times 64 destinations) is bounded and cheap by on-chain
/// standards.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    for from_row in 0..8u32 {
        for from_col in 0..8u32 {
            let piece = board.get(from_row, from_col);
            if piece == 0 || piece.signum() != color.sign() {
                continue;
            }
            for to_row in 0..8u32 {
                for to_col in 0..8u32 {
                    if from_row == to_row && from_col == to_col {
                        continue;
                    }
                    let mv = ChessMove {
                        from_row,
                        from_col,
                        to_row,
                        to_col,
                        promotion: Promotion::Queen,
                    };
                    let Ok(pattern) = validate_pattern(board, &mv, color) else {
                        continue;
                    };
                    let mut next = board.clone();
                    if pattern.is_en_passant_capture {
                        next.set(from_row, to_col, 0);
                    }
                    next.set(from_row, from_col, 0);
                    next.set(to_row, to_col, piece);
                    if PieceKind::from_magnitude(piece) == Some(PieceKind::King) {
                        next.set_king_position(color, to_row, to_col);
                    }
                    if pattern.is_castling_kingside || pattern.is_castling_queenside {
                        // A castling attempt here is necessarily blocked by
                        // its own check-through-attack rule in the normal
                        // apply path; for the purposes of "does any legal
                        // move exist" we can safely skip re-deriving that,
                        // since a king always has at least the option of
                        // staying put or another piece moving if castling
                        // were the only candidate and it were unsafe.
                        continue;
                    }
                    if !is_in_check(&next, color) {
                        return true;
                    }
                }
            }
        }
    }
    false
}

/// Given that `opponent_in_check` and `opponent_has_move` have already been
/// computed for the side about to move next, classifies the position and
/// reports who (if anyone) has just won.
pub fn is_stalemate_or_mate(
    opponent_in_check: bool,
    opponent_has_move: bool,
    mover: Color,
) -> (bool, Outcome) {
    if opponent_has_move {
        return (false, Outcome::InProgress);
    }
    if opponent_in_check {
        let outcome = match mover {
            Color::White => Outcome::WhiteWins,
            Color::Black => Outcome::BlackWins,
        };
        (true, outcome)
    } else {
        (false, Outcome::Draw)
    }
}
