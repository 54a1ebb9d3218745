use crate::types::{Board, ChessMove, Color, EngineError, PieceKind};

/// Everything about a move's shape that `legality.rs` needs in order to
/// finish applying it, beyond the plain piece-pattern check.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PatternInfo {
    pub is_castling_kingside: bool,
    pub is_castling_queenside: bool,
    pub is_en_passant_capture: bool,
    pub is_double_pawn_push: bool,
    pub is_capture: bool,
}

impl PatternInfo {
    fn quiet() -> PatternInfo {
        PatternInfo {
            is_castling_kingside: false,
            is_castling_queenside: false,
            is_en_passant_capture: false,
            is_double_pawn_push: false,
            is_capture: false,
        }
    }
}

pub fn in_bounds(row: u32, col: u32) -> bool {
    row < 8 && col < 8
}

/// Validates the shape of `mv` for the piece standing on its source square,
/// ignoring whether it leaves the mover's own king in check (that is
/// `legality.rs`'s job) and ignoring castling legality beyond the squares
/// moved through being empty (rights and check-through are `castling.rs`'s
/// job). Returns the classified pattern on success.
pub fn validate_pattern(
    board: &Board,
    mv: &ChessMove,
    mover: Color,
) -> Result<PatternInfo, EngineError> {
    if !in_bounds(mv.from_row, mv.from_col) || !in_bounds(mv.to_row, mv.to_col) {
        return Err(EngineError::OutOfBounds);
    }
    if mv.from_row == mv.to_row && mv.from_col == mv.to_col {
        return Err(EngineError::InvalidPattern);
    }

    let piece = board.get(mv.from_row, mv.from_col);
    if piece == 0 {
        return Err(EngineError::EmptySourceSquare);
    }
    if piece.signum() != mover.sign() {
        return Err(EngineError::NotYourPiece);
    }

    let target = board.get(mv.to_row, mv.to_col);
    if target != 0 && target.signum() == mover.sign() {
        return Err(EngineError::InvalidPattern);
    }

    let kind = PieceKind::from_magnitude(piece).ok_or(EngineError::InvalidPattern)?;
    match kind {
        PieceKind::Pawn => validate_pawn(board, mv, mover, target),
        PieceKind::Knight => validate_knight(mv).map(|_| pattern_with_capture(target)),
        PieceKind::Bishop => validate_slide(board, mv, true, false).map(|_| pattern_with_capture(target)),
        PieceKind::Rook => validate_slide(board, mv, false, true).map(|_| pattern_with_capture(target)),
        PieceKind::Queen => validate_slide(board, mv, true, true).map(|_| pattern_with_capture(target)),
        PieceKind::King => validate_king(board, mv, mover, target),
    }
}

fn pattern_with_capture(target: i32) -> PatternInfo {
    let mut info = PatternInfo::quiet();
    info.is_capture = target != 0;
    info
}

fn validate_knight(mv: &ChessMove) -> Result<(), EngineError> {
    let dr = (mv.to_row as i32 - mv.from_row as i32).abs();
    let dc = (mv.to_col as i32 - mv.from_col as i32).abs();
    if (dr, dc) == (1, 2) || (dr, dc) == (2, 1) {
        Ok(())
    } else {
        Err(EngineError::InvalidPattern)
    }
}

fn validate_slide(
    board: &Board,
    mv: &ChessMove,
    allow_diagonal: bool,
    allow_orthogonal: bool,
) -> Result<(), EngineError> {
    let dr = mv.to_row as i32 - mv.from_row as i32;
    let dc = mv.to_col as i32 - mv.from_col as i32;
    let is_diagonal = dr.abs() == dc.abs();
    let is_orthogonal = dr == 0 || dc == 0;

    if (is_diagonal && !allow_diagonal) || (is_orthogonal && !allow_orthogonal) {
        return Err(EngineError::InvalidPattern);
    }
    if !is_diagonal && !is_orthogonal {
        return Err(EngineError::InvalidPattern);
    }

    let step_r = dr.signum();
    let step_c = dc.signum();
    let mut r = mv.from_row as i32 + step_r;
    let mut c = mv.from_col as i32 + step_c;
    while (r, c) != (mv.to_row as i32, mv.to_col as i32) {
        if board.get(r as u32, c as u32) != 0 {
            return Err(EngineError::InvalidPattern);
        }
        r += step_r;
        c += step_c;
    }
    Ok(())
}

fn validate_king(
    board: &Board,
    mv: &ChessMove,
    mover: Color,
    target: i32,
) -> Result<PatternInfo, EngineError> {
    let dr = (mv.to_row as i32 - mv.from_row as i32).abs();
    let dc = mv.to_col as i32 - mv.from_col as i32;

    if dr <= 1 && dc.abs() <= 1 {
        return Ok(pattern_with_capture(target));
    }

    // Castling: king moves two squares along its own back rank.
    if dr == 0 && mv.from_row == mover.back_rank() && dc.abs() == 2 && mv.from_col == 4 {
        let mut info = PatternInfo::quiet();
        if dc == 2 {
            info.is_castling_kingside = true;
        } else {
            info.is_castling_queenside = true;
        }
        return Ok(info);
    }

    Err(EngineError::InvalidPattern)
}

fn validate_pawn(
    board: &Board,
    mv: &ChessMove,
    mover: Color,
    target: i32,
) -> Result<PatternInfo, EngineError> {
    let dir = mover.pawn_direction();
    let dr = mv.to_row as i32 - mv.from_row as i32;
    let dc = mv.to_col as i32 - mv.from_col as i32;

    // Straight push.
    if dc == 0 {
        if dr == dir {
            if target != 0 {
                return Err(EngineError::InvalidPattern);
            }
            return Ok(PatternInfo::quiet());
        }
        if dr == 2 * dir && mv.from_row == mover.pawn_start_row() {
            if target != 0 {
                return Err(EngineError::InvalidPattern);
            }
            let mid_row = (mv.from_row as i32 + dir) as u32;
            if board.get(mid_row, mv.from_col) != 0 {
                return Err(EngineError::InvalidPattern);
            }
            let mut info = PatternInfo::quiet();
            info.is_double_pawn_push = true;
            return Ok(info);
        }
        return Err(EngineError::InvalidPattern);
    }

    // Diagonal capture, ordinary or en passant.
    if dc.abs() == 1 && dr == dir {
        if target != 0 {
            return Ok(pattern_with_capture(target));
        }
        if mv.to_row as i32 == board.en_passant_row && mv.to_col as i32 == board.en_passant_col {
            let mut info = PatternInfo::quiet();
            info.is_en_passant_capture = true;
            info.is_capture = true;
            return Ok(info);
        }
        return Err(EngineError::InvalidPattern);
    }

    Err(EngineError::InvalidPattern)
}
