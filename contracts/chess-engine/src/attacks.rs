use crate::types::{Board, Color, PieceKind};

/// Whether the square at `(row, col)` is attacked by any piece of `by_color`.
/// Ignores whose turn it is; used both for check detection and for vetting
/// the squares a king passes through while castling.
pub fn is_square_attacked(board: &Board, row: u32, col: u32, by_color: Color) -> bool {
    pawn_attacks(board, row, col, by_color)
        || knight_attacks(board, row, col, by_color)
        || king_attacks(board, row, col, by_color)
        || sliding_attacks(board, row, col, by_color, true)
        || sliding_attacks(board, row, col, by_color, false)
}

pub fn is_in_check(board: &Board, color: Color) -> bool {
    let (king_row, king_col) = board.king_position(color);
    is_square_attacked(board, king_row, king_col, color.opposite())
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..8).contains(&row) && (0..8).contains(&col)
}

fn piece_at(board: &Board, row: i32, col: i32) -> i32 {
    board.get(row as u32, col as u32)
}

fn pawn_attacks(board: &Board, row: u32, col: u32, by_color: Color) -> bool {
    // A pawn of `by_color` attacks diagonally forward from its own perspective,
    // so we look one row *behind* (from its direction) the target square.
    let attacker_row = row as i32 - by_color.pawn_direction();
    for dc in [-1i32, 1] {
        let attacker_col = col as i32 + dc;
        if !in_bounds(attacker_row, attacker_col) {
            continue;
        }
        let piece = piece_at(board, attacker_row, attacker_col);
        if piece == by_color.sign() * PieceKind::Pawn as i32 {
            return true;
        }
    }
    false
}

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

fn knight_attacks(board: &Board, row: u32, col: u32, by_color: Color) -> bool {
    for (dr, dc) in KNIGHT_OFFSETS {
        let r = row as i32 + dr;
        let c = col as i32 + dc;
        if !in_bounds(r, c) {
            continue;
        }
        if piece_at(board, r, c) == by_color.sign() * PieceKind::Knight as i32 {
            return true;
        }
    }
    false
}

const KING_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn king_attacks(board: &Board, row: u32, col: u32, by_color: Color) -> bool {
    for (dr, dc) in KING_OFFSETS {
        let r = row as i32 + dr;
        let c = col as i32 + dc;
        if !in_bounds(r, c) {
            continue;
        }
        if piece_at(board, r, c) == by_color.sign() * PieceKind::King as i32 {
            return true;
        }
    }
    false
}

/// Checks rook/bishop/queen rays. `orthogonal` selects rook-like directions
/// when true, bishop-like diagonals when false.
fn sliding_attacks(board: &Board, row: u32, col: u32, by_color: Color, orthogonal: bool) -> bool {
    let directions: [(i32, i32); 4] = if orthogonal {
        [(1, 0), (-1, 0), (0, 1), (0, -1)]
    } else {
        [(1, 1), (1, -1), (-1, 1), (-1, -1)]
    };
    let rook_or_queen = [PieceKind::Rook as i32, PieceKind::Queen as i32];
    let bishop_or_queen = [PieceKind::Bishop as i32, PieceKind::Queen as i32];
    let matching = if orthogonal { &rook_or_queen } else { &bishop_or_queen };

    for (dr, dc) in directions {
        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;
        while in_bounds(r, c) {
            let piece = piece_at(board, r, c);
            if piece != 0 {
                if piece.signum() == by_color.sign() && matching.contains(&piece.abs()) {
                    return true;
                }
                break;
            }
            r += dr;
            c += dc;
        }
    }
    false
}
