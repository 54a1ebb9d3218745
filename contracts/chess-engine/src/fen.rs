use soroban_sdk::{Env, String};

use crate::types::{Board, PieceKind};

const WHITE_GLYPHS: [u8; 7] = [b'?', b'P', b'N', b'B', b'R', b'Q', b'K'];
const BLACK_GLYPHS: [u8; 7] = [b'?', b'p', b'n', b'b', b'r', b'q', b'k'];
/// 8 squares/rank worst case as single-digit runs, plus 7 rank separators.
const MAX_LEN: usize = 8 * 8 + 7;

/// A FEN-like piece-placement string (ranks 8 down to 1, `/`-separated,
/// digits for empty-square runs). Debug-only: used by tests and by event
/// payloads that want a human-readable board snapshot, the same role the
/// teacher's blanket `Debug` derives play for its own `#[contracttype]`s.
/// Built on a fixed stack buffer since this crate is `no_std` with no
/// allocator; it does not encode side-to-move, castling rights or
/// en-passant, which already live as separate `Board` fields.
pub fn board_to_fen_like(env: &Env, board: &Board) -> String {
    let mut buf = [0u8; MAX_LEN];
    let mut len = 0usize;

    for row in (0..8u32).rev() {
        let mut empty_run = 0u32;
        for col in 0..8u32 {
            let piece = board.get(row, col);
            if piece == 0 {
                empty_run += 1;
                continue;
            }
            if empty_run > 0 {
                buf[len] = b'0' + empty_run as u8;
                len += 1;
                empty_run = 0;
            }
            let kind = PieceKind::from_magnitude(piece).expect("valid piece on board");
            buf[len] = if piece > 0 {
                WHITE_GLYPHS[kind as usize]
            } else {
                BLACK_GLYPHS[kind as usize]
            };
            len += 1;
        }
        if empty_run > 0 {
            buf[len] = b'0' + empty_run as u8;
            len += 1;
        }
        if row != 0 {
            buf[len] = b'/';
            len += 1;
        }
    }

    let text = core::str::from_utf8(&buf[..len]).expect("ascii-only fen glyphs");
    String::from_str(env, text)
}
