use soroban_sdk::{Bytes, BytesN, Env};

use crate::types::Board;

/// A position fingerprint for threefold-repetition tracking: piece
/// placement, side to move, castling rights and the en-passant target all
/// affect whether two positions are "the same" for repetition purposes,
/// matching FIDE rule 9.2.2. The half-move clock and prior repetition
/// counts are deliberately excluded.
pub fn position_fingerprint(env: &Env, board: &Board, side_to_move_sign: i32) -> BytesN<32> {
    let mut bytes = Bytes::new(env);
    for i in 0..64u32 {
        let value = board.squares.get(i).unwrap_or(0);
        bytes.push_back((value & 0xff) as u8);
    }
    bytes.push_back(if side_to_move_sign > 0 { 1 } else { 0 });
    bytes.push_back(board.white_king_moved as u8);
    bytes.push_back(board.white_a_rook_moved as u8);
    bytes.push_back(board.white_h_rook_moved as u8);
    bytes.push_back(board.black_king_moved as u8);
    bytes.push_back(board.black_a_rook_moved as u8);
    bytes.push_back(board.black_h_rook_moved as u8);
    bytes.push_back((board.en_passant_row & 0xff) as u8);
    bytes.push_back((board.en_passant_col & 0xff) as u8);

    env.crypto().sha256(&bytes).to_bytes()
}
