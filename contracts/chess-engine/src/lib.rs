#![no_std]

//! Pure board-and-move logic for the on-chain chess platform.
//!
//! This crate has no storage and no entry points of its own; it is linked
//! into `chess-game` as a pure-logic dependency consulted for every move,
//! never deployed on its own. Every `#[contracttype]` here crosses the host
//! boundary cleanly
//! when embedded in `chess-game`'s own contract state.

mod attacks;
mod castling;
mod fen;
mod fingerprint;
mod legality;
mod moves;
mod termination;
mod types;

pub use attacks::{is_in_check, is_square_attacked};
pub use fen::board_to_fen_like;
pub use fingerprint::position_fingerprint;
pub use legality::{apply_move, claim_fifty_move, claim_repetition};
pub use termination::has_any_legal_move;
pub use types::{
    Board, ChessMove, Color, EngineError, Mode, MoveApplied, Outcome, PieceKind, Promotion,
    BOARD_SIZE,
};

#[cfg(test)]
mod tests;
