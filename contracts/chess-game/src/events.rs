use soroban_sdk::{contractevent, Address, Env};

use crate::types::GameState;

#[contractevent]
pub struct MoveMade {
    #[topic]
    pub player: Address,
    pub from_row: u32,
    pub from_col: u32,
    pub to_row: u32,
    pub to_col: u32,
    pub piece: i32,
    pub captured_piece: i32,
    pub promotion_piece: i32,
    pub is_check: bool,
    pub is_mate: bool,
    pub is_castling: bool,
    pub is_en_passant: bool,
}

#[contractevent]
pub struct GameStarted {
    #[topic]
    pub white: Address,
    #[topic]
    pub black: Address,
    pub stake: i128,
}

#[contractevent]
pub struct GameStateChanged {
    pub new_state: GameState,
}

#[contractevent]
pub struct PrizeClaimed {
    #[topic]
    pub winner: Address,
    pub amount: i128,
}

#[contractevent]
pub struct PlayerResigned {
    #[topic]
    pub player: Address,
    pub winner: Address,
}

#[contractevent]
pub struct GameTimeout {
    pub winner: Address,
    pub loser: Address,
}

#[contractevent]
pub struct DrawOffered {
    #[topic]
    pub player: Address,
}

#[contractevent]
pub struct DrawAccepted {}

#[contractevent]
pub struct DrawByRepetition {
    #[topic]
    pub claimant: Address,
}

#[contractevent]
pub struct DrawByFiftyMoveRule {
    #[topic]
    pub claimant: Address,
}

/// Logged, never propagated, when a best-effort call to the rating or
/// reward collaborator fails (spec.md §7's propagation policy).
#[contractevent]
pub struct RatingReportFailed {
    pub white: Address,
    pub black: Address,
}

#[contractevent]
pub struct RewardReportFailed {
    pub player: Address,
}

pub(crate) fn emit_move_made(
    env: &Env,
    player: &Address,
    from_row: u32,
    from_col: u32,
    to_row: u32,
    to_col: u32,
    piece: i32,
    captured_piece: i32,
    promotion_piece: i32,
    is_check: bool,
    is_mate: bool,
    is_castling: bool,
    is_en_passant: bool,
) {
    MoveMade {
        player: player.clone(),
        from_row,
        from_col,
        to_row,
        to_col,
        piece,
        captured_piece,
        promotion_piece,
        is_check,
        is_mate,
        is_castling,
        is_en_passant,
    }
    .publish(env);
}

pub(crate) fn emit_game_started(env: &Env, white: &Address, black: &Address, stake: i128) {
    GameStarted {
        white: white.clone(),
        black: black.clone(),
        stake,
    }
    .publish(env);
}

pub(crate) fn emit_game_state_changed(env: &Env, new_state: GameState) {
    GameStateChanged { new_state }.publish(env);
}

pub(crate) fn emit_prize_claimed(env: &Env, winner: &Address, amount: i128) {
    PrizeClaimed {
        winner: winner.clone(),
        amount,
    }
    .publish(env);
}

pub(crate) fn emit_player_resigned(env: &Env, player: &Address, winner: &Address) {
    PlayerResigned {
        player: player.clone(),
        winner: winner.clone(),
    }
    .publish(env);
}

pub(crate) fn emit_game_timeout(env: &Env, winner: &Address, loser: &Address) {
    GameTimeout {
        winner: winner.clone(),
        loser: loser.clone(),
    }
    .publish(env);
}

pub(crate) fn emit_draw_offered(env: &Env, player: &Address) {
    DrawOffered { player: player.clone() }.publish(env);
}

pub(crate) fn emit_draw_accepted(env: &Env) {
    DrawAccepted {}.publish(env);
}

pub(crate) fn emit_draw_by_repetition(env: &Env, claimant: &Address) {
    DrawByRepetition {
        claimant: claimant.clone(),
    }
    .publish(env);
}

pub(crate) fn emit_draw_by_fifty_move_rule(env: &Env, claimant: &Address) {
    DrawByFiftyMoveRule {
        claimant: claimant.clone(),
    }
    .publish(env);
}

pub(crate) fn emit_rating_report_failed(env: &Env, white: &Address, black: &Address) {
    RatingReportFailed {
        white: white.clone(),
        black: black.clone(),
    }
    .publish(env);
}

pub(crate) fn emit_reward_report_failed(env: &Env, player: &Address) {
    RewardReportFailed { player: player.clone() }.publish(env);
}
