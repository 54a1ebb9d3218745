#![no_std]

//! # Chess Game
//!
//! One contract instance per game, a single-session deployment rather than a
//! multi-game registry. Holds the board, the move
//! history, and the native-currency stake escrow; forwards every move to
//! `chess-engine` and calls out to bonding-core, dispute-core, and the rating
//! and reward services at the points spec'd for each (every collaborator can
//! be individually disabled, in which case its hook is simply skipped).

use soroban_sdk::{contract, contractimpl, token, Address, BytesN, Env, Vec};

use chess_engine::{Board, ChessMove, Mode};

mod bonding_client;
mod dispute_client;
mod errors;
mod events;
mod game;
mod rating_client;
mod reward_client;
mod storage;
mod types;

use errors::Error;
use types::{Config, Game, GameFlags, GameInfo, GameState, MoveRecord, TimeoutPreset};

#[contract]
pub struct ChessGame;

#[contractimpl]
impl ChessGame {
    // ------------------------------------------------------------------
    // Initialization
    // ------------------------------------------------------------------

    /// Deploys a game already claimed by `white`, who escrows `stake` in
    /// `native_token` up front. `black` joins later via `join`.
    #[allow(clippy::too_many_arguments)]
    pub fn __constructor(
        env: Env,
        admin: Address,
        white: Address,
        stake: i128,
        mode: Mode,
        timeout_preset: TimeoutPreset,
        native_token: Address,
        bonding_core: Address,
        bonding_enabled: bool,
        dispute_core: Address,
        dispute_enabled: bool,
        rating_service: Address,
        rating_enabled: bool,
        reward_service: Address,
        reward_enabled: bool,
    ) {
        white.require_auth();

        token::Client::new(&env, &native_token).transfer(&white, &env.current_contract_address(), &stake);

        let config = Config {
            admin: admin.clone(),
            native_token,
            bonding_core,
            bonding_enabled,
            dispute_core,
            dispute_enabled,
            rating_service,
            rating_enabled,
            reward_service,
            reward_enabled,
        };
        storage::set_config(&env, &config);
        storage::set_admin(&env, &admin);
        storage::set_pause_state(&env, false);

        let initial_game = Game {
            white_player: white,
            black_player: None,
            stake,
            mode,
            timeout_blocks: timeout_preset.to_blocks(),
            white_last_move_block: 0,
            black_last_move_block: 0,
            state: GameState::NotStarted,
            draw_offered_by: None,
            flags: GameFlags::new(),
            move_count: 0,
        };
        storage::set_game(&env, &initial_game);
        storage::set_board(&env, &Board::initial(&env));
        storage::extend_instance_ttl(&env);
    }

    // ------------------------------------------------------------------
    // Admin
    // ------------------------------------------------------------------

    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), Error> {
        let admin = storage::get_admin(&env);
        admin.require_auth();

        let mut config = storage::get_config(&env);
        config.admin = new_admin.clone();
        storage::set_config(&env, &config);
        storage::set_admin(&env, &new_admin);
        Ok(())
    }

    pub fn get_admin(env: Env) -> Address {
        storage::get_admin(&env)
    }

    pub fn get_config(env: Env) -> Config {
        storage::get_config(&env)
    }

    /// Repoints collaborator addresses and toggles them on or off. The
    /// stake, mode, and native token are fixed at construction.
    #[allow(clippy::too_many_arguments)]
    pub fn update_config(
        env: Env,
        new_bonding_core: Option<Address>,
        new_bonding_enabled: Option<bool>,
        new_dispute_core: Option<Address>,
        new_dispute_enabled: Option<bool>,
        new_rating_service: Option<Address>,
        new_rating_enabled: Option<bool>,
        new_reward_service: Option<Address>,
        new_reward_enabled: Option<bool>,
    ) -> Result<(), Error> {
        let admin = storage::get_admin(&env);
        admin.require_auth();

        let mut config = storage::get_config(&env);
        if let Some(v) = new_bonding_core {
            config.bonding_core = v;
        }
        if let Some(v) = new_bonding_enabled {
            config.bonding_enabled = v;
        }
        if let Some(v) = new_dispute_core {
            config.dispute_core = v;
        }
        if let Some(v) = new_dispute_enabled {
            config.dispute_enabled = v;
        }
        if let Some(v) = new_rating_service {
            config.rating_service = v;
        }
        if let Some(v) = new_rating_enabled {
            config.rating_enabled = v;
        }
        if let Some(v) = new_reward_service {
            config.reward_service = v;
        }
        if let Some(v) = new_reward_enabled {
            config.reward_enabled = v;
        }
        storage::set_config(&env, &config);
        Ok(())
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        let admin = storage::get_admin(&env);
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    pub fn pause(env: Env) -> Result<(), Error> {
        let admin = storage::get_admin(&env);
        admin.require_auth();
        storage::set_pause_state(&env, true);
        Ok(())
    }

    pub fn unpause(env: Env) -> Result<(), Error> {
        let admin = storage::get_admin(&env);
        admin.require_auth();
        storage::set_pause_state(&env, false);
        Ok(())
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    // ------------------------------------------------------------------
    // Game lifecycle
    // ------------------------------------------------------------------

    pub fn join(env: Env, black: Address) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        game::join(&env, &black)
    }

    pub fn make_move(env: Env, player: Address, mv: ChessMove) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        game::apply_player_move(&env, &player, &mv)
    }

    pub fn resign(env: Env, player: Address) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        game::resign(&env, &player)
    }

    pub fn offer_draw(env: Env, player: Address) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        game::offer_draw(&env, &player)
    }

    pub fn accept_draw(env: Env, player: Address) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        game::accept_draw(&env, &player)
    }

    pub fn decline_draw(env: Env, player: Address) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        game::decline_draw(&env, &player)
    }

    pub fn cancel_draw_offer(env: Env, player: Address) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        game::cancel_draw_offer(&env, &player)
    }

    pub fn claim_victory_by_timeout(env: Env, caller: Address) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        game::claim_victory_by_timeout(&env, &caller)
    }

    pub fn claim_repetition(env: Env, caller: Address) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        game::claim_repetition(&env, &caller)
    }

    pub fn claim_fifty_move(env: Env, caller: Address) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        game::claim_fifty_move(&env, &caller)
    }

    // ------------------------------------------------------------------
    // Settlement
    // ------------------------------------------------------------------

    pub fn finalize_prizes(env: Env) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        game::finalize_prizes(&env)
    }

    pub fn withdraw_prize(env: Env, player: Address) -> Result<i128, Error> {
        storage::require_not_paused(&env)?;
        game::withdraw_prize(&env, &player)
    }

    /// Convenience for a clean winner: finalizes and withdraws in one call.
    pub fn claim_prize(env: Env, player: Address) -> Result<i128, Error> {
        storage::require_not_paused(&env)?;
        game::claim_prize(&env, &player)
    }

    // ------------------------------------------------------------------
    // Read-only queries
    // ------------------------------------------------------------------

    pub fn get_board_state(env: Env) -> Board {
        storage::get_board(&env)
    }

    pub fn get_game_info(env: Env) -> GameInfo {
        game::game_info(&env)
    }

    pub fn get_move_history(env: Env) -> Vec<MoveRecord> {
        storage::get_move_history(&env)
    }
}

#[cfg(test)]
mod tests;
