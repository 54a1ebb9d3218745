#![no_std]

//! # Dispute Core
//!
//! Runs the per-game challenge window, commit-reveal arbitrator voting, and
//! multi-round escalation that resolve a disputed chess game. Registered by
//! a chess-game contract exactly once per game on terminal state; a
//! challenge within the window draws a jury from arbitrator-registry, and a
//! resolved `Cheat` verdict instructs bonding-core to slash the accused.

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

mod bonding_client;
mod dispute;
mod errors;
mod events;
mod registry_client;
mod storage;
mod types;

use errors::Error;
use types::{Config, Dispute, DisputeSnapshot, Vote};

#[contract]
pub struct DisputeCore;

#[contractimpl]
impl DisputeCore {
    // ------------------------------------------------------------------
    // Initialization
    // ------------------------------------------------------------------

    #[allow(clippy::too_many_arguments)]
    pub fn __constructor(
        env: Env,
        admin: Address,
        challenge_token: Address,
        bonding_core: Address,
        arbitrator_registry: Address,
        challenge_window_secs: u64,
        commit_period_secs: u64,
        reveal_period_secs: u64,
        quorum: u32,
        supermajority_percent: u32,
        challenge_deposit: i128,
        max_active_challenges: u32,
        max_escalation: u32,
        dispute_lifetime_secs: u64,
        initial_jury_per_tier: u32,
    ) {
        let config = Config {
            admin: admin.clone(),
            challenge_token,
            bonding_core,
            arbitrator_registry,
            challenge_window_secs,
            commit_period_secs,
            reveal_period_secs,
            quorum,
            supermajority_percent,
            challenge_deposit,
            max_active_challenges,
            max_escalation,
            dispute_lifetime_secs,
            initial_jury_per_tier,
        };
        storage::set_config(&env, &config);
        storage::set_admin(&env, &admin);
        storage::set_pause_state(&env, false);
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

    #[allow(clippy::too_many_arguments)]
    pub fn update_config(
        env: Env,
        new_bonding_core: Option<Address>,
        new_arbitrator_registry: Option<Address>,
        new_challenge_window_secs: Option<u64>,
        new_commit_period_secs: Option<u64>,
        new_reveal_period_secs: Option<u64>,
        new_quorum: Option<u32>,
        new_supermajority_percent: Option<u32>,
        new_challenge_deposit: Option<i128>,
        new_max_active_challenges: Option<u32>,
        new_max_escalation: Option<u32>,
        new_dispute_lifetime_secs: Option<u64>,
        new_initial_jury_per_tier: Option<u32>,
    ) -> Result<(), Error> {
        let admin = storage::get_admin(&env);
        admin.require_auth();

        let mut config = storage::get_config(&env);
        if let Some(v) = new_bonding_core {
            config.bonding_core = v;
        }
        if let Some(v) = new_arbitrator_registry {
            config.arbitrator_registry = v;
        }
        if let Some(v) = new_challenge_window_secs {
            config.challenge_window_secs = v;
        }
        if let Some(v) = new_commit_period_secs {
            config.commit_period_secs = v;
        }
        if let Some(v) = new_reveal_period_secs {
            config.reveal_period_secs = v;
        }
        if let Some(v) = new_quorum {
            config.quorum = v;
        }
        if let Some(v) = new_supermajority_percent {
            config.supermajority_percent = v;
        }
        if let Some(v) = new_challenge_deposit {
            config.challenge_deposit = v;
        }
        if let Some(v) = new_max_active_challenges {
            config.max_active_challenges = v;
        }
        if let Some(v) = new_max_escalation {
            config.max_escalation = v;
        }
        if let Some(v) = new_dispute_lifetime_secs {
            config.dispute_lifetime_secs = v;
        }
        if let Some(v) = new_initial_jury_per_tier {
            config.initial_jury_per_tier = v;
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
    // Called by a chess-game contract
    // ------------------------------------------------------------------

    pub fn register_game(env: Env, game: Address, player_a: Address, player_b: Address, stake: i128) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        dispute::register_game(&env, &game, &player_a, &player_b, stake)
    }

    pub fn dispute_snapshot(env: Env, game: Address) -> DisputeSnapshot {
        dispute::dispute_snapshot(&env, &game)
    }

    pub fn get_dispute(env: Env, game: Address) -> Option<Dispute> {
        storage::get_dispute(&env, &game)
    }

    // ------------------------------------------------------------------
    // Challenge / commit-reveal / resolution
    // ------------------------------------------------------------------

    pub fn challenge(env: Env, game: Address, caller: Address, accused: Address) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        dispute::challenge(&env, &game, &caller, &accused)
    }

    pub fn commit_vote(env: Env, game: Address, arb: Address, hash: BytesN<32>) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        dispute::commit_vote(&env, &game, &arb, hash)
    }

    pub fn reveal_vote(env: Env, game: Address, arb: Address, vote: Vote, salt: BytesN<32>) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        dispute::reveal_vote(&env, &game, &arb, vote, salt)
    }

    pub fn resolve_dispute(env: Env, game: Address) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        dispute::resolve_dispute(&env, &game)
    }

    pub fn close_challenge_window(env: Env, game: Address) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        dispute::close_challenge_window(&env, &game)
    }
}

#[cfg(test)]
mod tests;
