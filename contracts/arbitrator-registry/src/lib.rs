#![no_std]

//! # Arbitrator Registry
//!
//! Tracks arbitrator stakes, tiers, reputations, and the 30-day
//! conflict-of-interest history between players, and produces weighted
//! pseudorandom jury selections for dispute-core. Arbitrators stake and
//! unstake directly; only the configured dispute-core deployment may
//! select a jury, record a vote, update a reputation, or record a game
//! pairing.

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};

mod errors;
mod events;
mod registry;
mod selection;
mod storage;
mod types;

use errors::Error;
use types::{Arbitrator, Config, Tier};

#[contract]
pub struct ArbitratorRegistry;

#[contractimpl]
impl ArbitratorRegistry {
    // ------------------------------------------------------------------
    // Initialization
    // ------------------------------------------------------------------

    pub fn __constructor(
        env: Env,
        admin: Address,
        stake_token: Address,
        dispute_core: Address,
        tier1_min: i128,
        tier2_min: i128,
        tier3_min: i128,
    ) {
        let config = Config {
            admin: admin.clone(),
            stake_token,
            dispute_core,
            tier1_min,
            tier2_min,
            tier3_min,
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

    pub fn update_config(
        env: Env,
        new_dispute_core: Option<Address>,
        new_tier1_min: Option<i128>,
        new_tier2_min: Option<i128>,
        new_tier3_min: Option<i128>,
    ) -> Result<(), Error> {
        let admin = storage::get_admin(&env);
        admin.require_auth();

        let mut config = storage::get_config(&env);
        if let Some(v) = new_dispute_core {
            config.dispute_core = v;
        }
        if let Some(v) = new_tier1_min {
            config.tier1_min = v;
        }
        if let Some(v) = new_tier2_min {
            config.tier2_min = v;
        }
        if let Some(v) = new_tier3_min {
            config.tier3_min = v;
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
    // Arbitrator stake ledger
    // ------------------------------------------------------------------

    pub fn stake(env: Env, arb: Address, amount: i128) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        registry::stake(&env, &arb, amount)
    }

    pub fn unstake(env: Env, arb: Address, amount: i128) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        registry::unstake(&env, &arb, amount)
    }

    pub fn get_arbitrator(env: Env, arb: Address) -> Option<Arbitrator> {
        storage::get_arbitrator(&env, &arb)
    }

    pub fn get_tier_pool(env: Env, tier: Tier) -> Vec<Address> {
        storage::get_tier_pool(&env, tier)
    }

    pub fn voting_power(env: Env, arb: Address) -> i128 {
        match storage::get_arbitrator(&env, &arb) {
            Some(record) => registry::voting_power(&record, env.ledger().timestamp()),
            None => 0,
        }
    }

    pub fn can_vote(env: Env, arb: Address) -> bool {
        match storage::get_arbitrator(&env, &arb) {
            Some(record) => registry::can_vote(&record, env.ledger().timestamp()),
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Dispute-core-only operations
    // ------------------------------------------------------------------

    pub fn record_game(env: Env, player1: Address, player2: Address) -> Result<(), Error> {
        registry::record_game(&env, &player1, &player2)
    }

    /// Selects up to `3k` jurors for a dispute between `player1` and
    /// `player2`, up to `k` independently drawn from each tier.
    pub fn select(env: Env, player1: Address, player2: Address, k: u32) -> Result<Vec<Address>, Error> {
        storage::require_not_paused(&env)?;
        selection::select(&env, &player1, &player2, k)
    }

    pub fn record_vote(env: Env, arb: Address) -> Result<(), Error> {
        registry::record_vote(&env, &arb)
    }

    pub fn update_reputation(env: Env, arb: Address, voted_with_majority: bool) -> Result<(), Error> {
        registry::update_reputation(&env, &arb, voted_with_majority)
    }
}
