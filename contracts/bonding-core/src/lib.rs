#![no_std]

//! # Bonding Core
//!
//! Holds every player's fungible and native collateral and locks a portion
//! of it behind each chess game in progress, so a resignation or a lost
//! dispute has something real to slash. Chess Game contracts lock and
//! release bonds using their own contract address as authorization; Dispute
//! Core is the only principal allowed to slash one.

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

mod bonding;
mod errors;
mod events;
mod pricing;
mod storage;
mod types;

use errors::Error;
use types::{Config, GameBond, PriceState, SlashTotals, UserBond};

#[contract]
pub struct BondingCore;

#[contractimpl]
impl BondingCore {
    // ------------------------------------------------------------------
    // Initialization
    // ------------------------------------------------------------------

    #[allow(clippy::too_many_arguments)]
    pub fn __constructor(
        env: Env,
        admin: Address,
        fungible_token: Address,
        native_token: Address,
        dispute_core: Address,
        fungible_multiplier: i128,
        native_multiplier: i128,
        min_price: i128,
        max_price_change_percent: u32,
        min_bond_native_value: i128,
    ) {
        let config = Config {
            admin: admin.clone(),
            fungible_token,
            native_token,
            dispute_core,
            fungible_multiplier,
            native_multiplier,
            min_price,
            max_price_change_percent,
            min_bond_native_value,
        };

        storage::set_config(&env, &config);
        storage::set_admin(&env, &admin);
        storage::set_pause_state(&env, false);
        storage::set_price_state(
            &env,
            &PriceState {
                price: 0,
                last_price: 0,
                paused: false,
            },
        );
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
        new_fungible_token: Option<Address>,
        new_native_token: Option<Address>,
        new_dispute_core: Option<Address>,
        new_fungible_multiplier: Option<i128>,
        new_native_multiplier: Option<i128>,
        new_min_price: Option<i128>,
        new_max_price_change_percent: Option<u32>,
        new_min_bond_native_value: Option<i128>,
    ) -> Result<(), Error> {
        let admin = storage::get_admin(&env);
        admin.require_auth();

        let mut config = storage::get_config(&env);
        if let Some(v) = new_fungible_token {
            config.fungible_token = v;
        }
        if let Some(v) = new_native_token {
            config.native_token = v;
        }
        if let Some(v) = new_dispute_core {
            config.dispute_core = v;
        }
        if let Some(v) = new_fungible_multiplier {
            config.fungible_multiplier = v;
        }
        if let Some(v) = new_native_multiplier {
            config.native_multiplier = v;
        }
        if let Some(v) = new_min_price {
            config.min_price = v;
        }
        if let Some(v) = new_max_price_change_percent {
            config.max_price_change_percent = v;
        }
        if let Some(v) = new_min_bond_native_value {
            config.min_bond_native_value = v;
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
    // Pricing
    // ------------------------------------------------------------------

    pub fn get_price_state(env: Env) -> PriceState {
        storage::get_price_state(&env)
    }

    pub fn update_price(env: Env, new_price: i128) -> Result<(), Error> {
        pricing::update_price(&env, new_price)
    }

    pub fn override_price(env: Env, new_price: i128) -> Result<(), Error> {
        pricing::override_price(&env, new_price)
    }

    pub fn unpause_breaker(env: Env) -> Result<(), Error> {
        pricing::unpause_breaker(&env)
    }

    /// Previews the fungible/native bond a game would currently require for
    /// `stake`, without locking anything.
    pub fn quote_required_bond(env: Env, stake: i128) -> Result<(i128, i128), Error> {
        let config = storage::get_config(&env);
        let price_state = storage::get_price_state(&env);
        pricing::required_bond(&config, &price_state, stake)
    }

    // ------------------------------------------------------------------
    // Player bond ledger
    // ------------------------------------------------------------------

    pub fn deposit_fungible(env: Env, player: Address, amount: i128) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        bonding::deposit_fungible(&env, &player, amount)
    }

    pub fn deposit_native(env: Env, player: Address, amount: i128) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        bonding::deposit_native(&env, &player, amount)
    }

    pub fn withdraw(
        env: Env,
        player: Address,
        fungible_amount: i128,
        native_amount: i128,
    ) -> Result<(), Error> {
        storage::require_not_paused(&env)?;
        bonding::withdraw(&env, &player, fungible_amount, native_amount)
    }

    pub fn get_user_bond(env: Env, player: Address) -> UserBond {
        storage::get_user_bond(&env, &player)
    }

    // ------------------------------------------------------------------
    // Game lifecycle, called by a chess-game contract acting as `game`
    // ------------------------------------------------------------------

    pub fn lock_bond_pair(
        env: Env,
        game: Address,
        white: Address,
        black: Address,
        stake: i128,
    ) -> Result<(), Error> {
        bonding::lock_bond_pair(&env, &game, &white, &black, stake)
    }

    pub fn lock_bond_single(
        env: Env,
        game: Address,
        player: Address,
        stake: i128,
    ) -> Result<(), Error> {
        bonding::lock_bond_single(&env, &game, &player, stake)
    }

    pub fn release_bond(env: Env, game: Address, player: Address) -> Result<(), Error> {
        bonding::release_bond(&env, &game, &player)
    }

    /// Called by dispute-core with its own address as authorization, the
    /// way a chess-game contract authorizes `lock_bond_pair` with its own.
    pub fn slash_bond(env: Env, game: Address, player: Address) -> Result<(i128, i128), Error> {
        bonding::slash_bond(&env, &game, &player)
    }

    pub fn get_game_bond(env: Env, game: Address, player: Address) -> Option<GameBond> {
        storage::get_game_bond(&env, &game, &player)
    }

    pub fn get_slash_totals(env: Env) -> SlashTotals {
        storage::get_slash_totals(&env)
    }
}

#[cfg(test)]
mod tests;
