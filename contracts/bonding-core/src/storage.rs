use soroban_sdk::{contracttype, Address, Env};

use crate::errors::Error;
use crate::types::{Config, GameBond, PriceState, SlashTotals, UserBond};

/// Storage keys, split three ways: instance for contract-wide singletons,
/// persistent for records that must survive indefinitely (every bond ledger
/// and lock).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Config,
    PriceState,
    Paused,
    SlashTotals,
    /// `UserBond(player)` — persistent, a player's ledger outlives any
    /// single game.
    UserBond(Address),
    /// `GameBond(game, player)` — persistent while a dispute could still be
    /// opened against the game; the game contract's own address is the
    /// game identifier throughout this workspace.
    GameBond(Address, Address),
}

const TTL_THRESHOLD_LEDGERS: u32 = 120_960; // ~7 days
const TTL_EXTEND_TO_LEDGERS: u32 = 518_400; // ~30 days

pub(crate) fn get_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).expect("admin not set")
}

pub(crate) fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub(crate) fn get_config(env: &Env) -> Config {
    env.storage().instance().get(&DataKey::Config).expect("config not set")
}

pub(crate) fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub(crate) fn get_price_state(env: &Env) -> PriceState {
    env.storage()
        .instance()
        .get(&DataKey::PriceState)
        .unwrap_or(PriceState {
            price: 0,
            last_price: 0,
            paused: false,
        })
}

pub(crate) fn set_price_state(env: &Env, state: &PriceState) {
    env.storage().instance().set(&DataKey::PriceState, state);
}

pub(crate) fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub(crate) fn set_pause_state(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub(crate) fn require_not_paused(env: &Env) -> Result<(), Error> {
    if is_paused(env) {
        Err(Error::ContractPaused)
    } else {
        Ok(())
    }
}

pub(crate) fn get_slash_totals(env: &Env) -> SlashTotals {
    env.storage().instance().get(&DataKey::SlashTotals).unwrap_or_default()
}

pub(crate) fn set_slash_totals(env: &Env, totals: &SlashTotals) {
    env.storage().instance().set(&DataKey::SlashTotals, totals);
}

pub(crate) fn get_user_bond(env: &Env, player: &Address) -> UserBond {
    let key = DataKey::UserBond(player.clone());
    let bond = env.storage().persistent().get(&key).unwrap_or_else(UserBond::empty);
    if env.storage().persistent().has(&key) {
        extend_user_bond_ttl(env, player);
    }
    bond
}

pub(crate) fn set_user_bond(env: &Env, player: &Address, bond: &UserBond) {
    let key = DataKey::UserBond(player.clone());
    env.storage().persistent().set(&key, bond);
    extend_user_bond_ttl(env, player);
}

pub(crate) fn get_game_bond(env: &Env, game: &Address, player: &Address) -> Option<GameBond> {
    let key = DataKey::GameBond(game.clone(), player.clone());
    let bond = env.storage().persistent().get(&key);
    if bond.is_some() {
        extend_game_bond_ttl(env, game, player);
    }
    bond
}

pub(crate) fn set_game_bond(env: &Env, game: &Address, player: &Address, bond: &GameBond) {
    let key = DataKey::GameBond(game.clone(), player.clone());
    env.storage().persistent().set(&key, bond);
    extend_game_bond_ttl(env, game, player);
}

pub(crate) fn extend_user_bond_ttl(env: &Env, player: &Address) {
    env.storage().persistent().extend_ttl(
        &DataKey::UserBond(player.clone()),
        TTL_THRESHOLD_LEDGERS,
        TTL_EXTEND_TO_LEDGERS,
    );
}

pub(crate) fn extend_game_bond_ttl(env: &Env, game: &Address, player: &Address) {
    env.storage().persistent().extend_ttl(
        &DataKey::GameBond(game.clone(), player.clone()),
        TTL_THRESHOLD_LEDGERS,
        TTL_EXTEND_TO_LEDGERS,
    );
}

pub(crate) fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD_LEDGERS, TTL_EXTEND_TO_LEDGERS);
}
