use soroban_sdk::{contracttype, Address, Env};

use crate::errors::Error;
use crate::types::{Config, Dispute, VoteCommit};

/// Instance storage for contract-wide singletons; temporary storage for
/// `Dispute`/`VoteCommit`, which both have a natural expiry bounded by the
/// 30-day absolute dispute lifetime; persistent storage for the
/// per-challenger outstanding count, which outlives any single dispute.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Config,
    Paused,
    Dispute(Address),
    /// Keyed by escalation round so a re-selected arbitrator in a later
    /// round isn't blocked by its own earlier-round commit.
    VoteCommit(Address, u32, Address),
    ActiveChallenges(Address),
}

const TTL_THRESHOLD_LEDGERS: u32 = 120_960; // ~7 days
/// Scaled to the 30-day absolute dispute lifetime (spec.md §3) plus slack
/// for the reveal window that can follow it.
const DISPUTE_TTL_EXTEND_TO_LEDGERS: u32 = 622_080; // ~36 days
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

pub(crate) fn get_dispute(env: &Env, game: &Address) -> Option<Dispute> {
    env.storage().temporary().get(&DataKey::Dispute(game.clone()))
}

pub(crate) fn set_dispute(env: &Env, game: &Address, dispute: &Dispute) {
    let key = DataKey::Dispute(game.clone());
    env.storage().temporary().set(&key, dispute);
    env.storage()
        .temporary()
        .extend_ttl(&key, TTL_THRESHOLD_LEDGERS, DISPUTE_TTL_EXTEND_TO_LEDGERS);
}

pub(crate) fn get_vote_commit(env: &Env, game: &Address, round: u32, arb: &Address) -> Option<VoteCommit> {
    env.storage()
        .temporary()
        .get(&DataKey::VoteCommit(game.clone(), round, arb.clone()))
}

pub(crate) fn set_vote_commit(env: &Env, game: &Address, round: u32, arb: &Address, commit: &VoteCommit) {
    let key = DataKey::VoteCommit(game.clone(), round, arb.clone());
    env.storage().temporary().set(&key, commit);
    env.storage()
        .temporary()
        .extend_ttl(&key, TTL_THRESHOLD_LEDGERS, DISPUTE_TTL_EXTEND_TO_LEDGERS);
}

pub(crate) fn get_active_challenges(env: &Env, challenger: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::ActiveChallenges(challenger.clone()))
        .unwrap_or(0)
}

pub(crate) fn increment_active_challenges(env: &Env, challenger: &Address) {
    let key = DataKey::ActiveChallenges(challenger.clone());
    let count = get_active_challenges(env, challenger) + 1;
    env.storage().persistent().set(&key, &count);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD_LEDGERS, TTL_EXTEND_TO_LEDGERS);
}

pub(crate) fn decrement_active_challenges(env: &Env, challenger: &Address) {
    let key = DataKey::ActiveChallenges(challenger.clone());
    let count = get_active_challenges(env, challenger).saturating_sub(1);
    env.storage().persistent().set(&key, &count);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD_LEDGERS, TTL_EXTEND_TO_LEDGERS);
}

pub(crate) fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD_LEDGERS, TTL_EXTEND_TO_LEDGERS);
}
