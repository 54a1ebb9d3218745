use soroban_sdk::{contracttype, Address, Env, Map, Vec};

use crate::errors::Error;
use crate::types::{Arbitrator, Config, OpponentRecord, Tier, MAX_RECENT_OPPONENTS};

/// Instance storage for contract-wide singletons and tier pools (bounded,
/// contract-wide); persistent storage for per-arbitrator records and
/// recent-opponent history, which must outlive any single dispute.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Config,
    Paused,
    TierPool(Tier),
    TierIndex(Tier),
    Arbitrator(Address),
    RecentOpponents(Address),
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

pub(crate) fn get_arbitrator(env: &Env, arb: &Address) -> Option<Arbitrator> {
    env.storage().persistent().get(&DataKey::Arbitrator(arb.clone()))
}

pub(crate) fn set_arbitrator(env: &Env, arb: &Address, record: &Arbitrator) {
    let key = DataKey::Arbitrator(arb.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD_LEDGERS, TTL_EXTEND_TO_LEDGERS);
}

pub(crate) fn get_tier_pool(env: &Env, tier: Tier) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::TierPool(tier))
        .unwrap_or(Vec::new(env))
}

fn set_tier_pool(env: &Env, tier: Tier, pool: &Vec<Address>) {
    env.storage().instance().set(&DataKey::TierPool(tier), pool);
}

fn get_tier_index(env: &Env, tier: Tier) -> Map<Address, u32> {
    env.storage()
        .instance()
        .get(&DataKey::TierIndex(tier))
        .unwrap_or(Map::new(env))
}

fn set_tier_index(env: &Env, tier: Tier, index: &Map<Address, u32>) {
    env.storage().instance().set(&DataKey::TierIndex(tier), index);
}

/// Appends `arb` to `tier`'s pool, recording its index for O(1) removal.
/// No-op if already present.
pub(crate) fn add_to_tier_pool(env: &Env, tier: Tier, arb: &Address) {
    let mut index = get_tier_index(env, tier);
    if index.contains_key(arb.clone()) {
        return;
    }
    let mut pool = get_tier_pool(env, tier);
    index.set(arb.clone(), pool.len());
    pool.push_back(arb.clone());
    set_tier_pool(env, tier, &pool);
    set_tier_index(env, tier, &index);
}

/// Removes `arb` from `tier`'s pool via swap-and-pop: the last element takes
/// the removed slot, and the index map is updated to match. No-op if absent.
pub(crate) fn remove_from_tier_pool(env: &Env, tier: Tier, arb: &Address) {
    let mut index = get_tier_index(env, tier);
    let Some(removed_idx) = index.get(arb.clone()) else {
        return;
    };
    let mut pool = get_tier_pool(env, tier);
    let last_idx = pool.len() - 1;
    let last_addr = pool.get(last_idx).expect("pool non-empty when index present");

    pool.set(removed_idx, last_addr.clone());
    pool.pop_back();
    index.remove(arb.clone());
    if last_addr != *arb {
        index.set(last_addr, removed_idx);
    }

    set_tier_pool(env, tier, &pool);
    set_tier_index(env, tier, &index);
}

pub(crate) fn get_recent_opponents(env: &Env, player: &Address) -> Vec<OpponentRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::RecentOpponents(player.clone()))
        .unwrap_or(Vec::new(env))
}

/// Appends `opponent` to `player`'s recent-opponents history, pruning
/// entries older than `conflict_window_secs` and capping the list so it
/// never grows unbounded.
pub(crate) fn record_opponent(env: &Env, player: &Address, opponent: &Address, now: u64, conflict_window_secs: u64) {
    let key = DataKey::RecentOpponents(player.clone());
    let existing = get_recent_opponents(env, player);
    let mut pruned = Vec::new(env);
    for record in existing.iter() {
        if now.saturating_sub(record.at) <= conflict_window_secs {
            pruned.push_back(record);
        }
    }
    if pruned.len() >= MAX_RECENT_OPPONENTS {
        pruned.remove(0);
    }
    pruned.push_back(OpponentRecord {
        opponent: opponent.clone(),
        at: now,
    });
    env.storage().persistent().set(&key, &pruned);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD_LEDGERS, TTL_EXTEND_TO_LEDGERS);
}

pub(crate) fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD_LEDGERS, TTL_EXTEND_TO_LEDGERS);
}
