use soroban_sdk::{Address, Env, Vec};

use crate::errors::Error;
use crate::registry::can_vote;
use crate::storage;
use crate::types::{Tier, ALL_TIERS};

fn is_excluded(env: &Env, candidate: &Address, player1: &Address, player2: &Address) -> bool {
    if candidate == player1 || candidate == player2 {
        return true;
    }
    let now = env.ledger().timestamp();
    let recent = storage::get_recent_opponents(env, candidate);
    for record in recent.iter() {
        if (record.opponent == *player1 || record.opponent == *player2)
            && now.saturating_sub(record.at) <= crate::registry::CONFLICT_WINDOW_SECS
        {
            return true;
        }
    }
    false
}

fn select_from_tier(
    env: &Env,
    tier: Tier,
    player1: &Address,
    player2: &Address,
    k: u32,
) -> Vec<Address> {
    let pool = storage::get_tier_pool(env, tier);
    let n = pool.len();
    let mut picked = Vec::new(env);
    if n == 0 || k == 0 {
        return picked;
    }

    let attempt_budget = 2 * n;
    let mut attempts = 0u32;
    while attempts < attempt_budget && picked.len() < k {
        let idx = env.prng().gen_range::<u64>(0..(n as u64)) as u32;
        attempts += 1;

        let candidate = pool.get(idx).expect("idx < n");
        if picked.contains(&candidate) {
            continue;
        }
        if is_excluded(env, &candidate, player1, player2) {
            continue;
        }
        let Some(record) = storage::get_arbitrator(env, &candidate) else {
            continue;
        };
        if !can_vote(&record, env.ledger().timestamp()) {
            continue;
        }
        picked.push_back(candidate);
    }
    picked
}

/// Returns up to `3k` arbitrators: up to `k` independently drawn from each
/// of the three tiers (spec.md §4.D). The result may hold fewer than `3k`
/// if a tier's pool or eligible set is thin; no error is raised for that.
/// Only the configured dispute-core may call this.
pub fn select(env: &Env, player1: &Address, player2: &Address, k: u32) -> Result<Vec<Address>, Error> {
    storage::get_config(env).dispute_core.require_auth();

    let mut all = Vec::new(env);
    for tier in ALL_TIERS {
        let picked = select_from_tier(env, tier, player1, player2, k);
        for addr in picked.iter() {
            all.push_back(addr);
        }
    }
    Ok(all)
}
