use soroban_sdk::{token, Address, Env};

use crate::errors::Error;
use crate::events;
use crate::storage;
use crate::types::{Arbitrator, Config, Tier};

pub const VOTING_POWER_DELAY_SECS: u64 = 7 * 24 * 3600;
pub const REPUTATION_INIT: u32 = 100;
pub const REPUTATION_MIN_ACTIVE: u32 = 50;
pub const REPUTATION_MAX: u32 = 200;
pub const VOTE_COOLDOWN_SECS: u64 = 48 * 3600;
pub const MAX_DISPUTES_PER_WEEK: u32 = 5;
pub const WEEK_SECS: u64 = 7 * 24 * 3600;
pub const CONFLICT_WINDOW_SECS: u64 = 30 * 24 * 3600;
pub const YEAR_SECS: u64 = 365 * 24 * 3600;

pub fn tier_for_stake(config: &Config, stake: i128) -> Option<Tier> {
    if stake >= config.tier3_min {
        Some(Tier::Tier3)
    } else if stake >= config.tier2_min {
        Some(Tier::Tier2)
    } else if stake >= config.tier1_min {
        Some(Tier::Tier1)
    } else {
        None
    }
}

/// Voting power per spec.md §4.D: zero if inactive, not yet active, or
/// reputation below the floor; otherwise stake scaled by a time bonus that
/// caps at 100% after one year staked.
pub fn voting_power(arb: &Arbitrator, now: u64) -> i128 {
    if !arb.active || now < arb.voting_power_active_at || arb.reputation < REPUTATION_MIN_ACTIVE {
        return 0;
    }
    let seconds_staked = now.saturating_sub(arb.staked_at);
    let time_bonus_pct = core::cmp::min(100u64, 100 * seconds_staked / YEAR_SECS) as i128;
    arb.stake * (100 + time_bonus_pct) / 100
}

pub fn can_vote(arb: &Arbitrator, now: u64) -> bool {
    arb.active
        && now >= arb.voting_power_active_at
        && arb.reputation >= REPUTATION_MIN_ACTIVE
        && (arb.last_vote_time == 0 || now.saturating_sub(arb.last_vote_time) >= VOTE_COOLDOWN_SECS)
        && current_week_counter(arb, now) < MAX_DISPUTES_PER_WEEK
}

fn current_week_counter(arb: &Arbitrator, now: u64) -> u32 {
    if now >= arb.week_start + WEEK_SECS {
        0
    } else {
        arb.week_counter
    }
}

pub fn stake(env: &Env, arb: &Address, amount: i128) -> Result<(), Error> {
    arb.require_auth();
    let config = storage::get_config(env);
    let now = env.ledger().timestamp();

    match storage::get_arbitrator(env, arb) {
        None => {
            if amount < config.tier1_min {
                return Err(Error::StakeBelowMinimum);
            }
            token::Client::new(env, &config.stake_token).transfer(arb, &env.current_contract_address(), &amount);

            let tier = tier_for_stake(&config, amount).expect("checked minimum above");
            let record = Arbitrator {
                stake: amount,
                tier,
                staked_at: now,
                voting_power_active_at: now + VOTING_POWER_DELAY_SECS,
                reputation: REPUTATION_INIT,
                last_vote_time: 0,
                week_start: now,
                week_counter: 0,
                active: true,
            };
            storage::set_arbitrator(env, arb, &record);
            storage::add_to_tier_pool(env, tier, arb);
            events::emit_arbitrator_staked(env, arb, amount);
            Ok(())
        }
        Some(mut record) => {
            token::Client::new(env, &config.stake_token).transfer(arb, &env.current_contract_address(), &amount);
            record.stake += amount;
            let new_tier = tier_for_stake(&config, record.stake).expect("already above tier1_min");

            if record.active {
                if new_tier != record.tier {
                    storage::remove_from_tier_pool(env, record.tier, arb);
                    storage::add_to_tier_pool(env, new_tier, arb);
                }
            } else if record.reputation >= REPUTATION_MIN_ACTIVE {
                // Re-staking above the minimum after a stake-driven removal
                // rejoins the relevant tier pool; a reputation-driven
                // removal is not undone by staking alone.
                record.active = true;
                storage::add_to_tier_pool(env, new_tier, arb);
            }
            record.tier = new_tier;
            storage::set_arbitrator(env, arb, &record);
            events::emit_arbitrator_staked(env, arb, amount);
            Ok(())
        }
    }
}

/// Withdraws `amount` of an arbitrator's stake. Falling below `Tier1.min`
/// removes the arbitrator from its tier pool and marks it inactive,
/// mirroring the reputation-driven removal in `update_reputation`
/// (spec.md §4.D: "Removed when stake<Tier1.min or reputation<50").
pub fn unstake(env: &Env, arb: &Address, amount: i128) -> Result<(), Error> {
    arb.require_auth();
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let config = storage::get_config(env);
    let mut record = storage::get_arbitrator(env, arb).ok_or(Error::NotStaked)?;
    if amount > record.stake {
        return Err(Error::InsufficientStake);
    }

    record.stake -= amount;
    token::Client::new(env, &config.stake_token).transfer(&env.current_contract_address(), arb, &amount);

    if record.stake < config.tier1_min {
        if record.active {
            storage::remove_from_tier_pool(env, record.tier, arb);
        }
        record.active = false;
        storage::set_arbitrator(env, arb, &record);
        events::emit_arbitrator_unstaked(env, arb, amount, record.stake);
        events::emit_arbitrator_removed(env, arb);
        return Ok(());
    }

    let new_tier = tier_for_stake(&config, record.stake).expect("checked above tier1_min");
    if record.active && new_tier != record.tier {
        storage::remove_from_tier_pool(env, record.tier, arb);
        storage::add_to_tier_pool(env, new_tier, arb);
    }
    record.tier = new_tier;
    storage::set_arbitrator(env, arb, &record);
    events::emit_arbitrator_unstaked(env, arb, amount, record.stake);
    Ok(())
}

/// Records that `player1` and `player2` played a game together, for the
/// 30-day conflict-of-interest exclusion (spec.md §4.D), symmetrically. Only
/// the configured dispute-core may call this, authorizing with its own
/// contract address the way `game.require_auth()` gates bonding-core's
/// `lock_bond_pair`.
pub fn record_game(env: &Env, player1: &Address, player2: &Address) -> Result<(), Error> {
    storage::get_config(env).dispute_core.require_auth();
    let now = env.ledger().timestamp();
    storage::record_opponent(env, player1, player2, now, CONFLICT_WINDOW_SECS);
    storage::record_opponent(env, player2, player1, now, CONFLICT_WINDOW_SECS);
    Ok(())
}

pub fn record_vote(env: &Env, arb: &Address) -> Result<(), Error> {
    storage::get_config(env).dispute_core.require_auth();
    let mut record = storage::get_arbitrator(env, arb).ok_or(Error::NotStaked)?;
    let now = env.ledger().timestamp();

    if now >= record.week_start + WEEK_SECS {
        record.week_start = now;
        record.week_counter = 0;
    }
    record.week_counter += 1;
    record.last_vote_time = now;
    storage::set_arbitrator(env, arb, &record);
    Ok(())
}

/// Moves reputation by +-1, clamped to [0, 200]. Falling below the active
/// threshold removes the arbitrator from its tier pool and marks it
/// inactive (spec.md §4.D).
pub fn update_reputation(env: &Env, arb: &Address, voted_with_majority: bool) -> Result<(), Error> {
    storage::get_config(env).dispute_core.require_auth();
    let mut record = storage::get_arbitrator(env, arb).ok_or(Error::NotStaked)?;

    record.reputation = if voted_with_majority {
        core::cmp::min(REPUTATION_MAX, record.reputation + 1)
    } else {
        record.reputation.saturating_sub(1)
    };

    if record.reputation < REPUTATION_MIN_ACTIVE && record.active {
        storage::remove_from_tier_pool(env, record.tier, arb);
        record.active = false;
        events::emit_arbitrator_removed(env, arb);
    }

    storage::set_arbitrator(env, arb, &record);
    events::emit_reputation_updated(env, arb, record.reputation);
    Ok(())
}
