use soroban_sdk::{contracttype, Address};

/// Stake bracket used to stratify selection (spec.md §4.D).
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Tier {
    Tier1,
    Tier2,
    Tier3,
}

pub const ALL_TIERS: [Tier; 3] = [Tier::Tier1, Tier::Tier2, Tier::Tier3];

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub stake_token: Address,
    /// The single dispute-core deployment allowed to call `select`,
    /// `record_vote`, `update_reputation` and `record_game`.
    pub dispute_core: Address,
    pub tier1_min: i128,
    pub tier2_min: i128,
    pub tier3_min: i128,
}

/// Per-arbitrator record. `week_start`/`week_counter` implement the
/// "max 5 disputes/week" eligibility rule; `last_vote_time` the 48h cooldown.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Arbitrator {
    pub stake: i128,
    pub tier: Tier,
    pub staked_at: u64,
    pub voting_power_active_at: u64,
    pub reputation: u32,
    pub last_vote_time: u64,
    pub week_start: u64,
    pub week_counter: u32,
    pub active: bool,
}

/// One entry in a candidate's recent-opponents history, used for the
/// 30-day conflict-of-interest exclusion (spec.md §4.D).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OpponentRecord {
    pub opponent: Address,
    pub at: u64,
}

/// Bounds the recent-opponents list per arbitrator; entries older than the
/// 30-day conflict window are pruned on every `record_game` append, so this
/// only needs to absorb a burst of very recent games.
pub const MAX_RECENT_OPPONENTS: u32 = 64;
