use soroban_sdk::{contracttype, Address, Vec};

/// Mirrors spec.md §3's `Dispute.state`, with the two-stage `Challenged`/
/// `Revealing` split spec.md §4.E's state machine draws between commit and
/// reveal.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DisputeState {
    Pending,
    Challenged,
    Revealing,
    Resolved,
}

/// The same state machine plus a `NoDispute` case for games that never had
/// one registered, exposed to chess-game through `dispute_snapshot` so it
/// never has to special-case "no dispute core configured" differently from
/// "no dispute for this game yet" (spec.md §4.B's `finalizePrizes` gate).
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DisputeStateExternal {
    NoDispute,
    Pending,
    Challenged,
    Revealing,
    Resolved,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisputeSnapshot {
    pub state: DisputeStateExternal,
    pub challenge_window_ends_at: u64,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Decision {
    None,
    Legit,
    Cheat,
}

/// A commit-reveal vote. `None` is the sentinel stored before reveal; it is
/// never a valid choice to cast (spec.md §4.E only names Legit/Cheat/Abstain
/// as castable votes).
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Vote {
    None,
    Legit,
    Cheat,
    Abstain,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    /// Fungible token challenge deposits and payouts move through, the same
    /// token bonding-core prices the fungible bond portion against.
    pub challenge_token: Address,
    pub bonding_core: Address,
    pub arbitrator_registry: Address,
    pub challenge_window_secs: u64,
    pub commit_period_secs: u64,
    pub reveal_period_secs: u64,
    pub quorum: u32,
    /// Percent, e.g. 66 for two-thirds.
    pub supermajority_percent: u32,
    pub challenge_deposit: i128,
    pub max_active_challenges: u32,
    pub max_escalation: u32,
    pub dispute_lifetime_secs: u64,
    /// Jurors drawn per tier at initial challenge; escalation rounds draw
    /// `initial_jury_per_tier + 2 * escalation_level` (spec.md §4.E).
    pub initial_jury_per_tier: u32,
}

/// Per-game dispute record. `player_a`/`player_b` are threaded through from
/// `register_game` so selection exclusion and the `otherPlayer` concept
/// from spec.md §3/§9 work without relying solely on the Registry's own
/// recorded game pairing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dispute {
    pub player_a: Address,
    pub player_b: Address,
    pub challenger: Option<Address>,
    pub accused: Option<Address>,
    pub game_stake: i128,
    pub state: DisputeState,
    pub registered_at: u64,
    pub challenged_at: u64,
    pub commit_deadline: u64,
    pub reveal_deadline: u64,
    pub legit_votes: u32,
    pub cheat_votes: u32,
    pub abstain_votes: u32,
    pub final_decision: Decision,
    pub selected_arbitrators: Vec<Address>,
    pub escalation_level: u32,
    pub challenger_deposit: i128,
}

/// One arbitrator's commit-reveal vote for one round of one dispute.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCommit {
    pub commit_hash: soroban_sdk::BytesN<32>,
    pub revealed: bool,
    pub vote: Vote,
}
