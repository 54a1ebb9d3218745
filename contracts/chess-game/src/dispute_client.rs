use soroban_sdk::{contractclient, contracttype, Address, Env};

/// Mirrors dispute-core's own `DisputeState` one-for-one; kept as a local
/// copy rather than a crate dependency, the same "stable identifier plus an
/// interface" boundary spec.md §9 calls for.
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

#[contractclient(name = "Client")]
pub trait Contract {
    fn register_game(env: Env, game: Address, player_a: Address, player_b: Address, stake: i128);
    fn dispute_snapshot(env: Env, game: Address) -> DisputeSnapshot;
}
