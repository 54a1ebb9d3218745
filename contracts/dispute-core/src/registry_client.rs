use soroban_sdk::{contractclient, Address, Env, Vec};

/// Stub for arbitrator-registry's dispute-core-only surface, named the same
/// way the bonding-core stub is: one trait per collaborator, never a path
/// dependency on its crate.
#[contractclient(name = "Client")]
pub trait Contract {
    fn record_game(env: Env, player1: Address, player2: Address);
    fn select(env: Env, player1: Address, player2: Address, k: u32) -> Vec<Address>;
    fn record_vote(env: Env, arb: Address);
    fn update_reputation(env: Env, arb: Address, voted_with_majority: bool);
}
