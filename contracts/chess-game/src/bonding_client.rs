use soroban_sdk::{contractclient, Address, Env};

/// Stub for bonding-core: a hand-written trait naming only the operations
/// this contract calls, never a path dependency on the bonding-core crate
/// itself.
#[contractclient(name = "Client")]
pub trait Contract {
    fn lock_bond_pair(env: Env, game: Address, white: Address, black: Address, stake: i128);
    fn release_bond(env: Env, game: Address, player: Address);
}
