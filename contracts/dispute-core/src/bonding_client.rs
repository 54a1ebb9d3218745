use soroban_sdk::{contractclient, Address, Env};

/// Stub for bonding-core: only the one operation this contract calls,
/// authorizing with its own contract address the way chess-game authorizes
/// `lock_bond_pair`/`release_bond` with its own.
#[contractclient(name = "Client")]
pub trait Contract {
    fn slash_bond(env: Env, game: Address, player: Address) -> (i128, i128);
}
