use soroban_sdk::{contractclient, Address, Env};

/// Rating service is out of scope (spec.md §1); this stub names only the
/// single operation Game Instance calls, best-effort (spec.md §6).
#[contractclient(name = "Client")]
pub trait Contract {
    /// `result`: 0 = draw, 1 = white, 2 = black.
    fn report_game(env: Env, white: Address, black: Address, result: u32);
}
