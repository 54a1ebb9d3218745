use soroban_sdk::{contractclient, Address, Env};

/// Reward/play-to-earn accounting is out of scope (spec.md §1); stub for
/// the single best-effort operation Game Instance calls at finalization.
#[contractclient(name = "Client")]
pub trait Contract {
    #[allow(clippy::too_many_arguments)]
    fn distribute_reward(
        env: Env,
        player: Address,
        opponent: Address,
        is_winner: bool,
        is_draw: bool,
        is_checkmate: bool,
        move_count: u32,
        was_resign: bool,
        was_timeout: bool,
    );
}
