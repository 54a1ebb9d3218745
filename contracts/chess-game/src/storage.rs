use soroban_sdk::{contracttype, Address, Env, Vec};

use chess_engine::Board;

use crate::errors::Error;
use crate::types::{Config, Game, MoveRecord};

/// Instance storage for contract-wide singletons; temporary storage for the
/// live game (board, move history), which has a natural expiry once the game
/// ends; persistent storage for pending payouts, which must survive until
/// withdrawn regardless of how long after finalization that is.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Config,
    Paused,
    Game,
    Board,
    MoveHistory,
    PendingPayout(Address),
}

const TTL_THRESHOLD_LEDGERS: u32 = 120_960; // ~7 days
const TTL_EXTEND_TO_LEDGERS: u32 = 518_400; // ~30 days

pub(crate) fn get_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).expect("admin not set")
}

pub(crate) fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub(crate) fn get_config(env: &Env) -> Config {
    env.storage().instance().get(&DataKey::Config).expect("config not set")
}

pub(crate) fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub(crate) fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub(crate) fn set_pause_state(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub(crate) fn require_not_paused(env: &Env) -> Result<(), Error> {
    if is_paused(env) {
        Err(Error::ContractPaused)
    } else {
        Ok(())
    }
}

pub(crate) fn get_game(env: &Env) -> Game {
    env.storage().temporary().get(&DataKey::Game).expect("game not initialized")
}

pub(crate) fn set_game(env: &Env, game: &Game) {
    env.storage().temporary().set(&DataKey::Game, game);
    extend_ttl(env, &DataKey::Game);
}

pub(crate) fn get_board(env: &Env) -> Board {
    env.storage().temporary().get(&DataKey::Board).expect("board not initialized")
}

pub(crate) fn set_board(env: &Env, board: &Board) {
    env.storage().temporary().set(&DataKey::Board, board);
    extend_ttl(env, &DataKey::Board);
}

pub(crate) fn get_move_history(env: &Env) -> Vec<MoveRecord> {
    env.storage()
        .temporary()
        .get(&DataKey::MoveHistory)
        .unwrap_or(Vec::new(env))
}

pub(crate) fn push_move_record(env: &Env, record: MoveRecord) {
    let mut history = get_move_history(env);
    if history.len() < crate::types::MAX_MOVE_HISTORY {
        history.push_back(record);
        env.storage().temporary().set(&DataKey::MoveHistory, &history);
        extend_ttl(env, &DataKey::MoveHistory);
    }
}

pub(crate) fn get_pending_payout(env: &Env, player: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::PendingPayout(player.clone()))
        .unwrap_or(0)
}

pub(crate) fn credit_pending_payout(env: &Env, player: &Address, amount: i128) {
    let key = DataKey::PendingPayout(player.clone());
    let current: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    env.storage().persistent().set(&key, &(current + amount));
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD_LEDGERS, TTL_EXTEND_TO_LEDGERS);
}

pub(crate) fn take_pending_payout(env: &Env, player: &Address) -> i128 {
    let key = DataKey::PendingPayout(player.clone());
    let amount: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    if amount > 0 {
        env.storage().persistent().set(&key, &0i128);
    }
    amount
}

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .temporary()
        .extend_ttl(key, TTL_THRESHOLD_LEDGERS, TTL_EXTEND_TO_LEDGERS);
}

pub(crate) fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD_LEDGERS, TTL_EXTEND_TO_LEDGERS);
}
