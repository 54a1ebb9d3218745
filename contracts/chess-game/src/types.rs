use soroban_sdk::{contracttype, Address};

use chess_engine::{Mode, Outcome};

/// Pre-set block-count timeouts a game is created with (spec.md §6).
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TimeoutPreset {
    Fast,
    Medium,
    Slow,
}

impl TimeoutPreset {
    pub fn to_blocks(self) -> u32 {
        match self {
            TimeoutPreset::Fast => 300,
            TimeoutPreset::Medium => 2_100,
            TimeoutPreset::Slow => 50_400,
        }
    }
}

/// Collaborator addresses and their enable/disable flags, the
/// "implementations without dynamic linking" mechanism from spec.md §9.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub native_token: Address,
    pub bonding_core: Address,
    pub bonding_enabled: bool,
    pub dispute_core: Address,
    pub dispute_enabled: bool,
    pub rating_service: Address,
    pub rating_enabled: bool,
    pub reward_service: Address,
    pub reward_enabled: bool,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameState {
    NotStarted,
    InProgress,
    Draw,
    WhiteWins,
    BlackWins,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Draw | GameState::WhiteWins | GameState::BlackWins)
    }

    pub fn from_outcome(outcome: Outcome) -> Option<GameState> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Draw => Some(GameState::Draw),
            Outcome::WhiteWins => Some(GameState::WhiteWins),
            Outcome::BlackWins => Some(GameState::BlackWins),
        }
    }
}

/// Monotone flags gating the cross-subsystem finalization handshake
/// (spec.md §4.B's ordering contract): once set, a flag is never cleared,
/// and every operation it gates becomes a no-op on repeat.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameFlags {
    pub bonds_locked: bool,
    pub dispute_registered: bool,
    pub rating_reported: bool,
    pub finalized: bool,
    pub rewards_distributed: bool,
    pub was_checkmate: bool,
    pub was_resign: bool,
    pub was_timeout: bool,
}

impl GameFlags {
    pub fn new() -> GameFlags {
        GameFlags {
            bonds_locked: false,
            dispute_registered: false,
            rating_reported: false,
            finalized: false,
            rewards_distributed: false,
            was_checkmate: false,
            was_resign: false,
            was_timeout: false,
        }
    }
}

/// Per-game state not owned by the engine's `Board`: players, clocks,
/// mode, draw-offer slot, and the monotone finalization flags.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    pub white_player: Address,
    pub black_player: Option<Address>,
    pub stake: i128,
    pub mode: Mode,
    pub timeout_blocks: u32,
    pub white_last_move_block: u32,
    pub black_last_move_block: u32,
    pub state: GameState,
    pub draw_offered_by: Option<Address>,
    pub flags: GameFlags,
    pub move_count: u32,
}

/// A structured record of one applied move, for `get_move_history`. Bounded
/// per-contract: once `MAX_MOVE_HISTORY` records exist, further moves still
/// play normally but stop being appended, which is documented here rather
/// than silently rotating out earlier history.
pub const MAX_MOVE_HISTORY: u32 = 600;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MoveRecord {
    pub mover: Address,
    pub from_row: u32,
    pub from_col: u32,
    pub to_row: u32,
    pub to_col: u32,
    pub piece: i32,
    pub captured_piece: i32,
    pub promotion_piece: i32,
    pub is_check: bool,
    pub is_mate: bool,
    pub is_castling: bool,
    pub is_en_passant: bool,
}

/// Read-only summary returned by `get_game_info`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameInfo {
    pub white_player: Address,
    pub black_player: Option<Address>,
    pub current_player: Option<Address>,
    pub stake: i128,
    pub mode: Mode,
    pub state: GameState,
    pub draw_offered_by: Option<Address>,
    pub flags: GameFlags,
    pub move_count: u32,
}
