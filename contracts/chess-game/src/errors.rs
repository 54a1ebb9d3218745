use soroban_sdk::contracterror;

use chess_engine::EngineError;

/// Error codes for the Game Instance contract, banded by numeric range:
/// validation 10s, state 20s, authorization 30s, economic 40s, emergency 70s.
/// There is no cryptographic band here; commit-reveal lives in dispute-core.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ------------------------------------------------------------------
    // Validation (10-19) — one per chess-engine failure mode.
    // ------------------------------------------------------------------
    OutOfBounds = 10,
    WrongTurn = 11,
    NotYourPiece = 12,
    EmptySourceSquare = 13,
    InvalidPattern = 14,
    InvalidPromotion = 15,
    CastlingThroughAttack = 16,
    CastlingRightsLost = 17,
    CastlingPathBlocked = 18,
    MoveLeavesKingInCheck = 19,

    // ------------------------------------------------------------------
    // State (20-29)
    // ------------------------------------------------------------------
    GameNotInProgress = 20,
    GameAlreadyStarted = 21,
    NoDrawOffer = 22,
    NotYetTimedOut = 23,
    AlreadyFinalized = 24,
    NoRepetitionClaim = 25,
    NoFiftyMoveClaim = 26,
    /// `finalizePrizes` was called while a dispute is open and neither
    /// resolved nor past its challenge window.
    DisputeNotResolved = 27,

    // ------------------------------------------------------------------
    // Authorization (30-39)
    // ------------------------------------------------------------------
    NotAPlayer = 30,
    NotOpponent = 31,
    NotOfferer = 32,
    /// `join` called with a black address equal to the white address.
    SamePlayer = 33,
    NotAdmin = 34,

    // ------------------------------------------------------------------
    // Economic (40-49)
    // ------------------------------------------------------------------
    StakeMismatch = 40,
    ZeroWithdrawal = 41,
    NoPendingPayout = 42,

    // ------------------------------------------------------------------
    // Emergency (70-79)
    // ------------------------------------------------------------------
    ContractPaused = 70,
}

impl From<EngineError> for Error {
    fn from(err: EngineError) -> Error {
        match err {
            EngineError::GameNotInProgress => Error::GameNotInProgress,
            EngineError::OutOfBounds => Error::OutOfBounds,
            EngineError::WrongTurn => Error::WrongTurn,
            EngineError::NotYourPiece => Error::NotYourPiece,
            EngineError::EmptySourceSquare => Error::EmptySourceSquare,
            EngineError::InvalidPattern => Error::InvalidPattern,
            EngineError::InvalidPromotion => Error::InvalidPromotion,
            EngineError::CastlingThroughAttack => Error::CastlingThroughAttack,
            EngineError::CastlingRightsLost => Error::CastlingRightsLost,
            EngineError::CastlingPathBlocked => Error::CastlingPathBlocked,
            EngineError::MoveLeavesKingInCheck => Error::MoveLeavesKingInCheck,
            EngineError::NoRepetitionClaim => Error::NoRepetitionClaim,
            EngineError::NoFiftyMoveClaim => Error::NoFiftyMoveClaim,
        }
    }
}
