use soroban_sdk::contracterror;

/// Error codes for the Dispute Core contract, banded by numeric range:
/// validation 10s, state 20s, authorization 30s, economic 40s,
/// cryptographic 50s, emergency 70s.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ------------------------------------------------------------------
    // Validation (10-19)
    // ------------------------------------------------------------------
    /// `accused` is neither of the dispute's two players.
    AccusedNotAPlayer = 10,
    /// `reveal_vote` was called with `Vote::None`, which is never castable.
    InvalidVote = 11,

    // ------------------------------------------------------------------
    // State (20-29)
    // ------------------------------------------------------------------
    DisputeNotFound = 20,
    DisputeNotPending = 21,
    DisputeNotChallenged = 22,
    /// The challenge window named in `Config::challenge_window_secs` has
    /// already elapsed since `registered_at`.
    ChallengeWindowExpired = 23,
    /// `close_challenge_window` was called before the window elapsed.
    ChallengeWindowStillOpen = 24,
    NotInCommitPhase = 25,
    NotInRevealPhase = 26,
    AlreadyCommitted = 27,
    AlreadyRevealed = 28,
    NoCommitFound = 29,

    // ------------------------------------------------------------------
    // Authorization (30-39)
    // ------------------------------------------------------------------
    NotAdmin = 30,
    NotSelectedArbitrator = 31,

    // ------------------------------------------------------------------
    // Economic (40-49)
    // ------------------------------------------------------------------
    ChallengeCapExceeded = 40,

    // ------------------------------------------------------------------
    // Cryptographic (50-59)
    // ------------------------------------------------------------------
    CommitHashMismatch = 50,

    // ------------------------------------------------------------------
    // Emergency (70-79)
    // ------------------------------------------------------------------
    ContractPaused = 70,
}
