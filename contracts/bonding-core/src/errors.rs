use soroban_sdk::contracterror;

/// Error codes for the Bonding Core contract, banded by numeric range:
/// validation 10s, state 20s, authorization 30s, economic 40s, math 60s,
/// emergency 70s. Bonding Core has no cryptographic surface of its own, so
/// the 50s band is unused here.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ------------------------------------------------------------------
    // Validation (10-19)
    // ------------------------------------------------------------------
    /// A deposit/withdraw amount was zero or negative.
    InvalidAmount = 10,

    // ------------------------------------------------------------------
    // State (20-29)
    // ------------------------------------------------------------------
    /// A `GameBond` already exists for this `(game, player)`.
    BondAlreadyLocked = 20,
    /// No `GameBond` exists for this `(game, player)`.
    BondNotFound = 21,
    /// The `GameBond` was already released.
    BondAlreadyReleased = 22,
    /// The `GameBond` was already slashed.
    BondAlreadySlashed = 23,

    // ------------------------------------------------------------------
    // Authorization (30-39)
    // ------------------------------------------------------------------
    NotAdmin = 30,
    /// Caller is not the dispute-core contract configured for this deployment.
    NotDisputeRole = 31,

    // ------------------------------------------------------------------
    // Economic (40-49)
    // ------------------------------------------------------------------
    /// A player's available (total - locked) balance can't cover the
    /// required bond or the requested withdrawal.
    InsufficientAvailable = 40,
    /// The maintained price is below `MIN_PRICE`; required-bond computation
    /// refuses to divide by an unreliable price.
    PriceBelowFloor = 41,
    /// The price circuit breaker is tripped; no price-dependent operation
    /// may proceed until an admin explicitly clears it.
    CircuitBreakerPaused = 42,

    // ------------------------------------------------------------------
    // Math (60-69)
    // ------------------------------------------------------------------
    Overflow = 60,

    // ------------------------------------------------------------------
    // Emergency (70-79)
    // ------------------------------------------------------------------
    ContractPaused = 70,
}
