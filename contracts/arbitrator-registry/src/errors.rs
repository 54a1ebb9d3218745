use soroban_sdk::contracterror;

/// Error codes for the Arbitrator Registry, banded by numeric range:
/// validation 10s, state 20s, authorization 30s, economic 40s, emergency 70s.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ------------------------------------------------------------------
    // Validation (10-19)
    // ------------------------------------------------------------------
    InvalidAmount = 10,

    // ------------------------------------------------------------------
    // State (20-29)
    // ------------------------------------------------------------------
    NotStaked = 20,
    AlreadyInactive = 21,

    // ------------------------------------------------------------------
    // Authorization (30-39)
    // ------------------------------------------------------------------
    NotAdmin = 30,
    NotAuthorizedCaller = 31,

    // ------------------------------------------------------------------
    // Economic (40-49)
    // ------------------------------------------------------------------
    StakeBelowMinimum = 40,
    InsufficientStake = 41,

    // ------------------------------------------------------------------
    // Emergency (70-79)
    // ------------------------------------------------------------------
    ContractPaused = 70,
}
