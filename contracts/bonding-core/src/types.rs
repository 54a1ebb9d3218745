use soroban_sdk::{contracttype, Address};

/// Fixed-point scale applied to the fungible/native price so that bond math
/// stays in integer arithmetic.
pub const SCALE: i128 = 10_000_000;

/// Global, admin-tunable parameters. Collaborator addresses plus every
/// numeric knob named in spec.md §6 that Bonding Core owns.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub fungible_token: Address,
    pub native_token: Address,
    /// The single dispute-core deployment allowed to call `slash_bond`.
    pub dispute_core: Address,
    /// Required-fungible multiplier against stake (spec default 3).
    pub fungible_multiplier: i128,
    /// Required-native multiplier against stake (spec default 2).
    pub native_multiplier: i128,
    /// Hard floor below which price is considered unreliable.
    pub min_price: i128,
    /// Circuit-breaker band, percent (spec default 50).
    pub max_price_change_percent: u32,
    /// Minimum required-fungible value expressed in native units (spec
    /// default 0.01 units, itself scaled by the caller's decimal convention).
    pub min_bond_native_value: i128,
}

/// The maintained fungible/native price and circuit-breaker state. Kept
/// apart from `Config` because it changes on a different cadence: price
/// updates are frequent, config changes are rare.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceState {
    pub price: i128,
    pub last_price: i128,
    /// Circuit-breaker pause, distinct from the admin emergency pause.
    pub paused: bool,
}

/// Per-user bond ledger in both currencies. `available = total - locked`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserBond {
    pub fungible_total: i128,
    pub fungible_locked: i128,
    pub native_total: i128,
    pub native_locked: i128,
}

impl UserBond {
    pub fn empty() -> UserBond {
        UserBond {
            fungible_total: 0,
            fungible_locked: 0,
            native_total: 0,
            native_locked: 0,
        }
    }

    pub fn fungible_available(&self) -> i128 {
        self.fungible_total - self.fungible_locked
    }

    pub fn native_available(&self) -> i128 {
        self.native_total - self.native_locked
    }
}

/// The portion of a player's bond locked behind one specific game.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameBond {
    pub fungible_amount: i128,
    pub native_amount: i128,
    pub released: bool,
    pub slashed: bool,
}

/// Running totals of slashed value, kept so the invariant "sum of user
/// native balances + slashed native = Bonding Core native balance" is
/// directly queryable as a running cross-check.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct SlashTotals {
    pub fungible: i128,
    pub native: i128,
}
