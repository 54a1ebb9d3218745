use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::Env;

use crate::errors::Error;
use crate::events;
use crate::storage;
use crate::types::{Config, PriceState, SCALE};

/// `requiredNative = stake * nativeMultiplier`;
/// `requiredFungible = max(floor, stake * fungibleMultiplier * SCALE / price)`,
/// `floor = minBondNativeValue * SCALE / price`. Fails below `MIN_PRICE` or
/// while the circuit breaker is tripped, per spec.md §4.C.
pub fn required_bond(config: &Config, price_state: &PriceState, stake: i128) -> Result<(i128, i128), Error> {
    if price_state.paused {
        return Err(Error::CircuitBreakerPaused);
    }
    if price_state.price < config.min_price {
        return Err(Error::PriceBelowFloor);
    }

    let required_native = stake
        .checked_mul(config.native_multiplier)
        .ok_or(Error::Overflow)?;

    let floor = config
        .min_bond_native_value
        .fixed_mul_floor(SCALE, price_state.price)
        .ok_or(Error::Overflow)?;

    let scaled_stake = stake
        .checked_mul(config.fungible_multiplier)
        .ok_or(Error::Overflow)?
        .fixed_mul_floor(SCALE, price_state.price)
        .ok_or(Error::Overflow)?;

    let required_fungible = if scaled_stake > floor { scaled_stake } else { floor };

    Ok((required_fungible, required_native))
}

/// Admin-only price update with the manipulation-resistance circuit
/// breaker: a change exceeding `max_price_change_percent` against the last
/// known-good price pauses price-dependent operations instead of adopting
/// the new price, so a front-running update can't slash a stale lock
/// (spec.md §5(d)).
pub fn update_price(env: &Env, new_price: i128) -> Result<(), Error> {
    let config = storage::get_config(env);
    config.admin.require_auth();

    let mut state = storage::get_price_state(env);
    let old_price = state.price;

    if old_price > 0 {
        let delta = (new_price - old_price).abs();
        let percent = delta.saturating_mul(100) / old_price;
        if percent > config.max_price_change_percent as i128 {
            state.paused = true;
            storage::set_price_state(env, &state);
            events::emit_circuit_breaker_triggered(env, old_price, new_price);
            return Ok(());
        }
    }

    state.price = new_price;
    state.last_price = new_price;
    storage::set_price_state(env, &state);
    events::emit_price_updated(env, old_price, new_price);
    Ok(())
}

/// Admin override that sets both `price` and `last_price` directly and
/// clears the breaker, for the case where the new price is intentional and
/// legitimately outside the normal band (e.g. after a long admin outage).
pub fn override_price(env: &Env, new_price: i128) -> Result<(), Error> {
    let config = storage::get_config(env);
    config.admin.require_auth();

    let mut state = storage::get_price_state(env);
    let old_price = state.price;
    state.price = new_price;
    state.last_price = new_price;
    state.paused = false;
    storage::set_price_state(env, &state);
    events::emit_price_updated(env, old_price, new_price);
    Ok(())
}

pub fn unpause_breaker(env: &Env) -> Result<(), Error> {
    let config = storage::get_config(env);
    config.admin.require_auth();

    let mut state = storage::get_price_state(env);
    state.paused = false;
    storage::set_price_state(env, &state);
    Ok(())
}
