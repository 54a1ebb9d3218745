use soroban_sdk::{token, Address, Env};

use crate::errors::Error;
use crate::events;
use crate::pricing;
use crate::storage;
use crate::types::GameBond;

/// Deposits `amount` of the fungible token into the caller's bond ledger.
pub fn deposit_fungible(env: &Env, player: &Address, amount: i128) -> Result<(), Error> {
    player.require_auth();
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let config = storage::get_config(env);
    let mut bond = storage::get_user_bond(env, player);
    bond.fungible_total += amount;
    storage::set_user_bond(env, player, &bond);

    token::Client::new(env, &config.fungible_token).transfer(player, &env.current_contract_address(), &amount);
    events::emit_bond_deposited(env, player, amount, 0);
    Ok(())
}

/// Deposits `amount` of the native asset into the caller's bond ledger.
pub fn deposit_native(env: &Env, player: &Address, amount: i128) -> Result<(), Error> {
    player.require_auth();
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let config = storage::get_config(env);
    let mut bond = storage::get_user_bond(env, player);
    bond.native_total += amount;
    storage::set_user_bond(env, player, &bond);

    token::Client::new(env, &config.native_token).transfer(player, &env.current_contract_address(), &amount);
    events::emit_bond_deposited(env, player, 0, amount);
    Ok(())
}

/// Withdraws up to `available = total - locked` in either currency. Native
/// withdrawal is a direct transfer here (not a multi-payee distribution, so
/// the pull-payment requirement from spec.md §5 doesn't apply the way it
/// does to Game Instance prize splits) but still follows check-effects-
/// interactions: the ledger is debited before the token call.
pub fn withdraw(env: &Env, player: &Address, fungible_amount: i128, native_amount: i128) -> Result<(), Error> {
    player.require_auth();
    if fungible_amount < 0 || native_amount < 0 || (fungible_amount == 0 && native_amount == 0) {
        return Err(Error::InvalidAmount);
    }

    let config = storage::get_config(env);
    let mut bond = storage::get_user_bond(env, player);

    if fungible_amount > bond.fungible_available() || native_amount > bond.native_available() {
        return Err(Error::InsufficientAvailable);
    }

    bond.fungible_total -= fungible_amount;
    bond.native_total -= native_amount;
    storage::set_user_bond(env, player, &bond);

    if fungible_amount > 0 {
        token::Client::new(env, &config.fungible_token).transfer(
            &env.current_contract_address(),
            player,
            &fungible_amount,
        );
    }
    if native_amount > 0 {
        token::Client::new(env, &config.native_token).transfer(&env.current_contract_address(), player, &native_amount);
    }

    events::emit_bond_withdrawn(env, player, fungible_amount, native_amount);
    Ok(())
}

/// Locks both players' required bond for `game` atomically: either both
/// players have sufficient available balance and both locks are written, or
/// neither is (spec.md §4.C, §5's "a Game Instance never enters a
/// half-bonded state"). `game` is the calling chess-game contract's own
/// address, standing in for the `gameId` of spec.md.
pub fn lock_bond_pair(env: &Env, game: &Address, white: &Address, black: &Address, stake: i128) -> Result<(), Error> {
    game.require_auth();
    storage::require_not_paused(env)?;

    if storage::get_game_bond(env, game, white).is_some() || storage::get_game_bond(env, game, black).is_some() {
        return Err(Error::BondAlreadyLocked);
    }

    let config = storage::get_config(env);
    let price_state = storage::get_price_state(env);
    let (required_fungible, required_native) = pricing::required_bond(&config, &price_state, stake)?;

    let mut white_bond = storage::get_user_bond(env, white);
    let mut black_bond = storage::get_user_bond(env, black);
    if white_bond.fungible_available() < required_fungible || white_bond.native_available() < required_native {
        return Err(Error::InsufficientAvailable);
    }
    if black_bond.fungible_available() < required_fungible || black_bond.native_available() < required_native {
        return Err(Error::InsufficientAvailable);
    }

    white_bond.fungible_locked += required_fungible;
    white_bond.native_locked += required_native;
    black_bond.fungible_locked += required_fungible;
    black_bond.native_locked += required_native;
    storage::set_user_bond(env, white, &white_bond);
    storage::set_user_bond(env, black, &black_bond);

    let game_bond = GameBond {
        fungible_amount: required_fungible,
        native_amount: required_native,
        released: false,
        slashed: false,
    };
    storage::set_game_bond(env, game, white, &game_bond);
    storage::set_game_bond(env, game, black, &game_bond);

    events::emit_bond_locked(env, game, white, required_fungible, required_native);
    events::emit_bond_locked(env, game, black, required_fungible, required_native);
    Ok(())
}

/// Locks a single player's required bond for `game`, for deployments that
/// lock each side as it joins rather than both at once.
pub fn lock_bond_single(env: &Env, game: &Address, player: &Address, stake: i128) -> Result<(), Error> {
    game.require_auth();
    storage::require_not_paused(env)?;

    if storage::get_game_bond(env, game, player).is_some() {
        return Err(Error::BondAlreadyLocked);
    }

    let config = storage::get_config(env);
    let price_state = storage::get_price_state(env);
    let (required_fungible, required_native) = pricing::required_bond(&config, &price_state, stake)?;

    let mut bond = storage::get_user_bond(env, player);
    if bond.fungible_available() < required_fungible || bond.native_available() < required_native {
        return Err(Error::InsufficientAvailable);
    }

    bond.fungible_locked += required_fungible;
    bond.native_locked += required_native;
    storage::set_user_bond(env, player, &bond);

    storage::set_game_bond(
        env,
        game,
        player,
        &GameBond {
            fungible_amount: required_fungible,
            native_amount: required_native,
            released: false,
            slashed: false,
        },
    );

    events::emit_bond_locked(env, game, player, required_fungible, required_native);
    Ok(())
}

/// Releases a player's locked bond back to their available balance. Only
/// the game contract that created the lock may call this; it authorizes
/// with its own contract address rather than a human signature.
pub fn release_bond(env: &Env, game: &Address, player: &Address) -> Result<(), Error> {
    game.require_auth();

    let mut game_bond = storage::get_game_bond(env, game, player).ok_or(Error::BondNotFound)?;
    if game_bond.released {
        return Err(Error::BondAlreadyReleased);
    }
    if game_bond.slashed {
        return Err(Error::BondAlreadySlashed);
    }

    let mut user_bond = storage::get_user_bond(env, player);
    user_bond.fungible_locked -= game_bond.fungible_amount;
    user_bond.native_locked -= game_bond.native_amount;
    storage::set_user_bond(env, player, &user_bond);

    game_bond.released = true;
    storage::set_game_bond(env, game, player, &game_bond);

    events::emit_bond_released(env, game, player);
    Ok(())
}

/// Slashes a player's locked bond: the fungible portion is burned
/// (permanent supply reduction), the native portion is seized into the
/// contract's slashed-totals accounting for later admin transfer to a
/// treasury. Only dispute-core (a fixed, configured singleton) may call
/// this, so no per-game identity check is needed — `config.dispute_core`
/// is the only principal ever authorized.
pub fn slash_bond(env: &Env, game: &Address, player: &Address) -> Result<(i128, i128), Error> {
    let config = storage::get_config(env);
    config.dispute_core.require_auth();

    let mut game_bond = storage::get_game_bond(env, game, player).ok_or(Error::BondNotFound)?;
    if game_bond.released {
        return Err(Error::BondAlreadyReleased);
    }
    if game_bond.slashed {
        return Err(Error::BondAlreadySlashed);
    }

    let mut user_bond = storage::get_user_bond(env, player);
    user_bond.fungible_locked -= game_bond.fungible_amount;
    user_bond.fungible_total -= game_bond.fungible_amount;
    user_bond.native_locked -= game_bond.native_amount;
    user_bond.native_total -= game_bond.native_amount;
    storage::set_user_bond(env, player, &user_bond);

    game_bond.slashed = true;
    storage::set_game_bond(env, game, player, &game_bond);

    let mut totals = storage::get_slash_totals(env);
    totals.fungible += game_bond.fungible_amount;
    totals.native += game_bond.native_amount;
    storage::set_slash_totals(env, &totals);

    if game_bond.fungible_amount > 0 {
        token::Client::new(env, &config.fungible_token).burn(&env.current_contract_address(), &game_bond.fungible_amount);
    }

    events::emit_bond_slashed(env, game, player, game_bond.fungible_amount, game_bond.native_amount);
    Ok((game_bond.fungible_amount, game_bond.native_amount))
}
