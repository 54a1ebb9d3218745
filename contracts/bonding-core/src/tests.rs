use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::{token, Address, Env};

use crate::{BondingCore, BondingCoreClient};
use crate::errors::Error;

const FUNGIBLE_MULTIPLIER: i128 = 3;
const NATIVE_MULTIPLIER: i128 = 2;
const MIN_PRICE: i128 = 1;
const MAX_PRICE_CHANGE_PERCENT: u32 = 50;
const MIN_BOND_NATIVE_VALUE: i128 = 0;
const SCALE: i128 = 10_000_000;

fn setup_env() -> Env {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_700_000_000);
    env
}

fn create_token<'a>(env: &Env, admin: &Address) -> token::StellarAssetClient<'a> {
    let sac = env.register_stellar_asset_contract_v2(admin.clone());
    token::StellarAssetClient::new(env, &sac.address())
}

struct Harness<'a> {
    env: Env,
    contract: BondingCoreClient<'a>,
    fungible_admin: token::StellarAssetClient<'a>,
    native_admin: token::StellarAssetClient<'a>,
    admin: Address,
    dispute_core: Address,
}

fn setup() -> Harness<'static> {
    let env = setup_env();
    let admin = Address::generate(&env);
    let dispute_core = Address::generate(&env);

    let fungible_admin = create_token(&env, &admin);
    let native_admin = create_token(&env, &admin);

    let contract_id = env.register(
        BondingCore,
        (
            admin.clone(),
            fungible_admin.address.clone(),
            native_admin.address.clone(),
            dispute_core.clone(),
            FUNGIBLE_MULTIPLIER,
            NATIVE_MULTIPLIER,
            MIN_PRICE,
            MAX_PRICE_CHANGE_PERCENT,
            MIN_BOND_NATIVE_VALUE,
        ),
    );
    let contract = BondingCoreClient::new(&env, &contract_id);
    contract.update_price(&SCALE); // price = 1.0

    Harness {
        env,
        contract,
        fungible_admin,
        native_admin,
        admin,
        dispute_core,
    }
}

#[test]
fn deposit_and_withdraw_round_trips() {
    let h = setup();
    let player = Address::generate(&h.env);

    h.fungible_admin.mint(&player, &1_000);
    h.native_admin.mint(&player, &500);

    h.contract.deposit_fungible(&player, &1_000);
    h.contract.deposit_native(&player, &500);

    let bond = h.contract.get_user_bond(&player);
    assert_eq!(bond.fungible_total, 1_000);
    assert_eq!(bond.native_total, 500);

    h.contract.withdraw(&player, &400, &100);
    let bond = h.contract.get_user_bond(&player);
    assert_eq!(bond.fungible_total, 600);
    assert_eq!(bond.native_total, 400);
}

#[test]
fn withdraw_above_available_fails() {
    let h = setup();
    let player = Address::generate(&h.env);
    h.fungible_admin.mint(&player, &100);
    h.contract.deposit_fungible(&player, &100);

    let result = h.contract.try_withdraw(&player, &200, &0);
    assert_eq!(result, Err(Ok(Error::InsufficientAvailable)));
}

#[test]
fn lock_bond_pair_debits_both_players_atomically() {
    let h = setup();
    let white = Address::generate(&h.env);
    let black = Address::generate(&h.env);
    let game = Address::generate(&h.env);

    for player in [&white, &black] {
        h.fungible_admin.mint(player, &1_000_000);
        h.native_admin.mint(player, &1_000_000);
        h.contract.deposit_fungible(player, &1_000_000);
        h.contract.deposit_native(player, &1_000_000);
    }

    let stake = 100;
    h.contract.lock_bond_pair(&game, &white, &black, &stake);

    let white_bond = h.contract.get_user_bond(&white);
    let black_bond = h.contract.get_user_bond(&black);
    assert_eq!(white_bond.fungible_locked, black_bond.fungible_locked);
    assert_eq!(white_bond.native_locked, stake * NATIVE_MULTIPLIER);
    assert!(white_bond.fungible_locked > 0);

    let white_game_bond = h.contract.get_game_bond(&game, &white).unwrap();
    assert_eq!(white_game_bond.native_amount, stake * NATIVE_MULTIPLIER);
    assert!(!white_game_bond.released);
    assert!(!white_game_bond.slashed);
}

#[test]
fn lock_bond_pair_fails_when_one_side_is_underfunded() {
    let h = setup();
    let white = Address::generate(&h.env);
    let black = Address::generate(&h.env);
    let game = Address::generate(&h.env);

    h.fungible_admin.mint(&white, &1_000_000);
    h.native_admin.mint(&white, &1_000_000);
    h.contract.deposit_fungible(&white, &1_000_000);
    h.contract.deposit_native(&white, &1_000_000);
    // black deposits nothing

    let result = h.contract.try_lock_bond_pair(&game, &white, &black, &100);
    assert_eq!(result, Err(Ok(Error::InsufficientAvailable)));

    // neither side should have anything locked: all-or-nothing.
    let white_bond = h.contract.get_user_bond(&white);
    assert_eq!(white_bond.fungible_locked, 0);
    assert!(h.contract.get_game_bond(&game, &white).is_none());
}

#[test]
fn locking_twice_for_the_same_game_and_player_fails() {
    let h = setup();
    let white = Address::generate(&h.env);
    let black = Address::generate(&h.env);
    let game = Address::generate(&h.env);

    for player in [&white, &black] {
        h.fungible_admin.mint(player, &1_000_000);
        h.native_admin.mint(player, &1_000_000);
        h.contract.deposit_fungible(player, &1_000_000);
        h.contract.deposit_native(player, &1_000_000);
    }

    h.contract.lock_bond_pair(&game, &white, &black, &100);
    let result = h.contract.try_lock_bond_pair(&game, &white, &black, &100);
    assert_eq!(result, Err(Ok(Error::BondAlreadyLocked)));
}

#[test]
fn release_bond_frees_the_locked_amount_without_touching_total() {
    let h = setup();
    let white = Address::generate(&h.env);
    let black = Address::generate(&h.env);
    let game = Address::generate(&h.env);

    for player in [&white, &black] {
        h.fungible_admin.mint(player, &1_000_000);
        h.native_admin.mint(player, &1_000_000);
        h.contract.deposit_fungible(player, &1_000_000);
        h.contract.deposit_native(player, &1_000_000);
    }
    h.contract.lock_bond_pair(&game, &white, &black, &100);

    h.contract.release_bond(&game, &white);
    let bond = h.contract.get_user_bond(&white);
    assert_eq!(bond.fungible_locked, 0);
    assert_eq!(bond.fungible_total, 1_000_000);

    let result = h.contract.try_release_bond(&game, &white);
    assert_eq!(result, Err(Ok(Error::BondAlreadyReleased)));
}

#[test]
fn slash_bond_burns_fungible_and_records_native_seizure() {
    let h = setup();
    let white = Address::generate(&h.env);
    let black = Address::generate(&h.env);
    let game = Address::generate(&h.env);

    for player in [&white, &black] {
        h.fungible_admin.mint(player, &1_000_000);
        h.native_admin.mint(player, &1_000_000);
        h.contract.deposit_fungible(player, &1_000_000);
        h.contract.deposit_native(player, &1_000_000);
    }
    h.contract.lock_bond_pair(&game, &white, &black, &100);

    let (fungible_burned, native_seized) = h.contract.slash_bond(&game, &white);
    assert!(fungible_burned > 0);
    assert_eq!(native_seized, 100 * NATIVE_MULTIPLIER);

    let bond = h.contract.get_user_bond(&white);
    assert_eq!(bond.fungible_locked, 0);
    assert_eq!(bond.fungible_total, 1_000_000 - fungible_burned);
    assert_eq!(bond.native_locked, 0);
    assert_eq!(bond.native_total, 1_000_000 - native_seized);
    // Seized native is neither locked nor available to the slashed player:
    // it must not be withdrawable again.
    assert_eq!(bond.native_available(), 1_000_000 - native_seized);

    let totals = h.contract.get_slash_totals();
    assert_eq!(totals.fungible, fungible_burned);
    assert_eq!(totals.native, native_seized);

    let result = h.contract.try_slash_bond(&game, &white);
    assert_eq!(result, Err(Ok(Error::BondAlreadySlashed)));
}

#[test]
fn circuit_breaker_trips_on_a_large_price_jump_and_blocks_locking() {
    let h = setup();
    // current price is SCALE (1.0); jump to 10x exceeds the 50% band.
    h.contract.update_price(&(SCALE * 10));

    let state = h.contract.get_price_state();
    assert!(state.paused);
    assert_eq!(state.price, SCALE); // unchanged

    let white = Address::generate(&h.env);
    let black = Address::generate(&h.env);
    let game = Address::generate(&h.env);
    let result = h.contract.try_lock_bond_pair(&game, &white, &black, &100);
    assert_eq!(result, Err(Ok(Error::CircuitBreakerPaused)));

    h.contract.unpause_breaker();
    assert!(!h.contract.get_price_state().paused);
}

#[test]
fn override_price_clears_the_breaker_and_adopts_the_new_price() {
    let h = setup();
    h.contract.update_price(&(SCALE * 10));
    assert!(h.contract.get_price_state().paused);

    h.contract.override_price(&(SCALE * 10));
    let state = h.contract.get_price_state();
    assert!(!state.paused);
    assert_eq!(state.price, SCALE * 10);
}

#[test]
fn pause_blocks_deposits() {
    let h = setup();
    h.contract.pause();

    let player = Address::generate(&h.env);
    h.fungible_admin.mint(&player, &100);
    let result = h.contract.try_deposit_fungible(&player, &100);
    assert_eq!(result, Err(Ok(Error::ContractPaused)));

    h.contract.unpause();
    h.contract.deposit_fungible(&player, &100);
    assert_eq!(h.contract.get_user_bond(&player).fungible_total, 100);
}

#[test]
fn quote_required_bond_matches_manual_formula() {
    let h = setup();
    let (fungible, native) = h.contract.quote_required_bond(&1_000);
    assert_eq!(native, 1_000 * NATIVE_MULTIPLIER);
    assert_eq!(fungible, 1_000 * FUNGIBLE_MULTIPLIER); // price is 1.0, so scaled_stake == stake * multiplier

    // dispute_core address is wired through from the constructor.
    assert_eq!(h.contract.get_config().dispute_core, h.dispute_core);
}
