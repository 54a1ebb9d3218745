use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::{token, Address, Bytes, BytesN, Env};

use arbitrator_registry::{ArbitratorRegistry, ArbitratorRegistryClient};
use bonding_core::{BondingCore, BondingCoreClient};

use crate::errors::Error;
use crate::types::{Decision, DisputeStateExternal, Vote};
use crate::{DisputeCore, DisputeCoreClient};

const CHALLENGE_WINDOW: u64 = 3 * 24 * 3600;
const COMMIT_PERIOD: u64 = 2 * 24 * 3600;
const REVEAL_PERIOD: u64 = 2 * 24 * 3600;
const QUORUM: u32 = 3;
const SUPERMAJORITY: u32 = 66;
const CHALLENGE_DEPOSIT: i128 = 1_000;
const MAX_ACTIVE_CHALLENGES: u32 = 3;
const MAX_ESCALATION: u32 = 3;
const DISPUTE_LIFETIME: u64 = 30 * 24 * 3600;
const JURY_PER_TIER: u32 = 3;

const TIER1_MIN: i128 = 1_000;
const TIER2_MIN: i128 = 5_000;
const TIER3_MIN: i128 = 20_000;

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

struct Harness<'a> {
    env: Env,
    contract: DisputeCoreClient<'a>,
    registry: ArbitratorRegistryClient<'a>,
    bonding: BondingCoreClient<'a>,
    challenge_admin: token::StellarAssetClient<'a>,
    fungible_admin: token::StellarAssetClient<'a>,
    native_admin: token::StellarAssetClient<'a>,
    admin: Address,
}

fn setup() -> Harness<'static> {
    let env = setup_env();
    let admin = Address::generate(&env);

    let challenge_sac = env.register_stellar_asset_contract_v2(admin.clone());
    let challenge_admin = token::StellarAssetClient::new(&env, &challenge_sac.address());

    let fungible_sac = env.register_stellar_asset_contract_v2(admin.clone());
    let fungible_admin = token::StellarAssetClient::new(&env, &fungible_sac.address());
    let native_sac = env.register_stellar_asset_contract_v2(admin.clone());
    let native_admin = token::StellarAssetClient::new(&env, &native_sac.address());

    // Both collaborators are constructed with a placeholder dispute_core and
    // repointed once the real dispute-core address is known: the three
    // contracts are mutually referential and none can be registered first.
    let placeholder = Address::generate(&env);

    let registry_id = env.register(
        ArbitratorRegistry,
        (admin.clone(), challenge_sac.address().clone(), placeholder.clone(), TIER1_MIN, TIER2_MIN, TIER3_MIN),
    );
    let registry = ArbitratorRegistryClient::new(&env, &registry_id);

    let bonding_id = env.register(
        BondingCore,
        (
            admin.clone(),
            fungible_sac.address().clone(),
            native_sac.address().clone(),
            placeholder.clone(),
            FUNGIBLE_MULTIPLIER,
            NATIVE_MULTIPLIER,
            MIN_PRICE,
            MAX_PRICE_CHANGE_PERCENT,
            MIN_BOND_NATIVE_VALUE,
        ),
    );
    let bonding = BondingCoreClient::new(&env, &bonding_id);
    bonding.update_price(&SCALE);

    let contract_id = env.register(
        DisputeCore,
        (
            admin.clone(),
            challenge_sac.address().clone(),
            bonding_id.clone(),
            registry_id.clone(),
            CHALLENGE_WINDOW,
            COMMIT_PERIOD,
            REVEAL_PERIOD,
            QUORUM,
            SUPERMAJORITY,
            CHALLENGE_DEPOSIT,
            MAX_ACTIVE_CHALLENGES,
            MAX_ESCALATION,
            DISPUTE_LIFETIME,
            JURY_PER_TIER,
        ),
    );
    let contract = DisputeCoreClient::new(&env, &contract_id);

    registry.update_config(&Some(contract_id.clone()), &None, &None, &None);
    bonding.update_config(&None, &None, &None, &None, &None, &None, &None, &None, &Some(contract_id.clone()));

    Harness {
        env,
        contract,
        registry,
        bonding,
        challenge_admin,
        fungible_admin,
        native_admin,
        admin,
    }
}

fn stake_arbitrators(h: &Harness, n: usize) -> soroban_sdk::Vec<Address> {
    let mut out = soroban_sdk::Vec::new(&h.env);
    for _ in 0..n {
        let arb = Address::generate(&h.env);
        h.challenge_admin.mint(&arb, &TIER1_MIN);
        h.registry.stake(&arb, &TIER1_MIN);
        out.push_back(arb);
    }
    h.env.ledger().set_timestamp(h.env.ledger().timestamp() + 7 * 24 * 3600 + 1);
    out
}

fn fund_bonds(h: &Harness, player: &Address) {
    h.fungible_admin.mint(player, &1_000_000);
    h.native_admin.mint(player, &1_000_000);
    h.bonding.deposit_fungible(player, &1_000_000);
    h.bonding.deposit_native(player, &1_000_000);
}

fn commit_hash(env: &Env, vote: Vote, salt: &BytesN<32>, arb: &Address) -> BytesN<32> {
    use soroban_sdk::xdr::ToXdr;
    let byte: u8 = match vote {
        Vote::None => 0,
        Vote::Legit => 1,
        Vote::Cheat => 2,
        Vote::Abstain => 3,
    };
    let mut bytes = Bytes::new(env);
    bytes.push_back(byte);
    bytes.append(&Bytes::from(salt.clone()));
    bytes.append(&arb.to_xdr(env));
    env.crypto().sha256(&bytes).into()
}

fn salt(env: &Env, seed: u8) -> BytesN<32> {
    BytesN::from_array(env, &[seed; 32])
}

struct Game {
    game: Address,
    white: Address,
    black: Address,
}

fn register_game(h: &Harness) -> Game {
    let game = Address::generate(&h.env);
    let white = Address::generate(&h.env);
    let black = Address::generate(&h.env);
    fund_bonds(h, &white);
    fund_bonds(h, &black);
    h.bonding.lock_bond_pair(&game, &white, &black, &100);
    h.contract.register_game(&game, &white, &black, &100);
    Game { game, white, black }
}

#[test]
fn register_game_is_idempotent() {
    let h = setup();
    let g = register_game(&h);
    // second call for the same game must not reset the snapshot.
    h.contract.register_game(&g.game, &g.white, &g.black, &100);

    let snap = h.contract.dispute_snapshot(&g.game);
    assert_eq!(snap.state, DisputeStateExternal::Pending);
}

#[test]
fn dispute_snapshot_reports_no_dispute_for_an_unregistered_game() {
    let h = setup();
    let unknown = Address::generate(&h.env);
    let snap = h.contract.dispute_snapshot(&unknown);
    assert_eq!(snap.state, DisputeStateExternal::NoDispute);
}

#[test]
fn challenge_after_the_window_fails() {
    let h = setup();
    let g = register_game(&h);
    h.challenge_admin.mint(&g.white, &CHALLENGE_DEPOSIT);

    h.env.ledger().set_timestamp(h.env.ledger().timestamp() + CHALLENGE_WINDOW + 1);
    let result = h.contract.try_challenge(&g.game, &g.white, &g.black);
    assert_eq!(result, Err(Ok(Error::ChallengeWindowExpired)));
}

#[test]
fn challenging_a_non_player_as_accused_fails() {
    let h = setup();
    let g = register_game(&h);
    let outsider = Address::generate(&h.env);
    h.challenge_admin.mint(&g.white, &CHALLENGE_DEPOSIT);

    let result = h.contract.try_challenge(&g.game, &g.white, &outsider);
    assert_eq!(result, Err(Ok(Error::AccusedNotAPlayer)));
}

#[test]
fn close_challenge_window_requires_the_window_to_have_elapsed() {
    let h = setup();
    let g = register_game(&h);

    let result = h.contract.try_close_challenge_window(&g.game);
    assert_eq!(result, Err(Ok(Error::ChallengeWindowStillOpen)));

    h.env.ledger().set_timestamp(h.env.ledger().timestamp() + CHALLENGE_WINDOW + 1);
    h.contract.close_challenge_window(&g.game);
    let snap = h.contract.dispute_snapshot(&g.game);
    assert_eq!(snap.state, DisputeStateExternal::Resolved);
}

#[test]
fn commit_reveal_resolves_cheat_on_supermajority_and_slashes_the_accused() {
    let h = setup();
    let arbs = stake_arbitrators(&h, 9);
    let _ = arbs;
    let g = register_game(&h);
    h.challenge_admin.mint(&g.white, &CHALLENGE_DEPOSIT);

    h.contract.challenge(&g.game, &g.white, &g.black);
    let dispute = h.contract.get_dispute(&g.game).unwrap();
    assert_eq!(dispute.selected_arbitrators.len(), JURY_PER_TIER);

    let votes = [Vote::Cheat, Vote::Cheat, Vote::Cheat];
    for (i, arb) in dispute.selected_arbitrators.iter().enumerate() {
        let vote = votes[i];
        let s = salt(&h.env, i as u8 + 1);
        h.contract.commit_vote(&g.game, &arb, &commit_hash(&h.env, vote, &s, &arb));
    }

    h.env.ledger().set_timestamp(h.env.ledger().timestamp() + COMMIT_PERIOD + 1);
    for (i, arb) in dispute.selected_arbitrators.iter().enumerate() {
        let vote = votes[i];
        let s = salt(&h.env, i as u8 + 1);
        h.contract.reveal_vote(&g.game, &arb, &vote, &s);
    }

    h.contract.resolve_dispute(&g.game);
    let resolved = h.contract.get_dispute(&g.game).unwrap();
    assert_eq!(resolved.final_decision, Decision::Cheat);

    let snap = h.contract.dispute_snapshot(&g.game);
    assert_eq!(snap.state, DisputeStateExternal::Resolved);

    // the accused's locked native stake was seized through bonding-core.
    let accused_bond = h.bonding.get_game_bond(&g.game, &g.black).unwrap();
    assert!(accused_bond.slashed);

    // the challenger was paid 1.5x their deposit.
    let token_client = token::Client::new(&h.env, &h.challenge_admin.address);
    assert_eq!(token_client.balance(&g.white), CHALLENGE_DEPOSIT * 3 / 2);
}

#[test]
fn commit_reveal_resolves_legit_and_refunds_half_the_deposit() {
    let h = setup();
    let arbs = stake_arbitrators(&h, 9);
    let _ = arbs;
    let g = register_game(&h);
    h.challenge_admin.mint(&g.white, &CHALLENGE_DEPOSIT);

    h.contract.challenge(&g.game, &g.white, &g.black);
    let dispute = h.contract.get_dispute(&g.game).unwrap();
    assert_eq!(dispute.selected_arbitrators.len(), JURY_PER_TIER);

    for (i, arb) in dispute.selected_arbitrators.iter().enumerate() {
        let s = salt(&h.env, i as u8 + 1);
        h.contract.commit_vote(&g.game, &arb, &commit_hash(&h.env, Vote::Legit, &s, &arb));
    }
    h.env.ledger().set_timestamp(h.env.ledger().timestamp() + COMMIT_PERIOD + 1);
    for (i, arb) in dispute.selected_arbitrators.iter().enumerate() {
        let s = salt(&h.env, i as u8 + 1);
        h.contract.reveal_vote(&g.game, &arb, &Vote::Legit, &s);
    }

    h.contract.resolve_dispute(&g.game);
    let resolved = h.contract.get_dispute(&g.game).unwrap();
    assert_eq!(resolved.final_decision, Decision::Legit);

    let accused_bond = h.bonding.get_game_bond(&g.game, &g.black).unwrap();
    assert!(!accused_bond.slashed);

    let token_client = token::Client::new(&h.env, &h.challenge_admin.address);
    assert_eq!(token_client.balance(&g.black), CHALLENGE_DEPOSIT / 2);
}

#[test]
fn commit_with_the_wrong_hash_is_caught_on_reveal() {
    let h = setup();
    let _arbs = stake_arbitrators(&h, 1);
    let g = register_game(&h);
    h.challenge_admin.mint(&g.white, &CHALLENGE_DEPOSIT);
    h.contract.challenge(&g.game, &g.white, &g.black);

    let dispute = h.contract.get_dispute(&g.game).unwrap();
    let arb = dispute.selected_arbitrators.get(0).unwrap();
    let s = salt(&h.env, 7);
    // commit to Legit but later attempt to reveal Cheat.
    h.contract.commit_vote(&g.game, &arb, &commit_hash(&h.env, Vote::Legit, &s, &arb));

    h.env.ledger().set_timestamp(h.env.ledger().timestamp() + COMMIT_PERIOD + 1);
    let result = h.contract.try_reveal_vote(&g.game, &arb, &Vote::Cheat, &s);
    assert_eq!(result, Err(Ok(Error::CommitHashMismatch)));
}

#[test]
fn double_commit_is_rejected() {
    let h = setup();
    let _arbs = stake_arbitrators(&h, 1);
    let g = register_game(&h);
    h.challenge_admin.mint(&g.white, &CHALLENGE_DEPOSIT);
    h.contract.challenge(&g.game, &g.white, &g.black);

    let dispute = h.contract.get_dispute(&g.game).unwrap();
    let arb = dispute.selected_arbitrators.get(0).unwrap();
    let s = salt(&h.env, 3);
    h.contract.commit_vote(&g.game, &arb, &commit_hash(&h.env, Vote::Legit, &s, &arb));

    let result = h.contract.try_commit_vote(&g.game, &arb, &commit_hash(&h.env, Vote::Cheat, &s, &arb));
    assert_eq!(result, Err(Ok(Error::AlreadyCommitted)));
}

#[test]
fn quorum_not_met_escalates_with_a_larger_jury() {
    let h = setup();
    let _arbs = stake_arbitrators(&h, 2);
    let g = register_game(&h);
    h.challenge_admin.mint(&g.white, &CHALLENGE_DEPOSIT);
    h.contract.challenge(&g.game, &g.white, &g.black);

    let dispute = h.contract.get_dispute(&g.game).unwrap();
    assert_eq!(dispute.selected_arbitrators.len(), 2);

    // only one of the two jurors reveals: total revealed votes (1) < quorum (3).
    let arb = dispute.selected_arbitrators.get(0).unwrap();
    let s = salt(&h.env, 1);
    h.contract.commit_vote(&g.game, &arb, &commit_hash(&h.env, Vote::Cheat, &s, &arb));

    h.env.ledger().set_timestamp(h.env.ledger().timestamp() + COMMIT_PERIOD + 1);
    h.contract.reveal_vote(&g.game, &arb, &Vote::Cheat, &s);

    h.env.ledger().set_timestamp(h.env.ledger().timestamp() + REVEAL_PERIOD + 1);
    h.contract.resolve_dispute(&g.game);

    let after = h.contract.get_dispute(&g.game).unwrap();
    assert_eq!(after.escalation_level, 1);
    let snap = h.contract.dispute_snapshot(&g.game);
    assert_eq!(snap.state, DisputeStateExternal::Challenged);
}

#[test]
fn exhausting_max_escalation_force_resolves_with_a_full_refund() {
    let h = setup();
    let _arbs = stake_arbitrators(&h, 1);
    let g = register_game(&h);
    h.challenge_admin.mint(&g.white, &CHALLENGE_DEPOSIT);
    h.contract.challenge(&g.game, &g.white, &g.black);

    // nobody ever reveals: every round times out below quorum and escalates,
    // until the max-escalation cap forces a decision-less resolution.
    for _ in 0..=MAX_ESCALATION {
        h.env.ledger().set_timestamp(h.env.ledger().timestamp() + COMMIT_PERIOD + REVEAL_PERIOD + 1);
        h.contract.resolve_dispute(&g.game);
        let d = h.contract.get_dispute(&g.game).unwrap();
        if d.state == crate::types::DisputeState::Resolved {
            break;
        }
    }

    let resolved = h.contract.get_dispute(&g.game).unwrap();
    assert_eq!(resolved.final_decision, Decision::None);

    let token_client = token::Client::new(&h.env, &h.challenge_admin.address);
    assert_eq!(token_client.balance(&g.white), CHALLENGE_DEPOSIT);
}

#[test]
fn active_challenge_cap_blocks_a_third_simultaneous_challenge() {
    let h = setup();
    let white = Address::generate(&h.env);

    for _ in 0..MAX_ACTIVE_CHALLENGES {
        let black = Address::generate(&h.env);
        let game = Address::generate(&h.env);
        fund_bonds(&h, &white);
        fund_bonds(&h, &black);
        h.bonding.lock_bond_pair(&game, &white, &black, &100);
        h.contract.register_game(&game, &white, &black, &100);
        h.challenge_admin.mint(&white, &CHALLENGE_DEPOSIT);
        h.contract.challenge(&game, &white, &black);
    }

    let black = Address::generate(&h.env);
    let game = Address::generate(&h.env);
    fund_bonds(&h, &white);
    fund_bonds(&h, &black);
    h.bonding.lock_bond_pair(&game, &white, &black, &100);
    h.contract.register_game(&game, &white, &black, &100);
    h.challenge_admin.mint(&white, &CHALLENGE_DEPOSIT);

    let result = h.contract.try_challenge(&game, &white, &black);
    assert_eq!(result, Err(Ok(Error::ChallengeCapExceeded)));
}

#[test]
fn pause_blocks_challenge() {
    let h = setup();
    let g = register_game(&h);
    h.contract.pause();

    h.challenge_admin.mint(&g.white, &CHALLENGE_DEPOSIT);
    let result = h.contract.try_challenge(&g.game, &g.white, &g.black);
    assert_eq!(result, Err(Ok(Error::ContractPaused)));

    h.contract.unpause();
    h.contract.challenge(&g.game, &g.white, &g.black);
}

#[test]
fn config_is_wired_through_from_the_constructor() {
    let h = setup();
    let config = h.contract.get_config();
    assert_eq!(config.quorum, QUORUM);
    assert_eq!(config.admin, h.admin);
}
