use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::{token, Address, Env};

use chess_engine::{ChessMove, Mode, Promotion};

use crate::errors::Error;
use crate::types::{GameState, TimeoutPreset};
use crate::{ChessGame, ChessGameClient};

fn setup_env() -> Env {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_700_000_000);
    env.ledger().set_sequence_number(1_000);
    env
}

fn create_native<'a>(env: &Env, admin: &Address) -> token::StellarAssetClient<'a> {
    let sac = env.register_stellar_asset_contract_v2(admin.clone());
    token::StellarAssetClient::new(env, &sac.address())
}

struct Harness<'a> {
    env: Env,
    contract: ChessGameClient<'a>,
    native: token::StellarAssetClient<'a>,
    white: Address,
    black: Address,
}

const STAKE: i128 = 1_000;

fn setup_with_mode(mode: Mode) -> Harness<'static> {
    let env = setup_env();
    let admin = Address::generate(&env);
    let white = Address::generate(&env);
    let black = Address::generate(&env);

    let native = create_native(&env, &admin);
    native.mint(&white, &STAKE);
    native.mint(&black, &STAKE);

    // Every collaborator disabled: these tests exercise the board, clocks,
    // and pull-payment settlement in isolation.
    let disabled = Address::generate(&env);

    let contract_id = env.register(
        ChessGame,
        (
            admin,
            white.clone(),
            STAKE,
            mode,
            TimeoutPreset::Fast,
            native.address.clone(),
            disabled.clone(),
            false,
            disabled.clone(),
            false,
            disabled.clone(),
            false,
            disabled,
            false,
        ),
    );
    let contract = ChessGameClient::new(&env, &contract_id);

    Harness {
        env,
        contract,
        native,
        white,
        black,
    }
}

fn setup() -> Harness<'static> {
    setup_with_mode(Mode::Tournament)
}

fn mv(from_row: u32, from_col: u32, to_row: u32, to_col: u32) -> ChessMove {
    ChessMove {
        from_row,
        from_col,
        to_row,
        to_col,
        promotion: Promotion::None,
    }
}

#[test]
fn join_locks_both_stakes_and_starts_the_clock() {
    let h = setup();
    assert_eq!(h.contract.get_game_info().state, GameState::NotStarted);

    h.contract.join(&h.black);
    let info = h.contract.get_game_info();
    assert_eq!(info.state, GameState::InProgress);
    assert_eq!(info.black_player, Some(h.black.clone()));
    assert_eq!(info.current_player, Some(h.white.clone()));

    // both stakes now held by the contract, neither player's balance left.
    let token_client = token::Client::new(&h.env, &h.native.address);
    assert_eq!(token_client.balance(&h.white), 0);
    assert_eq!(token_client.balance(&h.black), 0);
}

#[test]
fn join_twice_fails() {
    let h = setup();
    h.contract.join(&h.black);
    let result = h.contract.try_join(&h.black);
    assert_eq!(result, Err(Ok(Error::GameAlreadyStarted)));
}

#[test]
fn join_with_white_as_black_fails() {
    let h = setup();
    let result = h.contract.try_join(&h.white);
    assert_eq!(result, Err(Ok(Error::SamePlayer)));
}

#[test]
fn fools_mate_ends_the_game_and_pays_the_winner() {
    let h = setup();
    h.contract.join(&h.black);

    h.contract.make_move(&h.white, &mv(1, 5, 2, 5)); // f2-f3
    h.contract.make_move(&h.black, &mv(6, 4, 4, 4)); // e7-e5
    h.contract.make_move(&h.white, &mv(1, 6, 3, 6)); // g2-g4
    h.contract.make_move(&h.black, &mv(7, 3, 3, 7)); // Qd8-h4#

    let info = h.contract.get_game_info();
    assert_eq!(info.state, GameState::BlackWins);
    assert!(info.flags.was_checkmate);
    assert!(!info.flags.finalized); // terminal transition alone doesn't finalize

    h.contract.finalize_prizes();
    let amount = h.contract.withdraw_prize(&h.black);
    assert_eq!(amount, STAKE * 2);

    let token_client = token::Client::new(&h.env, &h.native.address);
    assert_eq!(token_client.balance(&h.black), STAKE * 2);
}

#[test]
fn wrong_turn_is_rejected_without_mutating_the_board() {
    let h = setup();
    h.contract.join(&h.black);

    let result = h.contract.try_make_move(&h.black, &mv(6, 4, 4, 4));
    assert_eq!(result, Err(Ok(Error::WrongTurn)));
    assert_eq!(h.contract.get_game_info().move_count, 0);
}

#[test]
fn friendly_mode_rejects_illegal_moves_instead_of_forfeiting() {
    let h = setup_with_mode(Mode::Friendly);
    h.contract.join(&h.black);

    // knight can't jump straight forward from b1 to b3.
    let result = h.contract.try_make_move(&h.white, &mv(0, 1, 2, 1));
    assert_eq!(result, Err(Ok(Error::InvalidPattern)));
    assert_eq!(h.contract.get_game_info().state, GameState::InProgress);
}

#[test]
fn kingside_castling_moves_both_king_and_rook() {
    let h = setup();
    h.contract.join(&h.black);

    h.contract.make_move(&h.white, &mv(1, 4, 3, 4)); // e2-e4
    h.contract.make_move(&h.black, &mv(6, 4, 4, 4)); // e7-e5
    h.contract.make_move(&h.white, &mv(0, 6, 2, 5)); // Ng1-f3
    h.contract.make_move(&h.black, &mv(7, 6, 5, 5)); // Ng8-f6
    h.contract.make_move(&h.white, &mv(0, 5, 3, 2)); // Bf1-c4
    h.contract.make_move(&h.black, &mv(7, 5, 4, 2)); // Bf8-c5
    h.contract.make_move(&h.white, &mv(0, 4, 0, 6)); // O-O

    let board = h.contract.get_board_state();
    assert_eq!(board.white_king_row, 0);
    assert_eq!(board.white_king_col, 6);
    assert_eq!(board.get(0, 5), chess_engine::PieceKind::Rook as i32);
    assert_eq!(board.get(0, 7), 0);
}

#[test]
fn resign_before_black_joins_refunds_whites_stake() {
    let h = setup();
    h.contract.resign(&h.white);

    let info = h.contract.get_game_info();
    assert!(info.flags.finalized);
    assert_eq!(info.state, GameState::Draw);

    let amount = h.contract.withdraw_prize(&h.white);
    assert_eq!(amount, STAKE);
}

#[test]
fn resign_in_progress_awards_the_opponent() {
    let h = setup();
    h.contract.join(&h.black);
    h.contract.resign(&h.white);

    let info = h.contract.get_game_info();
    assert_eq!(info.state, GameState::BlackWins);

    h.contract.finalize_prizes();
    let amount = h.contract.withdraw_prize(&h.black);
    assert_eq!(amount, STAKE * 2);
}

#[test]
fn draw_offer_must_be_accepted_by_the_opponent() {
    let h = setup();
    h.contract.join(&h.black);

    h.contract.offer_draw(&h.white);
    let result = h.contract.try_accept_draw(&h.white);
    assert_eq!(result, Err(Ok(Error::NotOpponent)));

    h.contract.accept_draw(&h.black);
    assert_eq!(h.contract.get_game_info().state, GameState::Draw);

    h.contract.finalize_prizes();
    assert_eq!(h.contract.withdraw_prize(&h.white), STAKE);
    assert_eq!(h.contract.withdraw_prize(&h.black), STAKE);
}

#[test]
fn declining_a_draw_clears_the_offer_without_ending_the_game() {
    let h = setup();
    h.contract.join(&h.black);
    h.contract.offer_draw(&h.white);
    h.contract.decline_draw(&h.black);

    assert_eq!(h.contract.get_game_info().draw_offered_by, None);
    assert_eq!(h.contract.get_game_info().state, GameState::InProgress);
}

#[test]
fn timeout_can_only_be_claimed_by_the_waiting_opponent_after_the_window() {
    let h = setup();
    h.contract.join(&h.black);

    let result = h.contract.try_claim_victory_by_timeout(&h.black);
    assert_eq!(result, Err(Ok(Error::NotYetTimedOut)));

    let result = h.contract.try_claim_victory_by_timeout(&h.white);
    assert_eq!(result, Err(Ok(Error::NotOpponent)));

    h.env.ledger().set_sequence_number(1_000 + TimeoutPreset::Fast.to_blocks() as u32 + 1);
    h.contract.claim_victory_by_timeout(&h.black);

    let info = h.contract.get_game_info();
    assert_eq!(info.state, GameState::BlackWins);
    assert!(info.flags.was_timeout);
}

#[test]
fn finalize_prizes_is_idempotent() {
    let h = setup();
    h.contract.join(&h.black);
    h.contract.resign(&h.white);

    h.contract.finalize_prizes();
    h.contract.finalize_prizes(); // second call is a documented no-op

    let amount = h.contract.withdraw_prize(&h.black);
    assert_eq!(amount, STAKE * 2);
    // a second withdrawal sees nothing left.
    let result = h.contract.try_withdraw_prize(&h.black);
    assert_eq!(result, Err(Ok(Error::ZeroWithdrawal)));
}

#[test]
fn claim_prize_finalizes_and_withdraws_for_the_winner_only() {
    let h = setup();
    h.contract.join(&h.black);
    h.contract.resign(&h.white);

    let result = h.contract.try_claim_prize(&h.white);
    assert_eq!(result, Err(Ok(Error::NotAPlayer)));

    let amount = h.contract.claim_prize(&h.black);
    assert_eq!(amount, STAKE * 2);
}

#[test]
fn pause_blocks_moves() {
    let h = setup();
    h.contract.join(&h.black);
    h.contract.pause();

    let result = h.contract.try_make_move(&h.white, &mv(1, 4, 3, 4));
    assert_eq!(result, Err(Ok(Error::ContractPaused)));

    h.contract.unpause();
    h.contract.make_move(&h.white, &mv(1, 4, 3, 4));
    assert_eq!(h.contract.get_game_info().move_count, 1);
}
