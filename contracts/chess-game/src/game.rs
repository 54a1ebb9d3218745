use soroban_sdk::{token, Address, Env};

use chess_engine::Color;

use crate::bonding_client;
use crate::dispute_client::{self, DisputeStateExternal};
use crate::errors::Error;
use crate::events;
use crate::rating_client;
use crate::reward_client;
use crate::storage;
use crate::types::{Game, GameInfo, GameState, MoveRecord};

fn color_of(game: &Game, player: &Address) -> Option<Color> {
    if *player == game.white_player {
        Some(Color::White)
    } else if game.black_player.as_ref() == Some(player) {
        Some(Color::Black)
    } else {
        None
    }
}

fn opponent_of(game: &Game, color: Color) -> Option<Address> {
    match color {
        Color::White => game.black_player.clone(),
        Color::Black => Some(game.white_player.clone()),
    }
}

pub fn join(env: &Env, black: &Address) -> Result<(), Error> {
    black.require_auth();

    let mut game = storage::get_game(env);
    if !matches!(game.state, GameState::NotStarted) {
        return Err(Error::GameAlreadyStarted);
    }
    if *black == game.white_player {
        return Err(Error::SamePlayer);
    }

    let config = storage::get_config(env);
    token::Client::new(env, &config.native_token).transfer(
        black,
        &env.current_contract_address(),
        &game.stake,
    );

    if config.bonding_enabled {
        let client = bonding_client::Client::new(env, &config.bonding_core);
        client.lock_bond_pair(
            &env.current_contract_address(),
            &game.white_player,
            black,
            &game.stake,
        );
        game.flags.bonds_locked = true;
    }

    game.black_player = Some(black.clone());
    game.state = GameState::InProgress;
    game.white_last_move_block = env.ledger().sequence();
    storage::set_game(env, &game);

    events::emit_game_started(env, &game.white_player, black, game.stake);
    Ok(())
}

pub fn apply_player_move(
    env: &Env,
    player: &Address,
    mv: &chess_engine::ChessMove,
) -> Result<(), Error> {
    player.require_auth();

    let mut game = storage::get_game(env);
    if !matches!(game.state, GameState::InProgress) {
        return Err(Error::GameNotInProgress);
    }

    let color = color_of(&game, player).ok_or(Error::NotAPlayer)?;
    let board = storage::get_board(env);
    let applied = chess_engine::apply_move(env, &board, color, mv, game.mode)
        .map_err(Error::from)?;

    if applied.is_forced_forfeit {
        if let Some(new_state) = GameState::from_outcome(applied.outcome) {
            game.state = new_state;
            events::emit_game_state_changed(env, new_state);
        }
        storage::set_game(env, &game);
        if game.state.is_terminal() {
            run_terminal_hooks(env, &mut game);
            storage::set_game(env, &game);
        }
        return Ok(());
    }

    storage::set_board(env, &applied.board);

    let current_block = env.ledger().sequence();
    match color {
        Color::White => game.black_last_move_block = current_block,
        Color::Black => game.white_last_move_block = current_block,
    }
    game.move_count += 1;
    game.draw_offered_by = None;

    storage::push_move_record(
        env,
        MoveRecord {
            mover: player.clone(),
            from_row: mv.from_row,
            from_col: mv.from_col,
            to_row: mv.to_row,
            to_col: mv.to_col,
            piece: applied.piece,
            captured_piece: applied.captured_piece,
            promotion_piece: applied.promotion_piece,
            is_check: applied.is_check,
            is_mate: applied.is_mate,
            is_castling: applied.is_castling,
            is_en_passant: applied.is_en_passant,
        },
    );
    events::emit_move_made(
        env,
        player,
        mv.from_row,
        mv.from_col,
        mv.to_row,
        mv.to_col,
        applied.piece,
        applied.captured_piece,
        applied.promotion_piece,
        applied.is_check,
        applied.is_mate,
        applied.is_castling,
        applied.is_en_passant,
    );

    if let Some(new_state) = GameState::from_outcome(applied.outcome) {
        game.flags.was_checkmate = applied.is_mate;
        game.state = new_state;
        events::emit_game_state_changed(env, new_state);
    }

    storage::set_game(env, &game);
    if game.state.is_terminal() {
        run_terminal_hooks(env, &mut game);
        storage::set_game(env, &game);
    }
    Ok(())
}

pub fn resign(env: &Env, player: &Address) -> Result<(), Error> {
    player.require_auth();

    let mut game = storage::get_game(env);

    if matches!(game.state, GameState::NotStarted) {
        // Black never joined; only White can be a player at this point.
        // Treated as a self-cancellation: the stake White escrowed at
        // construction is refunded in full, no dispute/rating/reward hooks
        // run since no game was ever actually played.
        if *player != game.white_player {
            return Err(Error::NotAPlayer);
        }
        game.state = GameState::Draw;
        game.flags.was_resign = true;
        game.flags.finalized = true;
        storage::credit_pending_payout(env, &game.white_player, game.stake);
        events::emit_game_state_changed(env, GameState::Draw);
        storage::set_game(env, &game);
        return Ok(());
    }

    if !matches!(game.state, GameState::InProgress) {
        return Err(Error::GameNotInProgress);
    }

    let color = color_of(&game, player).ok_or(Error::NotAPlayer)?;
    let winner = opponent_of(&game, color).expect("both players present while InProgress");

    game.flags.was_resign = true;
    game.state = match color {
        Color::White => GameState::BlackWins,
        Color::Black => GameState::WhiteWins,
    };
    events::emit_player_resigned(env, player, &winner);
    events::emit_game_state_changed(env, game.state);

    run_terminal_hooks(env, &mut game);
    storage::set_game(env, &game);
    Ok(())
}

pub fn offer_draw(env: &Env, player: &Address) -> Result<(), Error> {
    player.require_auth();
    let mut game = storage::get_game(env);
    if !matches!(game.state, GameState::InProgress) {
        return Err(Error::GameNotInProgress);
    }
    color_of(&game, player).ok_or(Error::NotAPlayer)?;

    game.draw_offered_by = Some(player.clone());
    storage::set_game(env, &game);
    events::emit_draw_offered(env, player);
    Ok(())
}

pub fn accept_draw(env: &Env, player: &Address) -> Result<(), Error> {
    player.require_auth();
    let mut game = storage::get_game(env);
    if !matches!(game.state, GameState::InProgress) {
        return Err(Error::GameNotInProgress);
    }
    let offerer = game.draw_offered_by.clone().ok_or(Error::NoDrawOffer)?;
    let offerer_color = color_of(&game, &offerer).ok_or(Error::NotAPlayer)?;
    let responder_color = color_of(&game, player).ok_or(Error::NotAPlayer)?;
    if responder_color == offerer_color {
        return Err(Error::NotOpponent);
    }

    game.draw_offered_by = None;
    game.state = GameState::Draw;
    storage::set_game(env, &game);

    events::emit_draw_accepted(env);
    events::emit_game_state_changed(env, GameState::Draw);

    run_terminal_hooks(env, &mut game);
    storage::set_game(env, &game);
    Ok(())
}

pub fn decline_draw(env: &Env, player: &Address) -> Result<(), Error> {
    player.require_auth();
    let mut game = storage::get_game(env);
    let offerer = game.draw_offered_by.clone().ok_or(Error::NoDrawOffer)?;
    let offerer_color = color_of(&game, &offerer).ok_or(Error::NotAPlayer)?;
    let responder_color = color_of(&game, player).ok_or(Error::NotAPlayer)?;
    if responder_color == offerer_color {
        return Err(Error::NotOpponent);
    }

    game.draw_offered_by = None;
    storage::set_game(env, &game);
    Ok(())
}

pub fn cancel_draw_offer(env: &Env, player: &Address) -> Result<(), Error> {
    player.require_auth();
    let mut game = storage::get_game(env);
    let offerer = game.draw_offered_by.clone().ok_or(Error::NoDrawOffer)?;
    if *player != offerer {
        return Err(Error::NotOfferer);
    }

    game.draw_offered_by = None;
    storage::set_game(env, &game);
    Ok(())
}

pub fn claim_victory_by_timeout(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let mut game = storage::get_game(env);
    if !matches!(game.state, GameState::InProgress) {
        return Err(Error::GameNotInProgress);
    }

    let board = storage::get_board(env);
    let mover_color = board.side_to_move;
    let mover = match mover_color {
        Color::White => game.white_player.clone(),
        Color::Black => game.black_player.clone().expect("black present while InProgress"),
    };
    if *caller == mover {
        return Err(Error::NotOpponent);
    }
    color_of(&game, caller).ok_or(Error::NotAPlayer)?;

    let last_move_block = match mover_color {
        Color::White => game.white_last_move_block,
        Color::Black => game.black_last_move_block,
    };
    let current_block = env.ledger().sequence();
    if current_block < last_move_block + game.timeout_blocks {
        return Err(Error::NotYetTimedOut);
    }

    game.flags.was_timeout = true;
    game.state = match mover_color {
        Color::White => GameState::BlackWins,
        Color::Black => GameState::WhiteWins,
    };
    events::emit_game_timeout(env, caller, &mover);
    events::emit_game_state_changed(env, game.state);

    run_terminal_hooks(env, &mut game);
    storage::set_game(env, &game);
    Ok(())
}

pub fn claim_repetition(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let mut game = storage::get_game(env);
    if !matches!(game.state, GameState::InProgress) {
        return Err(Error::GameNotInProgress);
    }
    color_of(&game, caller).ok_or(Error::NotAPlayer)?;

    let board = storage::get_board(env);
    chess_engine::claim_repetition(env, &board).map_err(Error::from)?;

    game.state = GameState::Draw;
    events::emit_draw_by_repetition(env, caller);
    events::emit_game_state_changed(env, GameState::Draw);

    run_terminal_hooks(env, &mut game);
    storage::set_game(env, &game);
    Ok(())
}

pub fn claim_fifty_move(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let mut game = storage::get_game(env);
    if !matches!(game.state, GameState::InProgress) {
        return Err(Error::GameNotInProgress);
    }
    color_of(&game, caller).ok_or(Error::NotAPlayer)?;

    let board = storage::get_board(env);
    chess_engine::claim_fifty_move(&board).map_err(Error::from)?;

    game.state = GameState::Draw;
    events::emit_draw_by_fifty_move_rule(env, caller);
    events::emit_game_state_changed(env, GameState::Draw);

    run_terminal_hooks(env, &mut game);
    storage::set_game(env, &game);
    Ok(())
}

/// Opens the dispute challenge window and requests reward distribution
/// exactly once per game, regardless of how many terminal-adjacent entry
/// points run after the state has already gone terminal (spec.md §4.B).
fn run_terminal_hooks(env: &Env, game: &mut Game) {
    let config = storage::get_config(env);

    if config.dispute_enabled && !game.flags.dispute_registered {
        if let Some(black) = game.black_player.clone() {
            let client = dispute_client::Client::new(env, &config.dispute_core);
            client.register_game(&env.current_contract_address(), &game.white_player, &black, &game.stake);
            game.flags.dispute_registered = true;
        }
    }

    if config.reward_enabled && !game.flags.rewards_distributed {
        if let Some(black) = game.black_player.clone() {
            let client = reward_client::Client::new(env, &config.reward_service);
            let is_draw = matches!(game.state, GameState::Draw);
            let white_is_winner = matches!(game.state, GameState::WhiteWins);
            let black_is_winner = matches!(game.state, GameState::BlackWins);

            let white_result = client.try_distribute_reward(
                &game.white_player,
                &black,
                &white_is_winner,
                &is_draw,
                &game.flags.was_checkmate,
                &game.move_count,
                &game.flags.was_resign,
                &game.flags.was_timeout,
            );
            if white_result.is_err() {
                events::emit_reward_report_failed(env, &game.white_player);
            }

            let black_result = client.try_distribute_reward(
                &black,
                &game.white_player,
                &black_is_winner,
                &is_draw,
                &game.flags.was_checkmate,
                &game.move_count,
                &game.flags.was_resign,
                &game.flags.was_timeout,
            );
            if black_result.is_err() {
                events::emit_reward_report_failed(env, &black);
            }

            game.flags.rewards_distributed = true;
        }
    }
}

pub fn finalize_prizes(env: &Env) -> Result<(), Error> {
    let mut game = storage::get_game(env);
    if game.flags.finalized {
        return Ok(());
    }
    if !game.state.is_terminal() {
        return Err(Error::GameNotInProgress);
    }

    let config = storage::get_config(env);

    if config.dispute_enabled {
        let client = dispute_client::Client::new(env, &config.dispute_core);
        let snapshot = client.dispute_snapshot(&env.current_contract_address());
        let now = env.ledger().timestamp();
        let ok = match snapshot.state {
            DisputeStateExternal::NoDispute => true,
            DisputeStateExternal::Resolved => true,
            DisputeStateExternal::Pending => now > snapshot.challenge_window_ends_at,
            DisputeStateExternal::Challenged | DisputeStateExternal::Revealing => false,
        };
        if !ok {
            return Err(Error::DisputeNotResolved);
        }
    }

    if config.bonding_enabled && game.flags.bonds_locked {
        if let Some(black) = game.black_player.clone() {
            let client = bonding_client::Client::new(env, &config.bonding_core);
            client.release_bond(&env.current_contract_address(), &game.white_player);
            client.release_bond(&env.current_contract_address(), &black);
        }
    }

    if config.rating_enabled && !game.flags.rating_reported {
        if let Some(black) = game.black_player.clone() {
            let client = rating_client::Client::new(env, &config.rating_service);
            let result_code: u32 = match game.state {
                GameState::Draw => 0,
                GameState::WhiteWins => 1,
                GameState::BlackWins => 2,
                _ => 0,
            };
            let call_result = client.try_report_game(&game.white_player, &black, &result_code);
            if call_result.is_err() {
                events::emit_rating_report_failed(env, &game.white_player, &black);
            }
        }
        game.flags.rating_reported = true;
    }

    match game.black_player.clone() {
        Some(black) => {
            let total_pot = game.stake * 2;
            match game.state {
                GameState::WhiteWins => storage::credit_pending_payout(env, &game.white_player, total_pot),
                GameState::BlackWins => storage::credit_pending_payout(env, &black, total_pot),
                GameState::Draw => {
                    let half = total_pot / 2;
                    let remainder = total_pot - half * 2;
                    storage::credit_pending_payout(env, &game.white_player, half + remainder);
                    storage::credit_pending_payout(env, &black, half);
                }
                GameState::NotStarted | GameState::InProgress => unreachable!("checked terminal above"),
            }
        }
        None => {
            // Cancelled before Black joined; handled entirely by `resign`'s
            // NotStarted branch, which never reaches here since it sets
            // `finalized` directly. Kept for completeness / defense in depth.
            storage::credit_pending_payout(env, &game.white_player, game.stake);
        }
    }

    game.flags.finalized = true;
    storage::set_game(env, &game);
    Ok(())
}

pub fn withdraw_prize(env: &Env, player: &Address) -> Result<i128, Error> {
    player.require_auth();
    let amount = storage::take_pending_payout(env, player);
    if amount == 0 {
        return Err(Error::ZeroWithdrawal);
    }

    let config = storage::get_config(env);
    token::Client::new(env, &config.native_token).transfer(&env.current_contract_address(), player, &amount);
    events::emit_prize_claimed(env, player, amount);
    Ok(amount)
}

pub fn claim_prize(env: &Env, player: &Address) -> Result<i128, Error> {
    player.require_auth();
    finalize_prizes(env)?;

    let game = storage::get_game(env);
    let is_winner = match game.state {
        GameState::WhiteWins => *player == game.white_player,
        GameState::BlackWins => game.black_player.as_ref() == Some(player),
        _ => false,
    };
    if !is_winner {
        return Err(Error::NotAPlayer);
    }

    withdraw_prize(env, player)
}

pub fn game_info(env: &Env) -> GameInfo {
    let game = storage::get_game(env);
    let board = storage::get_board(env);
    let current_player = if matches!(game.state, GameState::InProgress) {
        match board.side_to_move {
            Color::White => Some(game.white_player.clone()),
            Color::Black => game.black_player.clone(),
        }
    } else {
        None
    };

    GameInfo {
        white_player: game.white_player,
        black_player: game.black_player,
        current_player,
        stake: game.stake,
        mode: game.mode,
        state: game.state,
        draw_offered_by: game.draw_offered_by,
        flags: game.flags,
        move_count: game.move_count,
    }
}
