use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{token, Address, Bytes, BytesN, Env, Vec};

use crate::bonding_client;
use crate::errors::Error;
use crate::events;
use crate::registry_client;
use crate::storage;
use crate::types::{Config, Decision, Dispute, DisputeSnapshot, DisputeState, DisputeStateExternal, Vote, VoteCommit};

fn vote_byte(vote: Vote) -> u8 {
    match vote {
        Vote::None => 0,
        Vote::Legit => 1,
        Vote::Cheat => 2,
        Vote::Abstain => 3,
    }
}

/// `H(vote ∥ salt ∥ arbitratorAddress)` (spec.md §4.E), binding the voter's
/// own address into the hash so a leaked `(vote, salt)` pair can't be
/// replayed by a different arbitrator (spec.md §9).
fn compute_commit_hash(env: &Env, vote: Vote, salt: &BytesN<32>, arb: &Address) -> BytesN<32> {
    let mut bytes = Bytes::new(env);
    bytes.push_back(vote_byte(vote));
    bytes.append(&Bytes::from(salt.clone()));
    bytes.append(&arb.to_xdr(env));
    env.crypto().sha256(&bytes).into()
}

/// Invoked by a chess-game contract exactly once on terminal state
/// (spec.md §4.E). Idempotent: a repeat call for an already-registered game
/// is a no-op, matching the monotone-flag discipline spec.md §4.B asks
/// callers to honor.
pub fn register_game(env: &Env, game: &Address, player_a: &Address, player_b: &Address, stake: i128) -> Result<(), Error> {
    game.require_auth();
    if storage::get_dispute(env, game).is_some() {
        return Ok(());
    }

    let now = env.ledger().timestamp();
    let dispute = Dispute {
        player_a: player_a.clone(),
        player_b: player_b.clone(),
        challenger: None,
        accused: None,
        game_stake: stake,
        state: DisputeState::Pending,
        registered_at: now,
        challenged_at: 0,
        commit_deadline: 0,
        reveal_deadline: 0,
        legit_votes: 0,
        cheat_votes: 0,
        abstain_votes: 0,
        final_decision: Decision::None,
        selected_arbitrators: Vec::new(env),
        escalation_level: 0,
        challenger_deposit: 0,
    };
    storage::set_dispute(env, game, &dispute);

    let config = storage::get_config(env);
    registry_client::Client::new(env, &config.arbitrator_registry).record_game(player_a, player_b);
    Ok(())
}

/// Opens a challenge within `[registeredAt, registeredAt + challenge_window]`
/// (spec.md §4.E): takes the fixed fungible deposit, selects the initial
/// jury, and starts the commit/reveal clocks.
pub fn challenge(env: &Env, game: &Address, caller: &Address, accused: &Address) -> Result<(), Error> {
    caller.require_auth();
    let config = storage::get_config(env);
    let mut dispute = storage::get_dispute(env, game).ok_or(Error::DisputeNotFound)?;

    if dispute.state != DisputeState::Pending {
        return Err(Error::DisputeNotPending);
    }
    let now = env.ledger().timestamp();
    if now > dispute.registered_at + config.challenge_window_secs {
        return Err(Error::ChallengeWindowExpired);
    }
    if accused != &dispute.player_a && accused != &dispute.player_b {
        return Err(Error::AccusedNotAPlayer);
    }
    if storage::get_active_challenges(env, caller) >= config.max_active_challenges {
        return Err(Error::ChallengeCapExceeded);
    }

    token::Client::new(env, &config.challenge_token).transfer(caller, &env.current_contract_address(), &config.challenge_deposit);

    let selected = registry_client::Client::new(env, &config.arbitrator_registry).select(
        &dispute.player_a,
        &dispute.player_b,
        &config.initial_jury_per_tier,
    );

    dispute.challenger = Some(caller.clone());
    dispute.accused = Some(accused.clone());
    dispute.challenger_deposit = config.challenge_deposit;
    dispute.challenged_at = now;
    dispute.commit_deadline = now + config.commit_period_secs;
    dispute.reveal_deadline = dispute.commit_deadline + config.reveal_period_secs;
    dispute.selected_arbitrators = selected;
    dispute.state = DisputeState::Challenged;
    storage::set_dispute(env, game, &dispute);
    storage::increment_active_challenges(env, caller);

    events::emit_dispute_created(env, game, caller, accused);
    Ok(())
}

pub fn commit_vote(env: &Env, game: &Address, arb: &Address, hash: BytesN<32>) -> Result<(), Error> {
    arb.require_auth();
    let dispute = storage::get_dispute(env, game).ok_or(Error::DisputeNotFound)?;
    if dispute.state != DisputeState::Challenged {
        return Err(Error::DisputeNotChallenged);
    }
    let now = env.ledger().timestamp();
    if now > dispute.commit_deadline {
        return Err(Error::NotInCommitPhase);
    }
    if !dispute.selected_arbitrators.contains(arb) {
        return Err(Error::NotSelectedArbitrator);
    }
    if storage::get_vote_commit(env, game, dispute.escalation_level, arb).is_some() {
        return Err(Error::AlreadyCommitted);
    }

    storage::set_vote_commit(
        env,
        game,
        dispute.escalation_level,
        arb,
        &VoteCommit {
            commit_hash: hash,
            revealed: false,
            vote: Vote::None,
        },
    );
    events::emit_vote_committed(env, game, arb);
    Ok(())
}

/// Auto-transitions `Challenged → Revealing` once `now > commit_deadline`
/// (spec.md §4.E), then accepts a `(vote, salt)` pair that must rehash to
/// the stored commit.
pub fn reveal_vote(env: &Env, game: &Address, arb: &Address, vote: Vote, salt: BytesN<32>) -> Result<(), Error> {
    arb.require_auth();
    if matches!(vote, Vote::None) {
        return Err(Error::InvalidVote);
    }

    let mut dispute = storage::get_dispute(env, game).ok_or(Error::DisputeNotFound)?;
    let now = env.ledger().timestamp();

    if dispute.state == DisputeState::Challenged && now > dispute.commit_deadline {
        dispute.state = DisputeState::Revealing;
    }
    if dispute.state != DisputeState::Revealing || now > dispute.reveal_deadline {
        return Err(Error::NotInRevealPhase);
    }

    let mut commit = storage::get_vote_commit(env, game, dispute.escalation_level, arb).ok_or(Error::NoCommitFound)?;
    if commit.revealed {
        return Err(Error::AlreadyRevealed);
    }
    let expected = compute_commit_hash(env, vote, &salt, arb);
    if expected != commit.commit_hash {
        return Err(Error::CommitHashMismatch);
    }

    commit.revealed = true;
    commit.vote = vote;
    storage::set_vote_commit(env, game, dispute.escalation_level, arb, &commit);

    match vote {
        Vote::Legit => dispute.legit_votes += 1,
        Vote::Cheat => dispute.cheat_votes += 1,
        Vote::Abstain => dispute.abstain_votes += 1,
        Vote::None => unreachable!("rejected above"),
    }
    storage::set_dispute(env, game, &dispute);

    let config = storage::get_config(env);
    registry_client::Client::new(env, &config.arbitrator_registry).record_vote(arb);

    events::emit_vote_revealed(env, game, arb, vote);
    Ok(())
}

/// Resolves a dispute per spec.md §4.E's numbered procedure: the 30-day
/// absolute cap takes precedence over everything else, then quorum, then
/// supermajority in either direction, falling through to escalation.
pub fn resolve_dispute(env: &Env, game: &Address) -> Result<(), Error> {
    let mut dispute = storage::get_dispute(env, game).ok_or(Error::DisputeNotFound)?;
    if dispute.state == DisputeState::Resolved {
        return Ok(());
    }

    let config = storage::get_config(env);
    let now = env.ledger().timestamp();

    if now > dispute.registered_at + config.dispute_lifetime_secs {
        force_resolve_none(env, &config, &mut dispute, game);
        return Ok(());
    }

    if dispute.state == DisputeState::Challenged && now > dispute.commit_deadline {
        dispute.state = DisputeState::Revealing;
    }
    if dispute.state != DisputeState::Revealing || now <= dispute.reveal_deadline {
        return Err(Error::NotInRevealPhase);
    }

    let total = dispute.legit_votes + dispute.cheat_votes;
    if total < config.quorum {
        escalate(env, &config, &mut dispute, game);
        return Ok(());
    }

    let cheat_met = (dispute.cheat_votes as u64) * 100 >= (total as u64) * config.supermajority_percent as u64;
    let legit_met = (dispute.legit_votes as u64) * 100 >= (total as u64) * config.supermajority_percent as u64;

    if cheat_met {
        resolve_cheat(env, &config, &mut dispute, game);
    } else if legit_met {
        resolve_legit(env, &config, &mut dispute, game);
    } else {
        escalate(env, &config, &mut dispute, game);
        return Ok(());
    }

    dispute.state = DisputeState::Resolved;
    storage::set_dispute(env, game, &dispute);
    if let Some(challenger) = dispute.challenger.clone() {
        storage::decrement_active_challenges(env, &challenger);
    }
    update_jury_reputations(env, &config, &dispute, game);
    events::emit_dispute_resolved(env, game, dispute.final_decision, dispute.legit_votes, dispute.cheat_votes);
    Ok(())
}

/// Cheat verdict (spec.md §4.E.4): slash the accused's bond and pay the
/// challenger `1.5x` their deposit, capped by this contract's balance.
fn resolve_cheat(env: &Env, config: &Config, dispute: &mut Dispute, game: &Address) {
    dispute.final_decision = Decision::Cheat;
    let accused = dispute.accused.clone().expect("challenged dispute has an accused");
    bonding_client::Client::new(env, &config.bonding_core).slash_bond(game, &accused);

    let challenger = dispute.challenger.clone().expect("challenged dispute has a challenger");
    let owed = dispute.challenger_deposit * 3 / 2;
    let token_client = token::Client::new(env, &config.challenge_token);
    let balance = token_client.balance(&env.current_contract_address());
    let payout = if owed > balance { balance } else { owed };
    if payout > 0 {
        token_client.transfer(&env.current_contract_address(), &challenger, &payout);
    }
}

/// Legit verdict (spec.md §4.E.5): half the deposit goes back to the
/// accused, the remainder is burned.
fn resolve_legit(env: &Env, config: &Config, dispute: &mut Dispute, _game: &Address) {
    dispute.final_decision = Decision::Legit;
    let accused = dispute.accused.clone().expect("challenged dispute has an accused");
    let half = dispute.challenger_deposit / 2;
    let token_client = token::Client::new(env, &config.challenge_token);
    if half > 0 {
        token_client.transfer(&env.current_contract_address(), &accused, &half);
    }
    let remainder = dispute.challenger_deposit - half;
    if remainder > 0 {
        token_client.burn(&env.current_contract_address(), &remainder);
    }
}

/// `escalationLevel += 1`; forces a decision-less resolution at the cap,
/// otherwise resets tallies/deadlines and draws a larger jury
/// (spec.md §4.E's escalation paragraph).
fn escalate(env: &Env, config: &Config, dispute: &mut Dispute, game: &Address) {
    dispute.escalation_level += 1;
    if dispute.escalation_level >= config.max_escalation {
        force_resolve_none(env, config, dispute, game);
        return;
    }

    dispute.legit_votes = 0;
    dispute.cheat_votes = 0;
    dispute.abstain_votes = 0;
    let now = env.ledger().timestamp();
    dispute.commit_deadline = now + config.commit_period_secs;
    dispute.reveal_deadline = dispute.commit_deadline + config.reveal_period_secs;
    dispute.state = DisputeState::Challenged;

    let k = config.initial_jury_per_tier + 2 * dispute.escalation_level;
    let selected = registry_client::Client::new(env, &config.arbitrator_registry).select(&dispute.player_a, &dispute.player_b, &k);
    dispute.selected_arbitrators = selected;

    storage::set_dispute(env, game, dispute);
    events::emit_dispute_escalated(env, game, dispute.escalation_level);
}

/// Shared by the 30-day absolute-lifetime cap and the max-escalation cap:
/// no verdict, full deposit refund, no bond or reputation changes
/// (spec.md §4.E.1 and §4.E's escalation paragraph).
fn force_resolve_none(env: &Env, config: &Config, dispute: &mut Dispute, game: &Address) {
    dispute.final_decision = Decision::None;
    dispute.state = DisputeState::Resolved;

    if let Some(challenger) = dispute.challenger.clone() {
        if dispute.challenger_deposit > 0 {
            token::Client::new(env, &config.challenge_token).transfer(
                &env.current_contract_address(),
                &challenger,
                &dispute.challenger_deposit,
            );
        }
        storage::decrement_active_challenges(env, &challenger);
    }

    storage::set_dispute(env, game, dispute);
    events::emit_dispute_resolved(env, game, Decision::None, dispute.legit_votes, dispute.cheat_votes);
}

/// A revealed vote counts as "with the majority" only if it matches the
/// final decision; a non-revealer is treated as against-majority
/// (spec.md §4.E.7).
fn update_jury_reputations(env: &Env, config: &Config, dispute: &Dispute, game: &Address) {
    let registry = registry_client::Client::new(env, &config.arbitrator_registry);
    for arb in dispute.selected_arbitrators.iter() {
        let with_majority = match storage::get_vote_commit(env, game, dispute.escalation_level, &arb) {
            Some(commit) if commit.revealed => matches!(
                (commit.vote, dispute.final_decision),
                (Vote::Cheat, Decision::Cheat) | (Vote::Legit, Decision::Legit)
            ),
            _ => false,
        };
        registry.update_reputation(&arb, &with_majority);
    }
}

/// Closes an unchallenged dispute once the challenge window has strictly
/// expired (spec.md §4.E).
pub fn close_challenge_window(env: &Env, game: &Address) -> Result<(), Error> {
    let mut dispute = storage::get_dispute(env, game).ok_or(Error::DisputeNotFound)?;
    if dispute.state != DisputeState::Pending {
        return Err(Error::DisputeNotPending);
    }
    let config = storage::get_config(env);
    let now = env.ledger().timestamp();
    if now <= dispute.registered_at + config.challenge_window_secs {
        return Err(Error::ChallengeWindowStillOpen);
    }

    dispute.state = DisputeState::Resolved;
    dispute.final_decision = Decision::None;
    storage::set_dispute(env, game, &dispute);
    events::emit_challenge_window_closed(env, game);
    Ok(())
}

pub fn dispute_snapshot(env: &Env, game: &Address) -> DisputeSnapshot {
    let config = storage::get_config(env);
    match storage::get_dispute(env, game) {
        None => DisputeSnapshot {
            state: DisputeStateExternal::NoDispute,
            challenge_window_ends_at: 0,
        },
        Some(dispute) => {
            let state = match dispute.state {
                DisputeState::Pending => DisputeStateExternal::Pending,
                DisputeState::Challenged => DisputeStateExternal::Challenged,
                DisputeState::Revealing => DisputeStateExternal::Revealing,
                DisputeState::Resolved => DisputeStateExternal::Resolved,
            };
            DisputeSnapshot {
                state,
                challenge_window_ends_at: dispute.registered_at + config.challenge_window_secs,
            }
        }
    }
}
