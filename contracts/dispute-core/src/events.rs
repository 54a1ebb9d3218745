use soroban_sdk::{contractevent, Address, Env};

use crate::types::{Decision, Vote};

#[contractevent]
pub struct DisputeCreated {
    #[topic]
    pub game: Address,
    pub challenger: Address,
    pub accused: Address,
}

#[contractevent]
pub struct VoteCommitted {
    #[topic]
    pub game: Address,
    #[topic]
    pub arbitrator: Address,
}

#[contractevent]
pub struct VoteRevealed {
    #[topic]
    pub game: Address,
    #[topic]
    pub arbitrator: Address,
    pub vote: Vote,
}

#[contractevent]
pub struct DisputeResolved {
    #[topic]
    pub game: Address,
    pub decision: Decision,
    pub legit: u32,
    pub cheat: u32,
}

#[contractevent]
pub struct DisputeEscalated {
    #[topic]
    pub game: Address,
    pub new_level: u32,
}

#[contractevent]
pub struct ChallengeWindowClosed {
    #[topic]
    pub game: Address,
}

pub(crate) fn emit_dispute_created(env: &Env, game: &Address, challenger: &Address, accused: &Address) {
    DisputeCreated {
        game: game.clone(),
        challenger: challenger.clone(),
        accused: accused.clone(),
    }
    .publish(env);
}

pub(crate) fn emit_vote_committed(env: &Env, game: &Address, arbitrator: &Address) {
    VoteCommitted {
        game: game.clone(),
        arbitrator: arbitrator.clone(),
    }
    .publish(env);
}

pub(crate) fn emit_vote_revealed(env: &Env, game: &Address, arbitrator: &Address, vote: Vote) {
    VoteRevealed {
        game: game.clone(),
        arbitrator: arbitrator.clone(),
        vote,
    }
    .publish(env);
}

pub(crate) fn emit_dispute_resolved(env: &Env, game: &Address, decision: Decision, legit: u32, cheat: u32) {
    DisputeResolved {
        game: game.clone(),
        decision,
        legit,
        cheat,
    }
    .publish(env);
}

pub(crate) fn emit_dispute_escalated(env: &Env, game: &Address, new_level: u32) {
    DisputeEscalated {
        game: game.clone(),
        new_level,
    }
    .publish(env);
}

pub(crate) fn emit_challenge_window_closed(env: &Env, game: &Address) {
    ChallengeWindowClosed { game: game.clone() }.publish(env);
}
