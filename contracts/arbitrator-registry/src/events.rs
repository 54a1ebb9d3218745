use soroban_sdk::{contractevent, Address, Env};

/// Not individually required by the platform's external event list, but
/// kept as ambient observability: one event per state-mutating entry point
/// rather than only the ones a consuming caller happens to need.
#[contractevent]
pub struct ArbitratorStaked {
    #[topic]
    pub arb: Address,
    pub stake: i128,
}

#[contractevent]
pub struct ArbitratorUnstaked {
    #[topic]
    pub arb: Address,
    pub amount: i128,
    pub remaining_stake: i128,
}

#[contractevent]
pub struct ArbitratorRemoved {
    #[topic]
    pub arb: Address,
}

#[contractevent]
pub struct ReputationUpdated {
    #[topic]
    pub arb: Address,
    pub reputation: u32,
}

pub(crate) fn emit_arbitrator_staked(env: &Env, arb: &Address, stake: i128) {
    ArbitratorStaked { arb: arb.clone(), stake }.publish(env);
}

pub(crate) fn emit_arbitrator_unstaked(env: &Env, arb: &Address, amount: i128, remaining_stake: i128) {
    ArbitratorUnstaked {
        arb: arb.clone(),
        amount,
        remaining_stake,
    }
    .publish(env);
}

pub(crate) fn emit_arbitrator_removed(env: &Env, arb: &Address) {
    ArbitratorRemoved { arb: arb.clone() }.publish(env);
}

pub(crate) fn emit_reputation_updated(env: &Env, arb: &Address, reputation: u32) {
    ReputationUpdated {
        arb: arb.clone(),
        reputation,
    }
    .publish(env);
}
