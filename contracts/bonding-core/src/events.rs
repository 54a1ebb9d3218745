use soroban_sdk::{contractevent, Address, Env};

#[contractevent]
pub struct BondDeposited {
    #[topic]
    pub player: Address,
    pub fungible: i128,
    pub native: i128,
}

#[contractevent]
pub struct BondWithdrawn {
    #[topic]
    pub player: Address,
    pub fungible: i128,
    pub native: i128,
}

#[contractevent]
pub struct BondLocked {
    #[topic]
    pub game: Address,
    #[topic]
    pub player: Address,
    pub fungible: i128,
    pub native: i128,
}

#[contractevent]
pub struct BondReleased {
    #[topic]
    pub game: Address,
    #[topic]
    pub player: Address,
}

#[contractevent]
pub struct BondSlashed {
    #[topic]
    pub game: Address,
    #[topic]
    pub player: Address,
    pub fungible_burned: i128,
    pub native_seized: i128,
}

#[contractevent]
pub struct PriceUpdated {
    pub old_price: i128,
    pub new_price: i128,
}

#[contractevent]
pub struct CircuitBreakerTriggered {
    pub old_price: i128,
    pub attempted_price: i128,
}

pub(crate) fn emit_bond_deposited(env: &Env, player: &Address, fungible: i128, native: i128) {
    BondDeposited {
        player: player.clone(),
        fungible,
        native,
    }
    .publish(env);
}

pub(crate) fn emit_bond_withdrawn(env: &Env, player: &Address, fungible: i128, native: i128) {
    BondWithdrawn {
        player: player.clone(),
        fungible,
        native,
    }
    .publish(env);
}

pub(crate) fn emit_bond_locked(env: &Env, game: &Address, player: &Address, fungible: i128, native: i128) {
    BondLocked {
        game: game.clone(),
        player: player.clone(),
        fungible,
        native,
    }
    .publish(env);
}

pub(crate) fn emit_bond_released(env: &Env, game: &Address, player: &Address) {
    BondReleased {
        game: game.clone(),
        player: player.clone(),
    }
    .publish(env);
}

pub(crate) fn emit_bond_slashed(env: &Env, game: &Address, player: &Address, fungible_burned: i128, native_seized: i128) {
    BondSlashed {
        game: game.clone(),
        player: player.clone(),
        fungible_burned,
        native_seized,
    }
    .publish(env);
}

pub(crate) fn emit_price_updated(env: &Env, old_price: i128, new_price: i128) {
    PriceUpdated { old_price, new_price }.publish(env);
}

pub(crate) fn emit_circuit_breaker_triggered(env: &Env, old_price: i128, attempted_price: i128) {
    CircuitBreakerTriggered {
        old_price,
        attempted_price,
    }
    .publish(env);
}
