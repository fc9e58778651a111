use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub const INITIALIZED: Symbol = symbol_short!("init");
pub const EXCHANGED: Symbol = symbol_short!("exchange");
pub const RATE_SET: Symbol = symbol_short!("rate");
pub const MINIMUM_SET: Symbol = symbol_short!("min");
pub const MAXIMUM_SET: Symbol = symbol_short!("max");
pub const PAUSED: Symbol = symbol_short!("paused");
pub const UNPAUSED: Symbol = symbol_short!("unpaused");
pub const TOKENS_RECOVERED: Symbol = symbol_short!("recover");
pub const NATIVE_WITHDRAWN: Symbol = symbol_short!("withdraw");

pub fn initialized(
    env: &Env,
    owner: &Address,
    token: &Address,
    payment_asset: &Address,
    exchange_rate: i128,
    minimum: i128,
    maximum: i128,
) {
    env.events().publish(
        (INITIALIZED, owner.clone()),
        (
            token.clone(),
            payment_asset.clone(),
            exchange_rate,
            minimum,
            maximum,
        ),
    );
}

/// Audit record of a completed exchange: who paid, how much, how many tokens left the sale.
pub fn exchanged(env: &Env, buyer: &Address, amount: i128, tokens: i128) {
    env.events()
        .publish((EXCHANGED, buyer.clone()), (amount, tokens));
}

pub fn setting_changed(env: &Env, setting: Symbol, owner: &Address, value: i128) {
    env.events().publish((setting, owner.clone()), value);
}

pub fn pause_changed(env: &Env, owner: &Address, paused: bool) {
    let topic = if paused { PAUSED } else { UNPAUSED };
    env.events().publish((topic, owner.clone()), ());
}

pub fn tokens_recovered(env: &Env, owner: &Address, amount: i128) {
    env.events()
        .publish((TOKENS_RECOVERED, owner.clone()), amount);
}

pub fn native_withdrawn(env: &Env, owner: &Address, amount: i128) {
    env.events()
        .publish((NATIVE_WITHDRAWN, owner.clone()), amount);
}
