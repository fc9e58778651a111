use crate::types::*;
use soroban_sdk::{Address, Env};

// Ledger counts, at ~5s per ledger: about 30 days, bumped once under 15 days.
const INSTANCE_BUMP_AMOUNT: u32 = 518_400;
const INSTANCE_LIFETIME_THRESHOLD: u32 = 259_200;
const CONTRIBUTION_BUMP_AMOUNT: u32 = 1_036_800;
const CONTRIBUTION_LIFETIME_THRESHOLD: u32 = 518_400;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance(env);
}

pub fn get_stats(env: &Env) -> SaleStats {
    env.storage()
        .instance()
        .get(&DataKey::Stats)
        .unwrap_or_default()
}

pub fn set_stats(env: &Env, stats: &SaleStats) {
    env.storage().instance().set(&DataKey::Stats, stats);
    extend_instance(env);
}

pub fn get_contribution(env: &Env, participant: &Address) -> Option<i128> {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(participant.clone()))
}

pub fn set_contribution(env: &Env, participant: &Address, amount: i128) {
    let key = DataKey::Contribution(participant.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage().persistent().extend_ttl(
        &key,
        CONTRIBUTION_LIFETIME_THRESHOLD,
        CONTRIBUTION_BUMP_AMOUNT,
    );
}
