use crate::events;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Fixed-rate token sale paid in the native asset"
);

#[contract]
pub struct FixedRateSale;

fn require_owner(env: &Env, caller: &Address) -> Result<SaleConfig, Error> {
    caller.require_auth();
    let config = get_config(env)?;
    if *caller != config.owner {
        log!(env, "Unauthorized caller: {}", caller.clone());
        return Err(Error::Unauthorized);
    }
    Ok(config)
}

fn require_positive(amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

fn balance_of(env: &Env, asset: &Address) -> i128 {
    token::Client::new(env, asset).balance(&env.current_contract_address())
}

fn transfer(
    env: &Env,
    asset: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    match token::Client::new(env, asset).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "Transfer of {} on {} rejected", amount, asset.clone());
            Err(Error::TransferFailed)
        }
    }
}

/// Shared body of `exchange` and `receive`.
///
/// All checks run first, then both collaborator transfers. Local state is only
/// written once both transfers have reported success; any failure returns an
/// error and the host discards the whole invocation, including the payment
/// already pulled from the buyer.
fn process_exchange(env: &Env, buyer: &Address, amount: i128) -> Result<i128, Error> {
    buyer.require_auth();

    let config = get_config(env)?;
    if config.paused {
        return Err(Error::Paused);
    }
    if amount < config.minimum {
        log!(env, "Below minimum. Min: {}, Provided: {}", config.minimum, amount);
        return Err(Error::BelowMinimum);
    }
    if amount > config.maximum {
        log!(env, "Above maximum. Max: {}, Provided: {}", config.maximum, amount);
        return Err(Error::AboveMaximum);
    }

    let tokens = amount
        .checked_mul(config.exchange_rate)
        .ok_or(Error::Overflow)?;

    let available = balance_of(env, &config.token);
    if available == 0 || tokens > available {
        log!(env, "Insufficient inventory. Required: {}, Available: {}", tokens, available);
        return Err(Error::InsufficientInventory);
    }

    let this = env.current_contract_address();

    transfer(env, &config.payment_asset, buyer, &this, amount)?;
    transfer(env, &config.token, &this, buyer, tokens)?;

    let previous = get_contribution(env, buyer);
    let contribution = previous
        .unwrap_or(0)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;

    let mut stats = get_stats(env);
    stats.total_raised = stats
        .total_raised
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    stats.tokens_sold = stats
        .tokens_sold
        .checked_add(tokens)
        .ok_or(Error::Overflow)?;
    if previous.is_none() {
        stats.participants = stats.participants.saturating_add(1);
    }

    set_contribution(env, buyer, contribution);
    set_stats(env, &stats);

    events::exchanged(env, buyer, amount, tokens);
    Ok(tokens)
}

#[contractimpl]
impl FixedRateSale {
    /// Configure the sale. Can only be called once.
    ///
    /// `token` is the asset being sold and `payment_asset` the native asset
    /// contract buyers pay with. The sale starts unpaused with no inventory;
    /// inventory arrives by transferring `token` to the contract address.
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        payment_asset: Address,
        exchange_rate: i128,
        minimum: i128,
        maximum: i128,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        if token == payment_asset {
            return Err(Error::InvalidConfig);
        }
        require_positive(exchange_rate)?;
        require_positive(minimum)?;
        require_positive(maximum)?;

        let config = SaleConfig {
            owner: owner.clone(),
            token: token.clone(),
            payment_asset: payment_asset.clone(),
            exchange_rate,
            minimum,
            maximum,
            paused: false,
        };

        set_config(&env, &config);
        set_stats(&env, &SaleStats::default());

        events::initialized(
            &env,
            &owner,
            &token,
            &payment_asset,
            exchange_rate,
            minimum,
            maximum,
        );
        Ok(())
    }

    /// Pay `amount` of the payment asset and receive `amount * exchange_rate`
    /// tokens. Returns the number of tokens sent to `buyer`.
    pub fn exchange(env: Env, buyer: Address, amount: i128) -> Result<i128, Error> {
        process_exchange(&env, &buyer, amount)
    }

    /// Default entry point for plain payments; identical to `exchange`.
    pub fn receive(env: Env, buyer: Address, amount: i128) -> Result<i128, Error> {
        process_exchange(&env, &buyer, amount)
    }

    pub fn set_exchange_rate(env: Env, caller: Address, rate: i128) -> Result<(), Error> {
        let mut config = require_owner(&env, &caller)?;
        require_positive(rate)?;

        config.exchange_rate = rate;
        set_config(&env, &config);

        events::setting_changed(&env, events::RATE_SET, &caller, rate);
        Ok(())
    }

    /// Bounds are not checked against each other; an inverted pair rejects
    /// every exchange until corrected.
    pub fn set_minimum_exchange(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        let mut config = require_owner(&env, &caller)?;
        require_positive(amount)?;

        config.minimum = amount;
        set_config(&env, &config);

        events::setting_changed(&env, events::MINIMUM_SET, &caller, amount);
        Ok(())
    }

    pub fn set_maximum_exchange(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        let mut config = require_owner(&env, &caller)?;
        require_positive(amount)?;

        config.maximum = amount;
        set_config(&env, &config);

        events::setting_changed(&env, events::MAXIMUM_SET, &caller, amount);
        Ok(())
    }

    /// Pausing an already paused sale writes nothing and emits nothing.
    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        let mut config = require_owner(&env, &caller)?;
        if config.paused {
            return Ok(());
        }

        config.paused = true;
        set_config(&env, &config);

        events::pause_changed(&env, &caller, true);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        let mut config = require_owner(&env, &caller)?;
        if !config.paused {
            return Ok(());
        }

        config.paused = false;
        set_config(&env, &config);

        events::pause_changed(&env, &caller, false);
        Ok(())
    }

    /// Send the whole unsold token balance to the owner. Returns the amount moved.
    pub fn recover_tokens(env: Env, caller: Address) -> Result<i128, Error> {
        let config = require_owner(&env, &caller)?;

        let amount = balance_of(&env, &config.token);
        if amount > 0 {
            transfer(
                &env,
                &config.token,
                &env.current_contract_address(),
                &config.owner,
                amount,
            )?;
        }

        events::tokens_recovered(&env, &caller, amount);
        Ok(amount)
    }

    /// Send all collected payment to the owner. Returns the amount moved.
    pub fn withdraw_native(env: Env, caller: Address) -> Result<i128, Error> {
        let config = require_owner(&env, &caller)?;

        let amount = balance_of(&env, &config.payment_asset);
        if amount > 0 {
            transfer(
                &env,
                &config.payment_asset,
                &env.current_contract_address(),
                &config.owner,
                amount,
            )?;
        }

        events::native_withdrawn(&env, &caller, amount);
        Ok(amount)
    }

    // View functions
    pub fn available_tokens(env: Env) -> Result<i128, Error> {
        let config = get_config(&env)?;
        Ok(balance_of(&env, &config.token))
    }

    pub fn native_balance(env: Env) -> Result<i128, Error> {
        let config = get_config(&env)?;
        Ok(balance_of(&env, &config.payment_asset))
    }

    pub fn get_contribution(env: Env, participant: Address) -> i128 {
        get_contribution(&env, &participant).unwrap_or(0)
    }

    pub fn exchange_rate(env: Env) -> Result<i128, Error> {
        Ok(get_config(&env)?.exchange_rate)
    }

    pub fn minimum(env: Env) -> Result<i128, Error> {
        Ok(get_config(&env)?.minimum)
    }

    pub fn maximum(env: Env) -> Result<i128, Error> {
        Ok(get_config(&env)?.maximum)
    }

    pub fn paused(env: Env) -> Result<bool, Error> {
        Ok(get_config(&env)?.paused)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.owner)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.token)
    }

    pub fn payment_asset(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.payment_asset)
    }

    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }

    pub fn get_stats(env: Env) -> SaleStats {
        get_stats(&env)
    }
}
