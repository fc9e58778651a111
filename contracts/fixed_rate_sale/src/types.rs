use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    Paused = 4,
    BelowMinimum = 5,
    AboveMaximum = 6,
    Overflow = 7,
    InsufficientInventory = 8,
    TransferFailed = 9,
    InvalidAmount = 10,
    InvalidConfig = 11,
}

/// Sale configuration. Written once by `initialize`, after which only the
/// rate, the bounds and the pause flag change.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub owner: Address,
    pub token: Address,         // Token being sold
    pub payment_asset: Address, // Native asset contract the sale is paid in
    pub exchange_rate: i128,    // Token units per payment unit
    pub minimum: i128,
    pub maximum: i128,
    pub paused: bool,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct SaleStats {
    pub total_raised: i128,
    pub tokens_sold: i128,
    pub participants: u32,
}

#[contracttype]
pub enum DataKey {
    Config,
    Stats,
    Contribution(Address),
}
