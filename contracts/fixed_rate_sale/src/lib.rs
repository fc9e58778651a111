#![no_std]

mod contract;
pub mod events;
mod storage;
mod types;


pub use contract::{FixedRateSale, FixedRateSaleClient};
pub use types::{Error, SaleConfig, SaleStats};
