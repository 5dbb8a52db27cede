use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:mtk-faucet";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const COOLDOWN_SECONDS: u64 = 86_400; // 24 hours

/// 100 tokens at 18 decimals
pub const DEFAULT_CLAIM_AMOUNT: u128 = 100_000_000_000_000_000_000;

/// Fixed at instantiate; no message updates it.
#[cw_serde]
pub struct Config {
    /// Sole account allowed to withdraw
    pub owner: Addr,
    /// CW20 contract holding the faucet's balance
    pub token: Addr,
    /// Base units sent per successful claim
    pub claim_amount: Uint128,
    pub cooldown_seconds: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// claimer => block time (seconds) of the last successful claim
pub const LAST_CLAIM: Map<&Addr, u64> = Map::new("last_claim");
