//! MTK Faucet - Rate-Limited CW20 Dispenser
//!
//! Any account may claim a fixed amount of the configured CW20 token once
//! per 24 hours. The account that instantiated the faucet is its owner and
//! may withdraw the faucet's balance at any time.
//!
//! # Claim Flow
//! 1. The owner funds the faucet with a plain CW20 `Transfer`
//! 2. A user sends `Claim {}`
//! 3. The faucet checks the user's cooldown and its own token balance
//! 4. The last-claim timestamp is recorded and a CW20 `Transfer` to the user
//!    is dispatched in the same transaction
//!
//! Claim eligibility lives in [`controller`], independent of the chain; the
//! token is reached through the [`ledger::Ledger`] capability.

pub mod contract;
pub mod controller;
pub mod error;
pub mod ledger;
pub mod msg;
pub mod state;

pub use crate::controller::Eligibility;
pub use crate::error::ContractError;
