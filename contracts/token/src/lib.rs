//! MyToken (MTK) - Fixed-Supply CW20 Token
//!
//! The whole supply is minted to the instantiating account and no minter is
//! registered, so the supply can never grow. Transfers, allowances and
//! balance queries are the standard CW20 surface provided by `cw20-base`.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
