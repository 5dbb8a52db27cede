use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized: only the owner can withdraw")]
    NotOwner,

    #[error("24h cooldown: next claim in {remaining_seconds} seconds")]
    CooldownActive { remaining_seconds: u64 },

    #[error("Insufficient faucet balance: available {available}, requested {requested}")]
    InsufficientFaucetBalance {
        available: Uint128,
        requested: Uint128,
    },

    #[error("Claim amount must be greater than zero")]
    InvalidClaimAmount,

    #[error("Withdraw amount must be greater than zero")]
    InvalidAmount,
}
