//! Claim eligibility and withdrawal control.
//!
//! Every address is either `Eligible` or `CoolingDown`. A successful claim
//! moves it to `CoolingDown`, stamped with the claim time; it becomes
//! `Eligible` again once `cooldown_seconds` have elapsed. Addresses that have
//! never claimed start out `Eligible`.
//!
//! The current time is always an explicit argument and token movements go
//! through an injected [`Ledger`], so none of this depends on the chain.

use cosmwasm_std::{Addr, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::ledger::Ledger;
use crate::state::{Config, LAST_CLAIM};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    CoolingDown { remaining_seconds: u64 },
}

/// `last_claim` is `None` for an address that never claimed.
pub fn eligibility(last_claim: Option<u64>, now: u64, cooldown_seconds: u64) -> Eligibility {
    let Some(last) = last_claim else {
        return Eligibility::Eligible;
    };

    let elapsed = now.saturating_sub(last);
    if elapsed >= cooldown_seconds {
        Eligibility::Eligible
    } else {
        Eligibility::CoolingDown {
            remaining_seconds: cooldown_seconds - elapsed,
        }
    }
}

pub fn last_claim(storage: &dyn Storage, addr: &Addr) -> StdResult<Option<u64>> {
    LAST_CLAIM.may_load(storage, addr)
}

pub fn can_claim(storage: &dyn Storage, config: &Config, addr: &Addr, now: u64) -> StdResult<bool> {
    let last = last_claim(storage, addr)?;
    Ok(eligibility(last, now, config.cooldown_seconds) == Eligibility::Eligible)
}

pub fn time_until_next_claim(
    storage: &dyn Storage,
    config: &Config,
    addr: &Addr,
    now: u64,
) -> StdResult<u64> {
    let last = last_claim(storage, addr)?;
    Ok(match eligibility(last, now, config.cooldown_seconds) {
        Eligibility::Eligible => 0,
        Eligibility::CoolingDown { remaining_seconds } => remaining_seconds,
    })
}

/// Send `config.claim_amount` to `claimer` and start its cooldown.
///
/// The timestamp is only written once the ledger has accepted the transfer,
/// so a claim rejected for lack of funds can be retried immediately.
pub fn claim<L: Ledger>(
    storage: &mut dyn Storage,
    ledger: &mut L,
    config: &Config,
    claimer: &Addr,
    now: u64,
) -> Result<Uint128, ContractError> {
    let last = last_claim(storage, claimer)?;
    if let Eligibility::CoolingDown { remaining_seconds } =
        eligibility(last, now, config.cooldown_seconds)
    {
        return Err(ContractError::CooldownActive { remaining_seconds });
    }

    ledger.transfer(claimer, config.claim_amount)?;
    LAST_CLAIM.save(storage, claimer, &now)?;

    Ok(config.claim_amount)
}

/// Owner-only: move `amount` from the faucet to the owner.
pub fn withdraw<L: Ledger>(
    ledger: &mut L,
    config: &Config,
    caller: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    if *caller != config.owner {
        return Err(ContractError::NotOwner);
    }
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }

    ledger.transfer(&config.owner, amount)
}
