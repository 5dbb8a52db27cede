//! Ledger capability used by the faucet controller.
//!
//! The controller never talks to a token contract directly; it is handed a
//! [`Ledger`] that debits the faucet's own balance. [`Cw20Ledger`] is the
//! on-chain implementation: it checks the faucet's CW20 balance up front and
//! queues `Cw20ExecuteMsg::Transfer` messages that the chain executes in the
//! same transaction as the controller's storage writes.

use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdError, StdResult, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::error::ContractError;

pub trait Ledger {
    /// Balance currently held by `holder`.
    fn balance_of(&self, holder: &Addr) -> StdResult<Uint128>;

    /// Move `amount` from the faucet's own balance to `recipient`.
    ///
    /// Fails with [`ContractError::InsufficientFaucetBalance`] and changes
    /// nothing when the faucet holds less than `amount`.
    fn transfer(&mut self, recipient: &Addr, amount: Uint128) -> Result<(), ContractError>;
}

pub struct Cw20Ledger<'a> {
    querier: QuerierWrapper<'a>,
    token: Addr,
    holder: Addr,
    /// Amount already promised by queued transfers in this call
    committed: Uint128,
    messages: Vec<CosmosMsg>,
}

impl<'a> Cw20Ledger<'a> {
    /// `holder` is the faucet contract itself.
    pub fn new(querier: QuerierWrapper<'a>, token: Addr, holder: Addr) -> Self {
        Self {
            querier,
            token,
            holder,
            committed: Uint128::zero(),
            messages: vec![],
        }
    }

    /// Faucet balance net of transfers already queued in this call.
    pub fn available(&self) -> StdResult<Uint128> {
        self.balance_of(&self.holder)?
            .checked_sub(self.committed)
            .map_err(StdError::from)
    }

    pub fn into_messages(self) -> Vec<CosmosMsg> {
        self.messages
    }
}

impl Ledger for Cw20Ledger<'_> {
    fn balance_of(&self, holder: &Addr) -> StdResult<Uint128> {
        let res: BalanceResponse = self.querier.query_wasm_smart(
            self.token.as_str(),
            &Cw20QueryMsg::Balance {
                address: holder.to_string(),
            },
        )?;
        Ok(res.balance)
    }

    fn transfer(&mut self, recipient: &Addr, amount: Uint128) -> Result<(), ContractError> {
        let available = self.available()?;
        if available < amount {
            return Err(ContractError::InsufficientFaucetBalance {
                available,
                requested: amount,
            });
        }

        self.committed = self.committed.checked_add(amount).map_err(StdError::from)?;
        self.messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        }));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockQuerier;
    use cosmwasm_std::{from_json, ContractResult, SystemError, SystemResult, WasmQuery};

    const TOKEN: &str = "terra1token";
    const FAUCET: &str = "terra1faucet";

    fn querier_with_balance(balance: u128) -> MockQuerier {
        let mut querier: MockQuerier = MockQuerier::new(&[]);
        querier.update_wasm(move |query| match query {
            WasmQuery::Smart { contract_addr, msg } if contract_addr == TOKEN => {
                match from_json(msg).unwrap() {
                    Cw20QueryMsg::Balance { address } if address == FAUCET => {
                        SystemResult::Ok(ContractResult::Ok(
                            to_json_binary(&BalanceResponse {
                                balance: Uint128::from(balance),
                            })
                            .unwrap(),
                        ))
                    }
                    _ => SystemResult::Ok(ContractResult::Ok(
                        to_json_binary(&BalanceResponse {
                            balance: Uint128::zero(),
                        })
                        .unwrap(),
                    )),
                }
            }
            _ => SystemResult::Err(SystemError::UnsupportedRequest {
                kind: "wasm".to_string(),
            }),
        });
        querier
    }

    fn ledger(querier: &MockQuerier) -> Cw20Ledger<'_> {
        Cw20Ledger::new(
            QuerierWrapper::new(querier),
            Addr::unchecked(TOKEN),
            Addr::unchecked(FAUCET),
        )
    }

    #[test]
    fn test_balance_of_queries_token() {
        let querier = querier_with_balance(500);
        let ledger = ledger(&querier);

        assert_eq!(
            ledger.balance_of(&Addr::unchecked(FAUCET)).unwrap(),
            Uint128::from(500u128)
        );
        assert_eq!(
            ledger.balance_of(&Addr::unchecked("terra1other")).unwrap(),
            Uint128::zero()
        );
    }

    #[test]
    fn test_transfer_queues_cw20_message() {
        let querier = querier_with_balance(500);
        let mut ledger = ledger(&querier);
        let user = Addr::unchecked("terra1user");

        ledger.transfer(&user, Uint128::from(200u128)).unwrap();
        assert_eq!(ledger.available().unwrap(), Uint128::from(300u128));

        let messages = ledger.into_messages();
        assert_eq!(messages.len(), 1);
        match &messages[0] {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr,
                msg,
                funds,
            }) => {
                assert_eq!(contract_addr, TOKEN);
                assert!(funds.is_empty());
                assert_eq!(
                    from_json::<Cw20ExecuteMsg>(msg).unwrap(),
                    Cw20ExecuteMsg::Transfer {
                        recipient: user.to_string(),
                        amount: Uint128::from(200u128),
                    }
                );
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_transfer_counts_queued_amounts() {
        let querier = querier_with_balance(500);
        let mut ledger = ledger(&querier);
        let user = Addr::unchecked("terra1user");

        ledger.transfer(&user, Uint128::from(300u128)).unwrap();
        let err = ledger.transfer(&user, Uint128::from(300u128)).unwrap_err();
        assert_eq!(
            err,
            ContractError::InsufficientFaucetBalance {
                available: Uint128::from(200u128),
                requested: Uint128::from(300u128),
            }
        );
        assert_eq!(ledger.into_messages().len(), 1);
    }

    #[test]
    fn test_transfer_exact_balance() {
        let querier = querier_with_balance(500);
        let mut ledger = ledger(&querier);

        ledger
            .transfer(&Addr::unchecked("terra1user"), Uint128::from(500u128))
            .unwrap();
        assert_eq!(ledger.available().unwrap(), Uint128::zero());
    }
}
