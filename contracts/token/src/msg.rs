use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

pub use cw20_base::msg::{ExecuteMsg, QueryMsg};

#[cw_serde]
pub struct InstantiateMsg {
    /// Supply in whole tokens; scaled by 10^decimals before minting
    pub initial_supply: Uint128,
}
