use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// CW20 token contract the faucet dispenses
    pub token: String,
    /// Base units per claim; defaults to 100 tokens at 18 decimals
    pub claim_amount: Option<Uint128>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Claim the fixed amount (rate-limited to once per 24h per wallet)
    Claim {},
    /// Owner: move tokens out of the faucet to the owner
    Withdraw { amount: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    /// Whether `address` could claim at the current block time
    #[returns(CanClaimResponse)]
    CanClaim { address: String },
    /// Seconds until `address` can claim again; 0 when it can claim now
    #[returns(TimeUntilNextClaimResponse)]
    TimeUntilNextClaim { address: String },
    /// Timestamp (seconds) of the last claim; 0 if the address never claimed
    #[returns(LastClaimResponse)]
    LastClaim { address: String },
    /// Token balance currently held by the faucet
    #[returns(FaucetBalanceResponse)]
    FaucetBalance {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub token: Addr,
    pub claim_amount: Uint128,
    pub cooldown_seconds: u64,
}

#[cw_serde]
pub struct CanClaimResponse {
    pub can_claim: bool,
}

#[cw_serde]
pub struct TimeUntilNextClaimResponse {
    pub seconds: u64,
}

#[cw_serde]
pub struct LastClaimResponse {
    pub last_claim: u64,
}

#[cw_serde]
pub struct FaucetBalanceResponse {
    pub balance: Uint128,
}
