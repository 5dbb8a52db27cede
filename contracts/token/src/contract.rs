use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult, Uint128,
};
use cw2::set_contract_version;
use cw20::Cw20Coin;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{
    CONTRACT_NAME, CONTRACT_VERSION, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.initial_supply.is_zero() {
        return Err(ContractError::ZeroSupply);
    }
    let total_supply = to_base_units(msg.initial_supply)?;

    // No minter: the initial balance is the entire supply, forever.
    let base_msg = cw20_base::msg::InstantiateMsg {
        name: TOKEN_NAME.to_string(),
        symbol: TOKEN_SYMBOL.to_string(),
        decimals: TOKEN_DECIMALS,
        initial_balances: vec![Cw20Coin {
            address: info.sender.to_string(),
            amount: total_supply,
        }],
        mint: None,
        marketing: None,
    };
    let res = cw20_base::contract::instantiate(deps.branch(), env, info.clone(), base_msg)?;

    // cw20-base records its own version; overwrite it with ours.
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(res
        .add_attribute("action", "instantiate")
        .add_attribute("holder", info.sender)
        .add_attribute("total_supply", total_supply))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    Ok(cw20_base::contract::execute(deps, env, info, msg)?)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    cw20_base::contract::query(deps, env, msg)
}

/// Scale a whole-token amount to base units (`amount * 10^decimals`).
pub fn to_base_units(whole_tokens: Uint128) -> StdResult<Uint128> {
    let unit = Uint128::from(10u128.pow(TOKEN_DECIMALS as u32));
    whole_tokens.checked_mul(unit).map_err(StdError::from)
}
