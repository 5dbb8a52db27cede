use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response,
    StdResult, Uint128,
};
use cw2::set_contract_version;
use cw_utils::nonpayable;

use crate::controller;
use crate::error::ContractError;
use crate::ledger::{Cw20Ledger, Ledger};
use crate::msg::{
    CanClaimResponse, ConfigResponse, ExecuteMsg, FaucetBalanceResponse, InstantiateMsg,
    LastClaimResponse, MigrateMsg, QueryMsg, TimeUntilNextClaimResponse,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, COOLDOWN_SECONDS, DEFAULT_CLAIM_AMOUNT,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let token = deps.api.addr_validate(&msg.token)?;
    let claim_amount = msg
        .claim_amount
        .unwrap_or_else(|| Uint128::from(DEFAULT_CLAIM_AMOUNT));
    if claim_amount.is_zero() {
        return Err(ContractError::InvalidClaimAmount);
    }

    let config = Config {
        owner: info.sender,
        token,
        claim_amount,
        cooldown_seconds: COOLDOWN_SECONDS,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("token", config.token)
        .add_attribute("claim_amount", config.claim_amount)
        .add_attribute("cooldown_seconds", config.cooldown_seconds.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Claim {} => execute_claim(deps, env, info),
        ExecuteMsg::Withdraw { amount } => execute_withdraw(deps, env, info, amount),
    }
}

fn execute_claim(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let config = CONFIG.load(deps.storage)?;
    let mut ledger = Cw20Ledger::new(deps.querier, config.token.clone(), env.contract.address);

    let amount = controller::claim(
        deps.storage,
        &mut ledger,
        &config,
        &info.sender,
        env.block.time.seconds(),
    )?;

    let event = Event::new("tokens_claimed")
        .add_attribute("claimer", info.sender.as_str())
        .add_attribute("amount", amount);

    Ok(Response::new()
        .add_messages(ledger.into_messages())
        .add_event(event)
        .add_attribute("action", "claim")
        .add_attribute("claimer", info.sender)
        .add_attribute("amount", amount))
}

fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let config = CONFIG.load(deps.storage)?;
    let mut ledger = Cw20Ledger::new(deps.querier, config.token.clone(), env.contract.address);

    controller::withdraw(&mut ledger, &config, &info.sender, amount)?;

    Ok(Response::new()
        .add_messages(ledger.into_messages())
        .add_attribute("action", "withdraw")
        .add_attribute("owner", config.owner)
        .add_attribute("amount", amount))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::CanClaim { address } => to_json_binary(&query_can_claim(deps, env, address)?),
        QueryMsg::TimeUntilNextClaim { address } => {
            to_json_binary(&query_time_until_next_claim(deps, env, address)?)
        }
        QueryMsg::LastClaim { address } => to_json_binary(&query_last_claim(deps, address)?),
        QueryMsg::FaucetBalance {} => to_json_binary(&query_faucet_balance(deps, env)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        token: config.token,
        claim_amount: config.claim_amount,
        cooldown_seconds: config.cooldown_seconds,
    })
}

fn query_can_claim(deps: Deps, env: Env, address: String) -> StdResult<CanClaimResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let config = CONFIG.load(deps.storage)?;
    let can_claim = controller::can_claim(deps.storage, &config, &addr, env.block.time.seconds())?;
    Ok(CanClaimResponse { can_claim })
}

fn query_time_until_next_claim(
    deps: Deps,
    env: Env,
    address: String,
) -> StdResult<TimeUntilNextClaimResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let config = CONFIG.load(deps.storage)?;
    let seconds =
        controller::time_until_next_claim(deps.storage, &config, &addr, env.block.time.seconds())?;
    Ok(TimeUntilNextClaimResponse { seconds })
}

fn query_last_claim(deps: Deps, address: String) -> StdResult<LastClaimResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let last_claim = controller::last_claim(deps.storage, &addr)?.unwrap_or(0);
    Ok(LastClaimResponse { last_claim })
}

fn query_faucet_balance(deps: Deps, env: Env) -> StdResult<FaucetBalanceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let ledger = Cw20Ledger::new(deps.querier, config.token, env.contract.address.clone());
    let balance = ledger.balance_of(&env.contract.address)?;
    Ok(FaucetBalanceResponse { balance })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
