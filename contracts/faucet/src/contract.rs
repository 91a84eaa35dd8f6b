use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};

use crate::{
    actions::{
        execute::{
            set_cooldown_period, set_drip_amount, try_claim, try_emergency_withdraw, try_receive,
            update_owner,
        },
        instantiate::try_instantiate,
        migrate::migrate_contract,
        query::{
            query_can_claim, query_config, query_faucet_balance, query_last_claimed, query_owner,
            query_remaining_claims, query_stats,
        },
    },
    error::ContractError,
    msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
};

/// Creates a new contract with the specified parameters packed in the "msg" variable
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    try_instantiate(deps, env, info, msg)
}

/// Exposes all the execute functions available in the contract
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Claim {} => try_claim(deps, env, info),
        ExecuteMsg::Receive(msg) => try_receive(deps, env, info, msg),
        ExecuteMsg::UpdateOwner { owner } => update_owner(deps, env, info, owner),
        ExecuteMsg::SetDripAmount { amount } => set_drip_amount(deps, env, info, amount),
        ExecuteMsg::SetCooldownPeriod { period } => set_cooldown_period(deps, env, info, period),
        ExecuteMsg::EmergencyWithdraw {} => try_emergency_withdraw(deps, env, info),
    }
}

/// Exposes all the queries available in the contract
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps, env)?),
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps, env)?),
        QueryMsg::CanClaim { addr } => to_json_binary(&query_can_claim(deps, env, addr)?),
        QueryMsg::LastClaimed { addr } => to_json_binary(&query_last_claimed(deps, env, addr)?),
        QueryMsg::FaucetBalance {} => to_json_binary(&query_faucet_balance(deps, env)?),
        QueryMsg::RemainingClaims {} => to_json_binary(&query_remaining_claims(deps, env)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps, env)?),
    }
}

/// Used for contract migration
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    migrate_contract(deps, env, msg)
}
