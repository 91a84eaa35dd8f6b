use cosmwasm_std::{
    ensure, ensure_eq, from_json, to_json_binary, Addr, DepsMut, Env, MessageInfo, Response,
    StdResult, Uint128, WasmMsg,
};
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};
use cw_utils::nonpayable;

use crate::{
    error::ContractError,
    msg::Cw20HookMsg,
    state::{CONFIG, FAUCET_BALANCE, LAST_CLAIMED, OWNER, TOTAL_CLAIMS, TOTAL_DISTRIBUTED},
    utils::remaining_cooldown,
};

pub fn try_claim(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;

    let sender_address = info.sender;
    let now_in_seconds = env.block.time.seconds();
    let last_claimed = LAST_CLAIMED.may_load(deps.storage, &sender_address)?;

    let remaining = remaining_cooldown(last_claimed, config.cooldown_period, now_in_seconds);
    ensure!(remaining == 0, ContractError::CooldownNotExpired { remaining });

    let balance = FAUCET_BALANCE.load(deps.storage)?;
    ensure!(
        balance >= config.drip_amount,
        ContractError::InsufficientFaucetBalance {}
    );

    FAUCET_BALANCE.save(deps.storage, &(balance - config.drip_amount))?;
    TOTAL_DISTRIBUTED.update(deps.storage, |total| -> StdResult<_> {
        Ok(total.checked_add(config.drip_amount)?)
    })?;
    TOTAL_CLAIMS.update(deps.storage, |claims| -> StdResult<_> { Ok(claims + 1) })?;
    LAST_CLAIMED.save(deps.storage, &sender_address, &now_in_seconds)?;

    let msg = WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: sender_address.to_string(),
            amount: config.drip_amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "try_claim")
        .add_attribute("recipient", sender_address)
        .add_attribute("amount", config.drip_amount.to_string())
        .add_attribute("timestamp", now_in_seconds.to_string()))
}

pub fn try_receive(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(
        info.sender,
        config.token,
        ContractError::Cw20AddressesNotMatch {
            got: info.sender.to_string(),
            expected: config.token.to_string(),
        }
    );

    match from_json(&msg.msg)? {
        Cw20HookMsg::Fund {} => try_fund(deps, msg.sender, msg.amount),
    }
}

fn try_fund(deps: DepsMut, sender: String, amount: Uint128) -> Result<Response, ContractError> {
    ensure!(!amount.is_zero(), ContractError::ZeroAmount {});

    FAUCET_BALANCE.update(deps.storage, |balance| -> StdResult<_> {
        Ok(balance.checked_add(amount)?)
    })?;

    Ok(Response::new()
        .add_attribute("action", "try_fund")
        .add_attribute("sender", sender)
        .add_attribute("amount", amount.to_string()))
}

pub fn update_owner(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    new_owner: Addr,
) -> Result<Response, ContractError> {
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;
    OWNER.set(deps.branch(), Some(new_owner.clone()))?;

    Ok(Response::new()
        .add_attribute("action", "update_owner")
        .add_attribute("to", new_owner))
}

pub fn set_drip_amount(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;
    ensure!(!amount.is_zero(), ContractError::ZeroAmount {});

    let mut config = CONFIG.load(deps.storage)?;
    let previous_amount = config.drip_amount;
    config.drip_amount = amount;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_drip_amount")
        .add_attribute("old_amount", previous_amount.to_string())
        .add_attribute("new_amount", amount.to_string()))
}

pub fn set_cooldown_period(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    period: u64,
) -> Result<Response, ContractError> {
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    let previous_period = config.cooldown_period;
    config.cooldown_period = period;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_cooldown_period")
        .add_attribute("old_period", previous_period.to_string())
        .add_attribute("new_period", period.to_string()))
}

pub fn try_emergency_withdraw(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    let balance = FAUCET_BALANCE.load(deps.storage)?;
    ensure!(!balance.is_zero(), ContractError::ZeroAmount {});

    FAUCET_BALANCE.save(deps.storage, &Uint128::zero())?;

    let msg = WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: info.sender.to_string(),
            amount: balance,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "try_emergency_withdraw")
        .add_attribute("recipient", info.sender)
        .add_attribute("amount", balance.to_string()))
}
