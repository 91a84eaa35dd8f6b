use cosmwasm_std::{ensure, DepsMut, Env, MessageInfo, Response, Uint128};
use cw2::set_contract_version;
use cw_utils::nonpayable;

use crate::{
    error::ContractError,
    msg::InstantiateMsg,
    state::{
        Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_COOLDOWN_PERIOD,
        DEFAULT_DRIP_AMOUNT, FAUCET_BALANCE, OWNER, TOTAL_CLAIMS, TOTAL_DISTRIBUTED,
    },
};

pub fn try_instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    OWNER.set(deps.branch(), Some(info.sender))?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let token = deps.api.addr_validate(&msg.token)?;
    let drip_amount = msg
        .drip_amount
        .unwrap_or(Uint128::new(DEFAULT_DRIP_AMOUNT));
    ensure!(!drip_amount.is_zero(), ContractError::ZeroAmount {});

    CONFIG.save(
        deps.storage,
        &Config {
            token,
            drip_amount,
            cooldown_period: msg.cooldown_period.unwrap_or(DEFAULT_COOLDOWN_PERIOD),
        },
    )?;

    FAUCET_BALANCE.save(deps.storage, &Uint128::zero())?;
    TOTAL_DISTRIBUTED.save(deps.storage, &Uint128::zero())?;
    TOTAL_CLAIMS.save(deps.storage, &0)?;

    Ok(Response::new().add_attributes([("action", "try_instantiate")]))
}
