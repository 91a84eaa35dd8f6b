use cosmwasm_std::{ensure, ensure_eq, DepsMut, Env, Response};
use cw2::{get_contract_version, set_contract_version};
use semver::Version;

use crate::{
    error::ContractError,
    msg::MigrateMsg,
    state::{CONTRACT_NAME, CONTRACT_VERSION},
};

pub fn migrate_contract(
    deps: DepsMut,
    _env: Env,
    _msg: MigrateMsg,
) -> Result<Response, ContractError> {
    let version_new: Version = CONTRACT_VERSION.parse()?;
    let stored = get_contract_version(deps.storage)?;

    ensure_eq!(
        stored.contract,
        CONTRACT_NAME,
        ContractError::ContractNameErr(stored.contract)
    );

    let version_previous: Version = stored.version.parse()?;
    ensure!(
        version_new > version_previous,
        ContractError::VersionErr(version_previous.to_string())
    );

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new().add_attribute("new_contract_version", CONTRACT_VERSION))
}
