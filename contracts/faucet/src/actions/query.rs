use cosmwasm_std::{Addr, Deps, Env, StdResult, Uint128};

use crate::{
    msg::{CanClaimResponse, LastClaimedResponse, StatsResponse},
    state::{Config, CONFIG, FAUCET_BALANCE, LAST_CLAIMED, OWNER, TOTAL_CLAIMS, TOTAL_DISTRIBUTED},
    utils::remaining_cooldown,
};

pub fn query_config(deps: Deps, _env: Env) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

/// query owner
pub fn query_owner(deps: Deps, _env: Env) -> StdResult<Addr> {
    let owner = OWNER.get(deps)?;
    Ok(owner.unwrap())
}

/// Advisory only, checks the cooldown and not the balance. A claim sent
/// right after a positive answer can still fail on an exhausted faucet.
pub fn query_can_claim(deps: Deps, env: Env, addr: String) -> StdResult<CanClaimResponse> {
    let config = CONFIG.load(deps.storage)?;
    let account = deps.api.addr_validate(&addr)?;
    let last_claimed = LAST_CLAIMED.may_load(deps.storage, &account)?;
    let remaining_cooldown = remaining_cooldown(
        last_claimed,
        config.cooldown_period,
        env.block.time.seconds(),
    );

    Ok(CanClaimResponse {
        can_claim: remaining_cooldown == 0,
        remaining_cooldown,
    })
}

pub fn query_last_claimed(deps: Deps, _env: Env, addr: String) -> StdResult<LastClaimedResponse> {
    Ok(LastClaimedResponse {
        last_claim_at: LAST_CLAIMED
            .may_load(deps.storage, &deps.api.addr_validate(&addr)?)?
            .unwrap_or_default(),
    })
}

pub fn query_faucet_balance(deps: Deps, _env: Env) -> StdResult<Uint128> {
    FAUCET_BALANCE.load(deps.storage)
}

pub fn query_remaining_claims(deps: Deps, _env: Env) -> StdResult<Uint128> {
    let config = CONFIG.load(deps.storage)?;
    let balance = FAUCET_BALANCE.load(deps.storage)?;

    Ok(balance.checked_div(config.drip_amount).unwrap_or_default())
}

pub fn query_stats(deps: Deps, _env: Env) -> StdResult<StatsResponse> {
    Ok(StatsResponse {
        total_distributed: TOTAL_DISTRIBUTED.load(deps.storage)?,
        total_claims: TOTAL_CLAIMS.load(deps.storage)?,
    })
}
