use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use cw20::Cw20ReceiveMsg;

use crate::state::Config;

#[cw_serde]
pub struct InstantiateMsg {
    pub token: String,
    pub drip_amount: Option<Uint128>,
    pub cooldown_period: Option<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    Claim {},
    Receive(Cw20ReceiveMsg),
    UpdateOwner { owner: Addr },
    SetDripAmount { amount: Uint128 },
    SetCooldownPeriod { period: u64 },
    EmergencyWithdraw {},
}

#[cw_serde]
pub enum Cw20HookMsg {
    Fund {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},

    #[returns(Addr)]
    Owner {},

    #[returns(CanClaimResponse)]
    CanClaim { addr: String },

    #[returns(LastClaimedResponse)]
    LastClaimed { addr: String },

    #[returns(Uint128)]
    FaucetBalance {},

    #[returns(Uint128)]
    RemainingClaims {},

    #[returns(StatsResponse)]
    Stats {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct CanClaimResponse {
    pub can_claim: bool,
    pub remaining_cooldown: u64,
}

#[cw_serde]
pub struct LastClaimedResponse {
    pub last_claim_at: u64,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_distributed: Uint128,
    pub total_claims: u64,
}
