use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// CW20 token distributed by the faucet
    pub token: Addr,
    /// amount sent per successful claim, in smallest units
    pub drip_amount: Uint128,
    /// seconds an account must wait between claims
    pub cooldown_period: u64,
}

pub const CONTRACT_NAME: &str = "crates.io:token-faucet";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 10,000 tokens at 2 decimals
pub const DEFAULT_DRIP_AMOUNT: u128 = 1_000_000;
/// 24 hours
pub const DEFAULT_COOLDOWN_PERIOD: u64 = 86_400;

pub const CONFIG: Item<Config> = Item::new("config");

/// distributable balance, moved only by fund/claim/withdraw
pub const FAUCET_BALANCE: Item<Uint128> = Item::new("faucet balance");

pub const TOTAL_DISTRIBUTED: Item<Uint128> = Item::new("total distributed");

pub const TOTAL_CLAIMS: Item<u64> = Item::new("total claims");

pub const LAST_CLAIMED: Map<&Addr, u64> = Map::new("last claimed");

pub const OWNER: Admin = Admin::new("owner");
