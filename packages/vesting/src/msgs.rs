use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::schedule::VestingSchedule;
use crate::wallet::{Seqno, WalletInfo};

#[cw_serde]
pub struct InstantiateMsg {
    pub subwallet_id: u32,
    /// ed25519 public key (32 bytes) of the owner
    pub owner_public_key: Binary,
    pub schedule: VestingSchedule,
    pub vesting_sender_address: String,
    pub owner_address: String,
    /// Denomination of the vested funds
    pub denom: String,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(SeqnoResponse)]
    Seqno {},
    #[returns(SubwalletIdResponse)]
    SubwalletId {},
    #[returns(PublicKeyResponse)]
    PublicKey {},
    /// Schedule, parties and the encoded whitelist
    #[returns(VestingDataResponse)]
    VestingData {},
    /// Whitelisted addresses in ascending order
    #[returns(WhitelistResponse)]
    Whitelist {},
    #[returns(IsWhitelistedResponse)]
    IsWhitelisted { address: String },
    /// Amount still locked at `at_time` (seconds)
    #[returns(LockedAmountResponse)]
    LockedAmount { at_time: u64 },
    #[returns(WalletInfo)]
    Info {},
    /// Full state as an encoded `StateRecord`
    #[returns(Binary)]
    RawState {},
}

#[cw_serde]
pub struct SeqnoResponse {
    pub seqno: Seqno,
}

#[cw_serde]
pub struct SubwalletIdResponse {
    pub subwallet_id: u32,
}

#[cw_serde]
pub struct PublicKeyResponse {
    pub public_key: Binary,
}

#[cw_serde]
pub struct VestingDataResponse {
    pub vesting_start_time: u64,
    pub vesting_total_duration: u32,
    pub unlock_period: u32,
    pub cliff_duration: u32,
    pub vesting_total_amount: Uint128,
    pub vesting_sender_address: Addr,
    pub owner_address: Addr,
    /// JSON list of the whitelisted addresses, absent when empty
    pub whitelist: Option<Binary>,
}

#[cw_serde]
pub struct WhitelistResponse {
    pub addresses: Vec<Addr>,
}

#[cw_serde]
pub struct IsWhitelistedResponse {
    pub is_whitelisted: bool,
}

#[cw_serde]
pub struct LockedAmountResponse {
    pub locked: Uint128,
}
