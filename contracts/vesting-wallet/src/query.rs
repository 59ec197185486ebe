use cosmwasm_std::{Addr, Binary, Deps, Order, StdResult};
use vesting_wallet::{
    encode_whitelist, IsWhitelistedResponse, LockedAmountResponse, PublicKeyResponse,
    SeqnoResponse, StateRecord, SubwalletIdResponse, VestingDataResponse, WalletInfo,
    WhitelistResponse,
};

use crate::helpers::{is_whitelisted, load_whitelist};
use crate::state::{CONFIG, WALLET, WHITELIST};

pub fn query_seqno(deps: Deps) -> StdResult<SeqnoResponse> {
    Ok(SeqnoResponse {
        seqno: WALLET.load(deps.storage)?.seqno,
    })
}

pub fn query_subwallet_id(deps: Deps) -> StdResult<SubwalletIdResponse> {
    Ok(SubwalletIdResponse {
        subwallet_id: CONFIG.load(deps.storage)?.subwallet_id,
    })
}

pub fn query_public_key(deps: Deps) -> StdResult<PublicKeyResponse> {
    Ok(PublicKeyResponse {
        public_key: CONFIG.load(deps.storage)?.owner_public_key,
    })
}

pub fn query_vesting_data(deps: Deps) -> StdResult<VestingDataResponse> {
    let config = CONFIG.load(deps.storage)?;
    let whitelist = encode_whitelist(&load_whitelist(deps.storage)?)?;

    Ok(VestingDataResponse {
        vesting_start_time: config.schedule.start_time,
        vesting_total_duration: config.schedule.total_duration,
        unlock_period: config.schedule.unlock_period,
        cliff_duration: config.schedule.cliff_duration,
        vesting_total_amount: config.schedule.total_amount,
        vesting_sender_address: config.vesting_sender,
        owner_address: config.owner,
        whitelist,
    })
}

pub fn query_whitelist(deps: Deps) -> StdResult<WhitelistResponse> {
    Ok(WhitelistResponse {
        addresses: load_whitelist(deps.storage)?,
    })
}

/// Governance destinations are not chain addresses, so the address is not validated
pub fn query_is_whitelisted(deps: Deps, address: String) -> StdResult<IsWhitelistedResponse> {
    Ok(IsWhitelistedResponse {
        is_whitelisted: is_whitelisted(deps.storage, &Addr::unchecked(address)),
    })
}

pub fn query_locked_amount(deps: Deps, at_time: u64) -> StdResult<LockedAmountResponse> {
    Ok(LockedAmountResponse {
        locked: CONFIG.load(deps.storage)?.schedule.locked_amount(at_time),
    })
}

/// Returns wallet info
pub fn query_info(deps: Deps) -> StdResult<WalletInfo> {
    let config = CONFIG.load(deps.storage)?;
    let whitelist_size = WHITELIST
        .keys_raw(deps.storage, None, None, Order::Ascending)
        .count() as u64;

    Ok(WalletInfo {
        seqno: WALLET.load(deps.storage)?.seqno,
        subwallet_id: config.subwallet_id,
        owner_public_key: config.owner_public_key,
        schedule: config.schedule,
        vesting_sender: config.vesting_sender,
        owner: config.owner,
        denom: config.denom,
        whitelist_size,
        version: cw2::get_contract_version(deps.storage)?,
    })
}

/// Whole state as an encoded [`StateRecord`]
pub fn query_raw_state(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;

    StateRecord {
        seqno: WALLET.load(deps.storage)?.seqno,
        subwallet_id: config.subwallet_id,
        public_key: config.owner_public_key,
        whitelist: load_whitelist(deps.storage)?,
        schedule: config.schedule,
        vesting_sender: config.vesting_sender,
        owner: config.owner,
    }
    .encode()
}
