#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Reply, Response, StdResult,
    SubMsgResult,
};
use cw2::set_contract_version;
use vesting_wallet::{VestingConfig, WalletMsg, PUBLIC_KEY_LENGTH};

use crate::error::ContractError;
use crate::execute::{execute_external, execute_internal};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query::{
    query_info, query_is_whitelisted, query_locked_amount, query_public_key, query_raw_state,
    query_seqno, query_subwallet_id, query_vesting_data, query_whitelist,
};
use crate::state::{Wallet, CONFIG, WALLET};
use crate::{ACTION_FAILED_REPLY_ID, SEND_FAILED_REPLY_ID};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:vesting-wallet-contract";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response<WalletMsg>, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.owner_public_key.len() != PUBLIC_KEY_LENGTH {
        return Err(ContractError::PubKeyLengthIsNotValid {});
    }
    if msg.denom.is_empty() {
        return Err(ContractError::EmptyDenom {});
    }
    msg.schedule.validate()?;
    let vesting_sender = deps.api.addr_validate(&msg.vesting_sender_address)?;
    let owner = deps.api.addr_validate(&msg.owner_address)?;

    let event = Event::new("vesting.wallet.v1.MsgInstantiate").add_attributes(vec![
        ("creator", info.sender.to_string()),
        ("vesting_sender", vesting_sender.to_string()),
        ("owner", owner.to_string()),
        ("subwallet_id", msg.subwallet_id.to_string()),
        ("start_time", msg.schedule.start_time.to_string()),
        ("total_duration", msg.schedule.total_duration.to_string()),
        ("unlock_period", msg.schedule.unlock_period.to_string()),
        ("cliff_duration", msg.schedule.cliff_duration.to_string()),
        ("total_amount", msg.schedule.total_amount.to_string()),
        ("denom", msg.denom.clone()),
    ]);

    CONFIG.save(
        deps.storage,
        &VestingConfig {
            subwallet_id: msg.subwallet_id,
            owner_public_key: msg.owner_public_key,
            schedule: msg.schedule,
            vesting_sender,
            owner,
            denom: msg.denom,
        },
    )?;
    WALLET.save(deps.storage, &Wallet { seqno: 0 })?;

    Ok(Response::new().add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response<WalletMsg>, ContractError> {
    match msg {
        ExecuteMsg::Internal { body } => execute_internal(deps, env, info, body),
        ExecuteMsg::External { envelope } => execute_external(deps, env, info, envelope),
    }
}

/// Failed sends that must not revert the invocation come back here: any send
/// with the ignore-errors bit, and every action of an external command
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(
    _deps: DepsMut,
    _env: Env,
    reply: Reply,
) -> Result<Response<WalletMsg>, ContractError> {
    let mut event = match reply.id {
        SEND_FAILED_REPLY_ID => Event::new("vesting.wallet.v1.MsgSendFailed"),
        ACTION_FAILED_REPLY_ID => Event::new("vesting.wallet.v1.MsgActionFailed"),
        _ => return Err(ContractError::InvalidReplyId {}),
    };
    if let SubMsgResult::Err(err) = reply.result {
        event = event.add_attribute("error", err);
    }
    Ok(Response::new().add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Seqno {} => to_json_binary(&query_seqno(deps)?),
        QueryMsg::SubwalletId {} => to_json_binary(&query_subwallet_id(deps)?),
        QueryMsg::PublicKey {} => to_json_binary(&query_public_key(deps)?),
        QueryMsg::VestingData {} => to_json_binary(&query_vesting_data(deps)?),
        QueryMsg::Whitelist {} => to_json_binary(&query_whitelist(deps)?),
        QueryMsg::IsWhitelisted { address } => {
            to_json_binary(&query_is_whitelisted(deps, address)?)
        }
        QueryMsg::LockedAmount { at_time } => to_json_binary(&query_locked_amount(deps, at_time)?),
        QueryMsg::Info {} => to_json_binary(&query_info(deps)?),
        QueryMsg::RawState {} => to_json_binary(&query_raw_state(deps)?),
    }
}
