use cosmwasm_std::{Addr, CosmosMsg, MessageInfo, Order, StdResult, Storage, SubMsg, Uint128};
use cw_utils::{may_pay, PaymentError};
use vesting_wallet::{
    create_response_body, op, send_mode, OutboundMessage, VestingConfig, WalletMsg,
};

use crate::state::WHITELIST;
use crate::{ACTION_FAILED_REPLY_ID, SEND_FAILED_REPLY_ID};

/// Load whitelisted addresses from store
pub fn load_whitelist(storage: &dyn Storage) -> StdResult<Vec<Addr>> {
    WHITELIST
        .keys(storage, None, None, Order::Ascending)
        .collect()
}

/// Checks if the address is whitelisted
pub fn is_whitelisted(storage: &dyn Storage, address: &Addr) -> bool {
    WHITELIST.has(storage, address)
}

/// Adds addresses to the whitelist, returning the ones that were not there yet
pub fn add_to_whitelist(storage: &mut dyn Storage, addresses: &[Addr]) -> StdResult<Vec<Addr>> {
    let mut added = vec![];
    for address in addresses {
        if !WHITELIST.has(storage, address) {
            WHITELIST.save(storage, address, &())?;
            added.push(address.clone());
        }
    }
    Ok(added)
}

pub fn is_vesting_sender(config: &VestingConfig, sender: &Addr) -> bool {
    &config.vesting_sender == sender
}

pub fn is_owner(config: &VestingConfig, sender: &Addr) -> bool {
    &config.owner == sender
}

/// Elector or config governance contract
pub fn is_governance(address: &Addr) -> bool {
    address.as_str() == op::ELECTOR_ADDRESS || address.as_str() == op::CONFIG_ADDRESS
}

/// Value attached in the vesting denom
pub fn attached_value(info: &MessageInfo, denom: &str) -> Result<Uint128, PaymentError> {
    may_pay(info, denom)
}

/// Wraps a send so that only modes with the ignore-errors bit survive a
/// failed delivery
pub fn outbound_submsg(mode: u8, message: OutboundMessage) -> SubMsg<WalletMsg> {
    let msg = CosmosMsg::Custom(WalletMsg::Send { mode, message });
    if send_mode::ignores_errors(mode) {
        SubMsg::reply_on_error(msg, SEND_FAILED_REPLY_ID)
    } else {
        SubMsg::new(msg)
    }
}

/// Sends of an external command always report back, so a failed action is
/// reverted on its own while the consumed seqno stays
pub fn action_submsg(mode: u8, message: OutboundMessage) -> SubMsg<WalletMsg> {
    let msg = CosmosMsg::Custom(WalletMsg::Send { mode, message });
    let id = if send_mode::ignores_errors(mode) {
        SEND_FAILED_REPLY_ID
    } else {
        ACTION_FAILED_REPLY_ID
    };
    SubMsg::reply_on_error(msg, id)
}

/// Non-bounceable reply echoing `query_id` and carrying the inbound value back
pub fn response_submsg(
    to: &Addr,
    opcode: u32,
    query_id: u64,
    value: Uint128,
) -> StdResult<SubMsg<WalletMsg>> {
    Ok(outbound_submsg(
        send_mode::CARRY_REMAINING_VALUE,
        OutboundMessage {
            to: to.clone(),
            value,
            bounce: false,
            state_init: None,
            body: Some(create_response_body(opcode, query_id)?),
        },
    ))
}

/// Funds as a single attribute value
pub fn format_funds(info: &MessageInfo) -> String {
    info.funds
        .iter()
        .map(|coin| coin.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
