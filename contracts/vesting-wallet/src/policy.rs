//! Decides whether the owner may forward a message while funds are locked.
//!
//! Rules are tried in order and the first one that applies decides:
//! an expired schedule allows everything; otherwise the send mode must be
//! [`send_mode::LOCKED`]; whitelisted governance contracts accept a fixed set
//! of opcodes; other whitelisted destinations accept bounceable messages with
//! a restricted body; the vesting sender and ordinary destinations may
//! receive up to the unlocked amount; anything left is denied.

use cosmwasm_std::{Addr, Storage, Uint128};
use vesting_wallet::{op, send_mode, CodecError, MessageBody, OutboundMessage, VestingConfig};

use crate::error::ContractError;
use crate::helpers::{is_governance, is_vesting_sender, is_whitelisted};

pub fn authorize_send(
    storage: &dyn Storage,
    config: &VestingConfig,
    now: u64,
    mode: u8,
    message: &OutboundMessage,
) -> Result<(), ContractError> {
    if config.schedule.is_expired(now) {
        return Ok(());
    }
    if mode != send_mode::LOCKED {
        return Err(ContractError::SendModeNotAllowed { mode });
    }

    let destination = &message.to;
    if is_whitelisted(storage, destination) {
        return match governance_ops(destination) {
            Some(allowed) => ensure_governance_op(allowed, message),
            None => ensure_whitelisted_shape(message),
        };
    }

    if is_vesting_sender(config, destination) || !is_governance(destination) {
        return ensure_within_unlocked(config, now, message.value);
    }

    Err(ContractError::DestinationNotAllowed {
        destination: destination.to_string(),
    })
}

fn governance_ops(address: &Addr) -> Option<&'static [u32]> {
    match address.as_str() {
        op::ELECTOR_ADDRESS => Some(op::ELECTOR_OPS),
        op::CONFIG_ADDRESS => Some(op::CONFIG_OPS),
        _ => None,
    }
}

/// Governance bodies must carry one of the `allowed` opcodes
fn ensure_governance_op(allowed: &[u32], message: &OutboundMessage) -> Result<(), ContractError> {
    let body = message.parsed_body()?.ok_or(CodecError::MissingBody)?;
    if allowed.contains(&body.opcode()) {
        Ok(())
    } else {
        Err(ContractError::CommentNotAllowed {})
    }
}

fn ensure_whitelisted_shape(message: &OutboundMessage) -> Result<(), ContractError> {
    if !message.bounce {
        return Err(ContractError::NonBounceableNotAllowed {});
    }
    if message.state_init.is_some() {
        return Err(ContractError::StateInitNotAllowed {});
    }

    match message.parsed_body()? {
        None => Ok(()),
        Some(MessageBody::Comment(text)) => ensure_short_comment(&text),
        Some(MessageBody::Operation { op: opcode, .. }) if op::WHITELIST_OPS.contains(&opcode) => {
            Ok(())
        }
        Some(MessageBody::Operation { .. }) => Err(ContractError::CommentNotAllowed {}),
    }
}

/// Only empty and single-character comments pass
fn ensure_short_comment(text: &str) -> Result<(), ContractError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(()),
        (Some(symbol), None) if op::RESERVED_COMMENT_SYMBOLS.contains(&symbol) => {
            Err(ContractError::SymbolsNotAllowed {})
        }
        (Some(_), None) => Ok(()),
        _ => Err(ContractError::CommentNotAllowed {}),
    }
}

fn ensure_within_unlocked(
    config: &VestingConfig,
    now: u64,
    amount: Uint128,
) -> Result<(), ContractError> {
    let unlocked = config.schedule.unlocked_amount(now);
    if amount > unlocked {
        return Err(ContractError::AmountExceedsUnlocked { amount, unlocked });
    }
    Ok(())
}
