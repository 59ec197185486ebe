use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_binary, Addr, Binary, CustomMsg, StdResult, Uint128};
use serde::de::DeserializeOwned;

use crate::error::CodecError;
use crate::op;

/// Delivery flags of an outbound message, combined bitwise
pub mod send_mode {
    pub const ORDINARY: u8 = 0;
    /// Fees are paid from the wallet balance rather than the message value
    pub const PAY_GAS_SEPARATELY: u8 = 1;
    /// A failed delivery is skipped instead of failing the invocation
    pub const IGNORE_ERRORS: u8 = 2;
    pub const DESTROY_IF_ZERO: u8 = 32;
    /// Adds the value left over from the inbound message
    pub const CARRY_REMAINING_VALUE: u8 = 64;
    pub const CARRY_ALL_BALANCE: u8 = 128;

    /// The only mode a guarded send may use while funds are locked
    pub const LOCKED: u8 = PAY_GAS_SEPARATELY | IGNORE_ERRORS;

    pub const fn ignores_errors(mode: u8) -> bool {
        mode & IGNORE_ERRORS != 0
    }
}

/// A value-bearing message the wallet asks the chain to deliver
#[cw_serde]
pub struct OutboundMessage {
    pub to: Addr,
    pub value: Uint128,
    /// Return the value to the wallet if delivery fails
    pub bounce: bool,
    /// Code and data to deploy at `to`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_init: Option<Binary>,
    /// JSON encoded [`MessageBody`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Binary>,
}

impl OutboundMessage {
    /// The decoded body, `None` when absent or empty
    pub fn parsed_body(&self) -> Result<Option<MessageBody>, CodecError> {
        match &self.body {
            Some(body) if !body.is_empty() => MessageBody::decode(body).map(Some),
            _ => Ok(None),
        }
    }
}

/// Chain-level message emitted by the wallet
#[cw_serde]
pub enum WalletMsg {
    /// Deliver `message` out of the wallet balance using the `mode` flags
    Send { mode: u8, message: OutboundMessage },
}

impl CustomMsg for WalletMsg {}

/// Body carried by any value-bearing message, inbound or outbound.
///
/// Operation payloads are decoded only once the sender is known to be
/// allowed to use the operation.
#[cw_serde]
pub enum MessageBody {
    /// Free text, opcode [`op::TEXT_COMMENT`]
    Comment(String),
    /// Operation identified by a 32-bit opcode
    Operation {
        op: u32,
        query_id: u64,
        /// JSON encoded arguments, shape depends on `op`
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Binary>,
    },
}

impl MessageBody {
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(from_json(bytes)?)
    }

    pub fn opcode(&self) -> u32 {
        match self {
            MessageBody::Comment(_) => op::TEXT_COMMENT,
            MessageBody::Operation { op: opcode, .. } => *opcode,
        }
    }
}

fn decode_payload<T: DeserializeOwned>(op: u32, payload: Option<&Binary>) -> Result<T, CodecError> {
    let payload = payload.ok_or(CodecError::MissingPayload { op })?;
    Ok(from_json(payload)?)
}

/// Arguments of a whitelist-add operation
#[cw_serde]
pub struct AddWhitelistPayload {
    pub addresses: Vec<Addr>,
}

/// Arguments of a guarded-send operation
#[cw_serde]
pub struct SendPayload {
    pub mode: u8,
    pub message: OutboundMessage,
}

#[derive(Debug, PartialEq)]
pub struct AddWhitelistRequest {
    pub query_id: u64,
    pub addresses: Vec<Addr>,
}

impl AddWhitelistRequest {
    /// At least one address is required
    pub fn decode(query_id: u64, payload: Option<&Binary>) -> Result<Self, CodecError> {
        let AddWhitelistPayload { addresses } = decode_payload(op::ADD_WHITELIST, payload)?;
        if addresses.is_empty() {
            return Err(CodecError::EmptyAddressList);
        }
        Ok(AddWhitelistRequest {
            query_id,
            addresses,
        })
    }
}

#[derive(Debug, PartialEq)]
pub struct SendRequest {
    pub query_id: u64,
    pub mode: u8,
    pub message: OutboundMessage,
}

impl SendRequest {
    pub fn decode(query_id: u64, payload: Option<&Binary>) -> Result<Self, CodecError> {
        let SendPayload { mode, message } = decode_payload(op::SEND, payload)?;
        Ok(SendRequest {
            query_id,
            mode,
            message,
        })
    }
}

pub fn create_comment_body(text: &str) -> StdResult<Binary> {
    to_json_binary(&MessageBody::Comment(text.to_string()))
}

/// Operation body without arguments
pub fn create_op_body(opcode: u32, query_id: u64) -> StdResult<Binary> {
    to_json_binary(&MessageBody::Operation {
        op: opcode,
        query_id,
        payload: None,
    })
}

pub fn create_response_body(opcode: u32, query_id: u64) -> StdResult<Binary> {
    create_op_body(opcode, query_id)
}

pub fn create_add_whitelist_body(addresses: &[Addr], query_id: u64) -> StdResult<Binary> {
    let payload = AddWhitelistPayload {
        addresses: addresses.to_vec(),
    };
    to_json_binary(&MessageBody::Operation {
        op: op::ADD_WHITELIST,
        query_id,
        payload: Some(to_json_binary(&payload)?),
    })
}

pub fn create_send_body(query_id: u64, mode: u8, message: &OutboundMessage) -> StdResult<Binary> {
    let payload = SendPayload {
        mode,
        message: message.clone(),
    };
    to_json_binary(&MessageBody::Operation {
        op: op::SEND,
        query_id,
        payload: Some(to_json_binary(&payload)?),
    })
}
