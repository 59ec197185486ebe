use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;
use vesting_wallet::{CodecError, ExternalMsgError};

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),
    #[error("{0}")]
    Payment(#[from] PaymentError),
    #[error("Deserialization: {0}")]
    Codec(#[from] CodecError),
    #[error("{0}")]
    External(#[from] ExternalMsgError),

    #[error("SendModeNotAllowed: {mode}")]
    SendModeNotAllowed { mode: u8 },
    #[error("NonBounceableNotAllowed")]
    NonBounceableNotAllowed {},
    #[error("StateInitNotAllowed")]
    StateInitNotAllowed {},
    #[error("CommentNotAllowed")]
    CommentNotAllowed {},
    #[error("SymbolsNotAllowed")]
    SymbolsNotAllowed {},
    #[error("AmountExceedsUnlocked: {amount} requested, {unlocked} unlocked")]
    AmountExceedsUnlocked { amount: Uint128, unlocked: Uint128 },
    #[error("DestinationNotAllowed: {destination}")]
    DestinationNotAllowed { destination: String },

    #[error("PubKeyLengthIsNotValid")]
    PubKeyLengthIsNotValid {},
    #[error("EmptyDenom")]
    EmptyDenom {},
    #[error("InvalidReplyId")]
    InvalidReplyId {},
}

impl ContractError {
    /// Numeric code of wallet-level failures; `None` for chain-level errors
    pub fn exit_code(&self) -> Option<u32> {
        match self {
            ContractError::Codec(err) => Some(err.exit_code()),
            ContractError::External(err) => Some(err.exit_code()),
            ContractError::SendModeNotAllowed { .. } => Some(100),
            ContractError::NonBounceableNotAllowed {} => Some(101),
            ContractError::StateInitNotAllowed {} => Some(102),
            ContractError::CommentNotAllowed {} => Some(103),
            ContractError::SymbolsNotAllowed {} => Some(104),
            ContractError::AmountExceedsUnlocked { .. } => Some(105),
            ContractError::DestinationNotAllowed { .. } => Some(106),
            _ => None,
        }
    }
}
