use cosmwasm_std::StdError;
use thiserror::Error;

/// Exit code reported when a body cannot be deserialized at all
pub const DESERIALIZATION_EXIT_CODE: u32 = 9;

/// Body deserialization faults.
///
/// These are not application errors: they mean the request could not be
/// understood, and all of them surface with [`DESERIALIZATION_EXIT_CODE`].
#[derive(Error, Debug, PartialEq)]
pub enum CodecError {
    #[error("MissingBody")]
    MissingBody,
    #[error("MissingPayload: op {op:#010x}")]
    MissingPayload { op: u32 },
    #[error("EmptyAddressList")]
    EmptyAddressList,
    #[error("InvalidBody: {0}")]
    InvalidBody(String),
}

impl From<StdError> for CodecError {
    fn from(err: StdError) -> Self {
        CodecError::InvalidBody(err.to_string())
    }
}

impl CodecError {
    pub fn exit_code(&self) -> u32 {
        DESERIALIZATION_EXIT_CODE
    }
}

/// External (signed) command errors
#[derive(Error, Debug, PartialEq)]
pub enum ExternalMsgError {
    #[error("InvalidSeqno: expected {expected}, got {got}")]
    InvalidSeqno { expected: u32, got: u32 },
    #[error("InvalidSubwalletId: expected {expected}, got {got}")]
    InvalidSubwalletId { expected: u32, got: u32 },
    #[error("InvalidSignature")]
    InvalidSignature,
    #[error("Expired: valid until {valid_until}, now {now}")]
    Expired { valid_until: u64, now: u64 },
}

impl ExternalMsgError {
    pub fn exit_code(&self) -> u32 {
        match self {
            ExternalMsgError::InvalidSeqno { .. } => 33,
            ExternalMsgError::InvalidSubwalletId { .. } => 34,
            ExternalMsgError::InvalidSignature => 35,
            ExternalMsgError::Expired { .. } => 36,
        }
    }
}
