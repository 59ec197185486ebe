pub mod contract;
mod error;
mod execute;
pub mod helpers;
pub mod msg;
mod policy;
mod query;
pub mod state;

pub use crate::error::ContractError;


/// Used to spot a failed send whose mode ignores errors
pub(crate) const SEND_FAILED_REPLY_ID: u64 = u64::MAX;
/// Used to spot a failed external action whose mode does not ignore errors
pub(crate) const ACTION_FAILED_REPLY_ID: u64 = u64::MAX - 1;
