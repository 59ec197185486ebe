use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_binary, Addr, Binary, StdResult};

use crate::error::CodecError;
use crate::schedule::VestingSchedule;
use crate::wallet::Seqno;

/// Flat image of the whole wallet state
#[cw_serde]
pub struct StateRecord {
    pub seqno: Seqno,
    pub subwallet_id: u32,
    pub public_key: Binary,
    /// Empty until the vesting sender adds an address
    #[serde(default)]
    pub whitelist: Vec<Addr>,
    pub schedule: VestingSchedule,
    pub vesting_sender: Addr,
    pub owner: Addr,
}

impl StateRecord {
    pub fn encode(&self) -> StdResult<Binary> {
        to_json_binary(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(from_json(bytes)?)
    }
}

/// Whitelist blob as exposed by the vesting data query; `None` when empty
pub fn encode_whitelist(addresses: &[Addr]) -> StdResult<Option<Binary>> {
    if addresses.is_empty() {
        return Ok(None);
    }
    to_json_binary(&addresses).map(Some)
}
