use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdError};
use cw_storage_plus::{Item, Map};
use vesting_wallet::{ExternalMsgError, Seqno, VestingConfig};

use crate::error::ContractError;

#[cw_serde]
pub struct Wallet {
    pub seqno: Seqno,
}

impl Wallet {
    /// Increase seqno by 1
    pub fn increment_seqno(&mut self) -> Result<(), ContractError> {
        self.seqno = self
            .seqno
            .checked_add(1)
            .ok_or_else(|| StdError::generic_err("seqno exhausted"))?;
        Ok(())
    }

    /// Ensure the command carries the current seqno
    pub fn ensure_seqno_is(&self, seqno: Seqno) -> Result<(), ContractError> {
        if self.seqno == seqno {
            Ok(())
        } else {
            Err(ExternalMsgError::InvalidSeqno {
                expected: self.seqno,
                got: seqno,
            }
            .into())
        }
    }
}

pub const CONFIG: Item<VestingConfig> = Item::new("config");
pub const WALLET: Item<Wallet> = Item::new("wallet");
pub const WHITELIST: Map<&Addr, ()> = Map::new("whitelist");
