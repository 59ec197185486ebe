use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;

use vesting_wallet::SignedEnvelope;
pub use vesting_wallet::{InstantiateMsg, QueryMsg};

#[cw_serde]
pub enum ExecuteMsg {
    /// Value-bearing message from another account.
    /// `body` is the opcode-tagged payload; the attached funds are the value.
    /// Priviledge: Anyone (whitelist-add: Vesting sender, send: Owner)
    Internal { body: Option<Binary> },
    /// Owner-signed command, relayed by anyone without funds
    External { envelope: SignedEnvelope },
}
