use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_binary, Addr, Api, Binary, StdResult};
use sha2::{Digest, Sha256};

use crate::error::{CodecError, ExternalMsgError};
use crate::message::OutboundMessage;
use crate::schedule::VestingSchedule;

/// Replay counter for owner-signed commands
pub type Seqno = u32;

/// Length of the owner's ed25519 public key
pub const PUBLIC_KEY_LENGTH: usize = 32;
/// Length of an ed25519 signature
pub const SIGNATURE_LENGTH: usize = 64;

/// Immutable wallet parameters fixed at instantiation
#[cw_serde]
pub struct VestingConfig {
    pub subwallet_id: u32,
    /// ed25519 key authorising external commands
    pub owner_public_key: Binary,
    pub schedule: VestingSchedule,
    pub vesting_sender: Addr,
    pub owner: Addr,
    /// Denomination the vested amount is held in
    pub denom: String,
}

#[cw_serde]
pub struct WalletInfo {
    pub seqno: Seqno,
    pub subwallet_id: u32,
    pub owner_public_key: Binary,
    pub schedule: VestingSchedule,
    pub vesting_sender: Addr,
    pub owner: Addr,
    pub denom: String,
    pub whitelist_size: u64,
    pub version: cw2::ContractVersion,
}

/// One send performed by an external command
#[cw_serde]
pub struct WalletAction {
    pub mode: u8,
    pub message: OutboundMessage,
}

/// Body of an owner-signed command
#[cw_serde]
pub struct ExternalCommand {
    pub subwallet_id: u32,
    /// Last second (inclusive) the command may be executed at
    pub valid_until: u64,
    pub seqno: Seqno,
    pub actions: Vec<WalletAction>,
}

impl ExternalCommand {
    /// Bytes the owner signs and submits as [`SignedEnvelope::body`]
    pub fn to_body(&self) -> StdResult<Binary> {
        to_json_binary(self)
    }

    pub fn from_body(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(from_json(bytes)?)
    }
}

/// Encoded [`ExternalCommand`] together with the owner's signature over it
#[cw_serde]
pub struct SignedEnvelope {
    /// ed25519 signature (64 bytes) of `sha256(body)`
    pub signature: Binary,
    pub body: Binary,
}

impl SignedEnvelope {
    /// Digest the owner signs
    pub fn digest(body: &[u8]) -> Vec<u8> {
        Sha256::digest(body).to_vec()
    }

    /// Checks the signature against the owner key
    pub fn verify(&self, api: &dyn Api, public_key: &[u8]) -> Result<(), ExternalMsgError> {
        if self.signature.len() != SIGNATURE_LENGTH || public_key.len() != PUBLIC_KEY_LENGTH {
            return Err(ExternalMsgError::InvalidSignature);
        }
        let hash = Self::digest(self.body.as_slice());
        match api.ed25519_verify(&hash, &self.signature, public_key) {
            Ok(true) => Ok(()),
            _ => Err(ExternalMsgError::InvalidSignature),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockApi;
    use cosmwasm_std::Uint128;

    fn command(actions: Vec<WalletAction>) -> ExternalCommand {
        ExternalCommand {
            subwallet_id: 345,
            valid_until: 1_700_000_000,
            seqno: 7,
            actions,
        }
    }

    #[test]
    fn command_body_is_json() {
        let cmd = command(vec![WalletAction {
            mode: 3,
            message: OutboundMessage {
                to: Addr::unchecked("vesting_sender"),
                value: Uint128::new(122_999_900_000_000),
                bounce: true,
                state_init: None,
                body: None,
            },
        }]);
        let body = cmd.to_body().unwrap();
        let json = std::str::from_utf8(&body).unwrap();
        let head = r#"{"subwallet_id":345,"valid_until":1700000000,"seqno":7,"#;
        // absent state_init and body are left out
        let tail = r#""value":"122999900000000","bounce":true}}]}"#;
        assert!(json.starts_with(head));
        assert!(json.ends_with(tail));
        assert_eq!(ExternalCommand::from_body(&body).unwrap(), cmd);
    }

    #[test]
    fn empty_action_list_is_valid() {
        let cmd = command(vec![]);
        let body = cmd.to_body().unwrap();
        assert_eq!(ExternalCommand::from_body(&body).unwrap(), cmd);
    }

    #[test]
    fn undecodable_command_is_a_fault() {
        let missing_actions = br#"{"subwallet_id":345,"valid_until":1700000000,"seqno":7}"#;
        assert!(matches!(
            ExternalCommand::from_body(missing_actions),
            Err(CodecError::InvalidBody(_))
        ));
        assert_eq!(CodecError::InvalidBody(String::new()).exit_code(), 9);
    }

    #[test]
    fn malformed_signatures_are_rejected_without_verifying() {
        let api = MockApi::default();
        let envelope = SignedEnvelope {
            signature: Binary::from(vec![0u8; 10]),
            body: command(vec![]).to_body().unwrap(),
        };
        assert_eq!(
            envelope.verify(&api, &[1u8; PUBLIC_KEY_LENGTH]),
            Err(ExternalMsgError::InvalidSignature)
        );
    }
}
