pub use crate::error::{CodecError, ExternalMsgError, DESERIALIZATION_EXIT_CODE};
pub use crate::message::{
    create_add_whitelist_body, create_comment_body, create_op_body, create_response_body,
    create_send_body, send_mode, AddWhitelistPayload, AddWhitelistRequest, MessageBody,
    OutboundMessage, SendPayload, SendRequest, WalletMsg,
};
pub use crate::msgs::{
    InstantiateMsg, IsWhitelistedResponse, LockedAmountResponse, PublicKeyResponse, QueryMsg,
    SeqnoResponse, SubwalletIdResponse, VestingDataResponse, WhitelistResponse,
};
pub use crate::record::{encode_whitelist, StateRecord};
pub use crate::schedule::VestingSchedule;
pub use crate::wallet::{
    ExternalCommand, Seqno, SignedEnvelope, VestingConfig, WalletAction, WalletInfo,
    PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH,
};

mod error;
mod message;
mod msgs;
pub mod op;
mod record;
mod schedule;
mod wallet;
