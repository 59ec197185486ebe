//! 32-bit opcodes carried at the head of message bodies.

/// Text comment; the rest of the body is UTF-8
pub const TEXT_COMMENT: u32 = 0;

pub const ADD_WHITELIST: u32 = 0x7258a69b;
pub const ADD_WHITELIST_RESPONSE: u32 = 0xf258a69b;
pub const SEND: u32 = 0xa7733acd;
pub const SEND_RESPONSE: u32 = 0xf7733acd;

// Elector / config governance
pub const ELECTOR_NEW_STAKE: u32 = 0x4e73744b;
pub const ELECTOR_RECOVER_STAKE: u32 = 0x47657424;
pub const VOTE_FOR_COMPLAINT: u32 = 0x56744370;
pub const VOTE_FOR_PROPOSAL: u32 = 0x566f7465;

// Staking pools and tokens
pub const SINGLE_NOMINATOR_POOL_WITHDRAW: u32 = 0x1000;
pub const SINGLE_NOMINATOR_POOL_CHANGE_VALIDATOR: u32 = 0x1001;
pub const TON_STAKERS_DEPOSIT: u32 = 0x47d54391;
pub const JETTON_BURN: u32 = 0x595f07bc;
pub const TON_STAKERS_VOTE: u32 = 0x69fb306c;

/// Raw address of the elector governance contract
pub const ELECTOR_ADDRESS: &str =
    "-1:3333333333333333333333333333333333333333333333333333333333333333";
/// Raw address of the config governance contract
pub const CONFIG_ADDRESS: &str =
    "-1:5555555555555555555555555555555555555555555555555555555555555555";

/// Opcodes a locked wallet may send to a whitelisted elector
pub const ELECTOR_OPS: &[u32] = &[
    ELECTOR_NEW_STAKE,
    ELECTOR_RECOVER_STAKE,
    VOTE_FOR_COMPLAINT,
    VOTE_FOR_PROPOSAL,
];

/// Opcodes a locked wallet may send to a whitelisted config contract
pub const CONFIG_OPS: &[u32] = &[VOTE_FOR_PROPOSAL];

/// Opcodes a locked wallet may send to any other whitelisted destination
pub const WHITELIST_OPS: &[u32] = &[
    SINGLE_NOMINATOR_POOL_WITHDRAW,
    SINGLE_NOMINATOR_POOL_CHANGE_VALIDATOR,
    TON_STAKERS_DEPOSIT,
    JETTON_BURN,
    TON_STAKERS_VOTE,
    VOTE_FOR_COMPLAINT,
    VOTE_FOR_PROPOSAL,
];

/// Single-letter comments that are never forwarded to a whitelisted
/// destination while funds are locked
pub const RESERVED_COMMENT_SYMBOLS: &[char] = &['y'];
