use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, export_schema_with_title, remove_schemas, schema_for};

use vesting_wallet::{
    ExternalCommand, IsWhitelistedResponse, LockedAmountResponse, MessageBody, PublicKeyResponse,
    SeqnoResponse, SignedEnvelope, StateRecord, SubwalletIdResponse, VestingDataResponse,
    WalletInfo, WalletMsg, WhitelistResponse,
};
use vesting_wallet_contract::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(SignedEnvelope), &out_dir);
    export_schema(&schema_for!(ExternalCommand), &out_dir);
    export_schema(&schema_for!(MessageBody), &out_dir);
    export_schema(&schema_for!(StateRecord), &out_dir);
    export_schema(&schema_for!(WalletMsg), &out_dir);
    export_schema(&schema_for!(SeqnoResponse), &out_dir);
    export_schema(&schema_for!(SubwalletIdResponse), &out_dir);
    export_schema(&schema_for!(PublicKeyResponse), &out_dir);
    export_schema(&schema_for!(VestingDataResponse), &out_dir);
    export_schema(&schema_for!(WhitelistResponse), &out_dir);
    export_schema(&schema_for!(IsWhitelistedResponse), &out_dir);
    export_schema(&schema_for!(LockedAmountResponse), &out_dir);
    export_schema_with_title(&schema_for!(WalletInfo), &out_dir, "InfoResponse");
}
