use cosmwasm_std::{Binary, DepsMut, Env, Event, MessageInfo, Response};
use cw_utils::nonpayable;
use vesting_wallet::{
    op, AddWhitelistRequest, ExternalCommand, ExternalMsgError, MessageBody, SendRequest,
    SignedEnvelope, VestingConfig, WalletMsg,
};

use crate::{
    error::ContractError,
    helpers::{
        action_submsg, add_to_whitelist, attached_value, format_funds, is_owner,
        is_vesting_sender, outbound_submsg, response_submsg,
    },
    policy::authorize_send,
    state::{CONFIG, WALLET},
};

/// Routes a value-bearing message by its opcode.
/// Anything that is not a privileged request from the right sender is a deposit,
/// including bodies that do not decode at all.
pub fn execute_internal(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    body: Option<Binary>,
) -> Result<Response<WalletMsg>, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let body = body.and_then(|body| MessageBody::decode(&body).ok());

    match body {
        Some(MessageBody::Operation {
            op: op::ADD_WHITELIST,
            query_id,
            payload,
        }) if is_vesting_sender(&config, &info.sender) => {
            let request = AddWhitelistRequest::decode(query_id, payload.as_ref())?;
            execute_add_whitelist(deps, &info, &config, request)
        }
        Some(MessageBody::Operation {
            op: op::SEND,
            query_id,
            payload,
        }) if is_owner(&config, &info.sender) => {
            let request = SendRequest::decode(query_id, payload.as_ref())?;
            execute_guarded_send(deps, &env, &info, &config, request)
        }
        other => Ok(deposit(&info, other.as_ref().map(MessageBody::opcode))),
    }
}

/// Whitelist addition by the vesting sender
/// Priviledge: Vesting sender
fn execute_add_whitelist(
    deps: DepsMut,
    info: &MessageInfo,
    config: &VestingConfig,
    request: AddWhitelistRequest,
) -> Result<Response<WalletMsg>, ContractError> {
    let value = attached_value(info, &config.denom)?;
    let added = add_to_whitelist(deps.storage, &request.addresses)?;

    let event = Event::new("vesting.wallet.v1.MsgAddWhitelist").add_attributes(vec![
        ("sender", info.sender.to_string()),
        ("query_id", request.query_id.to_string()),
        ("addresses", format!("{:?}", request.addresses)),
        ("added", added.len().to_string()),
    ]);

    Ok(Response::new()
        .add_submessage(response_submsg(
            &info.sender,
            op::ADD_WHITELIST_RESPONSE,
            request.query_id,
            value,
        )?)
        .add_event(event))
}

/// Forwards an embedded message once the lock policy allows it
/// Priviledge: Owner
fn execute_guarded_send(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    config: &VestingConfig,
    request: SendRequest,
) -> Result<Response<WalletMsg>, ContractError> {
    authorize_send(
        deps.storage,
        config,
        env.block.time.seconds(),
        request.mode,
        &request.message,
    )?;
    let value = attached_value(info, &config.denom)?;

    let event = Event::new("vesting.wallet.v1.MsgSend").add_attributes(vec![
        ("query_id", request.query_id.to_string()),
        ("mode", request.mode.to_string()),
        ("to", request.message.to.to_string()),
        ("amount", request.message.value.to_string()),
    ]);

    Ok(Response::new()
        .add_submessage(outbound_submsg(request.mode, request.message))
        .add_submessage(response_submsg(
            &config.owner,
            op::SEND_RESPONSE,
            request.query_id,
            value,
        )?)
        .add_event(event))
}

fn deposit(info: &MessageInfo, opcode: Option<u32>) -> Response<WalletMsg> {
    let mut event = Event::new("vesting.wallet.v1.MsgDeposit").add_attributes(vec![
        ("sender", info.sender.to_string()),
        ("funds", format_funds(info)),
    ]);
    if let Some(opcode) = opcode {
        event = event.add_attribute("op", format!("{opcode:#010x}"));
    }
    Response::new().add_event(event)
}

/// Owner-signed command; anyone may relay it
pub fn execute_external(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    envelope: SignedEnvelope,
) -> Result<Response<WalletMsg>, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;

    envelope.verify(deps.api, &config.owner_public_key)?;
    let command = ExternalCommand::from_body(&envelope.body)?;

    if command.subwallet_id != config.subwallet_id {
        return Err(ExternalMsgError::InvalidSubwalletId {
            expected: config.subwallet_id,
            got: command.subwallet_id,
        }
        .into());
    }

    let mut wallet = WALLET.load(deps.storage)?;
    wallet.ensure_seqno_is(command.seqno)?;

    let now = env.block.time.seconds();
    if now > command.valid_until {
        return Err(ExternalMsgError::Expired {
            valid_until: command.valid_until,
            now,
        }
        .into());
    }

    wallet.increment_seqno()?;
    WALLET.save(deps.storage, &wallet)?;

    let event = Event::new("vesting.wallet.v1.MsgExternal").add_attributes(vec![
        ("relayer", info.sender.to_string()),
        ("seqno", command.seqno.to_string()),
        ("actions", command.actions.len().to_string()),
    ]);

    Ok(Response::new()
        .add_submessages(
            command
                .actions
                .into_iter()
                .map(|action| action_submsg(action.mode, action.message)),
        )
        .add_event(event))
}
