//! Application service — privileged-helper encryption bridge.
//!
//! Issues single round-trip requests over the injected channel port and
//! classifies every failure into one of four faults, so the origin
//! (local, transport, protocol, remote) stays distinguishable.

use serde_json::Value;
use tracing::warn;

use bastion_common::{HelperOp, HelperReply};

use crate::application::ports::HelperChannel;
use crate::domain::error::{BridgeFault, ChannelError, SysError};

/// Ask the helper whether encryption is available on this host.
///
/// # Errors
///
/// Returns [`SysError::Bridge`] with the fault naming where the round
/// trip failed.
pub async fn check_encryptable(channel: &impl HelperChannel) -> Result<bool, SysError> {
    let value = invoke(channel, HelperOp::Encryptable, None).await?;
    Ok(value.as_bool().unwrap_or(false))
}

/// Encrypt `plaintext` through the helper.
///
/// # Errors
///
/// Returns [`SysError::Bridge`] with the fault naming where the round
/// trip failed.
pub async fn encrypt_string(
    channel: &impl HelperChannel,
    plaintext: &str,
) -> Result<String, SysError> {
    let value = invoke(channel, HelperOp::Encrypt, Some(plaintext.to_string())).await?;
    Ok(string_value(value))
}

/// Decrypt `ciphertext` through the helper.
///
/// # Errors
///
/// Returns [`SysError::Bridge`] with the fault naming where the round
/// trip failed.
pub async fn decrypt_string(
    channel: &impl HelperChannel,
    ciphertext: &str,
) -> Result<String, SysError> {
    let value = invoke(channel, HelperOp::Decrypt, Some(ciphertext.to_string())).await?;
    Ok(string_value(value))
}

/// One round trip plus the four-way outcome classification, in precedence
/// order: send failure, transport failure, missing reply, helper-reported
/// error. Anything else resolves with the reply's value slot.
async fn invoke(
    channel: &impl HelperChannel,
    op: HelperOp,
    payload: Option<String>,
) -> Result<Value, SysError> {
    let reply = match channel.invoke(op, payload).await {
        Err(ChannelError::Send(detail)) => {
            return Err(bridge_error(op, BridgeFault::Request, Some(detail)));
        }
        Err(ChannelError::Recv(detail)) => {
            return Err(bridge_error(op, BridgeFault::Transport, Some(detail)));
        }
        Ok(None) => return Err(bridge_error(op, BridgeFault::Empty, None)),
        Ok(Some(reply)) => reply,
    };

    if let Some(remote) = reply.error() {
        return Err(bridge_error(op, BridgeFault::Remote, Some(remote.to_string())));
    }
    let HelperReply(_, value) = reply;
    Ok(value)
}

fn bridge_error(op: HelperOp, fault: BridgeFault, detail: Option<String>) -> SysError {
    warn!(op = %op, fault = fault.as_str(), "helper round trip failed");
    SysError::Bridge { op, fault, detail }
}

/// The value slot is untyped on the wire; a non-string value degrades to
/// empty rather than failing.
fn string_value(value: Value) -> String {
    match value {
        Value::String(s) => s,
        _ => String::new(),
    }
}
