//! Wire types for the privileged-helper channel.
//!
//! The client and the helper process share these definitions: a request
//! envelope naming a topic and an operation with at most one string
//! payload, and a reply shaped as the 2-tuple `[error, value]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Logical topic carried on every helper request.
pub const PROCESSING_TOPIC: &str = "processing";

/// Operation requested from the privileged helper.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HelperOp {
    /// Capability check: is encryption available on this host?
    Encryptable,
    Encrypt,
    Decrypt,
}

impl HelperOp {
    /// The wire name of this operation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HelperOp::Encryptable => "encryptable",
            HelperOp::Encrypt => "encrypt",
            HelperOp::Decrypt => "decrypt",
        }
    }
}

impl fmt::Display for HelperOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an operation name is not one of the known wire names.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown helper operation: {0}")]
pub struct UnknownOp(pub String);

impl FromStr for HelperOp {
    type Err = UnknownOp;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "encryptable" => Ok(HelperOp::Encryptable),
            "encrypt" => Ok(HelperOp::Encrypt),
            "decrypt" => Ok(HelperOp::Decrypt),
            other => Err(UnknownOp(other.to_string())),
        }
    }
}

/// One request from the client to the helper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelperRequest {
    pub topic: String,
    pub op: HelperOp,
    /// At most one string payload; the capability check carries none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

impl HelperRequest {
    #[must_use]
    pub fn new(op: HelperOp, payload: Option<String>) -> Self {
        Self {
            topic: PROCESSING_TOPIC.to_string(),
            op,
            payload,
        }
    }
}

/// Reply from the helper, `[error, value]` on the wire.
///
/// The error slot holds a helper-reported failure message; the value slot
/// is the operation result (a bool for `encryptable`, a string for
/// `encrypt`/`decrypt`). Exactly one reply is produced per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelperReply(pub Option<String>, pub serde_json::Value);

impl HelperReply {
    /// A clean reply carrying `value`.
    #[must_use]
    pub fn ok(value: serde_json::Value) -> Self {
        Self(None, value)
    }

    /// A reply whose error slot is set.
    #[must_use]
    pub fn err(message: impl Into<String>) -> Self {
        Self(Some(message.into()), serde_json::Value::Null)
    }

    /// The helper-reported error, when present.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// The result slot.
    #[must_use]
    pub fn value(&self) -> &serde_json::Value {
        &self.1
    }
}
