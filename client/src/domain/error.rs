//! Typed error taxonomy for the system bridge.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `tokio`, `std::fs`, `std::process`, or `std::net`. All error types
//! implement `thiserror::Error` and convert to `anyhow::Error` via the `?`
//! operator.

use std::path::PathBuf;

use thiserror::Error;

use bastion_common::HelperOp;

// ── Bridge fault classification ───────────────────────────────────────────────

/// Where a privileged-helper round trip failed.
///
/// Every [`SysError::Bridge`] carries exactly one fault, so the failure
/// origin (local, transport, protocol, or remote) is visible without
/// inspecting backtraces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeFault {
    /// The request could not be issued at all.
    Request,
    /// The channel failed while the reply was outstanding.
    Transport,
    /// The channel completed without delivering a reply.
    Empty,
    /// The helper replied, reporting an error of its own.
    Remote,
}

impl BridgeFault {
    /// Short diagnostic tag for log lines and error messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BridgeFault::Request => "request not issued",
            BridgeFault::Transport => "transport failed",
            BridgeFault::Empty => "empty reply",
            BridgeFault::Remote => "helper reported error",
        }
    }
}

// ── Channel errors ────────────────────────────────────────────────────────────

/// Failure of the helper channel itself, split by round-trip side so the
/// bridge can tell "never sent" from "sent but no usable answer".
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The request could not be issued: connect, encode, or write failed.
    #[error("failed to issue helper request: {0}")]
    Send(String),

    /// The transport failed after the request was issued.
    #[error("helper transport failed: {0}")]
    Recv(String),
}

// ── System bridge errors ──────────────────────────────────────────────────────

/// Errors raised at the operating-system boundary.
///
/// Context travels as typed fields on each variant. Constructing a variant
/// never fails, and no raw `io::Error` crosses a component boundary
/// unwrapped — callers always see one of these kinds.
#[derive(Debug, Error)]
pub enum SysError {
    /// A child process failed to start or exited abnormally.
    ///
    /// Both captured streams ride along so diagnostics need no second run.
    #[error("command '{program}' failed{}", exit_note(*status))]
    Exec {
        program: String,
        args: Vec<String>,
        stdout: String,
        stderr: String,
        /// Exit code, when the process ran and exited abnormally.
        status: Option<i32>,
        /// Spawn failure, when the process never produced an exit status.
        #[source]
        source: Option<std::io::Error>,
    },

    /// A file could not be read, or an archive could not be opened or
    /// walked.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be written or deleted.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A privileged-helper round trip failed.
    #[error("helper '{op}' failed: {}{}", fault.as_str(), detail_note(detail.as_deref()))]
    Bridge {
        op: HelperOp,
        fault: BridgeFault,
        /// Transport error text or the helper's own error slot, when known.
        detail: Option<String>,
    },
}

fn exit_note(status: Option<i32>) -> String {
    status.map(|code| format!(" (exit code {code})")).unwrap_or_default()
}

fn detail_note(detail: Option<&str>) -> String {
    detail.map(|text| format!(": {text}")).unwrap_or_default()
}

impl SysError {
    /// The fault tag, when this is a bridge error.
    #[must_use]
    pub fn bridge_fault(&self) -> Option<BridgeFault> {
        match self {
            SysError::Bridge { fault, .. } => Some(*fault),
            _ => None,
        }
    }
}
