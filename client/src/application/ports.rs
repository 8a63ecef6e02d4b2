//! Port trait definitions for the application layer.
//!
//! Ports are the contracts infrastructure must fulfill. This file imports
//! only from `crate::domain` and `bastion_common` — never from
//! `crate::infra`.

use std::path::Path;
use std::process::Output;

use anyhow::Result;

use bastion_common::{HelperOp, HelperReply};

use crate::domain::error::{ChannelError, SysError};

// ── Value types ───────────────────────────────────────────────────────────────

/// Captured result of one process execution.
///
/// Failure is carried in-band: `error` is populated instead of the call
/// returning `Err`, so whatever stdout/stderr was captured before the
/// failure stays inspectable.
#[derive(Debug)]
pub struct ExecOutput {
    pub stdout: String,
    pub stderr: String,
    pub error: Option<SysError>,
}

impl ExecOutput {
    /// True when the process ran to completion with a zero exit status.
    #[must_use]
    pub fn success(&self) -> bool {
        self.error.is_none()
    }
}

// ── Process execution ports ───────────────────────────────────────────────────

/// Runs an external program with argv semantics and captures its output.
#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    /// Run `program` with `args` non-interactively and wait for it to
    /// terminate.
    ///
    /// Never fails: spawn errors and abnormal exits are reported through
    /// [`ExecOutput::error`]. No timeout is applied — callers own
    /// cancellation policy.
    async fn execute(&self, program: &str, args: &[&str]) -> ExecOutput;
}

/// Runs a command line through the platform shell.
///
/// Distinct from [`ProcessRunner`]: the identity probes need `||` chaining
/// and pipes, which argv execution cannot express.
#[allow(async_fn_in_trait)]
pub trait ShellRunner {
    /// Run `command` under the shell and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell cannot be spawned.
    async fn run_shell(&self, command: &str) -> Result<Output>;
}

// ── File store port ───────────────────────────────────────────────────────────

/// Asynchronous text-file operations with an asymmetric error policy:
/// the probes (`exists`, `size`) never fail so routine checks need no
/// error handling, while `read`/`write`/`remove` surface a typed
/// [`SysError`] because their failures must be actionable.
#[allow(async_fn_in_trait)]
pub trait FileStore {
    /// True iff a metadata check on `path` succeeds.
    async fn exists(&self, path: &Path) -> bool;

    /// Byte size of `path`, or `0` when the metadata check fails.
    async fn size(&self, path: &Path) -> u64;

    /// Read the full UTF-8 text contents of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SysError::Read`] carrying the path.
    async fn read(&self, path: &Path) -> Result<String, SysError>;

    /// Write `contents` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`SysError::Write`] carrying the path.
    async fn write(&self, path: &Path, contents: &str) -> Result<(), SysError>;

    /// Delete `path`. Succeeds without touching the filesystem when the
    /// path does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`SysError::Write`] carrying the path when deletion fails.
    async fn remove(&self, path: &Path) -> Result<(), SysError>;
}

// ── Privileged helper channel port ────────────────────────────────────────────

/// Single round-trip request/response channel to the privileged helper.
#[allow(async_fn_in_trait)]
pub trait HelperChannel {
    /// Issue one request and wait for its single reply.
    ///
    /// `Ok(None)` means the channel completed without delivering a reply.
    /// No retries and no multiplexing: each call is its own round trip,
    /// and an unanswered request leaves the future pending.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::Send`] when the request cannot be issued
    /// and [`ChannelError::Recv`] when the transport fails afterwards.
    async fn invoke(
        &self,
        op: HelperOp,
        payload: Option<String>,
    ) -> Result<Option<HelperReply>, ChannelError>;
}
