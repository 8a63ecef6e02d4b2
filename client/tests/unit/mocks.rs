//! Shared port doubles for unit tests.
//!
//! Provides canned [`ShellRunner`] and [`HelperChannel`] implementations
//! and output helpers so each test file doesn't have to re-define the
//! same boilerplate.

#![allow(clippy::expect_used)]

use std::os::unix::process::ExitStatusExt;
use std::process::{ExitStatus, Output};
use std::sync::Mutex;

use anyhow::Result;

use bastion_client::application::ports::{HelperChannel, ShellRunner};
use bastion_client::domain::error::ChannelError;
use bastion_common::{HelperOp, HelperReply};

// ── Output helpers ────────────────────────────────────────────────────────────

pub fn ok_output(stdout: &[u8]) -> Output {
    Output {
        status: ExitStatus::from_raw(0),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn err_output(stderr: &[u8]) -> Output {
    Output {
        status: ExitStatus::from_raw(1 << 8),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

// ── Shell doubles ─────────────────────────────────────────────────────────────

/// Shell double that returns a canned output and records every command.
pub struct ShellScripted {
    canned: Output,
    pub seen: Mutex<Vec<String>>,
}

impl ShellScripted {
    pub fn new(canned: Output) -> Self {
        Self {
            canned,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.seen.lock().expect("seen lock").clone()
    }
}

impl ShellRunner for ShellScripted {
    async fn run_shell(&self, command: &str) -> Result<Output> {
        self.seen.lock().expect("seen lock").push(command.to_string());
        Ok(self.canned.clone())
    }
}

/// Shell double whose spawn always fails.
pub struct ShellSpawnFails;

impl ShellRunner for ShellSpawnFails {
    async fn run_shell(&self, _: &str) -> Result<Output> {
        anyhow::bail!("sh: command not found")
    }
}

// ── Helper channel doubles ────────────────────────────────────────────────────

/// Channel double that replies with a canned reply and records every
/// request.
pub struct ChannelReplies {
    reply: HelperReply,
    pub seen: Mutex<Vec<(HelperOp, Option<String>)>>,
}

impl ChannelReplies {
    pub fn new(reply: HelperReply) -> Self {
        Self {
            reply,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(HelperOp, Option<String>)> {
        self.seen.lock().expect("seen lock").clone()
    }
}

impl HelperChannel for ChannelReplies {
    async fn invoke(
        &self,
        op: HelperOp,
        payload: Option<String>,
    ) -> Result<Option<HelperReply>, ChannelError> {
        self.seen.lock().expect("seen lock").push((op, payload));
        Ok(Some(self.reply.clone()))
    }
}

/// Channel double that completes without delivering a reply.
pub struct ChannelEmpty;

impl HelperChannel for ChannelEmpty {
    async fn invoke(
        &self,
        _: HelperOp,
        _: Option<String>,
    ) -> Result<Option<HelperReply>, ChannelError> {
        Ok(None)
    }
}

/// Channel double whose request can never be issued.
pub struct ChannelSendFails;

impl HelperChannel for ChannelSendFails {
    async fn invoke(
        &self,
        _: HelperOp,
        _: Option<String>,
    ) -> Result<Option<HelperReply>, ChannelError> {
        Err(ChannelError::Send("socket missing".to_string()))
    }
}

/// Channel double whose transport drops while the reply is outstanding.
pub struct ChannelRecvFails;

impl HelperChannel for ChannelRecvFails {
    async fn invoke(
        &self,
        _: HelperOp,
        _: Option<String>,
    ) -> Result<Option<HelperReply>, ChannelError> {
        Err(ChannelError::Recv("connection reset".to_string()))
    }
}
