//! Infrastructure implementation of the process execution ports.
//!
//! `TokioProcessRunner` is the production implementation for both argv
//! and shell-mode execution, built on `tokio::process`. No timeout is
//! applied at this layer; callers that need bounded latency race the
//! returned future against a timer themselves.

use std::process::{Output, Stdio};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::application::ports::{ExecOutput, ProcessRunner, ShellRunner};
use crate::domain::error::SysError;

/// Production process runner. Stateless — every call spawns a fresh
/// child and nothing is shared between calls.
pub struct TokioProcessRunner;

impl ProcessRunner for TokioProcessRunner {
    async fn execute(&self, program: &str, args: &[&str]) -> ExecOutput {
        debug!(program, ?args, "executing command");
        let result = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        match result {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
                let error = if output.status.success() {
                    None
                } else {
                    warn!(program, code = ?output.status.code(), "command exited abnormally");
                    Some(SysError::Exec {
                        program: program.to_string(),
                        args: args.iter().map(ToString::to_string).collect(),
                        stdout: stdout.clone(),
                        stderr: stderr.clone(),
                        status: output.status.code(),
                        source: None,
                    })
                };
                ExecOutput { stdout, stderr, error }
            }
            Err(source) => {
                warn!(program, error = %source, "command failed to start");
                ExecOutput {
                    stdout: String::new(),
                    stderr: String::new(),
                    error: Some(SysError::Exec {
                        program: program.to_string(),
                        args: args.iter().map(ToString::to_string).collect(),
                        stdout: String::new(),
                        stderr: String::new(),
                        status: None,
                        source: Some(source),
                    }),
                }
            }
        }
    }
}

impl ShellRunner for TokioProcessRunner {
    async fn run_shell(&self, command: &str) -> Result<Output> {
        debug!(command, "running shell command");
        shell_command(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .with_context(|| format!("failed to run shell command: {command}"))
    }
}

/// Platform shell invocation: `sh -c` on unix, `cmd /C` on windows.
fn shell_command(command: &str) -> tokio::process::Command {
    #[cfg(windows)]
    {
        let mut cmd = tokio::process::Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    }
    #[cfg(not(windows))]
    {
        let mut cmd = tokio::process::Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}
