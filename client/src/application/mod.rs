//! Application layer — port trait definitions and use-case orchestration.
//!
//! This module depends only on `crate::domain` and `bastion_common`,
//! never on `crate::infra`.

pub mod ports;
pub mod services;

pub use ports::{ExecOutput, FileStore, HelperChannel, ProcessRunner, ShellRunner};
