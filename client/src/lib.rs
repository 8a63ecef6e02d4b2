//! Bastion client system bridge — the OS-boundary layer of the desktop
//! client: device identity, process execution, file storage, the
//! privileged encryption helper bridge, and archive reading.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod application;
pub mod domain;
pub mod infra;
