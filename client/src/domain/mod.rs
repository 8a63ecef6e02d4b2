//! Domain layer — pure types, parsing, and error taxonomy.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `tokio`, `std::fs`, `std::process`, or `std::net`. All functions are
//! synchronous and take data in, returning data out.

pub mod error;
pub mod ident;
pub mod platform;

pub use error::{BridgeFault, ChannelError, SysError};
pub use platform::HostPlatform;
