//! Application service — hardware identity resolution.
//!
//! Selects the platform probe command, runs it through the injected shell
//! port, and reduces the output to a canonical serial string.

use anyhow::{Result, bail};
use tracing::debug;

use crate::application::ports::ShellRunner;
use crate::domain::platform::HostPlatform;

/// Resolve the host's hardware identity string.
///
/// The result may be an empty string when the probe output held no value;
/// that is accepted rather than treated as failure.
///
/// # Errors
///
/// Fails on an unsupported platform (before any command runs), when the
/// shell cannot be spawned, when the probe exits non-zero, or when it
/// writes anything to stderr. Failure paths carry the raw error or stderr
/// text; no parsing is attempted on them.
pub async fn resolve_device_id(shell: &impl ShellRunner) -> Result<String> {
    resolve_with(HostPlatform::current(), shell).await
}

/// Detection-explicit variant of [`resolve_device_id`].
///
/// `None` means the host platform is unsupported and fails immediately,
/// without running any command.
///
/// # Errors
///
/// See [`resolve_device_id`].
pub async fn resolve_with(
    platform: Option<HostPlatform>,
    shell: &impl ShellRunner,
) -> Result<String> {
    let Some(platform) = platform else {
        bail!("unsupported platform: {}", std::env::consts::OS);
    };

    let output = shell.run_shell(platform.probe_command()).await?;

    if !output.status.success() {
        bail!(
            "identity probe exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    if !output.stderr.is_empty() {
        bail!("{}", String::from_utf8_lossy(&output.stderr).trim());
    }

    let raw = String::from_utf8_lossy(&output.stdout);
    let serial = platform.parse_output(&raw);
    debug!(?platform, serial = %serial, "resolved device identity");
    Ok(serial)
}
