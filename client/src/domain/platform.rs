//! Host platform dispatch for hardware-identity probing.
//!
//! Each supported platform binds a probe command and an output parser.
//! Adding a platform means adding a variant; no branching chains.

use regex::Regex;

/// Platforms with a known hardware-identity probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Linux,
    Windows,
    Macos,
}

impl HostPlatform {
    /// Map an OS name (as reported by `std::env::consts::OS`) to a
    /// supported platform. Anything unrecognized is `None`.
    #[must_use]
    pub fn from_os(os: &str) -> Option<Self> {
        match os {
            "linux" => Some(HostPlatform::Linux),
            "windows" => Some(HostPlatform::Windows),
            "macos" => Some(HostPlatform::Macos),
            _ => None,
        }
    }

    /// Detect the platform of the running host.
    #[must_use]
    pub fn current() -> Option<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Shell command that prints the hardware identity on this platform.
    ///
    /// The linux command falls back to a privileged serial query when the
    /// DMI product uuid is unreadable; macos filters the I/O registry.
    /// Both need a real shell (`||` chaining and pipes), not bare argv
    /// execution.
    #[must_use]
    pub fn probe_command(self) -> &'static str {
        match self {
            HostPlatform::Linux => {
                "cat /sys/class/dmi/id/product_uuid || sudo dmidecode -s system-serial-number"
            }
            HostPlatform::Windows => "wmic bios get serialnumber",
            HostPlatform::Macos => "ioreg -l | grep IOPlatformSerialNumber",
        }
    }

    /// Reduce raw probe output to the canonical serial string.
    ///
    /// Lenient on unexpected shapes: windows yields an empty string when
    /// no value line survives filtering, macos falls back to the trimmed
    /// raw text when the registry pattern is absent. An empty result is a
    /// valid result, not a failure.
    #[must_use]
    pub fn parse_output(self, raw: &str) -> String {
        let trimmed = raw.trim();
        match self {
            HostPlatform::Linux => trimmed.to_string(),
            HostPlatform::Windows => parse_windows(trimmed),
            HostPlatform::Macos => parse_macos(trimmed),
        }
    }
}

/// First line that is neither blank nor a "serial" header.
fn parse_windows(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.to_lowercase().contains("serial"))
        .unwrap_or_default()
        .to_string()
}

/// Value inside `"IOPlatformSerialNumber" = "..."`, or the raw text.
fn parse_macos(raw: &str) -> String {
    let Ok(pattern) = Regex::new(r#""IOPlatformSerialNumber"\s=\s"(.+)""#) else {
        return raw.to_string();
    };
    pattern
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| raw.to_string(), |m| m.as_str().trim().to_string())
}
