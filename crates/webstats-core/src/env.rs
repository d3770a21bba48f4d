//! Process-level inputs of the monitor formatter.
//!
//! Both the configuration and the clock/hostname source are injected so the
//! formatter stays a pure function under test.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;

const HOSTNAME_FILE: &str = "/etc/hostname";
const FALLBACK_HOSTNAME: &str = "localhost";

/// Immutable identity reported in monitor payloads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorConfig {
    /// Overrides the machine hostname when non-empty. Must be an IP or a
    /// valid hostname.
    #[serde(default)]
    pub local_ip: String,

    /// Service port paired with the host in `endpoint` and `ip_port`.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Process role, reported as the `module` tag.
    #[serde(default = "default_role")]
    pub role: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            local_ip: String::new(),
            port: default_port(),
            role: default_role(),
        }
    }
}

fn default_port() -> u16 {
    9669
}
fn default_role() -> String {
    "unknown".into()
}

/// Wall clock and hostname source.
pub trait Environment: Send + Sync {
    /// Seconds since the unix epoch, read at formatting time.
    fn now_epoch_secs(&self) -> u64;
    /// Machine hostname, used when no local IP is configured.
    fn hostname(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn now_epoch_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }

    fn hostname(&self) -> String {
        std::fs::read_to_string(HOSTNAME_FILE)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .or_else(|| std::env::var("HOSTNAME").ok().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| FALLBACK_HOSTNAME.to_string())
    }
}
