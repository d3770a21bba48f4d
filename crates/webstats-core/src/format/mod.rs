//! [`ResolvedStats`] -> response body.
//!
//! Formatting is a pure function of the resolved stats, the requested format,
//! and (for monitor output only) the injected config and environment.
//!
//! Note: monitor output is the one format whose body may not be a list. When
//! the configured local IP fails validation, the validation message itself is
//! the body.

pub mod json;
pub mod monitor;
pub mod plain;

use crate::env::{Environment, MonitorConfig};
use crate::error::Result;
use crate::request::OutputFormat;
use crate::resolve::ResolvedStats;

/// Render `stats` in the requested format.
pub fn render(
    stats: &ResolvedStats,
    format: OutputFormat,
    monitor_cfg: &MonitorConfig,
    env: &dyn Environment,
) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(plain::render(stats)),
        OutputFormat::Json => json::render(stats),
        OutputFormat::Monitor => monitor::render(stats, monitor_cfg, env),
    }
}
