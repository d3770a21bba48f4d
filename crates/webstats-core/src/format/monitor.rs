//! Push-style monitoring agent payload.
//!
//! Every resolved value becomes one compact JSON object sharing endpoint,
//! step, counter type and a minute-aligned timestamp. Failed stats are left
//! out entirely.

use serde::Serialize;

use crate::env::{Environment, MonitorConfig};
use crate::error::{Result, StatsError};
use crate::net;
use crate::resolve::ResolvedStats;

/// Reporting window of the agent, in seconds.
pub const STEP_SECS: u64 = 60;
pub const COUNTER_TYPE: &str = "GAUGE";
/// Fixed metric label; the stat name travels in the `type` tag.
pub const METRIC: &str = "pv";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorEntry<'a> {
    pub endpoint: &'a str,
    pub step: u64,
    pub counter_type: &'static str,
    pub timestamp: u64,
    pub metric: &'static str,
    pub value: i64,
    pub tags: String,
}

/// Floor `now` to the start of its reporting window.
pub fn bucket_timestamp(now: u64) -> u64 {
    now - now % STEP_SECS
}

/// Tag prefix shared by every entry of one payload.
pub fn common_tags(endpoint: &str, role: &str) -> String {
    format!("project=nebula,city=jd,ip_port={endpoint},module={role}")
}

/// Host reported in the payload: the configured local IP when set (after
/// validation), the machine hostname otherwise.
pub fn report_host(cfg: &MonitorConfig, env: &dyn Environment) -> Result<String> {
    if cfg.local_ip.is_empty() {
        return Ok(env.hostname());
    }
    net::validate_host_or_ip(&cfg.local_ip)?;
    Ok(cfg.local_ip.clone())
}

/// Render the monitor payload.
///
/// A local IP that fails validation short-circuits: its message is returned
/// as the whole body (the response status is still 200).
pub fn render(stats: &ResolvedStats, cfg: &MonitorConfig, env: &dyn Environment) -> Result<String> {
    let timestamp = bucket_timestamp(env.now_epoch_secs());

    let host = match report_host(cfg, env) {
        Ok(h) => h,
        Err(e @ StatsError::HostValidation(_)) => {
            tracing::warn!(local_ip = %cfg.local_ip, error = %e, "monitor host validation failed");
            return Ok(e.to_string());
        }
        Err(e) => return Err(e),
    };
    let endpoint = net::endpoint(&host, cfg.port);
    let prefix = common_tags(&endpoint, &cfg.role);

    let entries: Vec<MonitorEntry<'_>> = stats
        .iter()
        .filter_map(|r| {
            r.outcome.value().map(|value| MonitorEntry {
                endpoint: &endpoint,
                step: STEP_SECS,
                counter_type: COUNTER_TYPE,
                timestamp,
                metric: METRIC,
                value,
                tags: format!("{prefix},type={}", r.name),
            })
        })
        .collect();

    serde_json::to_string(&entries)
        .map_err(|e| StatsError::Internal(format!("monitor encode failed: {e}")))
}
