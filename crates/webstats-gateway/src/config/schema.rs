use std::net::SocketAddr;

use serde::Deserialize;
use webstats_core::error::{Result, StatsError};
use webstats_core::MonitorConfig;

use crate::ops::HEALTHZ_PATH;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub monitor: MonitorConfig,

    #[serde(default)]
    pub stats: StatsSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(StatsError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        if self.monitor.port == 0 {
            return Err(StatsError::BadConfig("monitor.port must not be 0".into()));
        }
        if self.monitor.role.trim().is_empty() {
            return Err(StatsError::BadConfig("monitor.role must not be empty".into()));
        }
        self.stats.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_stats_path")]
    pub stats_path: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            stats_path: default_stats_path(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.parse::<SocketAddr>().is_err() {
            return Err(StatsError::BadConfig(format!(
                "gateway.listen must be a socket address, got `{}`",
                self.listen
            )));
        }
        if !self.stats_path.starts_with('/') || self.stats_path.len() < 2 {
            return Err(StatsError::BadConfig(
                "gateway.stats_path must start with '/' and not be the root".into(),
            ));
        }
        if self.stats_path == HEALTHZ_PATH {
            return Err(StatsError::BadConfig(format!(
                "gateway.stats_path must not shadow {HEALTHZ_PATH}"
            )));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:11000".into()
}
fn default_stats_path() -> String {
    "/stats".into()
}

/// Stats registered at startup.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct StatsSection {
    #[serde(default)]
    pub seed: Vec<SeedStat>,
}

impl StatsSection {
    pub fn validate(&self) -> Result<()> {
        if let Some(i) = self.seed.iter().position(|s| s.name.is_empty()) {
            return Err(StatsError::BadConfig(format!("stats.seed[{i}].name must not be empty")));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedStat {
    pub name: String,
    #[serde(default)]
    pub value: i64,
}
