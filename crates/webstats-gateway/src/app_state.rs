//! Shared application state for the webstats gateway.
//!
//! Holds the loaded config, the stats store, and the environment used by the
//! monitor formatter. All of it is read-only per request except the store's
//! own request counters.

use std::sync::Arc;

use webstats_core::error::Result;
use webstats_core::handler::StatsContext;
use webstats_core::net::validate_host_or_ip;
use webstats_core::{Environment, SystemEnvironment};

use crate::config::GatewayConfig;
use crate::registry::StatsStore;

/// Requests seen on the stats route.
pub const REQUESTS_STAT: &str = "webstats.requests";
/// Requests answered with a non-200 status.
pub const REJECTED_STAT: &str = "webstats.requests_rejected";

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    stats: StatsStore,
    env: Box<dyn Environment>,
}

impl AppState {
    /// Build application state with the real clock and hostname.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        Self::with_environment(cfg, Box::new(SystemEnvironment))
    }

    pub fn with_environment(cfg: GatewayConfig, env: Box<dyn Environment>) -> Result<Self> {
        let stats = StatsStore::new();
        stats.register(REQUESTS_STAT)?;
        stats.register(REJECTED_STAT)?;
        for seed in &cfg.stats.seed {
            stats.register(&seed.name)?;
            stats.set(&seed.name, seed.value)?;
        }

        // Not fatal: monitor requests report the message as their body.
        if !cfg.monitor.local_ip.is_empty() {
            if let Err(e) = validate_host_or_ip(&cfg.monitor.local_ip) {
                tracing::warn!(local_ip = %cfg.monitor.local_ip, error = %e, "monitor.local_ip is invalid");
            }
        }

        tracing::info!(stats = stats.len(), role = %cfg.monitor.role, "stats store ready");
        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, stats, env }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn stats(&self) -> &StatsStore {
        &self.inner.stats
    }

    /// Read-only collaborators for one stats request.
    pub fn stats_context(&self) -> StatsContext<'_> {
        StatsContext {
            registry: &self.inner.stats,
            monitor: &self.inner.cfg.monitor,
            env: self.inner.env.as_ref(),
        }
    }

    pub fn record_request(&self, ok: bool) {
        if let Err(e) = self.inner.stats.inc(REQUESTS_STAT) {
            tracing::debug!(error = %e, "request counter missing");
        }
        if !ok {
            if let Err(e) = self.inner.stats.inc(REJECTED_STAT) {
                tracing::debug!(error = %e, "rejected counter missing");
            }
        }
    }
}
