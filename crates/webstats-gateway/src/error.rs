//! Startup errors of the gateway binary.

use thiserror::Error;
use webstats_core::StatsError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("config: {0}")]
    Config(#[from] StatsError),
    #[error("invalid listen address `{addr}`: {reason}")]
    InvalidListen { addr: String, reason: String },
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
