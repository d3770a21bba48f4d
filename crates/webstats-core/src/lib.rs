//! webstats core: the transport-agnostic stats request pipeline.
//!
//! A stats request flows through four stages, strictly in order:
//! - `request`: query parameters -> [`RequestSpec`]
//! - `resolve`: [`RequestSpec`] + [`StatsRegistry`] -> [`ResolvedStats`]
//! - `format`: [`ResolvedStats`] -> response body (plain / json / monitor)
//! - `handler`: the per-request state machine that batches every decision
//!   into a single final [`StatsResponse`].
//!
//! This crate carries no HTTP or runtime dependencies; the gateway supplies
//! an already-parsed request and consumes the status/body pair.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod env;
pub mod error;
pub mod format;
pub mod handler;
pub mod net;
pub mod registry;
pub mod request;
pub mod resolve;

pub use env::{Environment, MonitorConfig, SystemEnvironment};
pub use error::{HttpStatus, Result, StatsError};
pub use format::render;
pub use handler::{handle, StatsContext, StatsHandler, StatsResponse};
pub use registry::StatsRegistry;
pub use request::{OutputFormat, RequestSpec};
pub use resolve::{resolve, Outcome, ResolvedStats, StatResult};
