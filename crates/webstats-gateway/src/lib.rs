//! webstats gateway library entry.
//!
//! Wires the core stats pipeline into an axum HTTP server: YAML config, the
//! in-memory stats store, the stats route, and operational endpoints. Used by
//! the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod ops;
pub mod registry;
pub mod router;
pub mod transport;
