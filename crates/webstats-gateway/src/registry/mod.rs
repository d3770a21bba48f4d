//! In-process stats registry served by the gateway.
//!
//! Values are stored as atomics keyed by name and read by the stats handler
//! through the core `StatsRegistry` contract.

pub mod store;

pub use store::StatsStore;
