//! Top-level facade crate for webstats.
//!
//! Re-exports the core pipeline and the gateway library so users can depend on a single crate.

pub mod core {
    pub use webstats_core::*;
}

pub mod gateway {
    pub use webstats_gateway::*;
}
