//! Read contract of the process stats registry.
//!
//! The registry is owned elsewhere (the gateway ships an in-memory one); the
//! pipeline only ever reads from it. Implementations must tolerate concurrent
//! reads from many in-flight requests.

use crate::error::Result;

pub trait StatsRegistry: Send + Sync {
    /// Every known `(name, value)` pair, in the registry's native order.
    fn read_all(&self) -> Vec<(String, i64)>;

    /// Current value of a single stat. The error's `Display` text is what
    /// callers see, so it should be human readable.
    fn read_one(&self, name: &str) -> Result<i64>;
}
