//! Transport layer (HTTP).
//!
//! Adapts axum requests into the core stats handler and its status/body pair
//! back into axum responses.

pub mod http;
