//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness

use axum::{http::StatusCode, response::IntoResponse};

pub const HEALTHZ_PATH: &str = "/healthz";

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
