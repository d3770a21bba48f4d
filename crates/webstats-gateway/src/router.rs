//! Axum router wiring.
//!
//! Exposes the stats route at the configured path plus `/healthz`.

use axum::{
    routing::{any, get},
    Router,
};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    let stats_path = state.cfg().gateway.stats_path.clone();
    Router::new()
        .route(&stats_path, any(transport::http::stats))
        .route(ops::HEALTHZ_PATH, get(ops::healthz))
        .with_state(state)
}
