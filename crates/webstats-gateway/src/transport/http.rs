//! Stats route handler.
//!
//! Routed for every method so the core dispatcher, not the router, decides
//! the 405. The query string is extracted leniently: if it cannot be decoded
//! it is treated as empty. A body that cannot be buffered (e.g. over the
//! default size limit) is reported to the handler and otherwise ignored.

use std::collections::HashMap;

use axum::{
    extract::{rejection::BytesRejection, Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use webstats_core::{handler::StatsHandler, HttpStatus, OutputFormat, StatsResponse};

use crate::app_state::AppState;

const JSON_CONTENT_TYPE: &str = "application/json";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

pub async fn stats(
    State(state): State<AppState>,
    method: Method,
    query: Option<Query<HashMap<String, String>>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let params = query.map(|Query(q)| q).unwrap_or_default();

    let mut handler = StatsHandler::new();
    handler.on_request(method.as_str(), &params);
    match body {
        Ok(chunk) => handler.on_body(chunk),
        Err(rejection) => handler.on_error(&rejection),
    }
    let resp = handler.on_eom(&state.stats_context());

    tracing::debug!(
        %method,
        status = resp.status.code(),
        reason = resp.status.reason(),
        "stats response"
    );
    state.record_request(resp.status == HttpStatus::Ok);
    into_response(resp)
}

fn into_response(resp: StatsResponse) -> Response {
    let status =
        StatusCode::from_u16(resp.status.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match resp.format {
        Some(format) => {
            (status, [(header::CONTENT_TYPE, content_type(format))], resp.body).into_response()
        }
        None => (status, resp.body).into_response(),
    }
}

fn content_type(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Json | OutputFormat::Monitor => JSON_CONTENT_TYPE,
        OutputFormat::Plain => TEXT_CONTENT_TYPE,
    }
}
