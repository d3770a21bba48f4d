//! Per-request state machine and response dispatch.
//!
//! `Start -> on_request -> Parsed -> on_body (no-op) -> on_eom -> response`
//!
//! Errors found while parsing are stored, not acted on; `on_eom` is the single
//! point where a status is chosen and exactly one response is produced.
//! `on_eom` consumes the handler, so nothing can run on a request after it
//! has been answered.

use std::collections::HashMap;

use bytes::Bytes;

use crate::env::{Environment, MonitorConfig};
use crate::error::{HttpStatus, Result, StatsError};
use crate::format;
use crate::registry::StatsRegistry;
use crate::request::{self, OutputFormat, RequestSpec};
use crate::resolve;

/// Collaborators shared by every request. Read-only.
#[derive(Clone, Copy)]
pub struct StatsContext<'a> {
    pub registry: &'a dyn StatsRegistry,
    pub monitor: &'a MonitorConfig,
    pub env: &'a dyn Environment,
}

/// Final status/body pair of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsResponse {
    pub status: HttpStatus,
    pub body: String,
    /// Format the body was rendered in; `None` when no body was rendered.
    pub format: Option<OutputFormat>,
}

impl StatsResponse {
    fn empty(status: HttpStatus) -> Self {
        Self {
            status,
            body: String::new(),
            format: None,
        }
    }
}

#[derive(Debug)]
enum State {
    Start,
    Parsed(Result<RequestSpec>),
}

#[derive(Debug)]
pub struct StatsHandler {
    state: State,
}

impl Default for StatsHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsHandler {
    pub fn new() -> Self {
        Self { state: State::Start }
    }

    /// Parse method and query. Errors are held until `on_eom`.
    pub fn on_request(&mut self, method: &str, params: &HashMap<String, String>) {
        if let State::Parsed(_) = self.state {
            tracing::warn!(method, "duplicate request headers ignored");
            return;
        }
        self.state = State::Parsed(request::parse(method, params));
    }

    /// Only GET is served; any body is drained and dropped.
    pub fn on_body(&mut self, _chunk: Bytes) {}

    /// Produce the one and only response for this request.
    pub fn on_eom(self, ctx: &StatsContext<'_>) -> StatsResponse {
        match self.state {
            State::Start => {
                tracing::warn!("end of message before request headers");
                let err = StatsError::Internal("no request received".into());
                StatsResponse {
                    status: err.status(),
                    body: err.to_string(),
                    format: None,
                }
            }
            State::Parsed(Err(e)) => {
                tracing::warn!(error = %e, "stats request rejected");
                StatsResponse::empty(e.status())
            }
            State::Parsed(Ok(spec)) => respond(&spec, ctx),
        }
    }

    /// Transport failure while reading the request. Only logged: the body is
    /// never used, so the request is still answered at `on_eom`.
    pub fn on_error(&mut self, err: &dyn std::fmt::Display) {
        tracing::warn!(error = %err, "stats handler got transport error");
    }
}

fn respond(spec: &RequestSpec, ctx: &StatsContext<'_>) -> StatsResponse {
    let stats = resolve::resolve(spec, ctx.registry);
    match format::render(&stats, spec.output_format, ctx.monitor, ctx.env) {
        Ok(body) => {
            tracing::debug!(
                format = spec.output_format.as_str(),
                results = stats.len(),
                values = stats.value_count(),
                "stats request served"
            );
            StatsResponse {
                status: HttpStatus::Ok,
                body,
                format: Some(spec.output_format),
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "stats formatting failed");
            StatsResponse {
                status: e.status(),
                body: e.to_string(),
                format: None,
            }
        }
    }
}

/// Run one request through the whole state machine.
pub fn handle(
    method: &str,
    params: &HashMap<String, String>,
    body: Bytes,
    ctx: &StatsContext<'_>,
) -> StatsResponse {
    let mut handler = StatsHandler::new();
    handler.on_request(method, params);
    handler.on_body(body);
    handler.on_eom(ctx)
}
