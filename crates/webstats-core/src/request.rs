//! Query parameters -> [`RequestSpec`].
//!
//! Parsing never rejects input: unknown parameters are ignored and an
//! unrecognized `format` falls through to plain text. The only failure is a
//! non-GET method.

use std::collections::HashMap;

use crate::error::{Result, StatsError};

/// Query parameter selecting the output format.
pub const FORMAT_PARAM: &str = "format";
/// Query parameter holding the comma separated stat names.
pub const STATS_PARAM: &str = "stats";

/// Body representation requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `name=value` lines.
    #[default]
    Plain,
    /// Pretty printed array of single-key objects.
    Json,
    /// Push-style monitoring agent payload.
    Monitor,
}

impl OutputFormat {
    /// Exact, case-sensitive match on the `format` parameter value.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("json") => OutputFormat::Json,
            Some("monitor") => OutputFormat::Monitor,
            _ => OutputFormat::Plain,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
            OutputFormat::Monitor => "monitor",
        }
    }
}

/// What a single stats request asked for. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestSpec {
    pub output_format: OutputFormat,
    /// Requested names in request order. Empty means "all stats".
    /// Duplicates are kept.
    pub requested_names: Vec<String>,
}

impl RequestSpec {
    pub fn wants_all(&self) -> bool {
        self.requested_names.is_empty()
    }
}

/// Parse the method and query parameters of a stats request.
pub fn parse(method: &str, params: &HashMap<String, String>) -> Result<RequestSpec> {
    if method != "GET" {
        return Err(StatsError::UnsupportedMethod);
    }

    let output_format = OutputFormat::from_param(params.get(FORMAT_PARAM).map(String::as_str));
    let requested_names = params
        .get(STATS_PARAM)
        .map(|s| split_names(s))
        .unwrap_or_default();

    Ok(RequestSpec {
        output_format,
        requested_names,
    })
}

/// Split on `,`, dropping empty segments and keeping order.
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
