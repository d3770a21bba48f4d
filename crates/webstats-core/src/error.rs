//! Shared error type across webstats crates.

use thiserror::Error;

/// HTTP statuses the pipeline can produce (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpStatus {
    /// Stats rendered.
    Ok,
    /// Anything other than GET.
    MethodNotAllowed,
    /// Body could not be produced.
    InternalServerError,
    /// Config rejected at load time. Never produced for a stats request.
    BadRequest,
}

impl HttpStatus {
    /// Numeric status code.
    pub fn code(self) -> u16 {
        match self {
            HttpStatus::Ok => 200,
            HttpStatus::BadRequest => 400,
            HttpStatus::MethodNotAllowed => 405,
            HttpStatus::InternalServerError => 500,
        }
    }

    /// Canonical reason phrase.
    pub fn reason(self) -> &'static str {
        match self {
            HttpStatus::Ok => "OK",
            HttpStatus::BadRequest => "Bad Request",
            HttpStatus::MethodNotAllowed => "Method Not Allowed",
            HttpStatus::InternalServerError => "Internal Server Error",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("unsupported method")]
    UnsupportedMethod,
    #[error("stat not found: {0}")]
    StatNotFound(String),
    #[error("{0}")]
    HostValidation(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl StatsError {
    /// Map an error to the status the dispatcher answers with.
    pub fn status(&self) -> HttpStatus {
        match self {
            StatsError::UnsupportedMethod => HttpStatus::MethodNotAllowed,
            StatsError::BadConfig(_) | StatsError::UnsupportedVersion => HttpStatus::BadRequest,
            // Host validation is folded into a 200 body by the monitor formatter;
            // reaching here means it escaped the formatter.
            StatsError::StatNotFound(_)
            | StatsError::HostValidation(_)
            | StatsError::Internal(_) => HttpStatus::InternalServerError,
        }
    }
}
