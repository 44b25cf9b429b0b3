//! Error codes attached to error logs.
//!
//! Response bodies only carry `{"error": "<message>"}`; the numeric code is
//! emitted as the `error_code` field of the matching log event so log
//! queries can group failures.

/// Error categories the service can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// No route or no document matched
    NotFound,
    /// Unexpected failure, including document store failures
    InternalError,
    /// A dependency checked by the readiness probe is down
    ServiceUnavailable,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    /// Integer code for logging and monitoring.
    pub fn code(&self) -> i32 {
        match self {
            Self::NotFound => 1004,
            Self::InternalError => 1010,
            Self::ServiceUnavailable => 1011,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
