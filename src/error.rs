//! Error types and result handling.
//!
//! All transport-originated failures are represented by [`RequestError`] so
//! that callers can distinguish a timeout from a network fault from an HTTP
//! status failure from a body that would not parse. The submission flow
//! deliberately collapses these kinds into a single user-facing message, but
//! the distinction is preserved here for diagnostics and for retry
//! classification.
//!
//! # Retry Classification
//!
//! | Variant | Retryable |
//! |---------|-----------|
//! | [`RequestError::Timeout`] | yes |
//! | [`RequestError::Network`] | yes |
//! | [`RequestError::HttpStatus`] | yes |
//! | [`RequestError::Parse`] | no |
//! | [`RequestError::Config`] | no |
//!
//! A parse failure happens after a successful transport round trip, so
//! retrying would repeat work the server already completed. A config error
//! means the request was never issued.

use thiserror::Error;

/// Errors produced by the request layer.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The per-attempt timer fired before the transport call completed.
    /// The in-flight call is cancelled when this is raised.
    #[error("request timed out")]
    Timeout,

    /// The transport failed below the HTTP layer (connection refused, DNS
    /// failure, connection reset, etc.).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status code.
    #[error("http status {0}")]
    HttpStatus(u16),

    /// The response body could not be parsed as JSON, or did not
    /// deserialize into the expected shape.
    #[error("response parse error: {0}")]
    Parse(String),

    /// The request configuration was invalid (e.g. a zero timeout or an
    /// unparseable URL). The request is never attempted.
    #[error("invalid request config: {0}")]
    Config(String),
}

impl RequestError {
    /// Whether another attempt could plausibly succeed.
    ///
    /// Timeouts, network faults, and HTTP status failures are transient from
    /// the client's point of view; parse and config errors are terminal.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RequestError::Timeout | RequestError::Network(_) | RequestError::HttpStatus(_)
        )
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RequestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_kinds_are_retryable() {
        assert!(RequestError::Timeout.is_retryable());
        assert!(RequestError::Network("refused".into()).is_retryable());
        assert!(RequestError::HttpStatus(503).is_retryable());
    }

    #[test]
    fn parse_and_config_are_terminal() {
        assert!(!RequestError::Parse("bad json".into()).is_retryable());
        assert!(!RequestError::Config("timeout_ms must be > 0".into()).is_retryable());
    }

    #[test]
    fn display_includes_status_code() {
        let err = RequestError::HttpStatus(500);
        assert_eq!(err.to_string(), "http status 500");
    }
}
