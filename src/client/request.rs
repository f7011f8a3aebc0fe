//! The request client: per-attempt timeout, bounded retry, JSON parsing.
//!
//! # Behavior
//!
//! Every call to [`RequestClient::request`] runs at most
//! `max_retries + 1` attempts. Each attempt races the transport call against
//! a timer of `timeout_ms`; when the timer wins, the in-flight call is
//! dropped (cancelled) and the attempt counts as a timeout failure. Failed
//! attempts are followed by a linear backoff of
//! `backoff_base_ms * attempt_number` before the next try. Retries are
//! strictly sequential; no two attempts for the same call ever overlap.
//!
//! A 2xx response terminates the sequence: the body is parsed as JSON and a
//! parse failure is itself terminal, never retried. An empty 2xx body parses
//! to JSON null and is a success.
//!
//! # Examples
//!
//! ```ignore
//! use pluginforge_client::client::{RequestClient, RequestConfig};
//!
//! let client = RequestClient::new();
//! let config = RequestConfig::get("http://localhost:5000/api/health")
//!     .with_timeout_ms(5_000)
//!     .with_max_retries(2);
//! let response = client.request(config).await?;
//! println!("status {}", response.status);
//! ```

use crate::client::config::{RequestConfig, DEFAULT_BACKOFF_BASE_MS};
use crate::client::transport::{HttpTransport, RawResponse, Transport};
use crate::error::{RequestError, Result};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Linear backoff delay before retry number `attempt` (1-based).
///
/// The first retry waits `base_ms`, the second `2 * base_ms`, and so on.
pub fn linear_backoff(attempt: u32, base_ms: u64) -> Duration {
    Duration::from_millis(base_ms.saturating_mul(u64::from(attempt)))
}

/// A response whose body has been parsed as JSON.
#[derive(Debug, Clone)]
pub struct ParsedResponse {
    /// HTTP status code of the final, successful attempt.
    pub status: u16,
    /// Parsed response body. An empty body parses to `Value::Null`.
    pub body: serde_json::Value,
}

impl ParsedResponse {
    /// Deserialize the body into a typed value.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.body.clone())
            .map_err(|e| RequestError::Parse(e.to_string()))
    }
}

/// HTTP request client with bounded retry.
///
/// The client is cheap to clone and holds no per-request state; every call
/// receives a fresh [`RequestConfig`] and the config never outlives the
/// request/retry sequence it describes.
#[derive(Clone)]
pub struct RequestClient {
    transport: Arc<dyn Transport>,
    backoff_base_ms: u64,
}

impl RequestClient {
    /// Create a client over the reqwest-backed transport with the default
    /// backoff base (1000 ms).
    pub fn new() -> Self {
        Self::with_transport(Arc::new(HttpTransport::new()), DEFAULT_BACKOFF_BASE_MS)
    }

    /// Create a client over a custom transport.
    ///
    /// Used by tests to substitute a scripted transport, and by callers that
    /// need a non-default backoff base.
    pub fn with_transport(transport: Arc<dyn Transport>, backoff_base_ms: u64) -> Self {
        RequestClient {
            transport,
            backoff_base_ms,
        }
    }

    /// Issue the request described by `config`.
    ///
    /// Returns the parsed response of the first successful attempt, or the
    /// last error encountered once the retry budget is exhausted.
    pub async fn request(&self, config: RequestConfig) -> Result<ParsedResponse> {
        if config.timeout_ms == 0 {
            return Err(RequestError::Config("timeout_ms must be > 0".into()));
        }

        let mut attempt: u32 = 0;
        loop {
            match self.attempt(&config).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && attempt < config.max_retries => {
                    attempt += 1;
                    let delay = linear_backoff(attempt, self.backoff_base_ms);
                    tracing::warn!(
                        attempt,
                        max_retries = config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "request attempt failed, retrying"
                    );
                    sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// One attempt: transport call raced against the per-attempt timer,
    /// then status check and JSON parse.
    async fn attempt(&self, config: &RequestConfig) -> Result<ParsedResponse> {
        let window = Duration::from_millis(config.timeout_ms);
        let raw = match timeout(window, self.transport.send(config)).await {
            Ok(result) => result?,
            // Dropping the future cancels the in-flight call.
            Err(_) => return Err(RequestError::Timeout),
        };

        if !raw.is_success() {
            return Err(RequestError::HttpStatus(raw.status));
        }

        Ok(ParsedResponse {
            status: raw.status,
            body: parse_body(&raw)?,
        })
    }
}

impl Default for RequestClient {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_body(raw: &RawResponse) -> Result<serde_json::Value> {
    if raw.body.is_empty() {
        // A successful-but-empty response is a success, never an error.
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_slice(&raw.body).map_err(|e| RequestError::Parse(e.to_string()))
}
