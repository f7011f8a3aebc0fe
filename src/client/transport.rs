//! Transport abstraction over the actual HTTP call.
//!
//! [`Transport`] is the seam between retry logic and the wire: it performs
//! exactly one request/response cycle with no timeout and no retry of its
//! own. [`RequestClient`](crate::client::RequestClient) owns the per-attempt
//! timer and the retry loop, so a mock transport in tests is subject to the
//! same timeout and backoff behavior as the real one.
//!
//! [`HttpTransport`] is the reqwest-backed production implementation.

use crate::client::config::RequestConfig;
use crate::error::{RequestError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::BTreeMap;

/// A raw HTTP response before any status or body interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, lowercased names.
    pub headers: BTreeMap<String, String>,
    /// Unparsed response body.
    pub body: Bytes,
}

impl RawResponse {
    /// Whether the status code indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One request/response cycle over some medium.
///
/// Implementations report only transport-level failures
/// ([`RequestError::Network`], or [`RequestError::Timeout`] where the medium
/// itself detects one); status interpretation, body parsing, timeouts, and
/// retries all belong to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a single attempt described by `config`.
    async fn send(&self, config: &RequestConfig) -> Result<RawResponse>;
}

/// Production transport backed by a shared [`reqwest::Client`].
#[derive(Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a default reqwest client.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, config: &RequestConfig) -> Result<RawResponse> {
        let mut builder = self.client.request(config.method.into(), &config.url);

        for (name, value) in &config.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = &config.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(classify_reqwest_error)?;

        let status = response.status().as_u16();

        let mut headers = BTreeMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers.insert(name.as_str().to_string(), value.to_string());
            }
        }

        let body = response.bytes().await.map_err(classify_reqwest_error)?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

fn classify_reqwest_error(err: reqwest::Error) -> RequestError {
    if err.is_timeout() {
        RequestError::Timeout
    } else {
        RequestError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_are_2xx() {
        let mut response = RawResponse {
            status: 200,
            headers: BTreeMap::new(),
            body: Bytes::new(),
        };
        assert!(response.is_success());
        response.status = 204;
        assert!(response.is_success());
        response.status = 301;
        assert!(!response.is_success());
        response.status = 500;
        assert!(!response.is_success());
    }
}
