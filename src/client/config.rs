//! Per-request configuration.
//!
//! A [`RequestConfig`] describes one request/retry sequence: URL, method,
//! optional JSON body, extra headers, the per-attempt timeout, and the retry
//! budget. It is constructed fresh for every invocation and never reused
//! across sequences - there is no shared mutable request state.
//!
//! # Examples
//!
//! ```
//! use pluginforge_client::client::{Method, RequestConfig};
//! use serde_json::json;
//!
//! let config = RequestConfig::post("http://localhost:5000/api/generate")
//!     .with_json(json!({"pluginName": "CoolPlugin"}))
//!     .with_timeout_ms(30_000)
//!     .with_max_retries(2);
//!
//! assert_eq!(config.method, Method::Post);
//! assert_eq!(config.max_retries, 2);
//! ```

use std::collections::BTreeMap;

/// Default per-attempt timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Default retry budget (retries after the first attempt).
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default linear backoff base in milliseconds.
pub const DEFAULT_BACKOFF_BASE_MS: u64 = 1_000;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// HTTP GET
    Get,
    /// HTTP POST
    Post,
    /// HTTP PUT
    Put,
    /// HTTP DELETE
    Delete,
}

impl Method {
    /// The method as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Configuration for a single request/retry sequence.
///
/// Immutable once handed to [`RequestClient`](crate::client::RequestClient);
/// the builder-style `with_*` methods consume and return the value.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Target URL.
    pub url: String,
    /// HTTP method.
    pub method: Method,
    /// Optional JSON body. Serialized once per attempt.
    pub body: Option<serde_json::Value>,
    /// Extra headers. `Content-Type: application/json` is implied when a
    /// body is present.
    pub headers: BTreeMap<String, String>,
    /// Per-attempt timeout in milliseconds. Must be greater than zero.
    pub timeout_ms: u64,
    /// Number of retries after the first attempt. Zero means a single
    /// attempt, no retry.
    pub max_retries: u32,
}

impl RequestConfig {
    /// Create a config with the given method and URL and default timeout
    /// and retry budget.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        RequestConfig {
            url: url.into(),
            method,
            body: None,
            headers: BTreeMap::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Shorthand for a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    /// Shorthand for a POST request.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    /// Attach a JSON body.
    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Override the per-attempt timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Override the retry budget.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_design() {
        let config = RequestConfig::get("http://localhost/x");
        assert_eq!(config.timeout_ms, 60_000);
        assert_eq!(config.max_retries, 3);
        assert!(config.body.is_none());
        assert!(config.headers.is_empty());
    }

    #[test]
    fn builder_sets_fields() {
        let config = RequestConfig::post("http://localhost/x")
            .with_json(json!({"a": 1}))
            .with_header("X-Request-Id", "42")
            .with_timeout_ms(500)
            .with_max_retries(0);
        assert_eq!(config.method.as_str(), "POST");
        assert_eq!(config.timeout_ms, 500);
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.headers.get("X-Request-Id").map(String::as_str), Some("42"));
    }

    #[test]
    fn method_maps_to_reqwest() {
        assert_eq!(reqwest::Method::from(Method::Delete), reqwest::Method::DELETE);
        assert_eq!(reqwest::Method::from(Method::Put), reqwest::Method::PUT);
    }
}
