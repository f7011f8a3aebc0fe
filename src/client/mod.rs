//! Resilient HTTP request layer.
//!
//! This module provides the request side of the client core:
//!
//! - **Per-attempt timeout** - every attempt races the transport call
//!   against a timer; a fired timer cancels the in-flight call
//! - **Bounded retry** - at most `max_retries + 1` attempts, strictly
//!   sequential, with linear backoff between them
//! - **Typed errors** - timeout, network, HTTP status, and parse failures
//!   are distinguishable to the caller
//! - **JSON parsing** - 2xx bodies are parsed as structured data; a parse
//!   failure is terminal, never retried
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── config    - RequestConfig, Method, defaults
//! ├── transport - Transport trait and reqwest-backed HttpTransport
//! └── request   - RequestClient, retry loop, ParsedResponse
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`RequestClient`] | Request client with timeout and bounded retry |
//! | [`RequestConfig`] | Per-call configuration, never reused across calls |
//! | [`Transport`] | One request/response cycle; the mocking seam |
//! | [`ParsedResponse`] | Status code plus JSON-parsed body |
//!
//! # Examples
//!
//! ```ignore
//! use pluginforge_client::client::{RequestClient, RequestConfig};
//! use serde_json::json;
//!
//! let client = RequestClient::new();
//! let config = RequestConfig::post("http://localhost:5000/api/generate")
//!     .with_json(json!({"pluginName": "CoolPlugin"}));
//! let response = client.request(config).await?;
//! ```

mod config;
mod request;
mod transport;

pub use config::{
    Method, RequestConfig, DEFAULT_BACKOFF_BASE_MS, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_MS,
};
pub use request::{linear_backoff, ParsedResponse, RequestClient};
pub use transport::{HttpTransport, RawResponse, Transport};
