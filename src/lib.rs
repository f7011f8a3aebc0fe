#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Architecture
//!
//! Two components, composed linearly:
//!
//! 1. **[`RequestClient`]** - issues an HTTP request with a per-attempt
//!    timeout and bounded automatic retry with linear backoff. At most
//!    `max_retries + 1` attempts run, strictly sequentially; a 2xx response
//!    terminates the sequence and its body is parsed as JSON. Errors are
//!    typed: [`RequestError::Timeout`], [`RequestError::Network`],
//!    [`RequestError::HttpStatus`], [`RequestError::Parse`].
//! 2. **[`FormSubmissionFlow`]** - validates user-supplied fields (with
//!    silent plugin-name normalization), invokes the client, and maps the
//!    outcome onto [`ViewState`]: `Idle → Submitting → Succeeded / Failed
//!    → Idle`.
//!
//! Rendering is external: the flow exposes state transitions, validation
//! violations, and an opaque [`ArtifactRef`], nothing else.
//!
//! # Module Structure
//!
//! - **[`client`]** - request client, per-call config, transport seam
//! - **[`form`]** - validation rules and the submission state machine
//! - **[`api`]** - backend wire types and endpoint URL construction
//! - **[`error`]** - error taxonomy and result alias

pub mod api;
pub mod client;
pub mod error;
pub mod form;

pub use api::{ApiResponse, ArtifactRef, Endpoints, GenerateRequest};
pub use client::{Method, ParsedResponse, RequestClient, RequestConfig, Transport};
pub use error::{RequestError, Result};
pub use form::{
    validate, FormSubmissionFlow, SubmissionInput, ValidationResult, ViewState, Violation,
};
