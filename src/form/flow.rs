//! Submission flow: validation gate, request invocation, view states.
//!
//! [`FormSubmissionFlow`] owns the one piece of mutable state in the crate,
//! the [`ViewState`]. State transitions are the only externally visible
//! effect; the rendering layer reads the state after each operation and
//! draws whatever it wants.
//!
//! # State Machine
//!
//! ```text
//! Idle ──submit──▶ Submitting ──▶ Succeeded(artifact)
//!   ▲                    │
//!   │                    └──────▶ Failed(message)
//!   └───────── reset ◀───────────────┘
//! ```
//!
//! Only `reset` leaves a terminal state, and it always lands on `Idle`,
//! dropping the stored artifact reference or error message. A validation
//! failure moves straight to `Failed` without ever touching the network.
//!
//! Transport errors of every kind (timeout, network, status, parse) are
//! collapsed into one generic connectivity message for the user; the
//! distinct kind survives only in a `tracing` warning.

use crate::api::{ApiResponse, ArtifactRef, Endpoints, GenerateRequest};
use crate::client::{RequestClient, RequestConfig};
use crate::error::Result;
use crate::form::validate::{validate, SubmissionInput, ValidationResult};

/// User-facing message for any transport-level failure.
pub const CONNECTIVITY_ERROR_MESSAGE: &str =
    "Could not reach the server. Check your connection and try again.";

const GENERIC_FAILURE_MESSAGE: &str = "The server could not complete the request.";

/// The finite set of UI-facing states a submission can be in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// No submission in progress.
    Idle,
    /// A request sequence is in flight.
    Submitting,
    /// The server generated an artifact.
    Succeeded(ArtifactRef),
    /// Validation or the request failed; carries the user-facing message.
    Failed(String),
}

impl ViewState {
    fn label(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Submitting => "submitting",
            ViewState::Succeeded(_) => "succeeded",
            ViewState::Failed(_) => "failed",
        }
    }
}

/// Drives a submission from validated input to a terminal view state.
///
/// One flow instance handles one submission at a time: `submit` and
/// `recompile` are accepted only from [`ViewState::Idle`]. A terminal state
/// leaves only through [`reset`](Self::reset), so a call arriving while the
/// flow is submitting or sitting in `Succeeded`/`Failed` is rejected
/// without side effects.
pub struct FormSubmissionFlow {
    state: ViewState,
    client: RequestClient,
    endpoints: Endpoints,
    timeout_ms: u64,
    max_retries: u32,
}

impl FormSubmissionFlow {
    /// Create a flow with the default timeout and retry budget.
    pub fn new(client: RequestClient, endpoints: Endpoints) -> Self {
        FormSubmissionFlow {
            state: ViewState::Idle,
            client,
            endpoints,
            timeout_ms: crate::client::DEFAULT_TIMEOUT_MS,
            max_retries: crate::client::DEFAULT_MAX_RETRIES,
        }
    }

    /// Override the per-attempt timeout and retry budget used for requests.
    pub fn with_retry_policy(mut self, timeout_ms: u64, max_retries: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self.max_retries = max_retries;
        self
    }

    /// Current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The endpoints this flow talks to.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Validate `input` and, if it passes, post a generation request.
    ///
    /// Ends in [`ViewState::Succeeded`] or [`ViewState::Failed`]; a
    /// validation failure goes to `Failed` directly and the request layer
    /// is never invoked. Accepted only from [`ViewState::Idle`]: calls
    /// while submitting or from a terminal state are rejected without
    /// effect until [`reset`](Self::reset).
    pub async fn submit(&mut self, input: SubmissionInput) -> &ViewState {
        if self.state != ViewState::Idle {
            tracing::warn!(state = self.state.label(), "submit rejected: flow is not idle");
            return &self.state;
        }

        let normalized = match validate(&input) {
            ValidationResult::Valid { input, hints } => {
                for hint in &hints {
                    tracing::debug!(?hint, "advisory validation hint");
                }
                input
            }
            ValidationResult::Invalid(violations) => {
                let message = violations[0].message();
                self.transition(ViewState::Failed(message));
                return &self.state;
            }
        };

        self.transition(ViewState::Submitting);

        let outcome = self
            .post(
                self.endpoints.generate_url().into(),
                Some(normalized.to_generate_request()),
            )
            .await;
        self.apply_outcome(outcome, None);
        &self.state
    }

    /// Ask the server to recompile an existing artifact.
    ///
    /// Same state machine and outcome mapping as [`submit`](Self::submit),
    /// including the idle-only acceptance rule.
    pub async fn recompile(&mut self, artifact: &ArtifactRef) -> &ViewState {
        if self.state != ViewState::Idle {
            tracing::warn!(state = self.state.label(), "recompile rejected: flow is not idle");
            return &self.state;
        }

        self.transition(ViewState::Submitting);

        let outcome = self
            .post(self.endpoints.recompile_url(artifact).into(), None)
            .await;
        self.apply_outcome(outcome, Some(artifact.clone()));
        &self.state
    }

    /// Return to [`ViewState::Idle`] from a terminal state, dropping the
    /// stored artifact reference or error message.
    ///
    /// A no-op from `Idle`; returns `false` (and does nothing) while a
    /// submission is in flight.
    pub fn reset(&mut self) -> bool {
        match self.state {
            ViewState::Submitting => false,
            ViewState::Idle => true,
            _ => {
                self.transition(ViewState::Idle);
                true
            }
        }
    }

    async fn post(&self, url: String, body: Option<GenerateRequest>) -> Result<ApiResponse> {
        let mut config = RequestConfig::post(url)
            .with_timeout_ms(self.timeout_ms)
            .with_max_retries(self.max_retries);
        if let Some(body) = body {
            let value = serde_json::to_value(&body)
                .map_err(|e| crate::error::RequestError::Parse(e.to_string()))?;
            config = config.with_json(value);
        }
        self.client.request(config).await?.json()
    }

    fn apply_outcome(&mut self, outcome: Result<ApiResponse>, fallback: Option<ArtifactRef>) {
        let next = match outcome {
            Ok(response) if response.success => {
                match response.plugin_id.map(ArtifactRef::new).or(fallback) {
                    Some(artifact) => ViewState::Succeeded(artifact),
                    // Success flag without an identifier to hand outward.
                    None => ViewState::Failed(GENERIC_FAILURE_MESSAGE.to_string()),
                }
            }
            Ok(response) => ViewState::Failed(
                response
                    .failure_text()
                    .unwrap_or(GENERIC_FAILURE_MESSAGE)
                    .to_string(),
            ),
            Err(e) => {
                // Deliberately lossy: the kind is for diagnostics only.
                tracing::warn!(error = %e, "transport failure collapsed to connectivity message");
                ViewState::Failed(CONNECTIVITY_ERROR_MESSAGE.to_string())
            }
        };
        self.transition(next);
    }

    fn transition(&mut self, next: ViewState) {
        tracing::debug!(from = self.state.label(), to = next.label(), "view state transition");
        self.state = next;
    }
}
