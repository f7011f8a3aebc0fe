//! Form validation and the submission view-state machine.
//!
//! The flow composes linearly: [`validate`] gates request submission, and
//! the request outcome feeds the [`ViewState`] machine that the (external)
//! rendering layer subscribes to.
//!
//! ```text
//! user action → validate → RequestClient::request → view-state transition
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SubmissionInput`] | User-supplied form fields |
//! | [`ValidationResult`] | Valid (normalized input + hints) or violations |
//! | [`ViewState`] | Idle / Submitting / Succeeded / Failed |
//! | [`FormSubmissionFlow`] | Owns the state and drives a submission |

mod flow;
mod validate;

pub use flow::{FormSubmissionFlow, ViewState, CONNECTIVITY_ERROR_MESSAGE};
pub use validate::{
    validate, Field, Hint, SubmissionInput, ValidationResult, Violation, DESCRIPTION_HINT_LEN,
};
