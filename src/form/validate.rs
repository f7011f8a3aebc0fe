//! Field validation and normalization for submission input.
//!
//! Validation is lossy on purpose in one place: whitespace inside the
//! plugin name is silently removed before the name rule is applied, because
//! the original product corrected the field as the user typed rather than
//! rejecting it. Every other rule either passes or produces a field-level
//! [`Violation`].
//!
//! The 20-character description threshold is advisory only. It surfaces as
//! a [`Hint`] for the rendering layer and never blocks submission.

use crate::api::GenerateRequest;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Soft minimum description length; advisory only.
pub const DESCRIPTION_HINT_LEN: usize = 20;

fn plugin_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").expect("valid regex"))
}

fn version_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("valid regex"))
}

/// User-supplied form fields. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionInput {
    /// Requested plugin name.
    pub plugin_name: String,
    /// Plugin version, expected three-part numeric.
    pub version: String,
    /// Target platform version, same format.
    pub target_version: String,
    /// Free-form description of the plugin to generate.
    pub description: String,
}

impl SubmissionInput {
    /// Copy of the input with all whitespace removed from the plugin name.
    pub fn normalized(&self) -> SubmissionInput {
        SubmissionInput {
            plugin_name: self
                .plugin_name
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect(),
            version: self.version.trim().to_string(),
            target_version: self.target_version.trim().to_string(),
            description: self.description.clone(),
        }
    }

    /// The wire-format request body for this (already normalized) input.
    pub fn to_generate_request(&self) -> GenerateRequest {
        GenerateRequest {
            plugin_name: self.plugin_name.clone(),
            version: self.version.clone(),
            target_version: self.target_version.clone(),
            description: self.description.clone(),
        }
    }
}

/// Form field a violation or hint refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The plugin name field.
    PluginName,
    /// The plugin version field.
    Version,
    /// The target platform version field.
    TargetVersion,
    /// The description field.
    Description,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::PluginName => "plugin name",
            Field::Version => "version",
            Field::TargetVersion => "target version",
            Field::Description => "description",
        };
        f.write_str(name)
    }
}

/// A single blocking validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Field the rule applies to.
    pub field: Field,
    /// Human-readable reason.
    pub reason: String,
}

impl Violation {
    fn new(field: Field, reason: impl Into<String>) -> Self {
        Violation {
            field,
            reason: reason.into(),
        }
    }

    /// Field-specific message suitable for the rendering layer.
    pub fn message(&self) -> String {
        format!("{}: {}", self.field, self.reason)
    }
}

/// Advisory, non-blocking feedback for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// Description is shorter than [`DESCRIPTION_HINT_LEN`] characters.
    ShortDescription {
        /// Actual description length.
        length: usize,
    },
}

/// Outcome of validating a [`SubmissionInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// All rules passed. Carries the normalized input to submit and any
    /// advisory hints.
    Valid {
        /// Normalized copy of the input (plugin name whitespace removed).
        input: SubmissionInput,
        /// Non-blocking hints.
        hints: Vec<Hint>,
    },
    /// One or more rules failed. The set is never empty.
    Invalid(Vec<Violation>),
}

impl ValidationResult {
    /// Whether validation passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }
}

/// Validate a submission, normalizing the plugin name first.
pub fn validate(input: &SubmissionInput) -> ValidationResult {
    let normalized = input.normalized();
    let mut violations = Vec::new();

    if normalized.plugin_name.is_empty() {
        violations.push(Violation::new(Field::PluginName, "must not be empty"));
    } else if !plugin_name_re().is_match(&normalized.plugin_name) {
        violations.push(Violation::new(
            Field::PluginName,
            "must start with a letter and contain only letters and digits",
        ));
    }

    if !version_re().is_match(&normalized.version) {
        violations.push(Violation::new(
            Field::Version,
            "must use the format 1.0.0",
        ));
    }

    if !version_re().is_match(&normalized.target_version) {
        violations.push(Violation::new(
            Field::TargetVersion,
            "must use the format 1.0.0",
        ));
    }

    if normalized.description.trim().is_empty() {
        violations.push(Violation::new(Field::Description, "must not be empty"));
    }

    if !violations.is_empty() {
        return ValidationResult::Invalid(violations);
    }

    let mut hints = Vec::new();
    let length = normalized.description.trim().chars().count();
    if length < DESCRIPTION_HINT_LEN {
        hints.push(Hint::ShortDescription { length });
    }

    ValidationResult::Valid {
        input: normalized,
        hints,
    }
}
