// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Domain Invariants
//!
//! Every value object and the restaurant aggregate validate themselves with the
//! rules in this module. Rules are declared per field and every violated rule
//! is recorded, so a caller sees all problems with an input in one pass.
//!
//! # Invariant Categories
//!
//! 1. **Field Invariants**: required, length bounds, positivity, enumeration
//!    membership. Reported as [`ValidationError`].
//! 2. **Relationship Invariants**: valid fields in an invalid combination
//!    (an opening hour that ends before it starts). Reported as
//!    [`LogicalConstraintError`], and only checked once every field rule passed.
//!
//! # Example
//!
//! ```rust
//! use restaurant_registry::domain::invariants::Violations;
//!
//! let mut violations = Violations::new();
//! violations.text("name", "").required().length(3, 100);
//! violations.positive("tables", 0);
//!
//! let error = violations.finish().unwrap_err();
//! assert_eq!(error.messages_for("name").len(), 2);
//! assert_eq!(error.messages_for("tables").len(), 1);
//! ```

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Messages attached to field violations
pub mod messages {
    pub const REQUIRED: &str = "must be filled";
    pub const POSITIVE: &str = "must be greater than zero (0)";
    pub const STATE: &str = "must be a valid state code";
    pub const DAY_OF_WEEK: &str = "must be a valid day of the week";
    pub const CUISINE: &str = "must be one of the recognized cuisines";
    pub const UUID: &str = "must be a UUID";
    pub const TIME_OF_DAY: &str = "must be a time of day (HH:MM)";
    pub const END_AFTER_START: &str = "end time must be after start time";

    pub fn length_between(min: usize, max: usize) -> String {
        format!("must have between {min} and {max} characters")
    }

    pub fn length_at_most(max: usize) -> String {
        format!("must have at most {max} characters")
    }
}

/// Result of a field-level validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A single violated rule on a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field path, dotted for nested values (`address.street`)
    pub field: String,
    /// Human readable rule description
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Malformed input: one entry per violated field rule
///
/// Never empty when returned as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{}", join_violations(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Error with a single violation
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    /// All violations in the order they were found
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Messages recorded against one field
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.violations
            .iter()
            .filter(|v| v.field == field)
            .map(|v| v.message.as_str())
            .collect()
    }

    /// Check whether a field has at least one violation
    pub fn has_violation(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Nest every field path under `prefix`
    pub fn prefixed(mut self, prefix: &str) -> Self {
        for violation in &mut self.violations {
            violation.field = join_path(prefix, &violation.field);
        }
        self
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Valid fields in an invalid relationship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{subject}: {message}")]
pub struct LogicalConstraintError {
    subject: String,
    message: String,
}

impl LogicalConstraintError {
    pub fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Field path the relationship is reported against
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Nest the subject under `prefix`
    pub fn prefixed(mut self, prefix: &str) -> Self {
        self.subject = join_path(prefix, &self.subject);
        self
    }
}

/// Any invariant failure raised while constructing domain values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("logical constraint violated: {0}")]
    LogicalConstraint(#[from] LogicalConstraintError),
}

impl DomainError {
    /// Nest the reported field path under `prefix`
    pub fn prefixed(self, prefix: &str) -> Self {
        match self {
            Self::Validation(e) => Self::Validation(e.prefixed(prefix)),
            Self::LogicalConstraint(e) => Self::LogicalConstraint(e.prefixed(prefix)),
        }
    }
}

fn join_path(prefix: &str, field: &str) -> String {
    if field.starts_with('[') {
        format!("{prefix}{field}")
    } else {
        format!("{prefix}.{field}")
    }
}

/// Collector for field violations
///
/// Rules never short-circuit: every rule that fails adds an entry.
#[derive(Debug, Default)]
pub struct Violations {
    violations: Vec<FieldViolation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Start declaring rules for a text field
    pub fn text<'a>(&'a mut self, field: &'a str, value: &'a str) -> TextRules<'a> {
        TextRules {
            sink: self,
            field,
            value: Some(value),
        }
    }

    /// Start declaring rules for an optional text field
    ///
    /// Length rules are skipped when the value is absent.
    pub fn optional_text<'a>(&'a mut self, field: &'a str, value: Option<&'a str>) -> TextRules<'a> {
        TextRules {
            sink: self,
            field,
            value,
        }
    }

    /// Numeric value must be strictly positive
    pub fn positive(&mut self, field: &str, value: impl Into<i64>) -> &mut Self {
        if value.into() <= 0 {
            self.push(field, messages::POSITIVE);
        }
        self
    }

    /// Value must parse into a member of the enumeration `T`
    pub fn member<T: FromStr>(&mut self, field: &str, value: &str, message: &str) -> Option<T> {
        match value.parse::<T>() {
            Ok(member) => Some(member),
            Err(_) => {
                self.push(field, message);
                None
            }
        }
    }

    /// Merge the violations of a nested validation under `prefix`
    pub fn absorb<T>(&mut self, prefix: &str, result: ValidationResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.violations.extend(error.prefixed(prefix).violations);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Convert the recorded violations into an error
    ///
    /// Callers push at least one violation first.
    pub fn into_error(self) -> ValidationError {
        ValidationError {
            violations: self.violations,
        }
    }

    /// Fail with every recorded violation, if any
    pub fn finish(self) -> ValidationResult<()> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.violations,
            })
        }
    }
}

/// Rule chain for one text field
pub struct TextRules<'a> {
    sink: &'a mut Violations,
    field: &'a str,
    value: Option<&'a str>,
}

impl TextRules<'_> {
    /// Value must be present and non-empty
    pub fn required(self) -> Self {
        if self.value.map_or(true, str::is_empty) {
            self.sink.push(self.field, messages::REQUIRED);
        }
        self
    }

    /// Value length in characters must be within `min..=max`
    pub fn length(self, min: usize, max: usize) -> Self {
        if let Some(value) = self.value {
            let count = value.chars().count();
            if count < min || count > max {
                self.sink.push(self.field, messages::length_between(min, max));
            }
        }
        self
    }

    /// Value length in characters must not exceed `max`
    pub fn max_length(self, max: usize) -> Self {
        if let Some(value) = self.value {
            if value.chars().count() > max {
                self.sink.push(self.field, messages::length_at_most(max));
            }
        }
        self
    }
}
