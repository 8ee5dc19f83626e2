//! Validation error types
//!
//! Error codes:
//! - REGEN_OUT_OF_RANGE
//! - REGEN_MISSING_FIELD
//! - REGEN_TYPE_MISMATCH
//! - REGEN_UNKNOWN_FIELD
//! - REGEN_CONSTRAINT_VIOLATED
//! - REGEN_MALFORMED_INPUT
//!
//! Every failure is recoverable and caller-visible. Violations are collected,
//! never short-circuited, so one error carries every problem in the input.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Path used when the violation concerns the document itself.
pub const ROOT_PATH: &str = "$root";

/// Kinds of constraint violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
pub enum ViolationKind {
    /// Numeric field outside its declared bound
    OutOfRange,
    /// Required field absent
    MissingField,
    /// Value has the wrong JSON type (including null)
    TypeMismatch,
    /// Undeclared field under a rejecting policy
    UnknownField,
    /// Non-numeric rule (empty text, duplicate key, weight sum, timestamp)
    Constraint,
    /// Raw input was not JSON at all
    MalformedInput,
}

impl ViolationKind {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::OutOfRange => "REGEN_OUT_OF_RANGE",
            ViolationKind::MissingField => "REGEN_MISSING_FIELD",
            ViolationKind::TypeMismatch => "REGEN_TYPE_MISMATCH",
            ViolationKind::UnknownField => "REGEN_UNKNOWN_FIELD",
            ViolationKind::Constraint => "REGEN_CONSTRAINT_VIOLATED",
            ViolationKind::MalformedInput => "REGEN_MALFORMED_INPUT",
        }
    }
}

impl From<ViolationKind> for &'static str {
    fn from(kind: ViolationKind) -> Self {
        kind.code()
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single violated constraint, tagged with the field path it concerns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Field path (e.g. "components[2].weight")
    pub field: String,
    /// What went wrong
    #[serde(rename = "code")]
    pub kind: ViolationKind,
    /// The constraint that was expected to hold
    pub constraint: String,
    /// Offending value; `None` when the field is missing
    pub value: Option<Value>,
}

impl Violation {
    pub fn new(
        field: impl Into<String>,
        kind: ViolationKind,
        constraint: impl Into<String>,
        value: Option<Value>,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            constraint: constraint.into(),
            value,
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(field, ViolationKind::MissingField, "field to be present", None)
    }

    pub fn type_mismatch(field: impl Into<String>, expected: &str, actual: &Value) -> Self {
        Self::new(
            field,
            ViolationKind::TypeMismatch,
            expected,
            Some(actual.clone()),
        )
    }

    /// `actual` is recorded exactly as received.
    pub fn out_of_range(field: impl Into<String>, constraint: impl Into<String>, actual: &Value) -> Self {
        Self::new(
            field,
            ViolationKind::OutOfRange,
            constraint,
            Some(actual.clone()),
        )
    }

    pub fn unknown_field(field: impl Into<String>, actual: &Value) -> Self {
        Self::new(
            field,
            ViolationKind::UnknownField,
            "no undeclared fields",
            Some(actual.clone()),
        )
    }

    pub fn constraint(field: impl Into<String>, constraint: impl Into<String>, actual: Value) -> Self {
        Self::new(field, ViolationKind::Constraint, constraint, Some(actual))
    }

    pub fn malformed_input(reason: impl Into<String>) -> Self {
        Self::new(ROOT_PATH, ViolationKind::MalformedInput, reason, None)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(
                f,
                "field '{}': expected {}, got {} [{}]",
                self.field, self.constraint, value, self.kind
            ),
            None => write!(
                f,
                "field '{}': expected {}, got nothing [{}]",
                self.field, self.constraint, self.kind
            ),
        }
    }
}

/// Aggregate failure returned by the validator.
///
/// Holds every violation found in document order. Never empty when produced
/// by the validator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    model: &'static str,
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Error code shared by all validation failures
    pub const CODE: &'static str = "REGEN_VALIDATION_FAILED";

    pub fn new(model: &'static str, violations: Vec<Violation>) -> Self {
        Self { model, violations }
    }

    /// Name of the model that failed validation
    pub fn model(&self) -> &'static str {
        self.model
    }

    /// All violations, in the order they were found
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the error, returning the violations
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Returns the first violation on the given field path, if any
    pub fn violation_at(&self, field: &str) -> Option<&Violation> {
        self.violations.iter().find(|v| v.field == field)
    }

    /// Returns whether any violation concerns the given field path
    pub fn cites(&self, field: &str) -> bool {
        self.violation_at(field).is_some()
    }

    /// Returns whether any violation is of the given kind
    pub fn has_kind(&self, kind: ViolationKind) -> bool {
        self.violations.iter().any(|v| v.kind == kind)
    }

    /// Returns whether the raw input could not be parsed at all
    pub fn is_malformed(&self) -> bool {
        self.has_kind(ViolationKind::MalformedInput)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} failed validation with {} violation(s)",
            Self::CODE,
            self.model,
            self.violations.len()
        )?;
        for violation in &self.violations {
            write!(f, "; {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ViolationKind::OutOfRange.code(), "REGEN_OUT_OF_RANGE");
        assert_eq!(ViolationKind::MissingField.code(), "REGEN_MISSING_FIELD");
        assert_eq!(ViolationKind::TypeMismatch.code(), "REGEN_TYPE_MISMATCH");
        assert_eq!(ViolationKind::UnknownField.code(), "REGEN_UNKNOWN_FIELD");
        assert_eq!(ViolationKind::Constraint.code(), "REGEN_CONSTRAINT_VIOLATED");
        assert_eq!(ViolationKind::MalformedInput.code(), "REGEN_MALFORMED_INPUT");
    }

    #[test]
    fn test_violation_display() {
        let v = Violation::out_of_range("score", "between 0 and 100", &json!(101));
        let display = v.to_string();
        assert!(display.contains("score"));
        assert!(display.contains("between 0 and 100"));
        assert!(display.contains("101"));
        assert!(display.contains("REGEN_OUT_OF_RANGE"));

        let missing = Violation::missing_field("waterSaving").to_string();
        assert!(missing.contains("got nothing"));
    }

    #[test]
    fn test_violation_serializes_code() {
        let v = Violation::type_mismatch("co2Reduction", "number", &json!("ten"));
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["field"], "co2Reduction");
        assert_eq!(json["code"], "REGEN_TYPE_MISMATCH");
        assert_eq!(json["constraint"], "number");
        assert_eq!(json["value"], "ten");
    }

    #[test]
    fn test_error_lists_every_violation() {
        let err = ValidationError::new(
            "regen_score_breakdown",
            vec![
                Violation::out_of_range("score", "between 0 and 100", &json!(-3)),
                Violation::missing_field("updatedAt"),
            ],
        );

        assert!(err.cites("score"));
        assert!(err.cites("updatedAt"));
        assert!(!err.cites("components"));
        assert!(err.has_kind(ViolationKind::MissingField));
        assert!(!err.is_malformed());

        let display = err.to_string();
        assert!(display.starts_with("REGEN_VALIDATION_FAILED"));
        assert!(display.contains("2 violation(s)"));
    }
}
