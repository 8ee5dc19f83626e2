//! Boundary gate for untrusted input
//!
//! Validation semantics:
//! - Every required field is present and of the declared JSON type
//! - Numeric fields lie within their declared bounds
//! - Text fields that must be non-empty are non-empty
//! - Optional invariants apply according to the `ValidationPolicy`
//!
//! Forbidden behaviors:
//! - Stopping at the first violation
//! - Implicit coercion (strings are never parsed as numbers)
//! - Treating `null` as absent
//! - Panicking on any input

use serde::Serialize;
use serde_json::Value;

use super::checker::Checker;
use super::errors::{ValidationError, ValidationResult, Violation};
use super::policy::ValidationPolicy;
use crate::metrics::SustainabilityMetrics;
use crate::score::RegenScoreBreakdown;

/// A typed model that may only be built from untrusted JSON through the
/// validator.
pub trait BoundaryModel: Sized + Serialize {
    /// Model name reported in errors and logs
    const MODEL: &'static str;

    /// Reads the model out of `value`.
    ///
    /// Returns `None` if and only if at least one violation was reported on
    /// `checker`.
    fn check(value: &Value, checker: &mut Checker<'_>) -> Option<Self>;
}

/// Stateless validator. Cheap to clone, safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    policy: ValidationPolicy,
}

impl Validator {
    /// Creates a validator enforcing the given policy.
    ///
    /// # Errors
    ///
    /// Returns the policy's own complaint when it is unusable, e.g. a weight
    /// tolerance that is NaN or not inside (0, 1).
    pub fn new(policy: ValidationPolicy) -> Result<Self, String> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Creates a validator enforcing every optional invariant.
    pub fn strict() -> Self {
        Self {
            policy: ValidationPolicy::strict(),
        }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Validates an arbitrary JSON value as model `T`.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` listing every violation found.
    pub fn validate<T: BoundaryModel>(&self, value: &Value) -> ValidationResult<T> {
        let mut checker = Checker::new(&self.policy);
        let parsed = T::check(value, &mut checker);
        checker.finish(T::MODEL, parsed)
    }

    /// Parses raw text and validates it as model `T`.
    ///
    /// Text that is not JSON yields a single `MalformedInput` violation.
    pub fn validate_str<T: BoundaryModel>(&self, raw: &str) -> ValidationResult<T> {
        let value: Value = serde_json::from_str(raw).map_err(|e| {
            ValidationError::new(
                T::MODEL,
                vec![Violation::malformed_input(format!("valid JSON ({})", e))],
            )
        })?;
        self.validate(&value)
    }

    /// Passes an already typed value through the gate again.
    ///
    /// Any value previously returned by this validator passes and comes back
    /// equal.
    pub fn revalidate<T: BoundaryModel>(&self, value: &T) -> ValidationResult<T> {
        let json = serde_json::to_value(value).map_err(|e| {
            ValidationError::new(
                T::MODEL,
                vec![Violation::malformed_input(format!("serializable value ({})", e))],
            )
        })?;
        self.validate(&json)
    }

    /// Validates sustainability metrics.
    pub fn validate_metrics(&self, value: &Value) -> ValidationResult<SustainabilityMetrics> {
        self.validate(value)
    }

    /// Validates a REGEN Score breakdown.
    pub fn validate_score(&self, value: &Value) -> ValidationResult<RegenScoreBreakdown> {
        self.validate(value)
    }
}
