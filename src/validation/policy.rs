//! Validation policy
//!
//! The lenient policy accepts exactly what the published schema accepts.
//! The strict policy adds the invariants the domain implies but the schema
//! leaves unenforced: normalized weights, unique component keys, RFC 3339
//! timestamps and no undeclared fields.

use serde::{Deserialize, Serialize};

/// Tolerance used by the strict policy when summing component weights
pub const DEFAULT_WEIGHT_TOLERANCE: f64 = 0.01;

/// What to do with object keys the model does not declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFields {
    /// Drop them from the normalized output
    #[default]
    Strip,
    /// Report each one as a violation
    Reject,
}

/// Switchboard for the optional invariants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    #[serde(default)]
    pub unknown_fields: UnknownFields,

    /// When set, non-empty component lists must have weights summing to 1.0
    /// within this tolerance
    #[serde(default)]
    pub weight_sum_tolerance: Option<f64>,

    /// Component keys must be unique within a breakdown
    #[serde(default)]
    pub unique_keys: bool,

    /// `updatedAt` must parse as an RFC 3339 timestamp
    #[serde(default)]
    pub require_rfc3339: bool,
}

impl ValidationPolicy {
    /// Accepts exactly what the published schema accepts
    pub fn lenient() -> Self {
        Self {
            unknown_fields: UnknownFields::Strip,
            weight_sum_tolerance: None,
            unique_keys: false,
            require_rfc3339: false,
        }
    }

    /// Enforces every optional invariant
    pub fn strict() -> Self {
        Self {
            unknown_fields: UnknownFields::Reject,
            weight_sum_tolerance: Some(DEFAULT_WEIGHT_TOLERANCE),
            unique_keys: true,
            require_rfc3339: true,
        }
    }

    /// Returns whether this policy enforces anything beyond the schema
    pub fn is_strict(&self) -> bool {
        *self != Self::lenient()
    }

    /// Checks the policy settings themselves
    pub fn validate(&self) -> Result<(), String> {
        if let Some(tolerance) = self.weight_sum_tolerance {
            if !tolerance.is_finite() || tolerance <= 0.0 || tolerance >= 1.0 {
                return Err(format!(
                    "weight_sum_tolerance must be in (0, 1), got {}",
                    tolerance
                ));
            }
        }
        Ok(())
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::lenient()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        let policy = ValidationPolicy::default();
        assert_eq!(policy, ValidationPolicy::lenient());
        assert!(!policy.is_strict());
        assert!(ValidationPolicy::strict().is_strict());
    }

    #[test]
    fn test_partial_policy_deserializes_with_defaults() {
        let policy: ValidationPolicy =
            serde_json::from_str(r#"{"unique_keys": true, "unknown_fields": "reject"}"#).unwrap();
        assert!(policy.unique_keys);
        assert_eq!(policy.unknown_fields, UnknownFields::Reject);
        assert_eq!(policy.weight_sum_tolerance, None);
        assert!(!policy.require_rfc3339);
    }

    #[test]
    fn test_tolerance_bounds() {
        let mut policy = ValidationPolicy::strict();
        assert!(policy.validate().is_ok());

        policy.weight_sum_tolerance = Some(0.0);
        assert!(policy.validate().is_err());

        policy.weight_sum_tolerance = Some(1.5);
        let err = policy.validate().unwrap_err();
        assert!(err.contains("weight_sum_tolerance"));
    }
}
