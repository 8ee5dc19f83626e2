//! Violation collector used by model validators
//!
//! A `Checker` walks an untrusted JSON value field by field. Each accessor
//! either yields the typed value or records a violation and yields `None`,
//! so a model validator keeps going after the first problem and the caller
//! sees every violation at once.

use serde_json::{Map, Value};

use super::errors::{ValidationError, ValidationResult, Violation, ROOT_PATH};
use super::policy::{UnknownFields, ValidationPolicy};

/// Closed numeric interval with an optional upper bound
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: f64,
    max: Option<f64>,
}

impl Bounds {
    /// [0, +inf)
    pub const NON_NEGATIVE: Bounds = Bounds { min: 0.0, max: None };
    /// [0, 1]
    pub const FRACTION: Bounds = Bounds { min: 0.0, max: Some(1.0) };
    /// [0, 100]
    pub const PERCENT: Bounds = Bounds { min: 0.0, max: Some(100.0) };

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }

    /// Human-readable constraint for error messages
    pub fn describe(&self) -> String {
        match self.max {
            Some(max) => format!("number between {} and {}", self.min, max),
            None => format!("number >= {}", self.min),
        }
    }
}

/// Collects violations while a model is read out of untrusted JSON.
pub struct Checker<'p> {
    policy: &'p ValidationPolicy,
    violations: Vec<Violation>,
}

impl<'p> Checker<'p> {
    pub fn new(policy: &'p ValidationPolicy) -> Self {
        Self {
            policy,
            violations: Vec::new(),
        }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        self.policy
    }

    /// Records a violation found by model-specific rules
    pub fn report(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Returns whether nothing has been reported so far
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Requires `value` to be an object. `path` is empty for the document root.
    pub fn object<'v>(&mut self, value: &'v Value, path: &str) -> Option<&'v Map<String, Value>> {
        match value.as_object() {
            Some(obj) => Some(obj),
            None => {
                let field = if path.is_empty() { ROOT_PATH } else { path };
                self.report(Violation::type_mismatch(field, "object", value));
                None
            }
        }
    }

    /// Applies the unknown-field policy to the keys of `obj`.
    pub fn declared_fields(&mut self, obj: &Map<String, Value>, declared: &[&str], prefix: &str) {
        if self.policy.unknown_fields == UnknownFields::Strip {
            return;
        }
        for (key, value) in obj {
            if !declared.contains(&key.as_str()) {
                self.report(Violation::unknown_field(make_path(prefix, key), value));
            }
        }
    }

    /// Reads a required number within `bounds`.
    pub fn number(
        &mut self,
        obj: &Map<String, Value>,
        name: &str,
        prefix: &str,
        bounds: Bounds,
    ) -> Option<f64> {
        let path = make_path(prefix, name);
        match obj.get(name) {
            Some(value) => self.bounded(value, &path, bounds),
            None => {
                self.report(Violation::missing_field(path));
                None
            }
        }
    }

    /// Reads an optional number within `bounds`.
    ///
    /// Absence yields `Some(None)`. An explicit `null` is a type mismatch.
    pub fn optional_number(
        &mut self,
        obj: &Map<String, Value>,
        name: &str,
        prefix: &str,
        bounds: Bounds,
    ) -> Option<Option<f64>> {
        match obj.get(name) {
            Some(value) => self
                .bounded(value, &make_path(prefix, name), bounds)
                .map(Some),
            None => Some(None),
        }
    }

    /// Reads a required string, optionally requiring it to be non-empty.
    pub fn text(
        &mut self,
        obj: &Map<String, Value>,
        name: &str,
        prefix: &str,
        non_empty: bool,
    ) -> Option<String> {
        let path = make_path(prefix, name);
        match obj.get(name) {
            Some(Value::String(s)) if non_empty && s.is_empty() => {
                self.report(Violation::constraint(path, "non-empty string", Value::from(s.as_str())));
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.report(Violation::type_mismatch(path, "string", other));
                None
            }
            None => {
                self.report(Violation::missing_field(path));
                None
            }
        }
    }

    /// Reads a required array.
    pub fn array<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        name: &str,
        prefix: &str,
    ) -> Option<&'v Vec<Value>> {
        let path = make_path(prefix, name);
        match obj.get(name) {
            Some(Value::Array(items)) => Some(items),
            Some(other) => {
                self.report(Violation::type_mismatch(path, "array", other));
                None
            }
            None => {
                self.report(Violation::missing_field(path));
                None
            }
        }
    }

    /// Turns the collected violations into the final result.
    ///
    /// `parsed` is only returned when no violation was recorded anywhere.
    pub fn finish<T>(self, model: &'static str, parsed: Option<T>) -> ValidationResult<T> {
        match parsed {
            Some(value) if self.violations.is_empty() => Ok(value),
            _ => Err(ValidationError::new(model, self.violations)),
        }
    }

    fn bounded(&mut self, value: &Value, path: &str, bounds: Bounds) -> Option<f64> {
        let Some(number) = value.as_f64() else {
            self.report(Violation::type_mismatch(path, "number", value));
            return None;
        };
        if !bounds.contains(number) {
            self.report(Violation::out_of_range(path, bounds.describe(), value));
            return None;
        }
        Some(number)
    }
}

/// Creates a field path from prefix and field name.
pub fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

/// Creates an element path for position `index` of the array at `prefix`.
pub fn index_path(prefix: &str, index: usize) -> String {
    format!("{}[{}]", prefix, index)
}
