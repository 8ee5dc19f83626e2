//! Validation Invariant Tests
//!
//! Tests for the validation boundary:
//! - Valid input yields an equal, normalized typed value
//! - Out-of-range numbers are reported on the exact field path
//! - Every violation is reported, not just the first
//! - Revalidation of a typed value is idempotent
//! - No input causes a panic

use regen_score::metrics::SustainabilityMetrics;
use regen_score::score::{RegenScoreBreakdown, ScoreComponent};
use regen_score::validation::{ValidationPolicy, Validator, ViolationKind};
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn breakdown_with(score: Value, components: Value) -> Value {
    json!({
        "score": score,
        "components": components,
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

fn component(weight: Value, value: Value) -> Value {
    json!({ "key": "co2", "label": "CO2", "weight": weight, "value": value })
}

// =============================================================================
// Round Trip Tests
// =============================================================================

/// Valid metrics come back structurally equal to the input.
#[test]
fn test_valid_metrics_equal_input() {
    let validator = Validator::default();
    let doc = json!({
        "co2Reduction": 12.5,
        "waterSaving": 300.0,
        "energyEfficiency": 0.75,
        "wasteReduction": 4.0
    });

    let metrics = validator.validate_metrics(&doc).unwrap();
    assert_eq!(serde_json::to_value(&metrics).unwrap(), doc);
}

/// Valid breakdowns come back structurally equal, component order preserved.
#[test]
fn test_valid_breakdown_equal_input() {
    let validator = Validator::default();
    let doc = json!({
        "score": 61.0,
        "components": [
            { "key": "water", "label": "Water", "weight": 0.25, "value": 40.0 },
            { "key": "co2", "label": "CO2", "weight": 0.75, "value": 68.0 }
        ],
        "updatedAt": "2024-05-06T07:08:09Z"
    });

    let breakdown = validator.validate_score(&doc).unwrap();
    assert_eq!(breakdown.components[0].key, "water");
    assert_eq!(serde_json::to_value(&breakdown).unwrap(), doc);
}

/// Revalidating typed values always succeeds and yields an equal value.
#[test]
fn test_revalidation_idempotent() {
    for validator in [Validator::default(), Validator::strict()] {
        let metrics = SustainabilityMetrics::new(0.0, 1.0, 2.0);
        assert_eq!(validator.revalidate(&metrics).unwrap(), metrics);

        let breakdown = RegenScoreBreakdown::new(
            100.0,
            vec![ScoreComponent::new("co2", "CO2", 1.0, 100.0)],
            "2024-01-01T00:00:00Z",
        );
        assert_eq!(validator.revalidate(&breakdown).unwrap(), breakdown);
    }
}

/// Typed values built in code still have to satisfy the bounds.
#[test]
fn test_revalidation_catches_code_built_values() {
    let validator = Validator::default();
    let metrics = SustainabilityMetrics::new(-3.0, 1.0, 2.0);
    let err = validator.revalidate(&metrics).unwrap_err();
    assert!(err.cites("co2Reduction"));

    let nan = SustainabilityMetrics::new(f64::NAN, 1.0, 2.0);
    let err = validator.revalidate(&nan).unwrap_err();
    assert_eq!(err.violation_at("co2Reduction").unwrap().kind, ViolationKind::TypeMismatch);
}

// =============================================================================
// Range Tests
// =============================================================================

/// Scores outside [0, 100] are reported on `score`.
#[test]
fn test_score_bounds() {
    let validator = Validator::default();

    for bad in [-0.01, -50.0, 100.001, 1e9] {
        let err = validator.validate_score(&breakdown_with(json!(bad), json!([]))).unwrap_err();
        assert_eq!(err.violation_at("score").unwrap().kind, ViolationKind::OutOfRange);
    }

    for good in [0.0, 50.0, 100.0] {
        assert!(validator.validate_score(&breakdown_with(json!(good), json!([]))).is_ok());
    }
}

/// Component weights outside [0, 1] and values outside [0, 100] are reported
/// on the component's own path.
#[test]
fn test_component_bounds() {
    let validator = Validator::default();

    let err = validator
        .validate_score(&breakdown_with(
            json!(50),
            json!([component(json!(0.5), json!(50)), component(json!(-0.2), json!(50))]),
        ))
        .unwrap_err();
    assert!(err.cites("components[1].weight"));
    assert!(!err.cites("components[0].weight"));

    let err = validator
        .validate_score(&breakdown_with(json!(50), json!([component(json!(0.5), json!(100.5))])))
        .unwrap_err();
    assert!(err.cites("components[0].value"));
    assert!(!err.cites("components[0].weight"));
}

/// Each negative required metric is reported by name.
#[test]
fn test_negative_metrics_named() {
    let validator = Validator::default();
    for field in ["co2Reduction", "waterSaving", "energyEfficiency"] {
        let mut doc = json!({ "co2Reduction": 1, "waterSaving": 1, "energyEfficiency": 1 });
        doc[field] = json!(-1);

        let err = validator.validate_metrics(&doc).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert!(err.cites(field));
    }
}

// =============================================================================
// Aggregation Tests
// =============================================================================

/// One round trip reports every problem.
#[test]
fn test_all_violations_reported() {
    let validator = Validator::default();
    let err = validator
        .validate_score(&json!({
            "score": "high",
            "components": [
                { "key": "co2", "label": "", "weight": 3, "value": -1 }
            ]
        }))
        .unwrap_err();

    assert_eq!(err.violation_at("score").unwrap().kind, ViolationKind::TypeMismatch);
    assert_eq!(err.violation_at("components[0].label").unwrap().kind, ViolationKind::Constraint);
    assert_eq!(err.violation_at("components[0].weight").unwrap().kind, ViolationKind::OutOfRange);
    assert_eq!(err.violation_at("components[0].value").unwrap().kind, ViolationKind::OutOfRange);
    assert_eq!(err.violation_at("updatedAt").unwrap().kind, ViolationKind::MissingField);
    assert_eq!(err.violations().len(), 5);
}

/// Same input fails the same way every time.
#[test]
fn test_validation_is_deterministic() {
    let validator = Validator::strict();
    let doc = json!({ "co2Reduction": -1, "waterSaving": "x", "other": 1 });

    let first = validator.validate_metrics(&doc).unwrap_err();
    for _ in 0..100 {
        assert_eq!(validator.validate_metrics(&doc).unwrap_err(), first);
    }
}

// =============================================================================
// Hostile Input Tests
// =============================================================================

/// Arbitrary JSON shapes produce structured errors, never panics.
#[test]
fn test_any_json_yields_structured_error() {
    let validator = Validator::new(ValidationPolicy::strict()).unwrap();
    let inputs = [
        json!(null),
        json!(true),
        json!(42),
        json!("score"),
        json!([]),
        json!({ "components": null }),
        json!({ "components": [null, [], "x", { "weight": {} }] }),
        json!({ "score": [], "updatedAt": {} }),
    ];

    for input in &inputs {
        assert!(!validator.validate_score(input).unwrap_err().violations().is_empty());
        assert!(!validator.validate_metrics(input).unwrap_err().violations().is_empty());
    }
}

/// Malformed text is reported as a single malformed-input violation.
#[test]
fn test_malformed_text() {
    let validator = Validator::default();
    for raw in ["", "{", "{\"score\": 1,}", "nope"] {
        let err = validator.validate_str::<RegenScoreBreakdown>(raw).unwrap_err();
        assert!(err.is_malformed(), "input {:?}", raw);
        assert_eq!(err.violations().len(), 1);
    }
}

/// Large integers are accepted where a real number is required.
#[test]
fn test_integers_accepted_as_numbers() {
    let validator = Validator::default();
    let metrics = validator
        .validate_metrics(&json!({
            "co2Reduction": u64::MAX,
            "waterSaving": 0,
            "energyEfficiency": 7
        }))
        .unwrap();
    assert!(metrics.co2_reduction > 1e19);
}
