//! Boundary rules for REGEN Score breakdowns

use std::collections::HashSet;

use chrono::DateTime;
use serde_json::Value;

use super::types::{RegenScoreBreakdown, ScoreComponent};
use crate::validation::{index_path, make_path, BoundaryModel, Bounds, Checker, Violation};

const BREAKDOWN_FIELDS: [&str; 3] = ["score", "components", "updatedAt"];
const COMPONENT_FIELDS: [&str; 4] = ["key", "label", "weight", "value"];

impl BoundaryModel for RegenScoreBreakdown {
    const MODEL: &'static str = "regen_score_breakdown";

    fn check(value: &Value, checker: &mut Checker<'_>) -> Option<Self> {
        let obj = checker.object(value, "")?;
        checker.declared_fields(obj, &BREAKDOWN_FIELDS, "");

        let score = checker.number(obj, "score", "", Bounds::PERCENT);
        let components = checker
            .array(obj, "components", "")
            .and_then(|items| check_components(items, checker));
        let updated_at = checker.text(obj, "updatedAt", "", false);

        if checker.policy().require_rfc3339 {
            if let Some(ts) = &updated_at {
                if DateTime::parse_from_rfc3339(ts).is_err() {
                    checker.report(Violation::constraint(
                        "updatedAt",
                        "RFC 3339 timestamp",
                        Value::from(ts.as_str()),
                    ));
                }
            }
        }

        Some(RegenScoreBreakdown {
            score: score?,
            components: components?,
            updated_at: updated_at?,
        })
    }
}

/// Checks every element, then the list-wide rules the policy asks for.
fn check_components(items: &[Value], checker: &mut Checker<'_>) -> Option<Vec<ScoreComponent>> {
    let mut components = Vec::with_capacity(items.len());
    let mut complete = true;

    for (i, item) in items.iter().enumerate() {
        match check_component(item, &index_path("components", i), checker) {
            Some(component) => components.push(component),
            None => complete = false,
        }
    }

    if checker.policy().unique_keys {
        let mut seen = HashSet::new();
        for (i, item) in items.iter().enumerate() {
            // Empty keys are already reported by the per-component check.
            let Some(key) = item.get("key").and_then(Value::as_str) else {
                continue;
            };
            if key.is_empty() {
                continue;
            }
            if !seen.insert(key) {
                checker.report(Violation::constraint(
                    make_path(&index_path("components", i), "key"),
                    "key unique within components",
                    Value::from(key),
                ));
            }
        }
    }

    // The sum is only meaningful once every weight is known to be in range.
    let weight_sum_tolerance = checker.policy().weight_sum_tolerance;
    if let Some(tolerance) = weight_sum_tolerance {
        if complete && !components.is_empty() {
            let total: f64 = components.iter().map(|c| c.weight).sum();
            if (total - 1.0).abs() > tolerance {
                checker.report(Violation::constraint(
                    "components",
                    format!("weights summing to 1 (tolerance {})", tolerance),
                    Value::from(total),
                ));
            }
        }
    }

    if complete {
        Some(components)
    } else {
        None
    }
}

fn check_component(item: &Value, path: &str, checker: &mut Checker<'_>) -> Option<ScoreComponent> {
    let obj = checker.object(item, path)?;
    checker.declared_fields(obj, &COMPONENT_FIELDS, path);

    let key = checker.text(obj, "key", path, true);
    let label = checker.text(obj, "label", path, true);
    let weight = checker.number(obj, "weight", path, Bounds::FRACTION);
    let value = checker.number(obj, "value", path, Bounds::PERCENT);

    Some(ScoreComponent {
        key: key?,
        label: label?,
        weight: weight?,
        value: value?,
    })
}
