//! Boundary rules for sustainability metrics

use serde_json::Value;

use super::types::{MetricField, SustainabilityMetrics};
use crate::validation::{BoundaryModel, Bounds, Checker};

impl BoundaryModel for SustainabilityMetrics {
    const MODEL: &'static str = "sustainability_metrics";

    fn check(value: &Value, checker: &mut Checker<'_>) -> Option<Self> {
        let obj = checker.object(value, "")?;

        let declared = MetricField::ALL.map(|f| f.wire_name());
        checker.declared_fields(obj, &declared, "");

        let co2 = checker.number(obj, MetricField::Co2Reduction.wire_name(), "", Bounds::NON_NEGATIVE);
        let water = checker.number(obj, MetricField::WaterSaving.wire_name(), "", Bounds::NON_NEGATIVE);
        let energy = checker.number(
            obj,
            MetricField::EnergyEfficiency.wire_name(),
            "",
            Bounds::NON_NEGATIVE,
        );
        let waste = checker.optional_number(
            obj,
            MetricField::WasteReduction.wire_name(),
            "",
            Bounds::NON_NEGATIVE,
        );

        Some(SustainabilityMetrics {
            co2_reduction: co2?,
            water_saving: water?,
            energy_efficiency: energy?,
            waste_reduction: waste?,
        })
    }
}
