//! Metric value object

use serde::{Deserialize, Serialize};

/// Environmental impact measurements for a product or vendor.
///
/// Only the validator hands these out from untrusted input; values built in
/// code are revalidated whenever they cross a boundary again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityMetrics {
    /// Kilograms of CO2-equivalent avoided
    pub co2_reduction: f64,
    /// Liters of water saved
    pub water_saving: f64,
    /// kWh saved, or an efficiency index
    pub energy_efficiency: f64,
    /// Kilograms of waste diverted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waste_reduction: Option<f64>,
}

impl SustainabilityMetrics {
    pub fn new(co2_reduction: f64, water_saving: f64, energy_efficiency: f64) -> Self {
        Self {
            co2_reduction,
            water_saving,
            energy_efficiency,
            waste_reduction: None,
        }
    }

    pub fn with_waste_reduction(mut self, kilograms: f64) -> Self {
        self.waste_reduction = Some(kilograms);
        self
    }

    /// Returns the value of a field, `None` for an absent optional field
    pub fn get(&self, field: MetricField) -> Option<f64> {
        match field {
            MetricField::Co2Reduction => Some(self.co2_reduction),
            MetricField::WaterSaving => Some(self.water_saving),
            MetricField::EnergyEfficiency => Some(self.energy_efficiency),
            MetricField::WasteReduction => self.waste_reduction,
        }
    }
}

/// Fields of `SustainabilityMetrics`, with their wire names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricField {
    Co2Reduction,
    WaterSaving,
    EnergyEfficiency,
    WasteReduction,
}

impl MetricField {
    pub const ALL: [MetricField; 4] = [
        MetricField::Co2Reduction,
        MetricField::WaterSaving,
        MetricField::EnergyEfficiency,
        MetricField::WasteReduction,
    ];

    /// JSON field name
    pub fn wire_name(&self) -> &'static str {
        match self {
            MetricField::Co2Reduction => "co2Reduction",
            MetricField::WaterSaving => "waterSaving",
            MetricField::EnergyEfficiency => "energyEfficiency",
            MetricField::WasteReduction => "wasteReduction",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, MetricField::WasteReduction)
    }
}
