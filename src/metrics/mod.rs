//! Sustainability metric value types
//!
//! Raw environmental impact measurements underlying the REGEN Score.
//! Every present field is non-negative; a missing `wasteReduction` is valid
//! and distinct from zero.

mod types;
mod validate;

pub use types::{MetricField, SustainabilityMetrics};
