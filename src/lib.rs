//! regen-score - Validation boundary for sustainability metrics and REGEN Scores
//!
//! Untrusted JSON crosses into the marketplace only through
//! [`validation::Validator`], which yields either a typed
//! [`metrics::SustainabilityMetrics`] / [`score::RegenScoreBreakdown`] or a
//! [`validation::ValidationError`] listing every violated constraint.

pub mod cli;
pub mod http_server;
pub mod metrics;
pub mod observability;
pub mod score;
pub mod validation;
