//! Breakdown and component types

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One weighted sub-score of a breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    /// Identifier, non-empty
    pub key: String,
    /// Display name, non-empty
    pub label: String,
    /// Contribution fraction in [0, 1]
    pub weight: f64,
    /// Raw sub-score in [0, 100]
    pub value: f64,
}

impl ScoreComponent {
    pub fn new(key: impl Into<String>, label: impl Into<String>, weight: f64, value: f64) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            weight,
            value,
        }
    }
}

/// Computed REGEN Score with its weighted decomposition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenScoreBreakdown {
    /// Overall rating in [0, 100]
    pub score: f64,
    /// Sub-scores, in the order they were supplied
    pub components: Vec<ScoreComponent>,
    /// When the breakdown was computed (ISO-8601 by convention)
    pub updated_at: String,
}

impl RegenScoreBreakdown {
    pub fn new(score: f64, components: Vec<ScoreComponent>, updated_at: impl Into<String>) -> Self {
        Self {
            score,
            components,
            updated_at: updated_at.into(),
        }
    }

    /// Sum of all component weights
    pub fn weight_total(&self) -> f64 {
        self.components.iter().map(|c| c.weight).sum()
    }

    /// Returns the first component with the given key
    pub fn component(&self, key: &str) -> Option<&ScoreComponent> {
        self.components.iter().find(|c| c.key == key)
    }

    /// Parses `updatedAt` as an RFC 3339 timestamp
    pub fn updated_at_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.updated_at).ok()
    }

    /// Returns whether this breakdown replaces `other`.
    ///
    /// False unless both timestamps parse and this one is strictly later.
    pub fn supersedes(&self, other: &RegenScoreBreakdown) -> bool {
        match (self.updated_at_timestamp(), other.updated_at_timestamp()) {
            (Some(mine), Some(theirs)) => mine > theirs,
            _ => false,
        }
    }
}
