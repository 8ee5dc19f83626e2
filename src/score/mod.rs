//! REGEN Score breakdown model
//!
//! A breakdown is a 0-100 composite rating plus the ordered, weighted
//! sub-scores it was computed from. Breakdowns are never mutated in place:
//! a newer breakdown with a later `updatedAt` supersedes an older one.

mod types;
mod validate;

pub use types::{RegenScoreBreakdown, ScoreComponent};
