//! Validation boundary for sustainability data
//!
//! Untrusted JSON becomes a typed model only by passing through the
//! `Validator`.
//!
//! # Design Principles
//!
//! - Pure, stateless, deterministic
//! - Every violation collected and reported together
//! - Each violation tagged with a field path (`components[2].weight`)
//! - Never panics; malformed text is a violation, not a fault
//! - Optional invariants are selected by `ValidationPolicy`

mod checker;
mod errors;
mod policy;
mod validator;

pub use checker::{index_path, make_path, Bounds, Checker};
pub use errors::{ValidationError, ValidationResult, Violation, ViolationKind, ROOT_PATH};
pub use policy::{UnknownFields, ValidationPolicy, DEFAULT_WEIGHT_TOLERANCE};
pub use validator::{BoundaryModel, Validator};
