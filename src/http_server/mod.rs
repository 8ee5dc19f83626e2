//! # HTTP Boundary
//!
//! Exposes the validator to request handlers over HTTP.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /validate/metrics` - Validate sustainability metrics
//! - `POST /validate/score` - Validate a REGEN Score breakdown
//!
//! Validation failures map deterministically to 422, bodies that are not
//! JSON to 400.

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod server;
pub mod validate_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ErrorResponse};
pub use server::HttpServer;
pub use validate_routes::{validate_routes, AcceptedResponse, ValidationState};
