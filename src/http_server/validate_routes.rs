//! Validation HTTP Routes
//!
//! Each request body passes through the shared validator. The body is read
//! as raw bytes so that malformed JSON produces the same structured error
//! shape as a constraint violation.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde::Serialize;
use uuid::Uuid;

use super::errors::ApiError;
use crate::metrics::SustainabilityMetrics;
use crate::observability::{log_event_with_fields, log_rejection, Event};
use crate::score::RegenScoreBreakdown;
use crate::validation::{BoundaryModel, ValidationError, Validator, Violation};

/// Shared state for the validation routes
#[derive(Debug, Clone, Default)]
pub struct ValidationState {
    validator: Validator,
}

impl ValidationState {
    pub fn new(validator: Validator) -> Self {
        Self { validator }
    }

    /// Validates a raw request body as model `T`.
    pub fn accept<T: BoundaryModel>(&self, body: &[u8]) -> Result<AcceptedResponse<T>, ApiError> {
        let request_id = Uuid::new_v4().to_string();

        let result = match std::str::from_utf8(body) {
            Ok(text) => self.validator.validate_str::<T>(text),
            Err(e) => Err(ValidationError::new(
                T::MODEL,
                vec![Violation::malformed_input(format!("UTF-8 body ({})", e))],
            )),
        };

        match result {
            Ok(data) => {
                log_event_with_fields(
                    Event::ValidationAccepted,
                    &[("model", T::MODEL), ("request_id", request_id.as_str())],
                );
                Ok(AcceptedResponse {
                    status: "ok",
                    request_id,
                    data,
                })
            }
            Err(error) => {
                log_rejection(&error, &request_id);
                Err(ApiError::from_validation(request_id, error))
            }
        }
    }
}

/// Success response body
#[derive(Debug, Serialize)]
pub struct AcceptedResponse<T> {
    pub status: &'static str,
    pub request_id: String,
    pub data: T,
}

/// Create validation routes
pub fn validate_routes(state: Arc<ValidationState>) -> Router {
    Router::new()
        .route("/metrics", post(validate_handler::<SustainabilityMetrics>))
        .route("/score", post(validate_handler::<RegenScoreBreakdown>))
        .with_state(state)
}

async fn validate_handler<T: BoundaryModel + Send + 'static>(
    State(state): State<Arc<ValidationState>>,
    body: Bytes,
) -> Result<Json<AcceptedResponse<T>>, ApiError> {
    state.accept::<T>(&body).map(Json)
}
