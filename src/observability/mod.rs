//! Observability for the surfaces hosting the validator
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No async or background threads
//! 3. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use regen_score::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::ServerStart, &[("addr", "0.0.0.0:54321")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

use std::io::{self, Write};

use crate::validation::ValidationError;

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

/// Log a rejected input without echoing the offending values.
///
/// Rejections are WARN, so the line goes to stderr.
pub fn log_rejection(err: &ValidationError, request_id: &str) {
    log_rejection_to(err, request_id, &mut io::stderr());
}

/// Writes the rejection line for `err` to `writer`
pub fn log_rejection_to<W: Write>(err: &ValidationError, request_id: &str, writer: &mut W) {
    let event = if err.is_malformed() {
        Event::MalformedRequest
    } else {
        Event::ValidationRejected
    };
    let count = err.violations().len().to_string();
    let first = err
        .violations()
        .first()
        .map(|v| v.field.as_str())
        .unwrap_or("");
    Logger::log_to_writer(
        event.severity(),
        event.as_str(),
        &[
            ("first_field", first),
            ("model", err.model()),
            ("request_id", request_id),
            ("violations", count.as_str()),
        ],
        writer,
    );
}
