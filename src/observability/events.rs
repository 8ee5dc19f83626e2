//! Observable events
//!
//! Events are explicit and typed. The validation core emits none of these;
//! only the surfaces hosting it do.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration file loaded
    ConfigLoaded,
    /// HTTP server bound and serving
    ServerStart,
    /// Input passed the validator
    ValidationAccepted,
    /// Input failed the validator
    ValidationRejected,
    /// Request body was not JSON
    MalformedRequest,
    /// HTTP server failed
    ServerFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "config_loaded",
            Event::ServerStart => "server_start",
            Event::ValidationAccepted => "validation_accepted",
            Event::ValidationRejected => "validation_rejected",
            Event::MalformedRequest => "malformed_request",
            Event::ServerFailed => "server_failed",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Event::ValidationAccepted => Severity::Trace,
            Event::ConfigLoaded | Event::ServerStart => Severity::Info,
            Event::ValidationRejected | Event::MalformedRequest => Severity::Warn,
            Event::ServerFailed => Severity::Error,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
