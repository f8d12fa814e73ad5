//! Observable events for fileguard
//!
//! Every structured log line carries one of these as its `event` field.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded
    ConfigLoaded,
    /// HTTP listener bound, ready to serve
    Serving,
    /// Server stopped
    ShutdownComplete,

    // Validation requests
    /// Upload received
    ValidationReceived,
    /// All rows evaluated; verdict produced
    ValidationComplete,
    /// Request stopped by a request-level error
    ValidationRejected,
    /// Multipart request could not be read
    UploadRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "FILEGUARD_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::ValidationReceived => "VALIDATION_RECEIVED",
            Event::ValidationComplete => "VALIDATION_COMPLETE",
            Event::ValidationRejected => "VALIDATION_REJECTED",
            Event::UploadRejected => "UPLOAD_REJECTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
