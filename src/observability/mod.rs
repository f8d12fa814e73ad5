//! Observability subsystem for fileguard
//!
//! This module provides:
//! - Structured logging through `tracing`
//! - Typed event names for log lines
//! - Lock-free request counters
//!
//! # Usage
//!
//! ```ignore
//! use fileguard::observability::{init_logging, Event, LoggingConfig, MetricsRegistry};
//!
//! init_logging(&LoggingConfig::default())?;
//! tracing::info!(event = %Event::Serving, addr = "0.0.0.0:8080");
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_requests();
//! ```

mod events;
mod logging;
mod metrics;

pub use events::Event;
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

use thiserror::Error;

/// Observability errors
///
/// Never fatal to a validation request; only startup can fail on these.
#[derive(Debug, Clone, Error)]
pub enum ObservabilityError {
    /// Level directive could not be parsed
    #[error("Invalid log level {0}")]
    InvalidLevel(String),

    /// Global subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    InitFailed(String),
}

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;
