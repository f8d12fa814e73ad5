//! # fileguard HTTP Server Module
//!
//! Accepts CSV uploads with a schema and returns the verdict as JSON.
//!
//! # Endpoints
//!
//! - `POST /api/validate` - Validate a multipart upload (`file`, `schema`)
//! - `/health` - Health check
//! - `/observability/*` - Health and counters

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod validate_routes;

pub use config::HttpServerConfig;
pub use errors::{ErrorResponse, UploadError};
pub use server::HttpServer;
