//! fileguard - Schema-driven CSV validation gate
//!
//! Judges whether an uploaded CSV file conforms to a declarative schema
//! and reports every violation by row and column. Data is never stored
//! or transformed.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod table;
pub mod validator;
