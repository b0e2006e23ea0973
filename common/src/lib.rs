//! Shared leaf types for the roadstatus workspace.
//!
//! This crate contains small, domain-free building blocks used by both
//! the road-core library and the CLI binary:
//!
//! - **error**: location-tracked error metadata
//! - **http_status**: HTTP status categorization without an HTTP client dependency
//! - **redacted_key**: secret handling for the upstream API key
//!
//! Nothing in here performs I/O.

pub mod error;
pub mod http_status;
pub mod redacted_key;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedAppKey;
