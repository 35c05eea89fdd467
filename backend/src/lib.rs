//! Unit conversion service library.
//!
//! The binary wires these modules into an Actix server; tests and the
//! `openapi-dump` tool use them directly.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
