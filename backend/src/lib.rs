//! User registry service library.
//!
//! A small CRUD service over one collection of users kept in memory and
//! mirrored to a JSON file. Layout follows ports and adapters: [`domain`]
//! holds the model and the registry, [`inbound`] the HTTP surface, and
//! [`outbound`] the file adapters.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
