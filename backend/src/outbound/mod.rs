//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: JSON data file and backup copy
//! - **audit**: plaintext operation log
//! - **metrics**: Prometheus exporters (feature-gated)
//!
//! Adapters translate between domain types and files. They contain no
//! business logic.

pub mod audit;
pub(crate) mod file_location;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod persistence;
