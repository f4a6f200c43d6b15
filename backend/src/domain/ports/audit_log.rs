//! Port for the append-only operation log.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised while appending to the operation log.
    pub enum AuditLogError {
        /// The log line could not be appended.
        Append { message: String } => "operation log append failed: {message}",
    }
}

/// Append human-readable operation records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Append one record. Implementations add their own timestamp.
    async fn record(&self, message: &str) -> Result<(), AuditLogError>;
}
