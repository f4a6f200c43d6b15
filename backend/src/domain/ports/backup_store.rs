//! Port for taking a copy of the persisted collection.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised while taking a backup.
    pub enum BackupError {
        /// The copy could not be made.
        Copy { message: String } => "user store backup failed: {message}",
    }
}

/// Snapshot the current persisted collection somewhere safe.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackupStore: Send + Sync {
    /// Copy the persisted collection over the previous backup.
    async fn create_backup(&self) -> Result<(), BackupError>;
}
