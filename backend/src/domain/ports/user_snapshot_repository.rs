//! Port for whole-collection user persistence.
//!
//! The registry never updates storage incrementally: it loads every user
//! once at startup and hands the complete collection back after each
//! mutation.

use async_trait::async_trait;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user snapshot adapters.
    pub enum UserPersistenceError {
        /// The backing store could not be read.
        Read { message: String } => "user store read failed: {message}",
        /// The stored content is not a valid user collection.
        Parse { message: String } => "user store content is invalid: {message}",
        /// The collection could not be written.
        Write { message: String } => "user store write failed: {message}",
    }
}

/// Load and replace the complete user collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSnapshotRepository: Send + Sync {
    /// Read every stored user in stored order.
    async fn load_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Replace the stored collection with `users`.
    async fn save_all(&self, users: &[User]) -> Result<(), UserPersistenceError>;
}
