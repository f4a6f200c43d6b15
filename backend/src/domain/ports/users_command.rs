//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserId};

/// Write-side use cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Validate, store, and return a new user with an allocated identifier.
    ///
    /// Fails with `ValidationFailed` listing every violation, or `Conflict`
    /// when the name is taken. Persistence failures after the in-memory
    /// insert do not fail the call.
    async fn create_user(&self, candidate: NewUser) -> Result<User, Error>;

    /// Remove and return the user with `id`, or fail with `NotFound`.
    async fn delete_user(&self, id: UserId) -> Result<User, Error>;
}
