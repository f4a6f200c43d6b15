//! Driving port for user reads.
//!
//! HTTP handlers depend on this trait rather than on the registry type so
//! they can be exercised against any implementation.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Read-side use cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return the user with `id`, or an [`crate::domain::ErrorCode::NotFound`]
    /// error.
    async fn find_user(&self, id: UserId) -> Result<User, Error>;
}
