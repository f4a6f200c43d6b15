//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::UserRegistry;
use crate::domain::ports::{UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_registry::domain::UserRegistry;
    /// use user_registry::domain::ports::NoOpPersistenceMetrics;
    /// use user_registry::inbound::http::state::HttpState;
    /// use user_registry::outbound::persistence::JsonFileUserRepository;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let repository = JsonFileUserRepository::new("does-not-exist.json").expect("path");
    /// let registry = Arc::new(
    ///     UserRegistry::load(Arc::new(repository), Arc::new(NoOpPersistenceMetrics)).await,
    /// );
    /// let state = HttpState::new(registry.clone(), registry);
    /// # let _ = state;
    /// # });
    /// ```
    pub fn new(users: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users,
            users_command,
        }
    }

    /// Serve both ports from one registry.
    pub fn from_registry(registry: Arc<UserRegistry>) -> Self {
        Self::new(registry.clone(), registry)
    }
}
