//! The user registry service.
//!
//! [`UserRegistry`] owns the in-memory collection for the life of the process
//! and mirrors it to a [`UserSnapshotRepository`] after every mutation.
//!
//! ## Consistency model
//! - One async mutex guards the collection. Each read-modify-write cycle holds
//!   it until the full-collection save has finished, so mutations never
//!   interleave.
//! - A failed save keeps the in-memory change and still reports success to
//!   the caller. The registry marks itself dirty; the next successful save
//!   rewrites everything and clears the mark.
//! - Backup and operation-log hooks are optional and their failures are only
//!   logged.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

use crate::domain::ports::{
    AuditLog, BackupStore, PersistenceMetrics, PersistenceOperation, UserSnapshotRepository,
    UsersCommand, UsersQuery,
};
use crate::domain::{Error, NewUser, User, UserCollection, UserId, validate_user_data};

const USER_NOT_FOUND: &str = "user not found";
const DUPLICATE_NAME: &str = "a user with this name already exists";

struct RegistryState {
    users: UserCollection,
    dirty: bool,
}

/// Explicitly owned store of users, shared with handlers by handle.
pub struct UserRegistry {
    state: Mutex<RegistryState>,
    repository: Arc<dyn UserSnapshotRepository>,
    metrics: Arc<dyn PersistenceMetrics>,
    audit_log: Option<Arc<dyn AuditLog>>,
    backup: Option<Arc<dyn BackupStore>>,
}

impl UserRegistry {
    /// Load the collection once from `repository`.
    ///
    /// A load failure of any kind (missing file, unreadable file, malformed
    /// content) is logged and the registry starts empty.
    pub async fn load(
        repository: Arc<dyn UserSnapshotRepository>,
        metrics: Arc<dyn PersistenceMetrics>,
    ) -> Self {
        let users = match repository.load_all().await {
            Ok(users) => {
                info!(count = users.len(), "user collection loaded");
                users
            }
            Err(load_error) => {
                warn!(error = %load_error, "user collection load failed; starting empty");
                record_failure(metrics.as_ref(), PersistenceOperation::Load).await;
                Vec::new()
            }
        };

        Self {
            state: Mutex::new(RegistryState {
                users: UserCollection::new(users),
                dirty: false,
            }),
            repository,
            metrics,
            audit_log: None,
            backup: None,
        }
    }

    /// Append a line to `audit_log` after every successful mutation.
    #[must_use]
    pub fn with_audit_log(mut self, audit_log: Arc<dyn AuditLog>) -> Self {
        self.audit_log = Some(audit_log);
        self
    }

    /// Take a backup through `backup` immediately before every save.
    #[must_use]
    pub fn with_backup(mut self, backup: Arc<dyn BackupStore>) -> Self {
        self.backup = Some(backup);
        self
    }

    /// Copy of the current collection in stored order.
    pub async fn snapshot(&self) -> Vec<User> {
        self.lock().await.users.as_slice().to_vec()
    }

    /// Whether the last save attempt failed and storage is behind memory.
    pub async fn is_dirty(&self) -> bool {
        self.lock().await.dirty
    }

    /// Look up a user by identifier.
    pub async fn find(&self, id: UserId) -> Result<User, Error> {
        self.lock()
            .await
            .users
            .find(id)
            .cloned()
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }

    /// Validate, allocate an identifier for, store, and persist a new user.
    ///
    /// Checks run in a fixed order: field validation, name uniqueness,
    /// identifier allocation. Nothing is mutated unless all pass.
    pub async fn create(&self, candidate: NewUser) -> Result<User, Error> {
        let violations = validate_user_data(&candidate);
        if !violations.is_empty() {
            return Err(Error::validation(violations.iter().map(ToString::to_string)));
        }

        let mut state = self.lock().await;
        if !state.users.is_name_unique(candidate.name()) {
            return Err(Error::conflict(DUPLICATE_NAME));
        }
        let id = state
            .users
            .next_id()
            .ok_or_else(|| Error::internal("user id space exhausted"))?;

        let user = candidate.into_user(id);
        state.users.push(user.clone());
        self.persist(&mut state).await;
        self.audit(&format!("created user {id}")).await;
        drop(state);

        info!(user_id = %id, "user created");
        Ok(user)
    }

    /// Remove and persist; returns the removed user.
    pub async fn remove(&self, id: UserId) -> Result<User, Error> {
        let mut state = self.lock().await;
        let removed = state
            .users
            .remove(id)
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))?;
        self.persist(&mut state).await;
        self.audit(&format!("deleted user {id}")).await;
        drop(state);

        info!(user_id = %id, "user deleted");
        Ok(removed)
    }

    async fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().await
    }

    async fn persist(&self, state: &mut RegistryState) {
        if let Some(backup) = &self.backup {
            if let Err(backup_error) = backup.create_backup().await {
                warn!(error = %backup_error, "backup before save failed");
                record_failure(self.metrics.as_ref(), PersistenceOperation::Backup).await;
            }
        }

        match self.repository.save_all(state.users.as_slice()).await {
            Ok(()) => {
                if state.dirty {
                    info!(count = state.users.len(), "user store caught up with memory");
                }
                state.dirty = false;
            }
            Err(save_error) => {
                state.dirty = true;
                error!(
                    error = %save_error,
                    count = state.users.len(),
                    "user store save failed; keeping in-memory state"
                );
                record_failure(self.metrics.as_ref(), PersistenceOperation::Save).await;
            }
        }
    }

    async fn audit(&self, message: &str) {
        let Some(audit_log) = &self.audit_log else {
            return;
        };
        match audit_log.record(message).await {
            Ok(()) => debug!(entry = message, "operation logged"),
            Err(log_error) => {
                warn!(error = %log_error, entry = message, "operation log append failed");
                record_failure(self.metrics.as_ref(), PersistenceOperation::AuditLog).await;
            }
        }
    }
}

async fn record_failure(metrics: &dyn PersistenceMetrics, operation: PersistenceOperation) {
    if let Err(metrics_error) = metrics.record_failure(operation).await {
        warn!(
            error = %metrics_error,
            operation = operation.as_str(),
            "failed to record persistence failure metric"
        );
    }
}

#[async_trait]
impl UsersQuery for UserRegistry {
    async fn find_user(&self, id: UserId) -> Result<User, Error> {
        self.find(id).await
    }
}

#[async_trait]
impl UsersCommand for UserRegistry {
    async fn create_user(&self, candidate: NewUser) -> Result<User, Error> {
        self.create(candidate).await
    }

    async fn delete_user(&self, id: UserId) -> Result<User, Error> {
        self.remove(id).await
    }
}
