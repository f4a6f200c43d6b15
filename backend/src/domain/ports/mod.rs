//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`UsersQuery`], [`UsersCommand`]) are what inbound adapters
//! call. Driven ports (snapshot repository, operation log, backup, metrics)
//! are what the registry calls out to.

mod macros;
pub(crate) use macros::define_port_error;

mod audit_log;
mod backup_store;
mod persistence_metrics;
mod user_snapshot_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use audit_log::MockAuditLog;
pub use audit_log::{AuditLog, AuditLogError};
#[cfg(test)]
pub use backup_store::MockBackupStore;
pub use backup_store::{BackupError, BackupStore};
pub use persistence_metrics::{
    NoOpPersistenceMetrics, PersistenceMetrics, PersistenceMetricsError, PersistenceOperation,
};
#[cfg(test)]
pub use user_snapshot_repository::MockUserSnapshotRepository;
pub use user_snapshot_repository::{UserPersistenceError, UserSnapshotRepository};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
