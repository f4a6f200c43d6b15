//! Builders wiring outbound adapters into the user registry.

use std::io;
use std::sync::Arc;

use mockable::DefaultClock;
use tracing::info;

use user_registry::domain::UserRegistry;
use user_registry::domain::ports::{NoOpPersistenceMetrics, PersistenceMetrics};
use user_registry::outbound::audit::FileAuditLog;
#[cfg(feature = "metrics")]
use user_registry::outbound::metrics::PrometheusPersistenceMetrics;
use user_registry::outbound::persistence::{FileBackupStore, JsonFileUserRepository};

use super::ServerConfig;

/// Build the persistence failure recorder.
///
/// Registers the Prometheus counter with the middleware's registry when one
/// is configured; otherwise failures are only logged.
///
/// # Errors
/// Returns [`io::Error`] if Prometheus metric registration fails.
#[cfg(feature = "metrics")]
fn build_persistence_metrics(config: &ServerConfig) -> io::Result<Arc<dyn PersistenceMetrics>> {
    match &config.prometheus {
        Some(prom) => {
            let metrics = PrometheusPersistenceMetrics::new(&prom.registry).map_err(|e| {
                io::Error::other(format!("persistence metrics registration failed: {e}"))
            })?;
            Ok(Arc::new(metrics))
        }
        None => Ok(Arc::new(NoOpPersistenceMetrics)),
    }
}

/// Build the persistence failure recorder.
///
/// Without the `metrics` feature failures are only logged.
#[cfg(not(feature = "metrics"))]
fn build_persistence_metrics(_config: &ServerConfig) -> io::Result<Arc<dyn PersistenceMetrics>> {
    Ok(Arc::new(NoOpPersistenceMetrics))
}

/// Load the user collection and attach the configured hooks.
///
/// The data file is read exactly once, here. A missing or unreadable file
/// yields an empty registry rather than an error.
///
/// # Errors
/// Returns [`io::Error`] when a configured path does not name a file or
/// metric registration fails.
pub(crate) async fn build_registry(config: &ServerConfig) -> io::Result<Arc<UserRegistry>> {
    let repository = JsonFileUserRepository::new(&config.data_file)?;
    let metrics = build_persistence_metrics(config)?;
    let mut registry = UserRegistry::load(Arc::new(repository), metrics).await;

    if let Some(backup_file) = &config.backup_file {
        let backup = FileBackupStore::new(&config.data_file, backup_file)?;
        info!(path = %backup.target_path().display(), "backup before write enabled");
        registry = registry.with_backup(Arc::new(backup));
    }
    if let Some(log_file) = &config.log_file {
        let audit_log = FileAuditLog::new(log_file, Arc::new(DefaultClock))?;
        info!(path = %audit_log.path().display(), "operation log enabled");
        registry = registry.with_audit_log(Arc::new(audit_log));
    }

    Ok(Arc::new(registry))
}
