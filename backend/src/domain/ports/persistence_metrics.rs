//! Port for counting swallowed persistence failures.
//!
//! Save, backup and log failures never reach API callers, so this port is
//! how operators notice them. Implementations may export to Prometheus or
//! discard everything.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors exposed when recording persistence metrics.
    pub enum PersistenceMetricsError {
        /// Metric exporter rejected the write.
        Export { message: String } => "persistence metrics exporter failed: {message}",
    }
}

/// Side operation whose failure was swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersistenceOperation {
    /// Loading the collection at startup.
    Load,
    /// Rewriting the collection after a mutation.
    Save,
    /// Copying the data file before a save.
    Backup,
    /// Appending to the operation log.
    AuditLog,
}

impl PersistenceOperation {
    /// Label value used by metrics exporters.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Save => "save",
            Self::Backup => "backup",
            Self::AuditLog => "audit_log",
        }
    }
}

/// Record failures of persistence side operations.
#[async_trait]
pub trait PersistenceMetrics: Send + Sync {
    /// Count one failure of `operation`.
    async fn record_failure(
        &self,
        operation: PersistenceOperation,
    ) -> Result<(), PersistenceMetricsError>;
}

/// Recorder that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpPersistenceMetrics;

#[async_trait]
impl PersistenceMetrics for NoOpPersistenceMetrics {
    async fn record_failure(
        &self,
        _operation: PersistenceOperation,
    ) -> Result<(), PersistenceMetricsError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PersistenceOperation::Load, "load")]
    #[case(PersistenceOperation::Save, "save")]
    #[case(PersistenceOperation::Backup, "backup")]
    #[case(PersistenceOperation::AuditLog, "audit_log")]
    fn operation_labels_are_stable(#[case] operation: PersistenceOperation, #[case] label: &str) {
        assert_eq!(operation.as_str(), label);
    }

    #[tokio::test]
    async fn no_op_recorder_accepts_everything() {
        let metrics = NoOpPersistenceMetrics;
        metrics
            .record_failure(PersistenceOperation::Save)
            .await
            .expect("no-op never fails");
    }
}
