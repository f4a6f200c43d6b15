//! Prometheus adapter for persistence failure metrics.
//!
//! Counters are registered with the registry that also backs the HTTP
//! middleware, so everything is served from the same `/metrics` endpoint.

use async_trait::async_trait;
use prometheus::{CounterVec, Opts, Registry};

use crate::domain::ports::{PersistenceMetrics, PersistenceMetricsError, PersistenceOperation};

/// Prometheus-backed persistence failure recorder.
///
/// # Metric Specification
///
/// - **Name**: `users_persistence_failures_total`
/// - **Type**: Counter
/// - **Labels**:
///   - `operation`: `load`, `save`, `backup`, or `audit_log`
pub struct PrometheusPersistenceMetrics {
    failures_total: CounterVec,
}

impl PrometheusPersistenceMetrics {
    /// Create and register metrics with the given registry.
    ///
    /// # Errors
    ///
    /// Returns an error if a metric with the same name is already registered.
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let failures_total = CounterVec::new(
            Opts::new(
                "users_persistence_failures_total",
                "Swallowed persistence failures by operation",
            ),
            &["operation"],
        )?;
        registry.register(Box::new(failures_total.clone()))?;
        Ok(Self { failures_total })
    }
}

#[async_trait]
impl PersistenceMetrics for PrometheusPersistenceMetrics {
    async fn record_failure(
        &self,
        operation: PersistenceOperation,
    ) -> Result<(), PersistenceMetricsError> {
        self.failures_total
            .get_metric_with_label_values(&[operation.as_str()])
            .map_err(|err| PersistenceMetricsError::export(err.to_string()))?
            .inc();
        Ok(())
    }
}
