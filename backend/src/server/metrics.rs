//! Optional Prometheus request metrics.
//!
//! `actix-web-prom` is wrapped so that the app type is the same whether or
//! not metrics were configured: both arms produce a boxed service with a
//! boxed body.

use std::sync::Arc;

use actix_service::boxed::{self, BoxService};
use actix_service::{Service, ServiceExt as _, Transform};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

/// Namespace prefixed to every request metric.
pub(crate) const METRICS_NAMESPACE: &str = "users";

/// Build request metrics served at `/metrics`, or `None` if the builder
/// fails.
pub(crate) fn initialize_metrics<F, E>(build: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> Result<PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    match build() {
        Ok(metrics) => Some(metrics),
        Err(error) => {
            warn!(%error, "Prometheus metrics unavailable; continuing without /metrics");
            None
        }
    }
}

/// Default builder for the service's request metrics.
pub(crate) fn default_metrics() -> Option<PrometheusMetrics> {
    initialize_metrics(|| {
        PrometheusMetricsBuilder::new(METRICS_NAMESPACE)
            .endpoint("/metrics")
            .build()
    })
}

#[derive(Clone)]
pub(crate) enum MetricsLayer {
    Enabled(Arc<PrometheusMetrics>),
    Disabled,
}

impl MetricsLayer {
    #[must_use]
    pub(crate) fn from_option(metrics: Option<PrometheusMetrics>) -> Self {
        metrics.map_or(Self::Disabled, |metrics| Self::Enabled(Arc::new(metrics)))
    }
}

impl<S, B> Transform<S, ServiceRequest> for MetricsLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BoxService<ServiceRequest, ServiceResponse<BoxBody>, actix_web::Error>;
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        match self {
            Self::Enabled(metrics) => {
                let pending = Compat::new((**metrics).clone()).new_transform(service);
                Box::pin(async move { Ok(boxed::service(pending.await?)) })
            }
            Self::Disabled => {
                let passthrough = service.map(|res: ServiceResponse<B>| res.map_into_boxed_body());
                Box::pin(async move { Ok(boxed::service(passthrough)) })
            }
        }
    }
}
