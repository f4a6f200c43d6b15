//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use user_registry::config::AppSettings;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) data_file: PathBuf,
    pub(crate) backup_file: Option<PathBuf>,
    pub(crate) log_file: Option<PathBuf>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Serve the collection stored in `data_file` on `bind_addr`, with no
    /// backup or operation log.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, data_file: impl Into<PathBuf>) -> Self {
        Self {
            bind_addr,
            data_file: data_file.into(),
            backup_file: None,
            log_file: None,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Translate loaded settings, enabling hooks only when switched on.
    #[must_use]
    pub fn from_settings(settings: &AppSettings) -> Self {
        let mut config = Self::new(settings.bind_addr(), settings.data_file());
        if settings.backup_before_write {
            config = config.with_backup_file(settings.backup_file());
        }
        if settings.audit_log {
            config = config.with_log_file(settings.log_file());
        }
        config
    }

    /// Copy the data file to `path` before every save.
    #[must_use]
    pub fn with_backup_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.backup_file = Some(path.into());
        self
    }

    /// Append one line per mutation to `path`.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the data file path.
    #[must_use]
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
