//! Plaintext operation log.
//!
//! Each record is one line, `<timestamp> - <message>`, where the timestamp
//! is RFC 3339 in UTC with millisecond precision, e.g.
//! `2024-05-01T12:00:00.000Z - created user 1`.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::SecondsFormat;
use mockable::Clock;
use tokio::task;

use crate::domain::ports::{AuditLog, AuditLogError};
use crate::outbound::file_location::FileLocation;

/// Appends timestamped lines to a text file, creating it on first use.
pub struct FileAuditLog {
    location: FileLocation,
    clock: Arc<dyn Clock>,
}

impl FileAuditLog {
    /// Log to `path`, stamping lines with `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::InvalidInput`] when `path` has no file name.
    pub fn new(path: impl AsRef<Path>, clock: Arc<dyn Clock>) -> io::Result<Self> {
        Ok(Self {
            location: FileLocation::new(path.as_ref())?,
            clock,
        })
    }

    /// Path of the log file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.location.path()
    }

    fn format_line(&self, message: &str) -> String {
        let stamp = self.clock.utc().to_rfc3339_opts(SecondsFormat::Millis, true);
        format!("{stamp} - {message}\n")
    }
}

#[async_trait]
impl AuditLog for FileAuditLog {
    async fn record(&self, message: &str) -> Result<(), AuditLogError> {
        let line = self.format_line(message);
        let location = self.location.clone();
        task::spawn_blocking(move || location.append(line.as_bytes()))
            .await
            .map_err(|join_error| AuditLogError::append(join_error.to_string()))?
            .map_err(|io_error| AuditLogError::append(io_error.to_string()))
    }
}
