//! Service configuration loaded via OrthoConfig.
//!
//! Values layer CLI flags over `USERS_*` environment variables over an
//! optional config file; anything left unset falls back to the defaults
//! below.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATA_FILE: &str = "users.json";
const DEFAULT_BACKUP_FILE: &str = "users_backup.json";
const DEFAULT_LOG_FILE: &str = "logs.txt";

/// Runtime settings for the user registry service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS")]
pub struct AppSettings {
    /// Address the HTTP listener binds to.
    pub bind_addr: Option<SocketAddr>,
    /// JSON file holding the user collection.
    pub data_file: Option<PathBuf>,
    /// Destination of the pre-save backup copy.
    pub backup_file: Option<PathBuf>,
    /// Plaintext operation log.
    pub log_file: Option<PathBuf>,
    /// Append a line to the operation log after every mutation.
    #[ortho_config(default = false)]
    pub audit_log: bool,
    /// Copy the data file to the backup path before every save.
    #[ortho_config(default = false)]
    pub backup_before_write: bool,
}

impl AppSettings {
    /// Return the configured bind address, falling back to `127.0.0.1:3000`.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
            .unwrap_or_else(|| SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)))
    }

    /// Return the configured data file, falling back to `users.json`.
    #[must_use]
    pub fn data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    /// Return the configured backup file, falling back to `users_backup.json`.
    #[must_use]
    pub fn backup_file(&self) -> PathBuf {
        self.backup_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BACKUP_FILE))
    }

    /// Return the configured operation log, falling back to `logs.txt`.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }
}
