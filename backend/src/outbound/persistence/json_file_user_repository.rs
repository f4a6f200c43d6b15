//! JSON file adapter for the user snapshot port.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::task;
use tracing::debug;

use crate::domain::User;
use crate::domain::ports::{UserPersistenceError, UserSnapshotRepository};
use crate::outbound::file_location::FileLocation;

/// Stores the user collection as a JSON array of `{id, name, age}` objects.
///
/// File access runs on the blocking pool so handlers never stall the
/// runtime while the registry holds its lock across a save.
///
/// # Examples
/// ```
/// use user_registry::outbound::persistence::JsonFileUserRepository;
///
/// let repository = JsonFileUserRepository::new("users.json").expect("file path");
/// assert!(repository.path().ends_with("users.json"));
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileUserRepository {
    location: FileLocation,
}

impl JsonFileUserRepository {
    /// Address the collection at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::InvalidInput`] when `path` has no file name.
    pub fn new(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            location: FileLocation::new(path.as_ref())?,
        })
    }

    /// Path of the data file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.location.path()
    }
}

#[async_trait]
impl UserSnapshotRepository for JsonFileUserRepository {
    async fn load_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let location = self.location.clone();
        let contents = task::spawn_blocking(move || location.read_to_string())
            .await
            .map_err(|join_error| UserPersistenceError::read(join_error.to_string()))?
            .map_err(|io_error| UserPersistenceError::read(io_error.to_string()))?;

        let users: Vec<User> = serde_json::from_str(&contents)
            .map_err(|parse_error| UserPersistenceError::parse(parse_error.to_string()))?;
        debug!(path = %self.location.path().display(), count = users.len(), "user file read");
        Ok(users)
    }

    async fn save_all(&self, users: &[User]) -> Result<(), UserPersistenceError> {
        let payload = serde_json::to_vec_pretty(users)
            .map_err(|encode_error| UserPersistenceError::write(encode_error.to_string()))?;
        let location = self.location.clone();
        task::spawn_blocking(move || location.write_atomic(&payload))
            .await
            .map_err(|join_error| UserPersistenceError::write(join_error.to_string()))?
            .map_err(|io_error| UserPersistenceError::write(io_error.to_string()))?;

        debug!(path = %self.location.path().display(), count = users.len(), "user file written");
        Ok(())
    }
}
