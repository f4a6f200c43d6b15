//! File-copy adapter for the backup port.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::task;
use tracing::debug;

use crate::domain::ports::{BackupError, BackupStore};
use crate::outbound::file_location::FileLocation;

/// Copies the data file to a backup path, overwriting any previous backup.
#[derive(Debug, Clone)]
pub struct FileBackupStore {
    source: FileLocation,
    target: FileLocation,
}

impl FileBackupStore {
    /// Back up `source` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::InvalidInput`] when either path has no file
    /// name.
    pub fn new(source: impl AsRef<Path>, target: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            source: FileLocation::new(source.as_ref())?,
            target: FileLocation::new(target.as_ref())?,
        })
    }

    /// Path the backup is written to.
    #[must_use]
    pub fn target_path(&self) -> PathBuf {
        self.target.path()
    }
}

/// Outcome of a single copy.
enum Copied {
    Bytes(u64),
    NothingToCopy,
}

fn copy_file(source: &FileLocation, target: &FileLocation) -> io::Result<Copied> {
    let source_dir = source.open_dir()?;
    if !source_dir.exists(source.file_name()) {
        return Ok(Copied::NothingToCopy);
    }
    let target_dir = target.open_dir()?;
    source_dir
        .copy(source.file_name(), &target_dir, target.file_name())
        .map(Copied::Bytes)
}

#[async_trait]
impl BackupStore for FileBackupStore {
    async fn create_backup(&self) -> Result<(), BackupError> {
        let source = self.source.clone();
        let target = self.target.clone();
        let copied = task::spawn_blocking(move || copy_file(&source, &target))
            .await
            .map_err(|join_error| BackupError::copy(join_error.to_string()))?
            .map_err(|io_error| BackupError::copy(io_error.to_string()))?;

        match copied {
            Copied::Bytes(bytes) => {
                debug!(target = %self.target.path().display(), bytes, "backup written");
            }
            Copied::NothingToCopy => {
                debug!(source = %self.source.path().display(), "no data file yet; backup skipped");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::cap_fs::{path_exists, read_file_to_string, write_file};
    use tempfile::TempDir;

    #[tokio::test]
    async fn copies_current_data_file() {
        let temp = TempDir::new().expect("temp dir");
        let source = temp.path().join("users.json");
        let target = temp.path().join("users_backup.json");
        write_file(&source, b"[]").expect("seed data file");
        let store = FileBackupStore::new(&source, &target).expect("paths");

        store.create_backup().await.expect("backup succeeds");

        assert_eq!(read_file_to_string(&target).expect("backup exists"), "[]");
    }

    #[tokio::test]
    async fn overwrites_previous_backup() {
        let temp = TempDir::new().expect("temp dir");
        let source = temp.path().join("users.json");
        let target = temp.path().join("users_backup.json");
        write_file(&target, b"stale").expect("seed old backup");
        write_file(&source, b"fresh").expect("seed data file");
        let store = FileBackupStore::new(&source, &target).expect("paths");

        store.create_backup().await.expect("backup succeeds");

        assert_eq!(read_file_to_string(&target).expect("backup exists"), "fresh");
    }

    #[tokio::test]
    async fn missing_source_is_skipped() {
        let temp = TempDir::new().expect("temp dir");
        let target = temp.path().join("users_backup.json");
        let store =
            FileBackupStore::new(temp.path().join("users.json"), &target).expect("paths");

        store.create_backup().await.expect("nothing to copy is fine");

        assert!(!path_exists(&target));
    }

    #[tokio::test]
    async fn unwritable_target_directory_is_a_copy_error() {
        let temp = TempDir::new().expect("temp dir");
        let source = temp.path().join("users.json");
        write_file(&source, b"[]").expect("seed data file");
        let store = FileBackupStore::new(&source, temp.path().join("absent").join("backup.json"))
            .expect("paths");

        let err = store.create_backup().await.expect_err("target dir missing");

        assert!(matches!(err, BackupError::Copy { .. }));
    }
}
