//! Test utilities for the user registry crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Compiled for tests and when the `test-support` feature is enabled.

pub mod cap_fs {
    //! Capability-safe filesystem helpers for tests.
    //!
    //! The crate performs file access through `cap_std::fs::Dir`; tests use
    //! the same route to inspect what adapters wrote.

    use std::ffi::OsString;
    use std::io;
    use std::path::Path;

    use cap_std::{ambient_authority, fs::Dir};

    /// Read a UTF-8 text file through `cap_std`.
    pub fn read_file_to_string(path: &Path) -> io::Result<String> {
        let (parent, file_name) = parent_and_file_name(path)?;
        let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
        directory.read_to_string(Path::new(&file_name))
    }

    /// Write bytes to a file through `cap_std`.
    pub fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
        let (parent, file_name) = parent_and_file_name(path)?;
        let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
        directory.write(Path::new(&file_name), contents)
    }

    /// Return true when `path` exists.
    pub fn path_exists(path: &Path) -> bool {
        let Ok((parent, file_name)) = parent_and_file_name(path) else {
            return false;
        };
        let Ok(directory) = Dir::open_ambient_dir(parent, ambient_authority()) else {
            return false;
        };
        directory.exists(Path::new(&file_name))
    }

    fn parent_and_file_name(path: &Path) -> io::Result<(&Path, OsString)> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        let file_name = path.file_name().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "path must include a file name")
        })?;
        Ok((parent, file_name.to_os_string()))
    }
}

pub mod doubles {
    //! In-memory port implementations.

    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Mutex, MutexGuard, PoisonError};

    use async_trait::async_trait;
    use chrono::{DateTime, Local, Utc};
    use mockable::Clock;

    use crate::domain::User;
    use crate::domain::ports::{
        AuditLog, AuditLogError, PersistenceMetrics, PersistenceMetricsError,
        PersistenceOperation, UserPersistenceError, UserSnapshotRepository,
    };

    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        mutex.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot repository backed by a vector, with switchable failures.
    #[derive(Debug, Default)]
    pub struct InMemoryUserRepository {
        stored: Mutex<Option<Vec<User>>>,
        fail_saves: AtomicBool,
        saves: AtomicUsize,
    }

    impl InMemoryUserRepository {
        /// Repository whose load yields `users`.
        #[must_use]
        pub fn with_users(users: Vec<User>) -> Self {
            Self {
                stored: Mutex::new(Some(users)),
                ..Self::default()
            }
        }

        /// Make subsequent saves fail (or succeed again).
        pub fn set_fail_saves(&self, fail: bool) {
            self.fail_saves.store(fail, Ordering::SeqCst);
        }

        /// Collection from the most recent successful save or seed.
        #[must_use]
        pub fn stored(&self) -> Option<Vec<User>> {
            lock(&self.stored).clone()
        }

        /// Number of save attempts, successful or not.
        #[must_use]
        pub fn save_attempts(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UserSnapshotRepository for InMemoryUserRepository {
        async fn load_all(&self) -> Result<Vec<User>, UserPersistenceError> {
            lock(&self.stored)
                .clone()
                .ok_or_else(|| UserPersistenceError::read("nothing stored yet"))
        }

        async fn save_all(&self, users: &[User]) -> Result<(), UserPersistenceError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(UserPersistenceError::write("injected save failure"));
            }
            *lock(&self.stored) = Some(users.to_vec());
            Ok(())
        }
    }

    /// Operation log that keeps lines in memory.
    #[derive(Debug, Default)]
    pub struct RecordingAuditLog {
        entries: Mutex<Vec<String>>,
    }

    impl RecordingAuditLog {
        /// Lines recorded so far.
        #[must_use]
        pub fn entries(&self) -> Vec<String> {
            lock(&self.entries).clone()
        }
    }

    #[async_trait]
    impl AuditLog for RecordingAuditLog {
        async fn record(&self, message: &str) -> Result<(), AuditLogError> {
            lock(&self.entries).push(message.to_owned());
            Ok(())
        }
    }

    /// Metrics recorder that remembers every failure it was told about.
    #[derive(Debug, Default)]
    pub struct RecordingPersistenceMetrics {
        failures: Mutex<Vec<PersistenceOperation>>,
    }

    impl RecordingPersistenceMetrics {
        /// Failures recorded so far, in order.
        #[must_use]
        pub fn failures(&self) -> Vec<PersistenceOperation> {
            lock(&self.failures).clone()
        }
    }

    #[async_trait]
    impl PersistenceMetrics for RecordingPersistenceMetrics {
        async fn record_failure(
            &self,
            operation: PersistenceOperation,
        ) -> Result<(), PersistenceMetricsError> {
            lock(&self.failures).push(operation);
            Ok(())
        }
    }

    /// Clock frozen at a fixed instant.
    #[derive(Debug, Clone, Copy)]
    pub struct FixedClock(pub DateTime<Utc>);

    impl Clock for FixedClock {
        fn local(&self) -> DateTime<Local> {
            self.0.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.0
        }
    }
}

pub mod http {
    //! Helpers for in-process HTTP tests.

    use std::sync::Arc;

    use crate::domain::ports::NoOpPersistenceMetrics;
    use crate::domain::{User, UserRegistry};
    use crate::inbound::http::state::HttpState;

    use super::doubles::InMemoryUserRepository;

    /// Registry over an in-memory repository seeded with `users`, plus the
    /// repository handle for inspecting saves.
    pub async fn seeded_registry(
        users: Vec<User>,
    ) -> (Arc<UserRegistry>, Arc<InMemoryUserRepository>) {
        let repository = Arc::new(InMemoryUserRepository::with_users(users));
        let registry =
            UserRegistry::load(repository.clone(), Arc::new(NoOpPersistenceMetrics)).await;
        (Arc::new(registry), repository)
    }

    /// HTTP state whose ports are all served by `registry`.
    #[must_use]
    pub fn state_for(registry: &Arc<UserRegistry>) -> HttpState {
        HttpState::from_registry(registry.clone())
    }
}
