//! Capability-scoped file addressing shared by the file adapters.
//!
//! Adapters never touch `std::fs`. A configured path is split once into its
//! parent directory and file name; each operation opens the parent as a
//! `cap_std` [`Dir`] and works relative to it.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};
use tracing::debug;
use uuid::Uuid;

/// A file addressed as `(parent directory, file name)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FileLocation {
    parent: PathBuf,
    file_name: OsString,
}

impl FileLocation {
    /// Split `path` into parent and file name.
    ///
    /// A bare file name resolves against the working directory.
    pub(crate) fn new(path: &Path) -> io::Result<Self> {
        let file_name = path.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} does not name a file", path.display()),
            )
        })?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(Self {
            parent,
            file_name: file_name.to_os_string(),
        })
    }

    /// Full path, for logs.
    pub(crate) fn path(&self) -> PathBuf {
        self.parent.join(&self.file_name)
    }

    pub(crate) fn file_name(&self) -> &Path {
        Path::new(&self.file_name)
    }

    pub(crate) fn open_dir(&self) -> io::Result<Dir> {
        Dir::open_ambient_dir(&self.parent, ambient_authority())
    }

    /// Read the whole file as UTF-8.
    pub(crate) fn read_to_string(&self) -> io::Result<String> {
        self.open_dir()?.read_to_string(self.file_name())
    }

    /// Replace the file with `contents` via a temporary sibling and rename.
    ///
    /// Readers observe either the old or the new content, never a prefix.
    pub(crate) fn write_atomic(&self, contents: &[u8]) -> io::Result<()> {
        let dir = self.open_dir()?;
        let tmp_name = self.temp_name();

        if let Err(err) = write_new_file(&dir, &tmp_name, contents) {
            drop(dir.remove_file(&tmp_name));
            return Err(err);
        }
        if let Err(err) = replace(&dir, &tmp_name, self.file_name()) {
            drop(dir.remove_file(&tmp_name));
            return Err(err);
        }
        if let Err(err) = dir.open(".").and_then(|handle| handle.sync_all()) {
            debug!(error = %err, path = %self.path().display(), "directory sync skipped");
        }
        Ok(())
    }

    /// Append `contents`, creating the file when absent.
    pub(crate) fn append(&self, contents: &[u8]) -> io::Result<()> {
        let dir = self.open_dir()?;
        let mut options = OpenOptions::new();
        options.append(true).create(true);
        let mut file = dir.open_with(self.file_name(), &options)?;
        file.write_all(contents)
    }

    fn temp_name(&self) -> String {
        format!(
            ".{}.{}.tmp",
            self.file_name.to_string_lossy(),
            Uuid::new_v4().simple()
        )
    }
}

fn write_new_file(dir: &Dir, name: &str, contents: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(name, &options)?;
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(windows)]
fn replace(dir: &Dir, tmp_name: &str, target: &Path) -> io::Result<()> {
    // Windows rename fails if the target exists.
    match dir.remove_file(target) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target)
}

#[cfg(not(windows))]
fn replace(dir: &Dir, tmp_name: &str, target: &Path) -> io::Result<()> {
    dir.rename(tmp_name, dir, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case("users.json", ".", "users.json")]
    #[case("data/users.json", "data", "users.json")]
    fn splits_parent_and_name(#[case] raw: &str, #[case] parent: &str, #[case] name: &str) {
        let location = FileLocation::new(Path::new(raw)).expect("file path");
        assert_eq!(location.parent, PathBuf::from(parent));
        assert_eq!(location.file_name(), Path::new(name));
    }

    #[test]
    fn rejects_paths_without_file_name() {
        let err = FileLocation::new(Path::new("/")).expect_err("root is not a file");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn atomic_write_replaces_content_and_leaves_no_temp_files() {
        let temp = TempDir::new().expect("temp dir");
        let location = FileLocation::new(&temp.path().join("users.json")).expect("file path");

        location.write_atomic(b"first").expect("first write");
        location.write_atomic(b"second").expect("second write");

        assert_eq!(location.read_to_string().expect("read back"), "second");
        let dir = location.open_dir().expect("open dir");
        let names: Vec<_> = dir
            .entries()
            .expect("list dir")
            .filter_map(Result::ok)
            .map(|entry| entry.file_name())
            .collect();
        assert_eq!(names, vec![OsString::from("users.json")]);
    }

    #[test]
    fn temp_names_are_hidden_siblings_and_unique() {
        let location = FileLocation::new(Path::new("data/users.json")).expect("file path");

        let first = location.temp_name();
        let second = location.temp_name();

        assert_ne!(first, second);
        for name in [&first, &second] {
            assert!(name.starts_with(".users.json."), "unexpected temp name: {name}");
            assert!(name.ends_with(".tmp"), "unexpected temp name: {name}");
        }
    }

    #[test]
    fn append_creates_then_extends() {
        let temp = TempDir::new().expect("temp dir");
        let location = FileLocation::new(&temp.path().join("logs.txt")).expect("file path");

        location.append(b"one\n").expect("create");
        location.append(b"two\n").expect("extend");

        assert_eq!(location.read_to_string().expect("read back"), "one\ntwo\n");
    }
}
