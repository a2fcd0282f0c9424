use super::types::{Snapshot, SnapshotName};
use crate::digest::compute;
use crate::error::{Result, VersioningError};
use chrono::{Local, NaiveDateTime};
use log::{debug, info, warn};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Name of the side-store directory created under the base directory.
pub const VERSION_DIR_NAME: &str = ".versions";

/// Flat, append-only snapshot store for whole files.
///
/// Snapshots are plain copies kept in `<base>/.versions/`. Each copy is named
/// `{timestamp}_{digest}_{base_name}`; there is no index or manifest beyond
/// these file names.
#[derive(Debug, Clone)]
pub struct VersionStore {
    base_directory: PathBuf,
    version_directory: PathBuf,
}

impl VersionStore {
    /// Opens the store rooted at `base_directory`, creating `.versions` if needed.
    ///
    /// # Arguments
    ///
    /// * `base_directory` - Directory that holds (or will hold) the side-store.
    ///
    /// # Returns
    ///
    /// * `Ok(VersionStore)` - The opened store.
    /// * `Err(VersioningError)` - If the side-store directory cannot be created.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use file_versioning::snapshot::VersionStore;
    ///
    /// let store = VersionStore::new(".").unwrap();
    /// let snapshot = store.commit("hello.txt").unwrap();
    /// store.rollback("hello.txt", &snapshot.name).unwrap();
    /// ```
    pub fn new(base_directory: impl AsRef<Path>) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        let version_directory = base_directory.join(VERSION_DIR_NAME);

        if !version_directory.is_dir() {
            fs::create_dir_all(&version_directory)
                .map_err(|e| VersioningError::from_io(&version_directory, e))?;
            info!("Created version directory {}", version_directory.display());
        }

        Ok(VersionStore {
            base_directory,
            version_directory,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Directory holding the snapshot copies.
    pub fn version_directory(&self) -> &Path {
        &self.version_directory
    }

    /// Resolves a version name to its path inside the side-store.
    ///
    /// # Returns
    ///
    /// * `Some(PathBuf)` - If `version_name` is a single plain file name.
    /// * `None` - If it is empty or contains separators, `.` or `..`.
    pub fn snapshot_path(&self, version_name: &str) -> Option<PathBuf> {
        let mut components = Path::new(version_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => Some(self.version_directory.join(name)),
            _ => None,
        }
    }

    /// Snapshots `file_path` under the current local time.
    ///
    /// # Arguments
    ///
    /// * `file_path` - The file to snapshot.
    ///
    /// # Returns
    ///
    /// * `Ok(Snapshot)` - The created snapshot.
    /// * `Err(VersioningError)` - If the file cannot be read or copied.
    pub fn commit(&self, file_path: impl AsRef<Path>) -> Result<Snapshot> {
        self.commit_at(file_path, Local::now().naive_local())
    }

    /// Snapshots `file_path`, naming the copy with an explicit timestamp.
    ///
    /// Reads the whole file, hashes it with [`compute`] and copies it into the
    /// side-store as `{timestamp}_{digest}_{base_name}`. Committing twice in
    /// the same second with the same content yields the same name, and the
    /// second copy replaces the first with identical bytes.
    ///
    /// # Arguments
    ///
    /// * `file_path` - The file to snapshot.
    /// * `timestamp` - Time encoded in the snapshot name, to the second.
    ///
    /// # Returns
    ///
    /// * `Ok(Snapshot)` - The created snapshot.
    /// * `Err(VersioningError)` - `FileNotFound` or `PermissionDenied` on the
    ///   source file, or another I/O failure while copying.
    pub fn commit_at(&self, file_path: impl AsRef<Path>, timestamp: NaiveDateTime) -> Result<Snapshot> {
        let file_path = file_path.as_ref();
        let content = fs::read(file_path).map_err(|e| VersioningError::from_io(file_path, e))?;
        let digest = compute(&content);
        debug!("Hashed {} ({} bytes): {}", file_path.display(), content.len(), digest);

        let base_name = file_path
            .file_name()
            .ok_or_else(|| VersioningError::FileNotFound(file_path.to_path_buf()))?
            .to_string_lossy()
            .into_owned();
        let name = SnapshotName::new(timestamp, digest.clone(), base_name).to_string();
        let path = self.version_directory.join(&name);

        // Source already read; copy failures belong to the destination.
        fs::copy(file_path, &path).map_err(|e| VersioningError::from_io(&path, e))?;
        info!("Version created: {}", name);

        Ok(Snapshot { name, path, digest })
    }

    /// Restores `file_path` from the snapshot called `version_name`.
    ///
    /// # Arguments
    ///
    /// * `file_path` - The file to overwrite.
    /// * `version_name` - A snapshot name as returned by [`commit`](Self::commit).
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The file now holds the snapshot's bytes.
    /// * `Err(VersioningError)` - `SnapshotNotFound` if no such snapshot exists,
    ///   or an I/O kind if the target cannot be written.
    pub fn rollback(&self, file_path: impl AsRef<Path>, version_name: &str) -> Result<()> {
        let file_path = file_path.as_ref();
        let snapshot_path = self
            .snapshot_path(version_name)
            .filter(|path| path.is_file())
            .ok_or_else(|| VersioningError::SnapshotNotFound(version_name.to_string()))?;

        match SnapshotName::parse(version_name) {
            Some(parsed) => {
                let target = file_path.file_name().map(|n| n.to_string_lossy().into_owned());
                if target.as_deref() != Some(parsed.base_name.as_str()) {
                    warn!(
                        "Snapshot {} was taken of {}, restoring it over {}",
                        version_name,
                        parsed.base_name,
                        file_path.display()
                    );
                }
                debug!("Restoring snapshot taken at {}", parsed.timestamp);
            }
            None => warn!("Snapshot name {} does not follow the naming scheme", version_name),
        }

        fs::copy(&snapshot_path, file_path).map_err(|e| VersioningError::from_io(file_path, e))?;
        info!("Rolled back {} to {}", file_path.display(), version_name);
        Ok(())
    }

    /// Overwrites `file_path` with `content` without taking a snapshot.
    pub fn update_file(&self, file_path: impl AsRef<Path>, content: &str) -> Result<()> {
        let file_path = file_path.as_ref();
        fs::write(file_path, content).map_err(|e| VersioningError::from_io(file_path, e))?;
        debug!("Wrote {} bytes to {}", content.len(), file_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn fixed_time(second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 30, second)
            .unwrap()
    }

    /// Tests that opening a store creates the side-store directory.
    #[test]
    fn test_new_creates_version_directory() {
        let dir = tempdir().unwrap();
        let store = VersionStore::new(dir.path()).unwrap();

        assert!(store.version_directory().is_dir());
        assert_eq!(store.version_directory(), dir.path().join(".versions"));
        assert_eq!(store.base_directory(), dir.path());

        // Reopening an existing store is fine.
        VersionStore::new(dir.path()).unwrap();
    }

    /// Tests the snapshot name and copy produced by a commit.
    #[test]
    fn test_commit_at_names_and_copies() {
        let dir = tempdir().unwrap();
        let store = VersionStore::new(dir.path()).unwrap();
        let file = dir.path().join("hello.txt");
        fs::write(&file, "Initial content").unwrap();

        let snapshot = store.commit_at(&file, fixed_time(0)).unwrap();

        assert_eq!(snapshot.digest, compute(b"Initial content"));
        assert_eq!(
            snapshot.name,
            format!("20240501123000_{}_hello.txt", snapshot.digest)
        );
        assert_eq!(snapshot.path, store.version_directory().join(&snapshot.name));
        assert_eq!(fs::read(&snapshot.path).unwrap(), b"Initial content");
    }

    /// Tests that commit followed by rollback restores the committed bytes.
    #[test]
    fn test_commit_then_rollback_round_trip() {
        let dir = tempdir().unwrap();
        let store = VersionStore::new(dir.path()).unwrap();
        let file = dir.path().join("hello.txt");
        let original: Vec<u8> = (0..=255u8).cycle().take(5000).collect();
        fs::write(&file, &original).unwrap();

        let snapshot = store.commit(&file).unwrap();
        store.update_file(&file, "changed").unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "changed");

        store.rollback(&file, &snapshot.name).unwrap();
        assert_eq!(fs::read(&file).unwrap(), original);
    }

    /// Tests rolling back to an older of several snapshots.
    #[test]
    fn test_rollback_to_earlier_version() {
        let dir = tempdir().unwrap();
        let store = VersionStore::new(dir.path()).unwrap();
        let file = dir.path().join("notes.txt");

        store.update_file(&file, "first").unwrap();
        let first = store.commit_at(&file, fixed_time(1)).unwrap();
        store.update_file(&file, "second").unwrap();
        let second = store.commit_at(&file, fixed_time(2)).unwrap();
        assert_ne!(first.name, second.name);

        store.rollback(&file, &first.name).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "first");

        // Snapshots are untouched by rollback.
        assert_eq!(fs::read_to_string(&second.path).unwrap(), "second");
    }

    /// Tests that committing a missing file reports `FileNotFound`.
    #[test]
    fn test_commit_missing_file() {
        let dir = tempdir().unwrap();
        let store = VersionStore::new(dir.path()).unwrap();

        let err = store.commit(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, VersioningError::FileNotFound(_)));
    }

    /// Tests that rollback to an unknown version reports `SnapshotNotFound` and leaves the file alone.
    #[test]
    fn test_rollback_unknown_snapshot() {
        let dir = tempdir().unwrap();
        let store = VersionStore::new(dir.path()).unwrap();
        let file = dir.path().join("hello.txt");
        store.update_file(&file, "keep me").unwrap();

        let err = store.rollback(&file, "20240501123000_nope_hello.txt").unwrap_err();
        assert!(matches!(err, VersioningError::SnapshotNotFound(ref name) if name == "20240501123000_nope_hello.txt"));
        assert_eq!(fs::read_to_string(&file).unwrap(), "keep me");
    }

    /// Tests that version names cannot escape the side-store.
    #[test]
    fn test_rollback_rejects_paths() {
        let dir = tempdir().unwrap();
        let store = VersionStore::new(dir.path()).unwrap();
        let file = dir.path().join("hello.txt");
        store.update_file(&file, "target").unwrap();
        fs::write(dir.path().join("outside.txt"), "outside").unwrap();

        for name in ["../outside.txt", "", ".", "..", "a/b"] {
            let err = store.rollback(&file, name).unwrap_err();
            assert!(matches!(err, VersioningError::SnapshotNotFound(_)), "name {:?}", name);
        }
        assert_eq!(fs::read_to_string(&file).unwrap(), "target");
    }

    /// Tests that `update_file` never creates a snapshot.
    #[test]
    fn test_update_file_does_not_snapshot() {
        let dir = tempdir().unwrap();
        let store = VersionStore::new(dir.path()).unwrap();
        let file = dir.path().join("hello.txt");

        store.update_file(&file, "one").unwrap();
        store.update_file(&file, "two").unwrap();

        assert_eq!(fs::read_dir(store.version_directory()).unwrap().count(), 0);
        assert_eq!(fs::read_to_string(&file).unwrap(), "two");
    }

    /// Tests that an empty file commits with the empty-message digest.
    #[test]
    fn test_commit_empty_file() {
        let dir = tempdir().unwrap();
        let store = VersionStore::new(dir.path()).unwrap();
        let file = dir.path().join("empty");
        store.update_file(&file, "").unwrap();

        let snapshot = store.commit_at(&file, fixed_time(0)).unwrap();
        assert_eq!(
            snapshot.digest,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert!(SnapshotName::parse(&snapshot.name).is_some());
    }

    /// Tests that a missing side-store is reported against the snapshot path, not the tracked file.
    #[test]
    fn test_commit_blames_missing_version_directory() {
        let dir = tempdir().unwrap();
        let store = VersionStore::new(dir.path()).unwrap();
        let file = dir.path().join("hello.txt");
        fs::write(&file, "Initial content").unwrap();
        fs::remove_dir(store.version_directory()).unwrap();

        let err = store.commit_at(&file, fixed_time(0)).unwrap_err();

        match err {
            VersioningError::FileNotFound(path) => {
                assert_eq!(path.parent(), Some(store.version_directory()));
                assert_ne!(path, file);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
