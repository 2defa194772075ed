//! [`TestSite`] builder for site engine test scenarios.

use site_fs::NormalizedPath;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// A temporary site root with helpers for writing fixture files and
/// asserting on what ends up on disk.
///
/// # Example
///
/// ```rust,no_run
/// use site_test_utils::TestSite;
///
/// let site = TestSite::new();
/// site.write("base.yaml", "mode: development\n");
/// site.write("site.yaml", "extends: base.yaml\n");
/// site.assert_file_exists("site.yaml");
/// ```
pub struct TestSite {
    temp_dir: TempDir,
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSite {
    /// Create an empty temporary site directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The root as a [`NormalizedPath`].
    pub fn site_root(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    /// Write `content` to `path` (relative to the root), creating parent
    /// directories as needed.
    pub fn write(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", full_path.display()));
        full_path
    }

    /// Create a directory (and its parents) relative to the root.
    pub fn mkdir(&self, path: &str) -> PathBuf {
        let full_path = self.root().join(path);
        fs::create_dir_all(&full_path).unwrap();
        full_path
    }

    /// Delete a file relative to the root.
    pub fn remove(&self, path: &str) {
        let full_path = self.root().join(path);
        fs::remove_file(&full_path)
            .unwrap_or_else(|e| panic!("Could not remove {}: {e}", full_path.display()));
    }

    /// Set the modification time of `path` to `secs` seconds after `since`.
    pub fn touch_after(&self, path: &str, since: SystemTime, secs: u64) {
        let full_path = self.root().join(path);
        fs::File::options()
            .write(true)
            .open(&full_path)
            .and_then(|file| file.set_modified(since + Duration::from_secs(secs)))
            .unwrap_or_else(|e| panic!("Could not touch {}: {e}", full_path.display()));
    }

    /// Read a file relative to the root.
    pub fn read(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Consume the fixture and delete the whole site directory.
    pub fn destroy(self) {
        self.temp_dir.close().unwrap();
    }

    /// Assert that `path` (relative to the site root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the site root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
