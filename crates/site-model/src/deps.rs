//! Persisted dependency map
//!
//! The dependency map records, per resource, what that resource depends
//! on. It is read once when a build session starts and written back in
//! full when the session ends.

use crate::value::{Mapping, Value};
use crate::{Error, Result};
use site_fs::{ConfigStore, DocumentFormat, NormalizedPath, SiteFile};
use std::collections::btree_map;

/// Dependency map backed by a YAML file under the site root.
///
/// The store is a session: open it when a build starts and [`close`] it
/// when the build ends. A store that is dropped without being closed saves
/// itself once on drop; a failure there is only logged and the session's
/// changes are lost. Call [`close`] to get the save error back.
///
/// Saving always rewrites the whole file. Concurrent sessions over the same
/// site are not coordinated; the last one to save wins.
///
/// [`close`]: DependencyStore::close
#[derive(Debug)]
pub struct DependencyStore {
    deps_file: NormalizedPath,
    data: Mapping,
    store: ConfigStore,
    closed: bool,
}

impl DependencyStore {
    /// Open the store backed by `.hyde_deps` under `site_root`.
    pub fn open(site_root: &NormalizedPath) -> Result<Self> {
        Self::open_with_name(site_root, SiteFile::Dependencies.as_str())
    }

    /// Open the store backed by `file_name` under `site_root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file exists but cannot be parsed or
    /// does not hold a mapping.
    pub fn open_with_name(site_root: &NormalizedPath, file_name: &str) -> Result<Self> {
        let deps_file = site_root.join(file_name);
        let store = ConfigStore::with_fallback(DocumentFormat::Yaml);

        let data = if deps_file.is_file() {
            match store.load::<Value>(&deps_file)? {
                Value::Mapping(map) => map,
                Value::Null => Mapping::new(),
                other => {
                    return Err(Error::NotAMapping {
                        path: deps_file.to_native(),
                        found: other.kind(),
                    });
                }
            }
        } else {
            Mapping::new()
        };
        tracing::debug!(path = %deps_file, entries = data.len(), "Opened dependency store");

        Ok(Self {
            deps_file,
            data,
            store,
            closed: false,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &NormalizedPath {
        &self.deps_file
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.data.get_mut(key)
    }

    /// Insert or replace the dependencies of `key`, returning the old value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.data.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.data.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The in-memory map.
    pub fn data(&self) -> &Mapping {
        &self.data
    }

    /// Write the whole map to the backing file.
    ///
    /// Nothing is written when the backing file's directory no longer
    /// exists, for example after the site was deleted. Returns whether the
    /// file was written.
    pub fn save(&self) -> Result<bool> {
        let parent_exists = self
            .deps_file
            .parent()
            .is_none_or(|parent| parent.is_dir());
        if !parent_exists {
            tracing::debug!(path = %self.deps_file, "Site directory is gone, not saving dependencies");
            return Ok(false);
        }

        self.store.save(&self.deps_file, &self.data)?;
        tracing::debug!(path = %self.deps_file, entries = self.data.len(), "Saved dependency store");
        Ok(true)
    }

    /// End the session: save and release the store.
    ///
    /// # Errors
    ///
    /// Returns the save error, for example when the map holds a value the
    /// backing file's format cannot represent (`null` in TOML).
    pub fn close(mut self) -> Result<bool> {
        self.closed = true;
        self.save()
    }
}

impl Drop for DependencyStore {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.save() {
            tracing::warn!(path = %self.deps_file, "Failed to save dependency store: {}", e);
        }
    }
}

impl<'a> IntoIterator for &'a DependencyStore {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Extend<(String, Value)> for DependencyStore {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn open_without_file_starts_empty() {
        let temp = TempDir::new().unwrap();
        let store = DependencyStore::open(&NormalizedPath::new(temp.path())).unwrap();

        assert!(store.is_empty());
        assert!(store.path().as_str().ends_with(".hyde_deps"));
        store.close().unwrap();
    }

    #[test]
    fn mapping_operations() {
        let temp = TempDir::new().unwrap();
        let mut store = DependencyStore::open(&NormalizedPath::new(temp.path())).unwrap();

        assert!(store.insert("index.html", vec!["base.j2"]).is_none());
        assert!(store.contains_key("index.html"));
        assert_eq!(store.len(), 1);

        let previous = store.insert("index.html", vec!["base.j2", "nav.j2"]);
        assert_eq!(previous, Some(Value::from(vec!["base.j2"])));

        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["index.html"]);
        assert!(store.remove("index.html").is_some());
        assert!(store.is_empty());
        store.close().unwrap();
    }

    #[test]
    fn close_reports_save_error() {
        let temp = TempDir::new().unwrap();
        let root = NormalizedPath::new(temp.path());
        let mut store = DependencyStore::open_with_name(&root, "deps.toml").unwrap();
        store.insert("a", Value::Null);

        let err = store.close().unwrap_err();

        assert!(matches!(err, Error::Fs(site_fs::Error::ConfigSerialize { .. })), "{err:?}");
        assert!(!root.join("deps.toml").exists());
    }

    #[test]
    fn scalar_backing_file_is_rejected() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".hyde_deps"), "- a\n- b\n").unwrap();

        let err = DependencyStore::open(&NormalizedPath::new(temp.path())).unwrap_err();

        assert!(matches!(err, Error::NotAMapping { found: "sequence", .. }));
    }
}
