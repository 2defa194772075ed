//! The effective site configuration
//!
//! [`SiteConfig`] layers built-in defaults, the resolved `extends` chain and
//! an optional override mapping into one [`Node`], remembers which files
//! contributed, and can tell when those files changed on disk.

use super::defaults::{self, defaults};
use super::resolver::{ConfigResolver, ConfigSource};
use crate::Result;
use crate::tree::{Attr, Node};
use crate::value::Mapping;
use chrono::{DateTime, Utc};
use site_fs::{NormalizedPath, io};
use std::time::SystemTime;

/// Resolved configuration for one site.
///
/// Precedence, lowest to highest:
/// 1. Built-in defaults
/// 2. The outermost `extends` ancestor, then each descendant in turn
/// 3. The requested document
/// 4. The caller-supplied override mapping
///
/// Overrides are applied once, by [`SiteConfig::open`]. [`SiteConfig::reload`]
/// merges the re-resolved chain on top of the current tree and never removes
/// keys, so settings deleted from a file keep their previous value.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    resolver: ConfigResolver,
    config_file: Option<String>,
    tree: Node,
    sources: Vec<ConfigSource>,
    load_time: Option<DateTime<Utc>>,
}

impl SiteConfig {
    /// Load `site.yaml` under `site_root` without overrides.
    ///
    /// A resolver opened this way is not bound to a file, so
    /// [`reload`](Self::reload) does nothing.
    pub fn load(site_root: impl Into<NormalizedPath>) -> Result<Self> {
        Self::open(site_root, None, None)
    }

    /// Resolve `config_file` (or `site.yaml`) under `site_root` and apply
    /// `overrides` on top.
    ///
    /// # Errors
    ///
    /// Returns an error if a document in the chain is malformed, is not a
    /// mapping, or the chain is cyclic. Missing documents are not errors.
    pub fn open(
        site_root: impl Into<NormalizedPath>,
        config_file: Option<&str>,
        overrides: Option<Mapping>,
    ) -> Result<Self> {
        let mut config = Self {
            resolver: ConfigResolver::new(site_root.into()),
            config_file: config_file.map(str::to_string),
            tree: Node::from_mapping(defaults()),
            sources: Vec::new(),
            load_time: None,
        };

        let document = config.resolve()?;
        config.tree.merge_into(document);
        if let Some(overrides) = overrides {
            config.tree.merge_into(overrides);
        }
        Ok(config)
    }

    fn resolve(&mut self) -> Result<Mapping> {
        let resolution = self.resolver.resolve(self.config_file.as_deref())?;
        self.sources = resolution.sources;
        self.load_time = Some(Utc::now());
        Ok(resolution.document)
    }

    /// Re-read the configuration files and merge them into the tree.
    ///
    /// Does nothing when no configuration file was named at construction.
    pub fn reload(&mut self) -> Result<()> {
        if self.config_file.is_none() {
            return Ok(());
        }
        let document = self.resolve()?;
        self.tree.merge_into(document);
        Ok(())
    }

    /// Whether the configuration should be reloaded.
    ///
    /// True when no file has been read, or when any contributing file was
    /// modified after the last load.
    pub fn needs_refresh(&self) -> bool {
        let Some(load_time) = self.load_time else {
            return true;
        };
        if self.sources.is_empty() {
            return true;
        }
        let since = SystemTime::from(load_time);
        self.sources
            .iter()
            .any(|source| io::has_changed_since(&source.path, since))
    }

    /// Latest on-disk modification time across the contributing files.
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.sources
            .iter()
            .filter_map(|source| io::modified(&source.path).ok())
            .max()
            .map(DateTime::<Utc>::from)
    }

    /// When the configuration was last resolved.
    pub fn load_time(&self) -> Option<DateTime<Utc>> {
        self.load_time
    }

    /// Files read by the last resolution, outermost ancestor first.
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// The configuration file this resolver is bound to, if any.
    pub fn config_file(&self) -> Option<&str> {
        self.config_file.as_deref()
    }

    pub fn site_root(&self) -> &NormalizedPath {
        self.resolver.site_root()
    }

    /// The effective settings tree.
    pub fn node(&self) -> &Node {
        &self.tree
    }

    pub fn get(&self, key: &str) -> Option<&Attr> {
        self.tree.get(key)
    }

    pub fn lookup(&self, path: &str) -> Option<&Attr> {
        self.tree.lookup(path)
    }

    /// The effective settings as a plain mapping.
    pub fn to_mapping(&self) -> Mapping {
        self.tree.to_mapping()
    }

    fn str_setting<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.tree.get(key).and_then(Attr::as_str).unwrap_or(default)
    }

    pub fn mode(&self) -> &str {
        self.str_setting("mode", defaults::DEFAULT_MODE)
    }

    pub fn content_root(&self) -> &str {
        self.str_setting("content_root", defaults::DEFAULT_CONTENT_ROOT)
    }

    pub fn deploy_root(&self) -> &str {
        self.str_setting("deploy_root", defaults::DEFAULT_DEPLOY_ROOT)
    }

    pub fn media_root(&self) -> &str {
        self.str_setting("media_root", defaults::DEFAULT_MEDIA_ROOT)
    }

    pub fn layout_root(&self) -> &str {
        self.str_setting("layout_root", defaults::DEFAULT_LAYOUT_ROOT)
    }

    pub fn media_url(&self) -> &str {
        self.str_setting("media_url", defaults::DEFAULT_MEDIA_URL)
    }

    pub fn base_url(&self) -> &str {
        self.str_setting("base_url", defaults::DEFAULT_BASE_URL)
    }

    pub fn not_found(&self) -> &str {
        self.str_setting("not_found", defaults::DEFAULT_NOT_FOUND)
    }

    /// Characters left unescaped when encoding URLs, if configured.
    pub fn encode_safe(&self) -> Option<&str> {
        self.tree.get("encode_safe").and_then(Attr::as_str)
    }

    pub fn plugins(&self) -> Vec<&str> {
        self.tree.get("plugins").map(Attr::strings).unwrap_or_default()
    }

    /// Glob patterns of files to skip.
    pub fn ignore(&self) -> Vec<&str> {
        self.tree.get("ignore").map(Attr::strings).unwrap_or_default()
    }

    /// Content paths copied verbatim, without processing.
    pub fn simple_copy(&self) -> Vec<&str> {
        self.tree.get("simple_copy").map(Attr::strings).unwrap_or_default()
    }

    /// Name of the per-node metadata file.
    pub fn node_meta(&self) -> &str {
        self.tree
            .lookup("meta.nodemeta")
            .and_then(Attr::as_str)
            .unwrap_or(site_fs::SiteFile::NodeMeta.as_str())
    }

    fn expand(&self, relative: &str) -> NormalizedPath {
        self.site_root().join(relative).expanded()
    }

    /// Deploy root, relative to the site root.
    pub fn deploy_root_path(&self) -> NormalizedPath {
        self.expand(self.deploy_root())
    }

    /// Content root, relative to the site root.
    pub fn content_root_path(&self) -> NormalizedPath {
        self.expand(self.content_root())
    }

    /// Media root, relative to the content root.
    pub fn media_root_path(&self) -> NormalizedPath {
        let nested = NormalizedPath::new(self.content_root()).join(self.media_root());
        self.expand(nested.as_str())
    }

    /// Layout root, relative to the site root.
    pub fn layout_root_path(&self) -> NormalizedPath {
        self.expand(self.layout_root())
    }
}

impl AsRef<Node> for SiteConfig {
    fn as_ref(&self) -> &Node {
        &self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_apply_without_any_file() {
        let temp = TempDir::new().unwrap();
        let config = SiteConfig::load(temp.path()).unwrap();

        assert_eq!(config.mode(), "production");
        assert_eq!(config.base_url(), "/");
        assert_eq!(config.media_url(), "/media");
        assert_eq!(config.not_found(), "404.html");
        assert_eq!(config.node_meta(), "meta.yaml");
        assert_eq!(config.ignore(), vec!["*~", "*.bak", ".hg", ".git", ".svn"]);
        assert!(config.plugins().is_empty());
        assert!(config.encode_safe().is_none());
        assert!(config.sources().is_empty());
        assert!(config.last_modified().is_none());
    }

    #[test]
    fn non_string_root_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("site.yaml"), "content_root: 5").unwrap();

        let config = SiteConfig::load(temp.path()).unwrap();

        assert_eq!(config.content_root(), "content");
        assert_eq!(config.get("content_root"), Some(&Attr::Integer(5)));
    }

    #[test]
    fn reload_without_bound_file_is_noop() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("site.yaml"), "mode: development").unwrap();
        let mut config = SiteConfig::load(temp.path()).unwrap();

        std::fs::write(temp.path().join("site.yaml"), "mode: staging").unwrap();
        config.reload().unwrap();

        assert_eq!(config.mode(), "development");
    }
}
