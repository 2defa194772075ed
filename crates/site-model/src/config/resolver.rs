//! Inheritance-chain resolution
//!
//! A configuration document may name a parent document with `extends`.
//! [`ConfigResolver`] follows that chain ancestor-first and folds the
//! documents together so that each child overrides its parent key by key.

use crate::value::{Mapping, Value};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use site_fs::{ConfigStore, DocumentFormat, NormalizedPath, SiteFile};

/// Key naming the parent document, relative to the site root.
pub const EXTENDS_KEY: &str = "extends";

/// A configuration file that contributed to a resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSource {
    /// Full path of the file that was read
    pub path: NormalizedPath,
    /// When the file was read
    pub loaded_at: DateTime<Utc>,
}

/// The merged document of one chain plus the files it came from.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Merged document, ancestors first, without built-in defaults
    pub document: Mapping,
    /// Files actually read, outermost ancestor first
    pub sources: Vec<ConfigSource>,
}

/// Resolves `extends` chains of configuration documents under a site root.
///
/// Missing documents are not errors: they contribute nothing and end the
/// chain at that link. A chain that comes back to a document it already
/// visited fails with [`Error::InheritanceCycle`].
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    site_root: NormalizedPath,
    store: ConfigStore,
}

impl ConfigResolver {
    /// Create a resolver for documents under `site_root`.
    pub fn new(site_root: NormalizedPath) -> Self {
        Self {
            site_root,
            store: ConfigStore::with_fallback(DocumentFormat::Yaml),
        }
    }

    /// Get the site root path
    pub fn site_root(&self) -> &NormalizedPath {
        &self.site_root
    }

    /// Resolve the chain starting at `config_file`, or at `site.yaml`
    /// when no file is named.
    ///
    /// # Errors
    ///
    /// Returns an error if a document in the chain cannot be parsed, is not a
    /// mapping, or the chain is cyclic.
    pub fn resolve(&self, config_file: Option<&str>) -> Result<Resolution> {
        let reference = config_file.unwrap_or(SiteFile::SiteConfig.as_str());
        let mut resolution = Resolution::default();
        let mut visiting = Vec::new();
        resolution.document = self.read_chain(reference, &mut visiting, &mut resolution.sources)?;
        Ok(resolution)
    }

    fn read_chain(
        &self,
        reference: &str,
        visiting: &mut Vec<NormalizedPath>,
        sources: &mut Vec<ConfigSource>,
    ) -> Result<Mapping> {
        let path = self.site_root.join(reference).clean();
        if !path.is_file() {
            tracing::debug!(%path, "Configuration document not found, ending chain");
            return Ok(Mapping::new());
        }

        if visiting.contains(&path) {
            let chain = visiting
                .iter()
                .chain(std::iter::once(&path))
                .map(NormalizedPath::as_str)
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(Error::InheritanceCycle { chain });
        }

        tracing::info!("Reading site configuration from [{}]", path);
        let conf = match self.store.load::<Value>(&path)? {
            Value::Mapping(map) => map,
            Value::Null => Mapping::new(),
            other => {
                return Err(Error::NotAMapping {
                    path: path.to_native(),
                    found: other.kind(),
                });
            }
        };

        let merged = match conf.get(EXTENDS_KEY).and_then(Value::as_str) {
            Some(parent) => {
                visiting.push(path.clone());
                let mut base = self.read_chain(parent, visiting, sources)?;
                visiting.pop();
                base.extend(conf);
                base
            }
            None => conf,
        };

        sources.push(ConfigSource {
            path,
            loaded_at: Utc::now(),
        });
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn resolver_with(files: &[(&str, &str)]) -> (TempDir, ConfigResolver) {
        let temp = TempDir::new().unwrap();
        for (name, content) in files {
            let path = temp.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }
        let resolver = ConfigResolver::new(NormalizedPath::new(temp.path()));
        (temp, resolver)
    }

    #[test]
    fn resolve_defaults_to_site_yaml() {
        let (_temp, resolver) = resolver_with(&[("site.yaml", "mode: development")]);

        let resolution = resolver.resolve(None).unwrap();

        assert_eq!(resolution.document["mode"], Value::from("development"));
        assert_eq!(resolution.sources.len(), 1);
        assert!(resolution.sources[0].path.as_str().ends_with("site.yaml"));
    }

    #[test]
    fn missing_document_resolves_empty() {
        let (_temp, resolver) = resolver_with(&[]);

        let resolution = resolver.resolve(Some("nope.yaml")).unwrap();

        assert!(resolution.document.is_empty());
        assert!(resolution.sources.is_empty());
    }

    #[test]
    fn empty_document_resolves_empty() {
        let (_temp, resolver) = resolver_with(&[("site.yaml", "")]);

        let resolution = resolver.resolve(None).unwrap();

        assert!(resolution.document.is_empty());
        assert_eq!(resolution.sources.len(), 1);
    }

    #[test]
    fn child_overrides_parent_and_sources_list_ancestors_first() {
        let (_temp, resolver) = resolver_with(&[
            ("base.yaml", "a: 2\nb: 1"),
            ("site.yaml", "extends: base.yaml\nb: 2\nc: 1"),
        ]);

        let resolution = resolver.resolve(None).unwrap();

        assert_eq!(resolution.document["a"], Value::Integer(2));
        assert_eq!(resolution.document["b"], Value::Integer(2));
        assert_eq!(resolution.document["c"], Value::Integer(1));
        let names: Vec<_> = resolution
            .sources
            .iter()
            .map(|s| s.path.file_name().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["base.yaml", "site.yaml"]);
    }

    #[test]
    fn extends_resolves_relative_to_site_root() {
        let (_temp, resolver) = resolver_with(&[
            ("shared/base.yaml", "from_base: true"),
            ("configs/site.yaml", "extends: shared/base.yaml"),
        ]);

        let resolution = resolver.resolve(Some("configs/site.yaml")).unwrap();

        assert_eq!(resolution.document["from_base"], Value::Bool(true));
    }

    #[test]
    fn self_reference_is_a_cycle() {
        let (_temp, resolver) = resolver_with(&[("site.yaml", "extends: ./site.yaml")]);

        let err = resolver.resolve(None).unwrap_err();

        assert!(matches!(err, Error::InheritanceCycle { .. }), "got {err:?}");
    }

    #[test]
    fn scalar_document_is_rejected() {
        let (_temp, resolver) = resolver_with(&[("site.yaml", "just a string")]);

        let err = resolver.resolve(None).unwrap_err();

        assert!(matches!(err, Error::NotAMapping { found: "string", .. }), "got {err:?}");
    }
}
