//! Well-known file names inside a site root.

use std::path::Path;

/// Standard site files the engine reads or writes by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteFile {
    /// The site configuration document (`site.yaml`)
    SiteConfig,
    /// The persisted dependency map (`.hyde_deps`)
    Dependencies,
    /// Per-node metadata document (`meta.yaml`)
    NodeMeta,
}

impl SiteFile {
    /// Get the string representation of the file name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SiteConfig => "site.yaml",
            Self::Dependencies => ".hyde_deps",
            Self::NodeMeta => "meta.yaml",
        }
    }
}

impl AsRef<Path> for SiteFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for SiteFile {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for SiteFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_file_names() {
        assert_eq!(SiteFile::SiteConfig.as_str(), "site.yaml");
        assert_eq!(SiteFile::Dependencies.to_string(), ".hyde_deps");
        let path: &Path = SiteFile::NodeMeta.as_ref();
        assert_eq!(path, Path::new("meta.yaml"));
    }
}
