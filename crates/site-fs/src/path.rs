//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Provides consistent path handling across platforms by normalizing
/// all paths to forward slashes internally and converting to
/// platform-native format only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let normalized = path_str.replace('\\', "/");
        Self { inner: normalized }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    ///
    /// An absolute segment replaces the base, mirroring [`Path::join`].
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        if Path::new(&segment_normalized).is_absolute() || segment_normalized.starts_with('/') {
            return Self {
                inner: segment_normalized,
            };
        }
        if self.inner.is_empty() {
            return Self {
                inner: segment_normalized,
            };
        }
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self { inner: joined }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            _ => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }

    /// Check if this path is absolute on the current platform.
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/') || self.to_native().is_absolute()
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }

    /// Fully expand this path.
    ///
    /// A leading `~` becomes the home directory, relative paths are anchored
    /// at the current working directory, `.` and `..` are folded lexically,
    /// and paths that exist are canonicalized.
    pub fn expanded(&self) -> Self {
        let mut inner = self.inner.clone();
        if inner == "~" || inner.starts_with("~/") {
            if let Some(home) = dirs::home_dir() {
                let home = Self::new(home);
                inner = format!("{}{}", home.inner.trim_end_matches('/'), &inner[1..]);
            }
        }

        let mut path = Self { inner };
        if !path.is_absolute() {
            if let Ok(cwd) = std::env::current_dir() {
                path = Self::new(cwd).join(path.as_str());
            }
        }

        let cleaned = path.clean();
        match dunce::canonicalize(cleaned.to_native()) {
            Ok(canonical) => Self::new(canonical),
            Err(_) => cleaned,
        }
    }

    /// Fold `.` and `..` components and collapse repeated separators
    /// without touching the filesystem.
    pub fn clean(&self) -> Self {
        let absolute = self.inner.starts_with('/');
        let mut parts: Vec<&str> = Vec::new();
        for component in self.inner.split('/') {
            match component {
                "" | "." => {}
                ".." => match parts.last() {
                    Some(&last) if last != ".." => {
                        parts.pop();
                    }
                    _ if absolute => {}
                    _ => parts.push(".."),
                },
                other => parts.push(other),
            }
        }

        let body = parts.join("/");
        let inner = match (absolute, body.is_empty()) {
            (true, _) => format!("/{body}"),
            (false, true) => ".".to_string(),
            (false, false) => body,
        };
        Self { inner }
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
