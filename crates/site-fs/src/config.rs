//! Format-agnostic document loading and saving

use crate::{Error, NormalizedPath, Result, io};
use serde::{Serialize, de::DeserializeOwned};
use std::fmt;

/// Structured text formats understood by [`ConfigStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentFormat {
    #[default]
    Yaml,
    Json,
    Toml,
}

impl DocumentFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Parse `content` as this format. `path` only labels errors.
    pub fn parse<T: DeserializeOwned>(&self, content: &str, path: &NormalizedPath) -> Result<T> {
        let parsed = match self {
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| Error::ConfigParse {
            path: path.to_native(),
            format: self.to_string(),
            message,
        })
    }

    /// Render `value` as text in this format. `path` only labels errors.
    pub fn render<T: Serialize>(&self, value: &T, path: &NormalizedPath) -> Result<String> {
        let rendered = match self {
            Self::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
            Self::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
            Self::Toml => toml::to_string_pretty(value).map_err(|e| e.to_string()),
        };
        rendered.map_err(|message| Error::ConfigSerialize {
            path: path.to_native(),
            format: self.to_string(),
            message,
        })
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "YAML"),
            Self::Json => write!(f, "JSON"),
            Self::Toml => write!(f, "TOML"),
        }
    }
}

/// Format-agnostic document store.
///
/// Detects the format from the file extension and handles
/// serialization/deserialization transparently. Files whose extension
/// is not recognized use the fallback format when one is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore {
    fallback: Option<DocumentFormat>,
}

impl ConfigStore {
    /// Create a store that rejects unknown extensions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that treats unknown extensions as `format`.
    pub fn with_fallback(format: DocumentFormat) -> Self {
        Self {
            fallback: Some(format),
        }
    }

    /// Resolve the format used for `path`.
    ///
    /// - `.yaml`, `.yml` -> YAML
    /// - `.json` -> JSON
    /// - `.toml` -> TOML
    pub fn format_for(&self, path: &NormalizedPath) -> Result<DocumentFormat> {
        let extension = path.extension().unwrap_or("");
        DocumentFormat::from_extension(extension)
            .or(self.fallback)
            .ok_or_else(|| Error::UnsupportedFormat {
                extension: extension.to_string(),
            })
    }

    /// Load a document from a file.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let format = self.format_for(path)?;
        let content = io::read_text(path)?;
        format.parse(&content, path)
    }

    /// Save a document to a file.
    ///
    /// Format is determined from file extension.
    /// Uses atomic write to prevent corruption.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let format = self.format_for(path)?;
        let content = format.render(value, path)?;
        io::write_atomic(path, content.as_bytes())
    }
}
