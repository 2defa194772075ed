//! Error types for site-model

use std::path::PathBuf;

/// Result type for site-model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving configuration, assembling
/// contexts or persisting dependencies
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem or document codec error from site-fs
    #[error(transparent)]
    Fs(#[from] site_fs::Error),

    /// An `extends` chain led back to a document already being resolved
    #[error("Configuration inheritance cycle: {chain}")]
    InheritanceCycle { chain: String },

    /// A document whose top level must be a mapping held something else
    #[error("Expected a mapping in {path}, found {found}")]
    NotAMapping { path: PathBuf, found: &'static str },
}
