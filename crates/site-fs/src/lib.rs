//! Filesystem abstraction for the site engine
//!
//! Provides normalized path handling, text I/O with atomic writes,
//! modification-time queries and a format-aware document codec.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::{ConfigStore, DocumentFormat};
pub use constants::SiteFile;
pub use error::{Error, Result};
pub use path::NormalizedPath;
