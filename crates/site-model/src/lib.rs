//! Configuration and context engine for the site generator.
//!
//! This crate provides:
//!
//! - **Values and attribute trees**: [`Value`] documents and their
//!   [`Node`] wrapper with name-based member access
//! - **Configuration resolution**: [`SiteConfig`] merges defaults, an
//!   `extends` chain and overrides, and tracks staleness
//! - **Context assembly**: [`assemble_context`] combines explicit template
//!   data with provider files
//! - **Dependency persistence**: [`DependencyStore`] keeps the dependency map
//!   between build sessions
//!
//! ```text
//!          site-cli
//!              |
//!         site-model
//!              |
//!          site-fs
//! ```

pub mod config;
pub mod context;
pub mod deps;
pub mod error;
pub mod tree;
pub mod value;

pub use config::{ConfigResolver, ConfigSource, SiteConfig};
pub use context::assemble_context;
pub use deps::DependencyStore;
pub use error::{Error, Result};
pub use tree::{Attr, MergeSource, Node, unwrap, wrap};
pub use value::{Mapping, Value};

