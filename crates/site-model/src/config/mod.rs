//! Site configuration resolution
//!
//! Configuration comes from a chain of documents linked by `extends`,
//! layered over built-in defaults and under an optional override mapping.
//!
//! # Example
//!
//! ```ignore
//! use site_model::config::SiteConfig;
//!
//! let config = SiteConfig::open("/path/to/site", Some("site.yaml"), None)?;
//! println!("Deploying to {}", config.deploy_root_path());
//! if config.needs_refresh() {
//!     config.reload()?;
//! }
//! ```

pub mod defaults;
mod resolver;
mod site;

pub use defaults::defaults;
pub use resolver::{ConfigResolver, ConfigSource, EXTENDS_KEY, Resolution};
pub use site::SiteConfig;
