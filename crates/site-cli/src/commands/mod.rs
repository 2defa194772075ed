//! Command implementations for site-cli

pub mod config;
pub mod context;
pub mod deps;
pub mod output;
pub mod paths;

pub use config::run_config;
pub use context::run_context;
pub use deps::{run_deps_add, run_deps_list, run_deps_remove, run_deps_show};
pub use paths::run_paths;
