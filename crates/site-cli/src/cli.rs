//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Site inspector - Resolve and inspect a static site's configuration
#[derive(Parser, Debug)]
#[command(name = "site")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Site root directory
    #[arg(short, long, global = true, env = "SITE_ROOT", default_value = ".")]
    pub site: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the effective site configuration
    ///
    /// Layers built-in defaults, the `extends` chain of the configuration
    /// file and any `--set` overrides.
    ///
    /// Examples:
    ///   site config                        # Resolve site.yaml
    ///   site config --file staging.yaml    # Resolve another document
    ///   site config --set mode=development # Override a setting
    Config {
        /// Configuration file, relative to the site root
        #[arg(short, long)]
        file: Option<String>,

        /// Override a setting (KEY=VALUE, VALUE parsed as YAML)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// List the files that contributed, outermost ancestor first
        #[arg(long)]
        sources: bool,
    },

    /// Show the derived content, media, layout and deploy directories
    Paths {
        /// Configuration file, relative to the site root
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Assemble the template context from the `context` section
    Context {
        /// Configuration file, relative to the site root
        #[arg(short, long)]
        file: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Inspect or edit the persisted dependency map
    Deps {
        #[command(subcommand)]
        action: DepsAction,
    },
}

/// Dependency map actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum DepsAction {
    /// List every resource with its dependencies
    List,

    /// Show the dependencies of one resource
    Show {
        /// Resource key
        key: String,
    },

    /// Record the dependencies of a resource, replacing any previous entry
    Add {
        /// Resource key
        key: String,

        /// Dependencies of the resource
        #[arg(required = true)]
        deps: Vec<String>,
    },

    /// Forget a resource
    Remove {
        /// Resource key
        key: String,
    },
}
