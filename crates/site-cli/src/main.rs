//! Site inspector CLI
//!
//! Resolves a site's layered configuration and shows what a build would see:
//! the effective settings, derived directories, template context and the
//! persisted dependency map.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands, DepsAction};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(&cli.site, cmd),
        None => {
            println!("{} Site inspector", "site".green().bold());
            println!();
            println!("Run {} for available commands.", "site --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(site: &std::path::Path, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Config {
            file,
            overrides,
            json,
            sources,
        } => commands::run_config(site, file.as_deref(), &overrides, json, sources),
        Commands::Paths { file } => commands::run_paths(site, file.as_deref()),
        Commands::Context { file, json } => commands::run_context(site, file.as_deref(), json),
        Commands::Deps { action } => match action {
            DepsAction::List => commands::run_deps_list(site),
            DepsAction::Show { key } => commands::run_deps_show(site, &key),
            DepsAction::Add { key, deps } => commands::run_deps_add(site, &key, &deps),
            DepsAction::Remove { key } => commands::run_deps_remove(site, &key),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_error_user() {
        let error = CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }

    #[test]
    fn test_config_with_temp_site() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("site.yaml"), "mode: development\n").unwrap();

        let result = execute_command(
            temp_dir.path(),
            Commands::Config {
                file: None,
                overrides: vec![],
                json: true,
                sources: true,
            },
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_deps_add_then_remove() {
        let temp_dir = TempDir::new().unwrap();

        execute_command(
            temp_dir.path(),
            Commands::Deps {
                action: DepsAction::Add {
                    key: "a".into(),
                    deps: vec!["b".into()],
                },
            },
        )
        .unwrap();
        assert!(temp_dir.path().join(".hyde_deps").is_file());

        let result = execute_command(
            temp_dir.path(),
            Commands::Deps {
                action: DepsAction::Remove { key: "a".into() },
            },
        );
        assert!(result.is_ok());
    }
}
