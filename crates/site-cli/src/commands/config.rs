//! Effective configuration display

use std::path::Path;

use colored::Colorize;
use site_model::{Mapping, SiteConfig, Value};

use crate::commands::output::{print_json, print_yaml};
use crate::error::{CliError, Result};

/// Parse a `KEY=VALUE` override. The value is read as YAML so that
/// `plugins=[a, b]` yields a list; text that is not valid YAML is kept as
/// a plain string.
pub fn parse_override(raw: &str) -> Result<(String, Value)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::user(format!("Invalid override '{}': expected KEY=VALUE", raw)))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::user(format!("Invalid override '{}': empty key", raw)));
    }
    let value = Value::from_yaml_str(value).unwrap_or_else(|_| Value::from(value));
    Ok((key.to_string(), value))
}

/// Load the configuration for `site`, applying overrides when given.
pub fn open_config(site: &Path, file: Option<&str>, overrides: &[String]) -> Result<SiteConfig> {
    let overrides = if overrides.is_empty() {
        None
    } else {
        Some(
            overrides
                .iter()
                .map(|raw| parse_override(raw))
                .collect::<Result<Mapping>>()?,
        )
    };
    Ok(SiteConfig::open(site, file, overrides)?)
}

/// Display the effective site configuration
pub fn run_config(
    site: &Path,
    file: Option<&str>,
    overrides: &[String],
    json: bool,
    show_sources: bool,
) -> Result<()> {
    let config = open_config(site, file, overrides)?;
    let settings = Value::Mapping(config.to_mapping());

    if json {
        let mut output = Mapping::new();
        output.insert("settings".into(), settings);
        if show_sources {
            let sources: Vec<Value> = config
                .sources()
                .iter()
                .map(|source| Value::from(source.path.as_str()))
                .collect();
            output.insert("sources".into(), sources.into());
        }
        return print_json(&Value::Mapping(output));
    }

    if show_sources {
        println!("{}", "Sources".bold());
        if config.sources().is_empty() {
            println!("  {}", "(defaults only)".dimmed());
        }
        for source in config.sources() {
            println!("  {} {}", "+".green(), source.path);
        }
        println!();
    }

    print_yaml(&settings, config.site_root())
}
