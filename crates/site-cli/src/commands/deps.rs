//! Dependency map commands

use std::path::Path;

use colored::Colorize;
use site_fs::NormalizedPath;
use site_model::{DependencyStore, Value};

use crate::error::{CliError, Result};

fn open_store(site: &Path) -> Result<DependencyStore> {
    Ok(DependencyStore::open(&NormalizedPath::new(site))?)
}

fn describe(value: &Value) -> String {
    match value.as_items() {
        Some(items) => items
            .iter()
            .map(|item| item.as_str().map_or_else(|| format!("{:?}", item), str::to_string))
            .collect::<Vec<_>>()
            .join(", "),
        None => value
            .as_str()
            .map_or_else(|| format!("{:?}", value), str::to_string),
    }
}

/// List every recorded resource
pub fn run_deps_list(site: &Path) -> Result<()> {
    let store = open_store(site)?;

    if store.is_empty() {
        println!("{}", "No dependencies recorded.".dimmed());
    } else {
        println!("{}", "Dependencies".bold());
        println!();
        for (key, deps) in &store {
            println!("  {} {}", key.cyan(), describe(deps).dimmed());
        }
    }

    store.close()?;
    Ok(())
}

/// Show the dependencies of one resource
pub fn run_deps_show(site: &Path, key: &str) -> Result<()> {
    let store = open_store(site)?;
    let deps = store
        .get(key)
        .ok_or_else(|| CliError::user(format!("No dependencies recorded for '{}'", key)))?;

    match deps.as_items() {
        Some(items) => {
            for item in items {
                println!("{}", describe(item));
            }
        }
        None => println!("{}", describe(deps)),
    }

    store.close()?;
    Ok(())
}

/// Record the dependencies of a resource
pub fn run_deps_add(site: &Path, key: &str, deps: &[String]) -> Result<()> {
    let mut store = open_store(site)?;
    let value = Value::Sequence(deps.iter().map(|d| Value::from(d.as_str())).collect());
    let replaced = store.insert(key, value).is_some();

    if !store.close()? {
        return Err(CliError::user(format!(
            "Site directory {} does not exist",
            site.display()
        )));
    }
    let verb = if replaced { "Updated" } else { "Added" };
    println!("{} {} ({} dependencies)", verb.green(), key, deps.len());
    Ok(())
}

/// Forget a resource
pub fn run_deps_remove(site: &Path, key: &str) -> Result<()> {
    let mut store = open_store(site)?;
    if store.remove(key).is_none() {
        store.close()?;
        return Err(CliError::user(format!("No dependencies recorded for '{}'", key)));
    }

    store.close()?;
    println!("{} {}", "Removed".green(), key);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_joins_string_items() {
        let value = Value::from(vec!["base.j2", "nav.j2"]);
        assert_eq!(describe(&value), "base.j2, nav.j2");
    }

    #[test]
    fn describe_scalar() {
        assert_eq!(describe(&Value::from("only.j2")), "only.j2");
    }
}
