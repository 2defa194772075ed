//! Template context display

use std::path::Path;

use site_model::{Attr, Node, Value, assemble_context};

use crate::commands::config::open_config;
use crate::commands::output::{print_json, print_yaml};
use crate::error::Result;

/// Assemble and display the context described by the `context` section
pub fn run_context(site: &Path, file: Option<&str>, json: bool) -> Result<()> {
    let config = open_config(site, file, &[])?;
    let empty = Node::new();
    let section = config
        .get("context")
        .and_then(Attr::as_node)
        .unwrap_or(&empty);

    let context = Value::Mapping(assemble_context(config.site_root(), section)?);
    if json {
        print_json(&context)
    } else {
        print_yaml(&context, config.site_root())
    }
}
