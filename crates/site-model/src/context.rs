//! Template context assembly
//!
//! A context section in the configuration looks like:
//!
//! ```yaml
//! context:
//!   data:
//!     title: My site
//!   providers:
//!     nav: data/nav.yaml
//! ```
//!
//! `data` is copied into the context as is. Each provider names a file,
//! relative to the site root, whose parsed content is placed in the context
//! under the provider's name. Providers are applied after `data` and win
//! on key collisions.

use crate::Result;
use crate::tree::Node;
use crate::value::{Mapping, Value};
use site_fs::{ConfigStore, DocumentFormat, NormalizedPath};

/// Build a render context from a context node.
///
/// A missing or non-mapping `data` or `providers` member contributes
/// nothing, and so does a provider whose file does not exist.
///
/// # Errors
///
/// Returns an error only if a provider file exists but cannot be read
/// or parsed.
pub fn assemble_context(site_root: &NormalizedPath, ctx: &Node) -> Result<Mapping> {
    let mut context = Mapping::new();

    if let Some(data) = ctx.get("data").and_then(|attr| attr.as_node()) {
        context.extend(data.to_mapping());
    }

    let Some(providers) = ctx.get("providers").and_then(|attr| attr.as_node()) else {
        return Ok(context);
    };

    let store = ConfigStore::with_fallback(DocumentFormat::Yaml);
    for (name, resource) in providers.iter() {
        let Some(resource) = resource.as_str() else {
            tracing::debug!(provider = name, "Provider resource is not a path, skipping");
            continue;
        };

        let path = site_root.join(resource);
        if !path.is_file() {
            tracing::debug!(provider = name, %path, "Provider resource not found, skipping");
            continue;
        }

        tracing::debug!(provider = name, %path, "Loading context provider");
        let data: Value = store.load(&path)?;
        context.insert(name.to_string(), data);
    }

    Ok(context)
}
