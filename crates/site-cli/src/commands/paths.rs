//! Derived directory display

use std::path::Path;

use colored::Colorize;

use crate::commands::config::open_config;
use crate::error::Result;

/// Display the resolved content, media, layout and deploy directories
pub fn run_paths(site: &Path, file: Option<&str>) -> Result<()> {
    let config = open_config(site, file, &[])?;

    println!("{}", "Site Paths".bold());
    println!();
    let rows = [
        ("Site root:", config.site_root().clone()),
        ("Content:", config.content_root_path()),
        ("Media:", config.media_root_path()),
        ("Layout:", config.layout_root_path()),
        ("Deploy:", config.deploy_root_path()),
    ];
    for (label, path) in rows {
        let marker = if path.exists() {
            "".normal()
        } else {
            " (missing)".dimmed()
        };
        println!("  {:<12} {}{}", label.dimmed(), path, marker);
    }

    Ok(())
}
