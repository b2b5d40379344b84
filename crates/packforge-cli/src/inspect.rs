//! Plugin archive inspection.

use anyhow::{Context, Result};
use packforge_bundle::manifest::to_sorted_json;
use packforge_bundle::{ModInfo, PluginArchive, extract_plugin};
use packforge_core::PluginKind;
use std::path::Path;

/// Print the record extracted from one archive and its manifest entry.
pub fn run(archive_path: &Path) -> Result<()> {
    let entry = extract_plugin(archive_path, PluginKind::Forge)
        .with_context(|| format!("Failed to open: {}", archive_path.display()))?;

    println!("Plugin: {} ({})", entry.name, entry.id);
    println!("Version: {}", entry.version);
    println!("Authors: {}", entry.authors);
    if let Some(platform_version) = &entry.platform_version {
        println!("Built for: {platform_version}");
    }
    println!("SHA-1: {}", entry.sha1);
    println!("MD5: {}", entry.md5);

    let archive = PluginArchive::open(archive_path)?;
    println!("\nFiles: {}", archive.list_files().len());

    println!("\nManifest entry:");
    println!(
        "{}",
        to_sorted_json(&ModInfo::from(&entry)).context("Failed to render manifest entry")?
    );

    Ok(())
}
