//! Configuration loading and validation

use anyhow::{Context, Result};
use packforge_core::PackConfig;
use std::path::Path;

/// Resolve the build configuration.
///
/// An explicit path must exist. Without one, `packforge.toml` in the input
/// directory is used if present, otherwise defaults.
pub fn load_config(input_dir: &Path, explicit: Option<&Path>) -> Result<PackConfig> {
    match explicit {
        Some(path) => PackConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => PackConfig::load_from_dir(input_dir)
            .with_context(|| format!("Failed to load config from {}", input_dir.display())),
    }
}

/// Check command implementation
pub fn run(path: &Path) -> Result<()> {
    println!("Checking config: {}", path.display());

    let config = PackConfig::from_file(path)
        .with_context(|| format!("Failed to load config: {}", path.display()))?;
    config.validate()?;

    println!("✓ Platform version: {}", config.platform_version);
    println!("✓ Log level: {}", config.log_level()?);
    if let Some(args) = &config.additional_arguments {
        println!("✓ Additional arguments: {args}");
    }
    println!("✓ Client-only plugins: {}", config.sides.client.len());
    println!("✓ Server-only plugins: {}", config.sides.server.len());
    println!("\nConfig is valid!");

    Ok(())
}
