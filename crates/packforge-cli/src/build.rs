//! Pack build pipeline.
//!
//! Reads the input directory, populates a [`Pack`], and writes
//! `modpack/latest/pack.json` (plus `config.zip` when there is a config
//! directory) under a freshly reset output directory.

use anyhow::{Context, Result};
use packforge_bundle::{
    CONFIG_BUNDLE_FILE, ConfigBundleBuilder, MANIFEST_FILE, Manifest, PACK_DIR, extract_plugin,
};
use packforge_core::{LibraryReference, Pack, PackConfig, PluginKind};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Input directory holding Forge mods.
pub const FORGE_MODS_DIR: &str = "mods-fml";

/// Input file listing library coordinates.
pub const LIBRARIES_FILE: &str = "libraries.txt";

/// Input file listing tweak classes.
pub const TWEAKS_FILE: &str = "tweaks.txt";

/// Input directory bundled into the config archive.
pub const CONFIG_DIR: &str = "config";

/// Everything a build run needs.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub config: PackConfig,
    /// Seconds since the UNIX epoch, recorded as the config archive version.
    pub build_time: u64,
}

impl BuildOptions {
    /// Options stamped with the current time.
    pub fn new(input_dir: PathBuf, output_dir: PathBuf, config: PackConfig) -> Self {
        let build_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        Self {
            input_dir,
            output_dir,
            config,
            build_time,
        }
    }

    /// Directory the manifest and config archive are written to.
    pub fn pack_dir(&self) -> PathBuf {
        self.output_dir.join(PACK_DIR)
    }
}

/// What a build run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub plugins: usize,
    pub libraries: usize,
    pub tweaks: usize,
    /// Number of files in the config archive, if one was written.
    pub config_files: Option<usize>,
    pub manifest_path: PathBuf,
}

impl fmt::Display for BuildSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✓ Plugins: {}", self.plugins)?;
        writeln!(f, "✓ Libraries: {}", self.libraries)?;
        writeln!(f, "✓ Tweaks: {}", self.tweaks)?;
        match self.config_files {
            Some(count) => writeln!(f, "✓ Config files: {count}")?,
            None => writeln!(f, "✓ Config files: none")?,
        }
        write!(f, "Manifest written: {}", self.manifest_path.display())
    }
}

/// Run a full build.
///
/// Any failure aborts the run before the manifest is written.
pub fn run(options: &BuildOptions) -> Result<BuildSummary> {
    let input = options.input_dir.as_path();
    let pack_dir = options.pack_dir();

    reset_output(&options.output_dir, &pack_dir)?;

    let mut pack = Pack::new(options.config.platform_version.clone());
    if let Some(args) = &options.config.additional_arguments {
        pack.set_additional_arguments(args.clone());
    }

    add_plugins(
        &mut pack,
        &input.join(FORGE_MODS_DIR),
        PluginKind::Forge,
        &options.config,
    )?;
    add_libraries(&mut pack, &input.join(LIBRARIES_FILE))?;
    add_tweaks(&mut pack, &input.join(TWEAKS_FILE))?;
    let config_files = add_config_bundle(&mut pack, &input.join(CONFIG_DIR), &pack_dir)?;

    let manifest_path = pack_dir.join(MANIFEST_FILE);
    Manifest::from_pack(&pack, options.build_time)
        .write(&manifest_path)
        .with_context(|| format!("Failed to write manifest: {}", manifest_path.display()))?;
    tracing::info!(path = %manifest_path.display(), "manifest written");

    Ok(BuildSummary {
        plugins: pack.plugins.len(),
        libraries: pack.libraries.len(),
        tweaks: pack.tweaks.len(),
        config_files,
        manifest_path,
    })
}

/// Remove the output directory and recreate the pack directory inside it.
fn reset_output(output_dir: &Path, pack_dir: &Path) -> Result<()> {
    if output_dir.exists() {
        fs::remove_dir_all(output_dir)
            .with_context(|| format!("Failed to remove {}", output_dir.display()))?;
    }
    fs::create_dir_all(pack_dir)
        .with_context(|| format!("Failed to create {}", pack_dir.display()))?;
    Ok(())
}

/// Archive paths in a plugin directory, ordered by file name.
fn list_plugin_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = fs::read_dir(dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();
    Ok(paths)
}

fn add_plugins(pack: &mut Pack, dir: &Path, kind: PluginKind, config: &PackConfig) -> Result<()> {
    if !dir.exists() {
        tracing::debug!(dir = %dir.display(), "no plugin directory");
        return Ok(());
    }

    for path in list_plugin_dir(dir)? {
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("Processing plugin: {display_name}");

        let entry = extract_plugin(&path, kind)
            .with_context(|| format!("Failed to process plugin: {}", path.display()))?;
        let (for_client, for_server) = config.sides_for(&entry.file_name);
        let entry = entry.with_sides(for_client, for_server);

        if let Some(declared) = &entry.platform_version
            && declared != &pack.platform_version
        {
            tracing::warn!(
                plugin = %entry.id,
                declared = %declared,
                pack = %pack.platform_version,
                "plugin targets a different platform version"
            );
        }
        tracing::info!(plugin = %entry.id, version = %entry.version, kind = %kind, "added plugin");
        pack.add_plugin(entry);
    }

    Ok(())
}

fn add_libraries(pack: &mut Pack, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let libraries = LibraryReference::parse_list(&content)
        .with_context(|| format!("Invalid library line in {}", path.display()))?;
    for library in libraries {
        println!("Adding library: {library}");
        pack.add_library(library);
    }

    Ok(())
}

fn add_tweaks(pack: &mut Pack, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    for tweak in Pack::parse_tweak_list(&content) {
        println!("Activating tweak: {tweak}");
        pack.add_tweak(tweak);
    }

    Ok(())
}

/// Bundle the config directory, returning the number of files written.
fn add_config_bundle(pack: &mut Pack, config_dir: &Path, pack_dir: &Path) -> Result<Option<usize>> {
    if !config_dir.is_dir() {
        if config_dir.exists() {
            tracing::warn!(path = %config_dir.display(), "config path is not a directory, skipping");
        }
        return Ok(None);
    }

    let builder = ConfigBundleBuilder::new(config_dir)
        .with_context(|| format!("Failed to scan {}", config_dir.display()))?;
    for name in builder.entry_names() {
        println!("Adding config file: {name}");
    }
    let count = builder.len();

    let archive_path = pack_dir.join(CONFIG_BUNDLE_FILE);
    builder
        .write(&archive_path)
        .with_context(|| format!("Failed to write {}", archive_path.display()))?;
    pack.set_config_bundle(CONFIG_BUNDLE_FILE);

    Ok(Some(count))
}

#[cfg(test)]
#[path = "build/build_tests.rs"]
mod build_tests;
