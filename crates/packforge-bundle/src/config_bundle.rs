//! Config directory bundling.
//!
//! The [`ConfigBundleBuilder`] collects every file under a directory and
//! writes them into one ZIP archive. Entry names are relative to the
//! directory's parent, so bundling `input/config` yields entries such as
//! `config/forge.cfg`.

use crate::{BundleError, BundleResult};
use std::fs::File;
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Builder for the config archive.
///
/// # Example
///
/// ```no_run
/// use packforge_bundle::ConfigBundleBuilder;
///
/// let builder = ConfigBundleBuilder::new("input/config")?;
/// for name in builder.entry_names() {
///     println!("Adding config file: {name}");
/// }
/// builder.write("output/modpack/latest/config.zip")?;
/// # Ok::<(), packforge_bundle::BundleError>(())
/// ```
#[derive(Debug)]
pub struct ConfigBundleBuilder {
    files: Vec<ConfigFile>,
}

/// A file to include in the archive.
#[derive(Debug)]
struct ConfigFile {
    /// Path within the archive, `/`-separated.
    archive_path: String,
    /// File on disk.
    source_path: PathBuf,
}

impl ConfigBundleBuilder {
    /// Collect every file below `source_dir`.
    ///
    /// Hidden and extension-less files are included. Files are visited in
    /// file-name order so repeated runs produce the same entry order.
    pub fn new<P: AsRef<Path>>(source_dir: P) -> BundleResult<Self> {
        let source_dir = source_dir.as_ref();
        if !source_dir.is_dir() {
            return Err(BundleError::FileNotFound(source_dir.display().to_string()));
        }
        let root = source_dir.parent().unwrap_or_else(|| Path::new(""));

        let mut files = Vec::new();
        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let source_path = entry.into_path();
            let archive_path = archive_path(&source_path, root)?;
            files.push(ConfigFile {
                archive_path,
                source_path,
            });
        }

        Ok(Self { files })
    }

    /// Archive entry names, in the order they will be written.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.archive_path.as_str())
    }

    /// Number of files that will be written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Write the archive, streaming each file from disk.
    ///
    /// An empty builder writes a valid archive with no entries.
    pub fn write<P: AsRef<Path>>(self, output_path: P) -> BundleResult<()> {
        let file = File::create(output_path.as_ref())?;
        let mut zip = ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for config_file in &self.files {
            tracing::debug!(entry = %config_file.archive_path, "adding config file");
            zip.start_file(config_file.archive_path.as_str(), options)?;
            let mut source = File::open(&config_file.source_path)?;
            io::copy(&mut source, &mut zip)?;
        }

        zip.finish()?;

        Ok(())
    }
}

/// Entry name for `path` relative to `root`, joined with `/`.
fn archive_path(path: &Path, root: &Path) -> BundleResult<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        BundleError::Io(io::Error::other(format!(
            "{} is outside {}",
            path.display(),
            root.display()
        )))
    })?;

    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    Ok(parts.join("/"))
}
