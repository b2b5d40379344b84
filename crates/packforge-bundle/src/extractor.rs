//! Plugin archive loading.
//!
//! [`extract_plugin`] opens one plugin archive, reads its descriptor if it
//! has one, and produces a [`PluginEntry`] with both content digests filled
//! in.

use crate::digest::digest_file;
use crate::{BundleError, BundleResult, DESCRIPTOR_FILE, Descriptor};
use packforge_core::{PluginEntry, PluginKind};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use zip::ZipArchive;
use zip::result::ZipError;

/// An open plugin archive.
///
/// # Example
///
/// ```no_run
/// use packforge_bundle::PluginArchive;
///
/// let mut archive = PluginArchive::open("input/mods-fml/ironchest.jar")?;
/// if let Some(descriptor) = archive.descriptor()? {
///     println!("{} {}", descriptor.id, descriptor.version);
/// }
/// # Ok::<(), packforge_bundle::BundleError>(())
/// ```
#[derive(Debug)]
pub struct PluginArchive {
    path: PathBuf,
    archive: ZipArchive<File>,
}

impl PluginArchive {
    /// Open a plugin archive for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> BundleResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(BundleError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let archive = ZipArchive::new(file).map_err(|e| BundleError::InvalidArchive {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            archive,
        })
    }

    /// Base file name of the archive.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Check if the archive carries a descriptor.
    #[must_use]
    pub fn has_descriptor(&self) -> bool {
        self.has_file(DESCRIPTOR_FILE)
    }

    /// Read and normalize the descriptor, if present.
    ///
    /// An absent descriptor is `Ok(None)`. A present but unparsable one is
    /// an error.
    pub fn descriptor(&mut self) -> BundleResult<Option<Descriptor>> {
        if !self.has_descriptor() {
            return Ok(None);
        }

        let contents = self.read_file(DESCRIPTOR_FILE)?;
        Descriptor::from_json(&contents)
            .map(Some)
            .map_err(|reason| BundleError::MalformedDescriptor {
                path: self.path.display().to_string(),
                reason,
            })
    }

    /// Read a file from the archive as bytes.
    pub fn read_file(&mut self, name: &str) -> BundleResult<Vec<u8>> {
        let path = self.path.display().to_string();
        let mut file = self.archive.by_name(name).map_err(|e| match e {
            ZipError::FileNotFound => BundleError::FileNotFound(format!("{name} in {path}")),
            other => BundleError::InvalidArchive {
                path: path.clone(),
                reason: format!("{name}: {other}"),
            },
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| BundleError::InvalidArchive {
                path: path.clone(),
                reason: format!("{name}: {e}"),
            })?;
        Ok(contents)
    }

    /// List all files in the archive.
    #[must_use]
    pub fn list_files(&self) -> Vec<String> {
        (0..self.archive.len())
            .filter_map(|i| self.archive.name_for_index(i).map(String::from))
            .collect()
    }

    /// Check if a file exists in the archive.
    #[must_use]
    pub fn has_file(&self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }
}

/// Build a plugin record from one archive.
///
/// Without a descriptor the archive's file name stands in for the
/// identifier and display name. Side flags start cleared; the caller sets
/// them.
pub fn extract_plugin<P: AsRef<Path>>(path: P, kind: PluginKind) -> BundleResult<PluginEntry> {
    let path = path.as_ref();
    let mut archive = PluginArchive::open(path)?;
    let file_name = archive.file_name();

    let digests = digest_file(path)?;
    tracing::debug!(file = %file_name, sha1 = %digests.sha1, md5 = %digests.md5, "computed digests");

    let mut entry = PluginEntry::from_file_name(&file_name, kind, digests.sha1, digests.md5);

    match archive.descriptor()? {
        Some(descriptor) => {
            entry.id = descriptor.id;
            entry.name = descriptor.name;
            entry.version = descriptor.version;
            entry.authors = descriptor.authors;
            entry.platform_version = descriptor.platform_version;
        }
        None => {
            tracing::warn!(file = %file_name, "plugin has no {DESCRIPTOR_FILE}, using file name as identifier");
        }
    }

    Ok(entry)
}
