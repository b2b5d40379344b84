//! Plugin metadata extraction and pack manifest assembly
//!
//! This crate turns a directory of plugin archives and a config directory
//! into the two files an updater client downloads:
//!
//! ```text
//! output/
//! └── modpack/
//!     └── latest/
//!         ├── pack.json      # manifest: plugins, libraries, tweaks, config
//!         └── config.zip     # every file under input/config/
//! ```
//!
//! # Example
//!
//! ```no_run
//! use packforge_bundle::{ConfigBundleBuilder, Manifest, extract_plugin};
//! use packforge_core::{Pack, PluginKind};
//!
//! let mut pack = Pack::new("1.6.4");
//! pack.add_plugin(extract_plugin("input/mods-fml/ironchest.jar", PluginKind::Forge)?);
//!
//! ConfigBundleBuilder::new("input/config")?.write("output/modpack/latest/config.zip")?;
//! pack.set_config_bundle("config.zip");
//!
//! Manifest::from_pack(&pack, 1_700_000_000).write("output/modpack/latest/pack.json")?;
//! # Ok::<(), packforge_bundle::BundleError>(())
//! ```

mod descriptor;
mod error;

pub mod config_bundle;
pub mod digest;
pub mod extractor;
pub mod manifest;

pub use config_bundle::ConfigBundleBuilder;
pub use descriptor::Descriptor;
pub use digest::{Digests, compute_digests, digest_file};
pub use error::BundleError;
pub use extractor::{PluginArchive, extract_plugin};
pub use manifest::{ConfigInfo, LibraryInfo, Manifest, ModInfo};

/// Result type for bundle operations.
pub type BundleResult<T> = Result<T, BundleError>;

/// Descriptor file name at the root of a plugin archive.
pub const DESCRIPTOR_FILE: &str = "mcmod.info";

/// Manifest file name within the pack directory.
pub const MANIFEST_FILE: &str = "pack.json";

/// Config archive file name within the pack directory.
pub const CONFIG_BUNDLE_FILE: &str = "config.zip";

/// Pack directory relative to the output directory.
pub const PACK_DIR: &str = "modpack/latest";
