//! Pack manifest schema.
//!
//! The manifest is the `pack.json` document read by the updater client.
//! Every field except `mcversion` is omitted when its source is empty.

use crate::BundleResult;
use packforge_core::{LibraryReference, Pack, PluginEntry};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

/// Indentation of the written document.
const INDENT: &[u8] = b"    ";

/// Pack manifest - the root document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Game version the pack targets.
    pub mcversion: String,

    /// Bundled config archive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigInfo>,

    /// Plugins, in discovery order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mods: Vec<ModInfo>,

    /// Libraries, in line order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub libraries: Vec<LibraryInfo>,

    /// Launch tweak classes, in line order.
    #[serde(
        rename = "tweakClasses",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tweak_classes: Vec<String>,

    /// Extra launch arguments.
    #[serde(
        rename = "additionalArguments",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_arguments: Option<String>,
}

/// Config archive reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigInfo {
    /// Archive file name, relative to the manifest.
    pub file: String,

    /// Build timestamp in seconds since the UNIX epoch.
    pub version: u64,
}

/// One plugin entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModInfo {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub modid: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,

    /// Path of the archive relative to the distribution root.
    pub file: String,

    /// Loader token: `jar`, `forge`, or `liteloader`.
    #[serde(rename = "type")]
    pub kind: String,

    /// MD5 of the archive.
    pub md5: String,

    /// `client` or `server`; absent when the plugin applies to both.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
}

/// One library entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryInfo {
    pub group: String,
    pub name: String,
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}

impl From<&PluginEntry> for ModInfo {
    fn from(entry: &PluginEntry) -> Self {
        Self {
            modid: entry.id.clone(),
            version: entry.version.clone(),
            revision: non_empty(entry.revision.as_deref()),
            file: entry.distribution_path(),
            kind: entry.kind.wire_token().to_string(),
            md5: entry.md5.clone(),
            side: entry.side().map(|side| side.wire_token().to_string()),
        }
    }
}

impl From<&LibraryReference> for LibraryInfo {
    fn from(library: &LibraryReference) -> Self {
        Self {
            group: library.group.clone(),
            name: library.name.clone(),
            version: library.version.clone(),
            url: non_empty(library.url.as_deref()),
            classifier: non_empty(library.classifier.as_deref()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(String::from)
}

impl Manifest {
    /// Assemble the manifest for a pack.
    ///
    /// `build_time` becomes the config archive's version; it is ignored when
    /// the pack has no config archive.
    #[must_use]
    pub fn from_pack(pack: &Pack, build_time: u64) -> Self {
        Self {
            mcversion: pack.platform_version.clone(),
            config: pack.config_bundle.as_ref().map(|bundle| ConfigInfo {
                file: bundle.file.clone(),
                version: build_time,
            }),
            mods: pack.plugins.iter().map(ModInfo::from).collect(),
            libraries: pack.libraries.iter().map(LibraryInfo::from).collect(),
            tweak_classes: pack.tweaks.clone(),
            additional_arguments: non_empty(pack.additional_arguments.as_deref()),
        }
    }

    /// Serialize to JSON with sorted keys and four-space indentation.
    pub fn to_json(&self) -> BundleResult<String> {
        to_sorted_json(self)
    }

    /// Parse a manifest from JSON.
    pub fn from_json(json: &str) -> BundleResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the manifest to a file.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> BundleResult<()> {
        fs::write(path.as_ref(), self.to_json()?)?;
        Ok(())
    }
}

/// Serialize any manifest fragment with sorted keys and four-space
/// indentation.
pub fn to_sorted_json<T: Serialize>(value: &T) -> BundleResult<String> {
    // Going through Value sorts every object's keys.
    let value = serde_json::to_value(value)?;

    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8_lossy(&out).into_owned())
}
