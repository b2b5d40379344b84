//! The pack aggregate populated by a build run.

use crate::{LibraryReference, PluginEntry};

/// Reference to the bundled configuration archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBundleRef {
    /// File name of the archive, relative to the manifest.
    pub file: String,
}

/// Everything that goes into one pack manifest.
///
/// A pack owns its plugins, libraries, and tweaks. Order of insertion is the
/// order of emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pack {
    pub platform_version: String,
    pub plugins: Vec<PluginEntry>,
    pub libraries: Vec<LibraryReference>,
    pub tweaks: Vec<String>,
    pub additional_arguments: Option<String>,
    pub config_bundle: Option<ConfigBundleRef>,
}

impl Pack {
    /// Create an empty pack for the given platform version.
    #[must_use]
    pub fn new(platform_version: impl Into<String>) -> Self {
        Self {
            platform_version: platform_version.into(),
            ..Self::default()
        }
    }

    pub fn add_plugin(&mut self, plugin: PluginEntry) {
        self.plugins.push(plugin);
    }

    pub fn add_library(&mut self, library: LibraryReference) {
        self.libraries.push(library);
    }

    pub fn add_tweak(&mut self, tweak: impl Into<String>) {
        self.tweaks.push(tweak.into());
    }

    pub fn set_additional_arguments(&mut self, args: impl Into<String>) {
        self.additional_arguments = Some(args.into());
    }

    pub fn set_config_bundle(&mut self, file: impl Into<String>) {
        self.config_bundle = Some(ConfigBundleRef { file: file.into() });
    }

    /// Split a tweaks file into trimmed identifiers, one per line.
    ///
    /// Blank lines are kept as empty identifiers.
    #[must_use]
    pub fn parse_tweak_list(content: &str) -> Vec<String> {
        content.lines().map(|line| line.trim().to_string()).collect()
    }
}
