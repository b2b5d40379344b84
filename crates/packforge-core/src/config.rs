//! Build configuration

use crate::{LogLevel, PackError, PackResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file looked up in the input directory.
pub const CONFIG_FILE: &str = "packforge.toml";

/// Configuration for a pack build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackConfig {
    /// Game version the pack targets
    #[serde(default = "default_platform_version")]
    pub platform_version: String,

    /// Extra launch arguments passed through to the manifest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_arguments: Option<String>,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Plugins restricted to one side, by archive file name
    #[serde(default)]
    pub sides: SideOverrides,
}

/// Archive file names whose side applicability is declared by the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SideOverrides {
    #[serde(default)]
    pub client: Vec<String>,

    #[serde(default)]
    pub server: Vec<String>,
}

fn default_platform_version() -> String {
    "1.6.4".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            platform_version: default_platform_version(),
            additional_arguments: None,
            log_level: default_log_level(),
            sides: SideOverrides::default(),
        }
    }
}

impl PackConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> PackResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> PackResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Load `packforge.toml` from a directory, falling back to defaults
    /// when the directory has none.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> PackResult<Self> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading build configuration");
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> PackResult<()> {
        if self.platform_version.trim().is_empty() {
            return Err(PackError::Config(
                "platform_version must not be empty".to_string(),
            ));
        }
        self.log_level()?;
        Ok(())
    }

    /// Parsed log level
    pub fn log_level(&self) -> PackResult<LogLevel> {
        self.log_level.parse()
    }

    /// Applicability flags `(for_client, for_server)` for an archive.
    ///
    /// A file listed under both sides gets both flags.
    pub fn sides_for(&self, file_name: &str) -> (bool, bool) {
        let listed = |names: &[String]| names.iter().any(|n| n == file_name);
        (listed(&self.sides.client), listed(&self.sides.server))
    }
}
