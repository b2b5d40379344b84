//! Normalized plugin records and their closed enumerations.

use std::fmt;

/// Placeholder used for descriptor fields that a plugin does not declare.
pub const UNKNOWN: &str = "unknown";

/// How a plugin archive is loaded by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginKind {
    /// Plain jar placed on the classpath.
    Classpath,
    /// Forge (FML) mod.
    Forge,
    /// LiteLoader mod.
    LiteLoader,
}

impl PluginKind {
    /// Token used for this kind in the `type` field of the manifest.
    #[must_use]
    pub fn wire_token(&self) -> &'static str {
        match self {
            Self::Classpath => "jar",
            Self::Forge => "forge",
            Self::LiteLoader => "liteloader",
        }
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_token())
    }
}

/// The single side a plugin is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Client,
    Server,
}

impl Side {
    /// Reduce the two applicability flags to a restriction.
    ///
    /// Returns `None` when both or neither flag is set; the plugin then
    /// applies to both sides.
    #[must_use]
    pub fn from_flags(for_client: bool, for_server: bool) -> Option<Self> {
        match (for_client, for_server) {
            (true, false) => Some(Self::Client),
            (false, true) => Some(Self::Server),
            (true, true) | (false, false) => None,
        }
    }

    /// Token used for this side in the `side` field of the manifest.
    #[must_use]
    pub fn wire_token(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
        }
    }
}

/// One plugin archive, normalized from its embedded descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginEntry {
    /// Display name (never empty).
    pub name: String,
    /// Unique identifier (never empty).
    pub id: String,
    pub version: String,
    pub authors: String,
    pub revision: Option<String>,
    /// Platform version the plugin declares it was built for.
    pub platform_version: Option<String>,
    /// Base file name of the archive.
    pub file_name: String,
    /// Directory within the distribution, if not the default one.
    pub file_path: Option<String>,
    /// SHA-1 of the archive, lowercase hex.
    pub sha1: String,
    /// MD5 of the archive, lowercase hex.
    pub md5: String,
    pub for_client: bool,
    pub for_server: bool,
    pub kind: PluginKind,
}

impl PluginEntry {
    /// Create an entry with no descriptor-supplied metadata.
    ///
    /// The file name stands in for both the identifier and the display name,
    /// and version and authors are [`UNKNOWN`].
    #[must_use]
    pub fn from_file_name(file_name: &str, kind: PluginKind, sha1: String, md5: String) -> Self {
        Self {
            name: file_name.to_string(),
            id: file_name.to_string(),
            version: UNKNOWN.to_string(),
            authors: UNKNOWN.to_string(),
            revision: None,
            platform_version: None,
            file_name: file_name.to_string(),
            file_path: None,
            sha1,
            md5,
            for_client: false,
            for_server: false,
            kind,
        }
    }

    /// Set the side applicability flags.
    #[must_use]
    pub fn with_sides(mut self, for_client: bool, for_server: bool) -> Self {
        self.for_client = for_client;
        self.for_server = for_server;
        self
    }

    /// Set the directory the file lives in within the distribution.
    #[must_use]
    pub fn with_file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    #[must_use]
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    /// Side restriction derived from the applicability flags.
    #[must_use]
    pub fn side(&self) -> Option<Side> {
        Side::from_flags(self.for_client, self.for_server)
    }

    /// Path of the file relative to the distribution root.
    #[must_use]
    pub fn distribution_path(&self) -> String {
        match &self.file_path {
            Some(dir) if !dir.is_empty() => format!("{dir}/{}", self.file_name),
            _ => self.file_name.clone(),
        }
    }
}
