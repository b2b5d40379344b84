//! Error types for pack model and input parsing

use thiserror::Error;

/// Result type alias for core operations
pub type PackResult<T> = Result<T, PackError>;

/// Error type for core operations
#[derive(Error, Debug)]
pub enum PackError {
    /// Library coordinate line has fewer than the three mandatory segments
    #[error("malformed library coordinate '{line}': expected group:name:version[:classifier][:url]")]
    MalformedCoordinate { line: String },

    /// Build configuration is invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while reading an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
