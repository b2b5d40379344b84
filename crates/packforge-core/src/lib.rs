//! packforge-core - Pack model and plain-text input parsing
//!
//! This crate provides the types shared by every stage of a pack build:
//! - [`Pack`] the aggregate that a build run populates
//! - [`PluginEntry`] and [`PluginKind`] for normalized plugin records
//! - [`LibraryReference`] for `group:name:version[:classifier][:url]` lines
//! - [`PackConfig`] for build configuration
//! - [`PackError`] for error handling

mod config;
mod error;
mod library;
mod pack;
mod plugin;

pub use config::{CONFIG_FILE, PackConfig, SideOverrides};
pub use error::{PackError, PackResult};
pub use library::LibraryReference;
pub use pack::{ConfigBundleRef, Pack};
pub use plugin::{PluginEntry, PluginKind, Side, UNKNOWN};

use std::str::FromStr;

/// Log levels for build output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl FromStr for LogLevel {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(PackError::Config(format!("unknown log level: {other}"))),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}
