//! packforge-logging - Tracing subscriber setup
//!
//! This crate provides:
//! - [`init_logging`] to install the process-wide subscriber
//! - [`level_filter`] to map a [`LogLevel`] onto a tracing filter

mod layer;

pub use layer::{init_logging, level_filter};
pub use packforge_core::LogLevel;
