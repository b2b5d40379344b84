//! packforge - Build tool for updater mod packs
//!
//! The binary is a thin wrapper over these modules so the pipeline can be
//! driven from tests.

pub mod build;
pub mod check;
pub mod inspect;
