//! # tunesweep
//! A small maintenance tool that resets local tuning workspace state
//! between runs by clearing the `logs`, `internal_metrics` and `job`
//! directories.
//!
//! # tunesweep as a library
//! The CLI is a thin wrapper over [`sweep`]. Embedders can build a
//! [`Config`] (usually to point `base_dir` somewhere other than the
//! current directory, or to quiet the output) and call [`sweep`]
//! directly.

mod core;
pub use crate::core::{sweep, Config, Sweep, Verbosity, TARGET_DIRS};
pub mod error;
mod fs;
