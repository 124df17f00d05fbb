//! Wrapper to perform file system operations
//!

mod abs_path;
pub use abs_path::AbsPath;

mod clear;
pub use clear::{clear_dir, ClearOutcome};
