use std::path::PathBuf;

/// The directories cleared on every run, relative to the base
/// directory, in the order they are processed.
pub const TARGET_DIRS: [&str; 3] = ["logs", "internal_metrics", "job"];

/// Config for running tunesweep
///
/// Use this to configure tunesweep when calling it from the library
/// # Example
/// ```
/// use tunesweep::{sweep, Config, Verbosity};
///
/// // Use the default config
/// let mut cfg = Config::default();
/// // Don't print status lines
/// cfg.verbosity = Verbosity::Quiet;
/// sweep(cfg).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory the target directories are resolved against.
    /// This is usually the current directory.
    pub base_dir: PathBuf,
    /// The verbosity. See [`Verbosity`]
    pub verbosity: Verbosity,
}

impl Default for Config {
    /// Get the default config.
    ///
    /// This means:
    /// - Running from the current directory
    /// - Regular verbosity
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            verbosity: Verbosity::Normal,
        }
    }
}

/// The verbosity config options
#[derive(Debug, PartialEq, Clone)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}
