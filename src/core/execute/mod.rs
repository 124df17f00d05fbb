use crate::core::{verbs, Progress};
use crate::error::SweepError;
use crate::fs::{clear_dir, AbsPath, ClearOutcome};
use error_stack::Result;
use termcolor::Color;

mod config;
pub use config::*;

/// Run tunesweep with the given config
///
/// This is the main entry point for tunesweep. It takes a [`Config`],
/// clears each of the target directories in order and prints a status
/// line before and after each one.
///
/// Individual removal failures never surface here. The only error this
/// can return is a failure to resolve the base directory itself.
pub fn sweep(config: Config) -> Result<(), SweepError> {
    Sweep::run(config)
}

/// The runtime state when executing a sweep
#[derive(Debug)]
pub struct Sweep {
    /// The Config
    config: Config,
    /// The Progress reporter
    progress: Progress,
}

impl Sweep {
    /// Internal run function
    ///
    /// This is what [`sweep`] calls internally.
    pub fn run(config: Config) -> Result<(), SweepError> {
        log::info!("creating sweep");
        log::debug!("using config: {:?}", config);

        let progress = Progress::new(config.verbosity.clone());

        let runtime = Self { config, progress };

        runtime.run_internal()
    }

    fn run_internal(mut self) -> Result<(), SweepError> {
        let base = AbsPath::try_from(self.config.base_dir.clone()).map_err(|e| {
            let _ = self.progress.print_status(
                verbs::FAILED,
                &self.config.base_dir.display().to_string(),
                Color::Red,
                false,
            );
            e.change_context(SweepError)
                .attach_printable("cannot resolve base directory")
        })?;

        for name in TARGET_DIRS {
            self.clear_target(&base, name);
        }

        let _ = self.progress.print_status(
            verbs::DONE,
            &format!("{} director(ies)", TARGET_DIRS.len()),
            Color::Green,
            true,
        );

        Ok(())
    }

    /// Clear one target directory and print its status lines.
    ///
    /// Force semantics: a missing target, a target that is not a
    /// directory, or entries that cannot be removed are all accepted
    /// outcomes. The confirmation line is printed regardless.
    fn clear_target(&mut self, base: &AbsPath, name: &str) {
        let target = base.as_path().join(name);
        let _ = self
            .progress
            .print_status(verbs::CLEARING, name, Color::Yellow, false);
        log::info!("clearing directory: {}", target.display());

        match clear_dir(&target) {
            ClearOutcome::Cleared(removed) => {
                let _ = self.progress.print_status(
                    verbs::REMOVED,
                    &format!("{removed} entr(ies) from {name}"),
                    Color::Yellow,
                    true,
                );
            }
            ClearOutcome::Missing => {
                log::info!("directory not present, nothing to clear: {name}");
            }
        }

        let _ = self
            .progress
            .print_status(verbs::CLEARED, name, Color::Green, false);
    }
}
