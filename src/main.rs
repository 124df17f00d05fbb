use clap::Parser;
use std::process::ExitCode;
use tunesweep::{sweep, Config};

/// Reset local tuning workspace state.
///
/// Clears the contents of the `logs`, `internal_metrics` and `job`
/// directories under the current directory. Missing directories are
/// skipped and not created.
#[derive(Parser)]
#[command(version, about)]
struct Cli {}

fn main() -> ExitCode {
    env_logger::init();
    let _ = Cli::parse();

    match sweep(Config::default()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:?}");
            ExitCode::FAILURE
        }
    }
}
