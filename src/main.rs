//! readahead CLI entry point

use std::process::ExitCode;

use readahead::cli::run;
use readahead::infrastructure::{logging, process, LogConfig};

fn main() -> ExitCode {
    logging::init(&LogConfig::from_env());
    process::restrict_umask();

    run(std::env::args_os())
}
