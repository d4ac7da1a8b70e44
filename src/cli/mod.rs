//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting and the application runner.

pub mod app;
pub mod args;
pub mod parser;
pub mod presenter;

// Re-export commonly used types
pub use app::{run, run_with, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{help_text, Cli};
pub use parser::{parse_args, parse_args_with, CliError, Parsed};
pub use presenter::Presenter;
