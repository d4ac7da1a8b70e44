//! CLI presenter for output formatting

use colored::*;

/// Presenter for user-facing CLI output.
///
/// Diagnostics go to stderr and help text to stdout. Structured logs are
/// separate and go through `tracing`.
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (help text, on request or after a usage error)
    pub fn output(&self, text: &str) {
        print!("{}", text);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
