//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// readahead - boot-time disk read-ahead
///
/// Option values are kept as typed text here and validated by
/// [`crate::cli::parser`], so every bad value is reported the same way.
/// Every occurrence of a value option is kept: the parser walks them in
/// command-line order, takes the last one for the limits and rejects a
/// repeated `--filelist`. Help is a plain flag for the same reason.
#[derive(Parser, Debug)]
#[command(name = "readahead")]
#[command(about = "Collect, replay and analyze boot-time read-ahead data")]
#[command(long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Show this help
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// Maximum number of files to read ahead
    #[arg(
        long = "files-max",
        value_name = "INT",
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub files_max: Vec<String>,

    /// Maximum size of files to read ahead
    #[arg(
        long = "file-size-max",
        value_name = "BYTES",
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub file_size_max: Vec<String>,

    /// Maximum time to spend collecting data
    #[arg(
        long,
        value_name = "SEC",
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub timeout: Vec<String>,

    /// Inclusive list of files to be used in creating the pack
    #[arg(long, value_name = "PATH", action = ArgAction::Append)]
    pub filelist: Vec<PathBuf>,

    /// collect, replay or analyze
    #[arg(value_name = "VERB")]
    pub verb: Option<String>,

    /// Directory (collect, replay) or pack file (analyze)
    #[arg(value_name = "PATH")]
    pub target: Option<PathBuf>,

    /// Anything past the target; always a usage error
    #[arg(hide = true, value_name = "EXTRA")]
    pub extra: Vec<String>,
}

/// Usage text for all three verbs
pub fn help_text(program: &str) -> String {
    format!(
        "{program} [OPTIONS...] collect [DIRECTORY]\n\n\
         Collect read-ahead data on early boot.\n\n\
         \x20 -h --help                 Show this help\n\
         \x20    --files-max=INT        Maximum number of files to read ahead\n\
         \x20    --file-size-max=BYTES  Maximum size of files to read ahead\n\
         \x20    --timeout=SEC          Maximum time to spend collecting data\n\
         \x20    --filelist=PATH        Inclusive list of files to be used in creating the pack\n\n\n\
         {program} [OPTIONS...] replay [DIRECTORY]\n\n\
         Replay collected read-ahead data on early boot.\n\n\
         \x20 -h --help                 Show this help\n\
         \x20    --file-size-max=BYTES  Maximum size of files to read ahead\n\n\n\
         {program} [OPTIONS...] analyze [PACK FILE]\n\n\
         Analyze collected read-ahead data.\n\n\
         \x20 -h --help                 Show this help\n"
    )
}
