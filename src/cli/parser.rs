//! Option parsing: argument vector to a dispatchable invocation
//!
//! Clap checks the shape of the command line. The options are then walked
//! in the order they were given: each value is validated when it is reached,
//! `--filelist` is opened when it is reached, and help stops the walk. The
//! first failure wins. An input list opened before a later failure is
//! released when the error is returned.

use std::ffi::OsString;
use std::num::{NonZeroU32, NonZeroU64};
use std::path::{Path, PathBuf};

use clap::error::{ContextKind, ContextValue};
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use thiserror::Error;
use tracing::debug;

use crate::application::{InputList, InputListError, Invocation};
use crate::domain::config::{parse_file_size_max, parse_files_max, Duration, Settings};

use super::args::{help_text, Cli};

/// Program name used when argv[0] is missing
pub const DEFAULT_PROGRAM_NAME: &str = "readahead";

/// Result of a successful parse
#[derive(Debug)]
pub enum Parsed {
    /// `-h`/`--help` was given; holds the text to print
    Help(String),
    /// Ready to dispatch
    Run(Invocation),
}

/// Errors from option parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// Unknown option, repeated `--filelist` or wrong number of positionals
    #[error("{message}")]
    Usage {
        message: String,
        help: Option<String>,
    },

    /// Malformed or non-positive option value
    #[error("Failed to parse {what} \"{value}\".")]
    Validation {
        option: &'static str,
        what: &'static str,
        value: String,
    },

    /// The input list could not be opened
    #[error(transparent)]
    Resource(#[from] InputListError),
}

impl CliError {
    /// Help text to print along with the message, if any
    pub fn help(&self) -> Option<&str> {
        match self {
            Self::Usage { help, .. } => help.as_deref(),
            _ => None,
        }
    }
}

/// One option occurrence, in command-line order
enum Occurrence<'a> {
    Help,
    FilesMax(&'a str),
    FileSizeMax(&'a str),
    Timeout(&'a str),
    Filelist(&'a Path),
}

/// Values set on the command line, applied on top of the base settings
#[derive(Debug, Default)]
struct Overrides {
    files_max: Option<NonZeroU32>,
    file_size_max: Option<NonZeroU64>,
    timeout: Option<Duration>,
    input_list: Option<InputList>,
}

impl Overrides {
    fn apply(&self, base: Settings) -> Settings {
        Settings {
            files_max: self.files_max.unwrap_or(base.files_max),
            file_size_max: self.file_size_max.unwrap_or(base.file_size_max),
            timeout: self.timeout.unwrap_or(base.timeout),
        }
    }
}

enum Scan {
    Help,
    Options(Overrides),
}

/// Parse a full argument vector (including argv[0]) on top of `base`.
pub fn parse_args<I, T>(args: I, base: Settings) -> Result<Parsed, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    parse_args_with(args, || base)
}

/// Like [`parse_args`], but the base settings are only produced once the
/// command line is known not to be a help request or an option error.
pub fn parse_args_with<I, T, F>(args: I, base: F) -> Result<Parsed, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    F: FnOnce() -> Settings,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let help = help_text(&program_name(args.first()));

    let (cli, matches) = match matches_from(&args) {
        Ok(parsed) => parsed,
        Err(e) => return failure_before(&args, &e, help),
    };

    let overrides = match scan(&cli, &matches)? {
        Scan::Help => return Ok(Parsed::Help(help)),
        Scan::Options(overrides) => overrides,
    };

    let (verb, target) = positionals(cli.verb, cli.target, &cli.extra, help)?;
    let settings = overrides.apply(base());

    debug!(?settings, %verb, ?target, "Parsed command line");

    Ok(Parsed::Run(Invocation {
        settings,
        input_list: overrides.input_list,
        verb,
        target,
    }))
}

fn matches_from(args: &[OsString]) -> Result<(Cli, ArgMatches), clap::Error> {
    let matches = Cli::command().try_get_matches_from(args)?;
    let cli = Cli::from_arg_matches(&matches)?;
    Ok((cli, matches))
}

fn program_name(argv0: Option<&OsString>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

/// First line of clap's rendered error, without the `error: ` prefix
fn clap_message(err: &clap::Error) -> String {
    err.render()
        .to_string()
        .lines()
        .next()
        .map(|line| line.trim_start_matches("error:").trim().to_string())
        .filter(|line| !line.is_empty())
        .unwrap_or_else(|| "Invalid arguments.".to_string())
}

/// Clap rejects the whole line at once. The options ahead of the rejected
/// token are still walked, so their help, value errors and unreadable lists
/// are reported first.
fn failure_before(
    args: &[OsString],
    err: &clap::Error,
    help: String,
) -> Result<Parsed, CliError> {
    let usage = CliError::Usage {
        message: clap_message(err),
        help: None,
    };

    let Some(position) = rejected_position(args, err) else {
        return Err(usage);
    };
    let Ok((cli, matches)) = matches_from(&args[..position]) else {
        return Err(usage);
    };

    match scan(&cli, &matches)? {
        Scan::Help => Ok(Parsed::Help(help)),
        Scan::Options(_) => Err(usage),
    }
}

/// Index in `args` of the token clap rejected, when clap names one
fn rejected_position(args: &[OsString], err: &clap::Error) -> Option<usize> {
    let token = match err.get(ContextKind::InvalidArg)? {
        ContextValue::String(token) => token.as_str(),
        _ => return None,
    };
    let with_value = format!("{token}=");

    args.iter()
        .enumerate()
        .skip(1)
        .find(|(_, arg)| {
            arg.to_str()
                .is_some_and(|arg| arg == token || arg.starts_with(&with_value))
        })
        .map(|(position, _)| position)
}

/// Every option occurrence, sorted by position on the command line
fn occurrences<'a>(cli: &'a Cli, matches: &ArgMatches) -> Vec<(usize, Occurrence<'a>)> {
    let positions = |id: &str| -> Vec<usize> {
        matches
            .indices_of(id)
            .map(|indices| indices.collect())
            .unwrap_or_default()
    };

    let mut order = Vec::new();
    if cli.help {
        order.push((matches.index_of("help").unwrap_or(0), Occurrence::Help));
    }
    order.extend(
        positions("files_max")
            .into_iter()
            .zip(&cli.files_max)
            .map(|(i, value)| (i, Occurrence::FilesMax(value.as_str()))),
    );
    order.extend(
        positions("file_size_max")
            .into_iter()
            .zip(&cli.file_size_max)
            .map(|(i, value)| (i, Occurrence::FileSizeMax(value.as_str()))),
    );
    order.extend(
        positions("timeout")
            .into_iter()
            .zip(&cli.timeout)
            .map(|(i, value)| (i, Occurrence::Timeout(value.as_str()))),
    );
    order.extend(
        positions("filelist")
            .into_iter()
            .zip(&cli.filelist)
            .map(|(i, path)| (i, Occurrence::Filelist(path.as_path()))),
    );

    order.sort_by_key(|(position, _)| *position);
    order
}

/// Walk the options in order, stopping at help or the first failure
fn scan(cli: &Cli, matches: &ArgMatches) -> Result<Scan, CliError> {
    let mut overrides = Overrides::default();

    for (_, occurrence) in occurrences(cli, matches) {
        match occurrence {
            Occurrence::Help => return Ok(Scan::Help),
            Occurrence::FilesMax(value) => {
                overrides.files_max = Some(validate(
                    value,
                    "--files-max",
                    "maximum number of files",
                    parse_files_max,
                )?);
            }
            Occurrence::FileSizeMax(value) => {
                overrides.file_size_max = Some(validate(
                    value,
                    "--file-size-max",
                    "maximum file size",
                    parse_file_size_max,
                )?);
            }
            Occurrence::Timeout(value) => {
                overrides.timeout = Some(validate(value, "--timeout", "timeout", |s| {
                    s.parse::<Duration>()
                })?);
            }
            Occurrence::Filelist(path) => {
                if overrides.input_list.is_some() {
                    return Err(CliError::Usage {
                        message: "--filelist may only be given once.".to_string(),
                        help: None,
                    });
                }
                overrides.input_list = Some(InputList::open(path)?);
            }
        }
    }

    Ok(Scan::Options(overrides))
}

fn validate<T, E>(
    value: &str,
    option: &'static str,
    what: &'static str,
    parse: impl Fn(&str) -> Result<T, E>,
) -> Result<T, CliError> {
    parse(value).map_err(|_| CliError::Validation {
        option,
        what,
        value: value.to_string(),
    })
}

fn positionals(
    verb: Option<String>,
    target: Option<PathBuf>,
    extra: &[String],
    help: String,
) -> Result<(String, Option<PathBuf>), CliError> {
    match verb {
        Some(verb) if extra.is_empty() => Ok((verb, target)),
        Some(_) => Err(CliError::Usage {
            message: "Too many arguments: expected a verb and at most one path.".to_string(),
            help: Some(help),
        }),
        None => Err(CliError::Usage {
            message: "Missing verb: expected collect, replay or analyze.".to_string(),
            help: Some(help),
        }),
    }
}
