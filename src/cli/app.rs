//! Main app runner: parse, dispatch, map the outcome to an exit code

use std::ffi::OsString;
use std::process::ExitCode;

use tracing::{debug, warn};

use crate::application::ports::{Analyzer, Collector, ConfigStore, Replayer};
use crate::application::{DispatchError, DispatchUseCase};
use crate::domain::config::Settings;
use crate::infrastructure::{TomlConfigStore, TracingEngine};

use super::parser::{parse_args_with, CliError, Parsed};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run with the system config file and the default engine
pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let presenter = Presenter::new();
    let store = TomlConfigStore::new();
    let engine = TracingEngine::new();
    let use_case = DispatchUseCase::new(engine, engine, engine);

    ExitCode::from(run_with(args, &store, &use_case, &presenter))
}

/// Run against explicit adapters and return the exit status
pub fn run_with<I, T, S, C, R, A>(
    args: I,
    store: &S,
    use_case: &DispatchUseCase<C, R, A>,
    presenter: &Presenter,
) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    S: ConfigStore,
    C: Collector,
    R: Replayer,
    A: Analyzer,
{
    // The config file is only read once help and option errors are ruled out
    let base = || load_settings(store, presenter);

    let invocation = match parse_args_with(args, base) {
        Ok(Parsed::Help(text)) => {
            presenter.output(&text);
            return EXIT_SUCCESS;
        }
        Ok(Parsed::Run(invocation)) => invocation,
        Err(e) => {
            presenter.error(&e.to_string());
            if let Some(help) = e.help() {
                presenter.output(help);
            }
            return cli_exit_code(&e);
        }
    };

    match use_case.execute(invocation) {
        Ok(verb) => {
            debug!(%verb, "Verb completed");
            EXIT_SUCCESS
        }
        Err(e) => {
            presenter.error(&e.to_string());
            dispatch_exit_code(&e)
        }
    }
}

/// Defaults overlaid with the config file; a broken file is reported and ignored
pub fn load_settings<S: ConfigStore>(store: &S, presenter: &Presenter) -> Settings {
    let defaults = Settings::defaults();

    let result = store.load().and_then(|config| config.apply(defaults));
    match result {
        Ok(settings) => settings,
        Err(e) => {
            warn!(path = %store.path().display(), error = %e, "Ignoring config file");
            presenter.warn(&format!(
                "Ignoring {}: {}",
                store.path().display(),
                e
            ));
            defaults
        }
    }
}

fn cli_exit_code(err: &CliError) -> u8 {
    match err {
        CliError::Usage { .. } | CliError::Validation { .. } => EXIT_USAGE_ERROR,
        CliError::Resource(_) => EXIT_ERROR,
    }
}

fn dispatch_exit_code(err: &DispatchError) -> u8 {
    match err {
        DispatchError::UnknownVerb(_) => EXIT_USAGE_ERROR,
        DispatchError::Engine { .. } => EXIT_ERROR,
    }
}
