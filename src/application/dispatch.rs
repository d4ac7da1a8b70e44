//! Verb dispatch use case

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::config::Settings;
use crate::domain::error::InvalidVerbError;
use crate::domain::verb::Verb;

use super::input_list::InputList;
use super::ports::{Analyzer, Collector, EngineError, Replayer};

/// Directory collected when `collect` is given no target
pub const DEFAULT_COLLECT_ROOT: &str = "/";

/// Errors from the dispatch use case
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    UnknownVerb(#[from] InvalidVerbError),

    #[error("Failed to {verb}: {source}")]
    Engine {
        verb: Verb,
        #[source]
        source: EngineError,
    },
}

/// A fully parsed command line, ready to dispatch.
///
/// Owns the input list, if any; dropping the invocation closes it.
#[derive(Debug)]
pub struct Invocation {
    /// Validated settings
    pub settings: Settings,
    /// Opened `--filelist`, if given
    pub input_list: Option<InputList>,
    /// Verb token as typed; resolved at dispatch time
    pub verb: String,
    /// Optional directory or pack file
    pub target: Option<PathBuf>,
}

/// Selects and runs exactly one engine per invocation
pub struct DispatchUseCase<C, R, A>
where
    C: Collector,
    R: Replayer,
    A: Analyzer,
{
    collector: C,
    replayer: R,
    analyzer: A,
}

impl<C, R, A> DispatchUseCase<C, R, A>
where
    C: Collector,
    R: Replayer,
    A: Analyzer,
{
    /// Create a new use case instance
    pub fn new(collector: C, replayer: R, analyzer: A) -> Self {
        Self {
            collector,
            replayer,
            analyzer,
        }
    }

    /// Resolve the verb and run its engine.
    ///
    /// Consumes the invocation so the input list is released on return,
    /// whichever branch was taken.
    pub fn execute(&self, invocation: Invocation) -> Result<Verb, DispatchError> {
        let Invocation {
            settings,
            mut input_list,
            verb,
            target,
        } = invocation;

        let verb: Verb = verb.parse()?;
        info!(%verb, path = ?target, "Dispatching verb");

        let result = match verb {
            Verb::Collect => {
                let root = target
                    .as_deref()
                    .unwrap_or_else(|| Path::new(DEFAULT_COLLECT_ROOT));
                self.collector
                    .collect(root, &settings, input_list.as_mut())
            }
            Verb::Replay => self.replayer.replay(target.as_deref(), &settings),
            Verb::Analyze => self.analyzer.analyze(target.as_deref()),
        };

        debug!(%verb, ok = result.is_ok(), "Engine returned");
        result.map_err(|source| DispatchError::Engine { verb, source })?;
        Ok(verb)
    }
}
