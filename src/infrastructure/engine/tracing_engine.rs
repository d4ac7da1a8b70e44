//! Engine adapter that logs each request and succeeds

use std::path::Path;

use tracing::{debug, info, warn};

use crate::application::ports::{Analyzer, Collector, EngineError, Replayer};
use crate::application::InputList;
use crate::domain::config::Settings;

/// Engine adapter that records every request through `tracing`.
///
/// Used when no prefetch backend is linked into the binary. For collect it
/// reads the input list, so an unreadable list still fails the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEngine;

impl TracingEngine {
    /// Create a new tracing engine
    pub fn new() -> Self {
        Self
    }
}

impl Collector for TracingEngine {
    fn collect(
        &self,
        root: &Path,
        settings: &Settings,
        input: Option<&mut InputList>,
    ) -> Result<(), EngineError> {
        info!(
            root = %root.display(),
            files_max = settings.files_max.get(),
            file_size_max = settings.file_size_max.get(),
            timeout = %settings.timeout,
            "Collect requested"
        );

        let Some(list) = input else {
            return Ok(());
        };

        let path = list.path().to_path_buf();
        let entries = list
            .entries()
            .map_err(|source| EngineError::Io { path, source })?;

        let limit = usize::try_from(settings.files_max.get()).unwrap_or(usize::MAX);
        if entries.len() > limit {
            warn!(
                supplied = entries.len(),
                limit, "Input list exceeds files_max, ignoring the remainder"
            );
        }

        for entry in entries.iter().take(limit) {
            debug!(path = %entry.display(), "Input list entry");
        }
        info!(count = entries.len().min(limit), "Input list accepted");

        Ok(())
    }
}

impl Replayer for TracingEngine {
    fn replay(&self, root: Option<&Path>, settings: &Settings) -> Result<(), EngineError> {
        info!(
            root = ?root,
            file_size_max = settings.file_size_max.get(),
            "Replay requested"
        );
        Ok(())
    }
}

impl Analyzer for TracingEngine {
    fn analyze(&self, pack: Option<&Path>) -> Result<(), EngineError> {
        info!(pack = ?pack, "Analyze requested");
        Ok(())
    }
}
