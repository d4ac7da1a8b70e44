//! Read-ahead engine port interfaces
//!
//! Collection, replay and analysis are implemented outside this crate;
//! the dispatcher only talks to them through these traits.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::application::input_list::InputList;
use crate::domain::config::Settings;

/// Engine errors
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Failed(String),
}

/// Port for collecting read-ahead data
pub trait Collector {
    /// Record read-ahead data for the file system rooted at `root`.
    ///
    /// # Arguments
    /// * `root` - Directory to collect for
    /// * `settings` - Limits for the collection
    /// * `input` - Explicit list of files to use instead of discovery
    fn collect(
        &self,
        root: &Path,
        settings: &Settings,
        input: Option<&mut InputList>,
    ) -> Result<(), EngineError>;
}

/// Port for replaying collected read-ahead data
pub trait Replayer {
    /// Prefetch the pack stored for `root`; `None` lets the engine pick its default.
    fn replay(&self, root: Option<&Path>, settings: &Settings) -> Result<(), EngineError>;
}

/// Port for analyzing a pack file
pub trait Analyzer {
    /// Inspect `pack`; the engine reports a missing or invalid path itself.
    fn analyze(&self, pack: Option<&Path>) -> Result<(), EngineError>;
}
