//! Owned handle to the optional `--filelist` input
//!
//! The file is opened once and closed when the `InputList` is dropped, so
//! every exit path (parse failure, unknown verb, engine failure or success)
//! releases it exactly once.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// Error when the input list cannot be opened
#[derive(Debug, Error)]
#[error("Cannot read list {} of collect-file names: {source}", .path.display())]
pub struct InputListError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl InputListError {
    /// Whether the file simply does not exist
    pub fn is_not_found(&self) -> bool {
        self.source.kind() == io::ErrorKind::NotFound
    }
}

/// Explicit list of files to include in a collected pack
#[derive(Debug)]
pub struct InputList {
    path: PathBuf,
    reader: BufReader<File>,
}

impl InputList {
    /// Open `path` for reading
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, InputListError> {
        let path = path.into();
        let file = File::open(&path).map_err(|source| InputListError {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), "Using files in input list to generate pack");

        Ok(Self {
            path,
            reader: BufReader::new(file),
        })
    }

    /// Path the list was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the remaining entries, one path per line.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn entries(&mut self) -> io::Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for line in (&mut self.reader).lines() {
            let line = line?;
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            entries.push(PathBuf::from(entry));
        }
        Ok(entries)
    }
}

impl Drop for InputList {
    fn drop(&mut self) {
        debug!(path = %self.path.display(), "Closing input list");
    }
}
