//! Configuration domain module

mod duration;
mod file_config;
mod settings;

pub use duration::{Duration, DEFAULT_TIMEOUT_SECS, USEC_PER_SEC};
pub use file_config::{FileConfig, TimeoutValue};
pub use settings::{
    parse_file_size_max, parse_files_max, Settings, DEFAULT_FILES_MAX, DEFAULT_FILE_SIZE_MAX,
};
