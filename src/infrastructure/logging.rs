//! Logging setup
//!
//! Selects where log records go, reads the log configuration from the
//! environment and installs the global `tracing` subscriber.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, IsTerminal, Write};
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the `EnvFilter` directive
pub const LOG_FILTER_ENV: &str = "READAHEAD_LOG";

/// Environment variable selecting the log target
pub const LOG_TARGET_ENV: &str = "READAHEAD_LOG_TARGET";

/// Filter used when none is configured
pub const DEFAULT_LOG_FILTER: &str = "info";

const KMSG_PATH: &str = "/dev/kmsg";

/// Tag prepended to every kernel log record
const KMSG_IDENT: &str = "readahead";

/// Where log records are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogTarget {
    /// Standard error
    Console,
    /// The kernel log buffer
    Kmsg,
    /// Console when stderr is a terminal, otherwise the kernel log,
    /// falling back to the console when it cannot be opened
    #[default]
    Safe,
}

impl LogTarget {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Kmsg => "kmsg",
            Self::Safe => "safe",
        }
    }
}

impl FromStr for LogTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "kmsg" => Ok(Self::Kmsg),
            "safe" | "auto" => Ok(Self::Safe),
            other => Err(format!(
                "Invalid log target: \"{}\". Valid targets are: console, kmsg, safe",
                other
            )),
        }
    }
}

impl fmt::Display for LogTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log configuration read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub target: LogTarget,
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            target: LogTarget::default(),
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl LogConfig {
    /// Read `READAHEAD_LOG_TARGET` and `READAHEAD_LOG` from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    /// Unset, empty or invalid values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let target = lookup(LOG_TARGET_ENV)
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.target);

        let filter = lookup(LOG_FILTER_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.filter);

        Self { target, filter }
    }
}

fn open_kmsg() -> io::Result<File> {
    OpenOptions::new().write(true).open(KMSG_PATH)
}

/// Syslog priority for a tracing level
fn kmsg_priority(level: &Level) -> u8 {
    match *level {
        Level::ERROR => 3,
        Level::WARN => 4,
        Level::INFO => 6,
        _ => 7,
    }
}

/// Writer for the kernel log.
///
/// Each formatted event becomes one `<pri>readahead: ...` record, written
/// with a single call so the kernel sees it as one message.
struct Kmsg {
    file: Mutex<File>,
}

impl Kmsg {
    fn new(file: File) -> Self {
        Self {
            file: Mutex::new(file),
        }
    }

    fn record(&self, priority: u8) -> KmsgRecord<'_> {
        KmsgRecord {
            file: &self.file,
            priority,
        }
    }
}

struct KmsgRecord<'a> {
    file: &'a Mutex<File>,
    priority: u8,
}

impl Write for KmsgRecord<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut record = format!("<{}>{}: ", self.priority, KMSG_IDENT).into_bytes();
        record.extend_from_slice(buf);

        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.write_all(&record)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Kmsg {
    type Writer = KmsgRecord<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        self.record(kmsg_priority(&Level::INFO))
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        self.record(kmsg_priority(meta.level()))
    }
}

/// Install the global subscriber and return the target actually used.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init(config: &LogConfig) -> LogTarget {
    let filter = EnvFilter::try_new(&config.filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let want_kmsg = match config.target {
        LogTarget::Console => false,
        LogTarget::Kmsg => true,
        LogTarget::Safe => !io::stderr().is_terminal(),
    };

    let kmsg = if want_kmsg { open_kmsg().ok() } else { None };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    // The kernel stamps and tags its own records
    let (installed, target) = match kmsg {
        Some(file) => (
            builder
                .without_time()
                .with_level(false)
                .with_ansi(false)
                .with_writer(Kmsg::new(file))
                .try_init()
                .is_ok(),
            LogTarget::Kmsg,
        ),
        None => (
            builder
                .with_ansi(io::stderr().is_terminal())
                .with_writer(io::stderr)
                .try_init()
                .is_ok(),
            LogTarget::Console,
        ),
    };

    if installed && config.target == LogTarget::Kmsg && target != LogTarget::Kmsg {
        tracing::warn!("Cannot open {}, logging to console", KMSG_PATH);
    }

    target
}
