//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces and the
//! process-level services (logging, umask).

pub mod config;
pub mod engine;
pub mod logging;
pub mod process;

// Re-export adapters
pub use config::TomlConfigStore;
pub use engine::TracingEngine;
pub use logging::{LogConfig, LogTarget};
