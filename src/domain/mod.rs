//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod verb;

// Re-export common types
pub use config::{Duration, FileConfig, Settings};
pub use error::*;
pub use verb::Verb;
