//! Read-ahead engine adapters

mod tracing_engine;

pub use tracing_engine::TracingEngine;
