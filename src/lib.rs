//! readahead - boot-time disk read-ahead front end
//!
//! This crate turns a command line into validated read-ahead settings and
//! hands them to one of three engines: collect, replay or analyze.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Settings, durations, verbs and errors
//! - **Application**: Verb dispatch, the input-list resource and the engine ports (traits)
//! - **Infrastructure**: Adapter implementations (config file, logging, default engine)
//! - **CLI**: Argument parsing, output formatting and exit codes

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
