//! Application layer - Use cases and port interfaces
//!
//! Contains the dispatch operation, the input-list resource and the
//! trait definitions for the read-ahead engines.

pub mod dispatch;
pub mod input_list;
pub mod ports;

// Re-export use cases
pub use dispatch::{DispatchError, DispatchUseCase, Invocation, DEFAULT_COLLECT_ROOT};
pub use input_list::{InputList, InputListError};
