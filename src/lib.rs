//! Studio argument interpreter
//!
//! Classifies the raw process invocation tokens into flags, a primary command
//! and up to two positional arguments, producing a single [`ParsedArguments`]
//! record for the host application to act on.

// Public modules
pub mod args;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use args::{parse, Flag, ParsedArguments};
pub use error::{ArgsError, Error, Result};

/// Current version of the studio front-end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
