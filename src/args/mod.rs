//! Command-line argument parsing
//!
//! This module turns the raw invocation tokens into a [`ParsedArguments`]
//! record in a single left-to-right scan.

pub mod flag;
pub mod parse;
pub mod types;

// Re-export main types
pub use flag::*;
pub use parse::*;
pub use types::*;
