//! CLI front-end
//!
//! This module acts on a parsed invocation: usage and version output,
//! invalid-flag reporting, and a YAML dump of everything else.

pub mod app;

// Re-export main types
pub use app::*;
