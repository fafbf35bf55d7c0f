//! Error types for the studio argument interpreter

use std::io;
use thiserror::Error;

/// Result type alias for front-end operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the studio front-end
#[derive(Error, Debug)]
pub enum Error {
    /// Argument parsing errors
    #[error("{0}")]
    Args(#[from] ArgsError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML rendering errors
    #[error("YAML rendering error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Recoverable argument parsing errors
///
/// Unrecognized flags are not errors; they are recorded on the parsed result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("no file passed to -c flag")]
    MissingConfigPath,

    #[error("no path passed to -r flag")]
    MissingRuntimePath,
}

/// Specialized result type for argument parsing
pub type ArgsResult<T> = std::result::Result<T, ArgsError>;
