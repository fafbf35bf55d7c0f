//! Parsed argument record

use serde::Serialize;
use std::path::{Path, PathBuf};

/// The result of interpreting one process invocation
///
/// Every value is an owned copy; nothing borrows from the input tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedArguments {
    /// Only the program name was supplied
    pub no_args: bool,

    /// `-h` / `--help` was present
    pub help: bool,

    /// `-v` / `--version` was present
    pub version: bool,

    /// Value of `-c`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,

    /// Canonicalized value of `-r`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_path: Option<PathBuf>,

    /// The last unrecognized flag seen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_flag: Option<String>,

    /// First non-flag token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Non-flag token directly after the command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_arg: Option<String>,

    /// Token directly after the command argument
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcommand_arg: Option<String>,
}

impl ParsedArguments {
    /// Whether `-c` supplied a config path
    pub fn set_config(&self) -> bool {
        self.config_path.is_some()
    }

    /// Whether `-r` supplied a runtime path
    pub fn set_runtime_path(&self) -> bool {
        self.runtime_path.is_some()
    }

    /// Whether any unrecognized flag was seen
    pub fn has_invalid_flag(&self) -> bool {
        self.invalid_flag.is_some()
    }

    /// Whether a command run was found
    pub fn has_command(&self) -> bool {
        self.command.is_some()
    }

    /// Whether the command run has a second token
    pub fn has_command_arg(&self) -> bool {
        self.command_arg.is_some()
    }

    /// Whether the command run has a third token
    pub fn has_subcommand_arg(&self) -> bool {
        self.subcommand_arg.is_some()
    }

    /// The config path, as given
    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    /// The resolved runtime path
    pub fn runtime_path(&self) -> Option<&Path> {
        self.runtime_path.as_deref()
    }

    /// The last unrecognized flag
    pub fn invalid_flag(&self) -> Option<&str> {
        self.invalid_flag.as_deref()
    }

    /// The command name
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// The command argument
    pub fn command_arg(&self) -> Option<&str> {
        self.command_arg.as_deref()
    }

    /// The subcommand argument
    pub fn subcommand_arg(&self) -> Option<&str> {
        self.subcommand_arg.as_deref()
    }
}
