//! Flag recognition

/// Leading character that marks a token as a flag
pub const FLAG_MARKER: char = '-';

/// Spellings that request help output
const HELP_FLAGS: &[&str] = &["--help", "-h"];

/// Spellings that request version output
const VERSION_FLAGS: &[&str] = &["--version", "-v"];

/// Flag that takes a configuration file path
const CONFIG_FLAG: &str = "-c";

/// Flag that takes a runtime root path
const RUNTIME_PATH_FLAG: &str = "-r";

/// A flag-shaped token, classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Help,
    Version,
    /// `-c <path>`
    Config,
    /// `-r <path>`
    RuntimePath,
    /// Any other token starting with the flag marker
    Invalid,
}

impl Flag {
    /// Classify a token, returning `None` when it is not flag-shaped
    pub fn classify(token: &str) -> Option<Flag> {
        if !is_flag(token) {
            return None;
        }

        let flag = if HELP_FLAGS.contains(&token) {
            Flag::Help
        } else if VERSION_FLAGS.contains(&token) {
            Flag::Version
        } else if token == CONFIG_FLAG {
            Flag::Config
        } else if token == RUNTIME_PATH_FLAG {
            Flag::RuntimePath
        } else {
            Flag::Invalid
        };

        Some(flag)
    }
}

/// Check whether a token starts with the flag marker
pub fn is_flag(token: &str) -> bool {
    token.starts_with(FLAG_MARKER)
}
