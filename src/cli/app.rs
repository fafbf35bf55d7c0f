//! Main CLI application

use crate::args::{parse, ParsedArguments};
use crate::error::Error;
use crate::VERSION;
use std::ffi::OsString;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Name the binary reports for itself
const PROGRAM_NAME: &str = "studio";

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "warn";

/// Outcome of a front-end run, mapped to the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
        }
    }
}

/// CLI application
pub struct App {
    /// Parsed invocation
    args: ParsedArguments,
}

impl App {
    /// Create an app from raw invocation tokens
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, Error> {
        let args = parse(tokens)?;
        Ok(App { args })
    }

    /// The parsed invocation
    pub fn args(&self) -> &ParsedArguments {
        &self.args
    }

    /// Act on the parsed invocation, writing normal output to `out` and
    /// diagnostics to `err`
    pub fn run<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> Result<ExitStatus, Error> {
        let args = &self.args;

        if let Some(flag) = args.invalid_flag() {
            writeln!(err, "invalid flag '{}'", flag)?;
            writeln!(err)?;
            write!(err, "{}", usage())?;
            return Ok(ExitStatus::Failure);
        }

        if args.help {
            write!(out, "{}", usage())?;
            return Ok(ExitStatus::Success);
        }

        if args.version {
            writeln!(out, "{} {}", PROGRAM_NAME, VERSION)?;
            return Ok(ExitStatus::Success);
        }

        if args.no_args {
            write!(err, "{}", usage())?;
            return Ok(ExitStatus::Failure);
        }

        let rendered = serde_yaml::to_string(args)?;
        write!(out, "{}", rendered)?;

        Ok(ExitStatus::Success)
    }
}

/// Usage text shown for `--help`, invalid flags and empty invocations
pub fn usage() -> String {
    format!(
        "\
Usage: {name} [FLAGS] [COMMAND [ARG [SUBARG]]]

Flags:
  -h, --help       Print this help
  -v, --version    Print the version
  -c <FILE>        Use FILE as the configuration file
  -r <PATH>        Use PATH as the runtime root
",
        name = PROGRAM_NAME
    )
}

/// Install the stderr log subscriber
///
/// Honors `RUST_LOG`, falling back to warnings only.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A subscriber may already be installed when embedded in a host
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the CLI application against the given tokens
pub fn run_with<S: AsRef<str>>(tokens: &[S]) -> Result<ExitStatus, Error> {
    let app = App::from_tokens(tokens)?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    app.run(&mut stdout.lock(), &mut stderr.lock())
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<ExitStatus, Error> {
    init_logging();

    let tokens = collect_tokens(std::env::args_os());
    run_with(&tokens)
}

/// Convert raw process arguments to tokens, replacing invalid UTF-8
fn collect_tokens<I: IntoIterator<Item = OsString>>(raw: I) -> Vec<String> {
    raw.into_iter()
        .map(|token| token.to_string_lossy().into_owned())
        .collect()
}
