//! Invocation token scanning

use crate::args::flag::{is_flag, Flag};
use crate::args::types::ParsedArguments;
use crate::error::{ArgsError, ArgsResult};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, error};

/// Parse the process invocation tokens
///
/// `tokens[0]` is the program name and is skipped. Flags may appear before
/// or after the command run. Unrecognized flags are recorded, not rejected.
///
/// # Errors
///
/// Returns [`ArgsError`] when `-c` or `-r` is the last token.
///
/// # Panics
///
/// Panics if `tokens` is empty, or if the `-r` path cannot be resolved on
/// the filesystem. Both are environment faults rather than user errors.
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> ArgsResult<ParsedArguments> {
    assert!(
        !tokens.is_empty(),
        "invocation tokens must include the program name"
    );

    let mut args = ParsedArguments::default();
    let mut i = 1;

    while i < tokens.len() {
        let token = tokens[i].as_ref();

        match Flag::classify(token) {
            Some(Flag::Help) => args.help = true,
            Some(Flag::Version) => args.version = true,
            Some(Flag::Config) => {
                let path = value_after(tokens, i)
                    .filter(|path| !path.is_empty())
                    .ok_or(ArgsError::MissingConfigPath)?;
                debug!(path, "config path");
                args.config_path = Some(path.to_string());
                i += 1;
            }
            Some(Flag::RuntimePath) => {
                let path = value_after(tokens, i).ok_or(ArgsError::MissingRuntimePath)?;
                let resolved = resolve_runtime_path(path);
                debug!(path, resolved = %resolved.display(), "runtime path");
                args.runtime_path = Some(resolved);
                i += 1;
            }
            Some(Flag::Invalid) => {
                debug!(token, "unrecognized flag");
                args.invalid_flag = Some(token.to_string());
            }
            None if args.has_command() => {
                debug!(token, "ignoring positional token outside the command run");
            }
            None => {
                i += take_command_run(&mut args, &tokens[i..]);
                continue;
            }
        }

        i += 1;
    }

    args.no_args = tokens.len() == 1;

    Ok(args)
}

/// The token following position `i`, if any
fn value_after<S: AsRef<str>>(tokens: &[S], i: usize) -> Option<&str> {
    tokens.get(i + 1).map(|token| token.as_ref())
}

/// Fill the command fields from the start of `run`, returning how many
/// tokens were consumed
///
/// The command argument must not be flag-shaped; once it is taken, the
/// following token becomes the subcommand argument whatever its shape.
fn take_command_run<S: AsRef<str>>(args: &mut ParsedArguments, run: &[S]) -> usize {
    let mut positionals = run.iter().map(|token| token.as_ref());

    args.command = positionals.next().map(str::to_string);
    args.command_arg = positionals
        .next()
        .filter(|token| !is_flag(token))
        .map(str::to_string);
    if args.has_command_arg() {
        args.subcommand_arg = positionals.next().map(str::to_string);
    }

    let consumed = [&args.command, &args.command_arg, &args.subcommand_arg]
        .iter()
        .filter(|value| value.is_some())
        .count();

    debug!(
        command = ?args.command,
        command_arg = ?args.command_arg,
        subcommand_arg = ?args.subcommand_arg,
        "command run"
    );

    consumed
}

/// Resolve a runtime path to its absolute, symlink-free form
///
/// The input is left untouched; the resolved path is a fresh allocation.
fn resolve_runtime_path(path: &str) -> PathBuf {
    match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) => {
            error!(path, error = %e, "failed to resolve runtime path");
            panic!("failed to resolve runtime path '{}': {}", path, e);
        }
    }
}
