//! cc-hookguard: a PreToolUse hook for Claude Code that stops commits and
//! pushes from skipping git hooks.
//!
//! At its core is a POSIX-style word tokenizer: it turns a raw command
//! string into the words a shell would pass to the program, after quote
//! removal and backslash processing, without expanding or executing
//! anything. The guard then inspects those words.
//!
//! # Architecture
//!
//! - **[`parse`]**: Tokenizer: basic and advanced dialects, shared quote extractors.
//! - **[`eval`]**: Evaluation engine: spec registry, decision types, per-command context.
//! - **[`commands`]**: Command specs: per-tool evaluation logic (git).
//! - **[`config`]**: Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]**: Decision logging to `~/.local/share/cc-hookguard/decisions.log`.

/// Command spec trait and per-tool implementations.
pub mod commands;
/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Evaluation engine: registry, decisions, command context.
pub mod eval;
/// File-based decision logging.
pub mod logging;
/// Shell word tokenizer.
pub mod parse;

use eval::RuleMatch;
use parse::TokenizeError;

/// Build the guard from default config and evaluate a command string.
///
/// This is the main entry point for tests and simple usage.
/// For CLI usage with a user config, build the [`eval::Guard`] directly.
pub fn evaluate(command: &str) -> Result<RuleMatch, TokenizeError> {
    let config = config::Config::default_config();
    let guard = eval::Guard::from_config(&config);
    guard.evaluate(command)
}
