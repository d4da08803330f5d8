//! Command evaluation specs: per-tool logic for deciding allow/block.
//!
//! Each guarded command has its own `CommandSpec` implementation that
//! inspects the tokenized words. Commands without a spec are allowed.

/// Subcommand-aware git evaluation that blocks hook-bypass flags.
pub mod git;

use crate::eval::{CommandContext, RuleMatch};

/// Trait for command evaluation specs.
///
/// Each implementation knows how to evaluate a specific command (or family of commands)
/// and returns a `RuleMatch` with the decision and reason.
pub trait CommandSpec: Send + Sync {
    /// Evaluate the command in the given context and return a decision.
    fn evaluate(&self, ctx: &CommandContext) -> RuleMatch;
}
