pub mod context;
pub mod decision;

pub use context::CommandContext;
pub use decision::{Decision, RuleMatch};

use std::collections::HashMap;

use crate::commands::CommandSpec;
use crate::config::Config;
use crate::parse::{self, Dialect, TokenizeError};

/// Registry of command specs keyed by base command name, plus the
/// dialect used to tokenize incoming commands.
pub struct Guard {
    specs: HashMap<String, Box<dyn CommandSpec>>,
    dialect: Dialect,
}

impl Guard {
    /// Build the guard from configuration.
    pub fn from_config(config: &Config) -> Self {
        use crate::commands::git::GitSpec;

        let mut specs: HashMap<String, Box<dyn CommandSpec>> = HashMap::new();
        specs.insert("git".into(), Box::new(GitSpec::from_config(&config.git)));

        Self {
            specs,
            dialect: config.settings.dialect,
        }
    }

    /// Override the configured dialect (e.g. from the --basic CLI flag).
    pub fn set_dialect(&mut self, dialect: Dialect) {
        self.dialect = dialect;
    }

    /// Split a command into words using this guard's dialect.
    pub fn tokenize(&self, command: &str) -> Result<Vec<String>, TokenizeError> {
        parse::tokenize(command, self.dialect)
    }

    /// Look up a spec by exact command name.
    fn get(&self, name: &str) -> Option<&dyn CommandSpec> {
        self.specs.get(name).map(|b| b.as_ref())
    }

    /// Tokenize a command and evaluate it against the registry.
    ///
    /// Commands with no registered spec are allowed.
    pub fn evaluate(&self, command: &str) -> Result<RuleMatch, TokenizeError> {
        let words = self.tokenize(command)?;
        log::debug!("{} tokens: {words:?}", self.dialect.as_str());

        if words.is_empty() {
            return Ok(RuleMatch::allow("empty"));
        }

        let ctx = CommandContext::from_words(words);
        let result = match self.get(&ctx.base_command) {
            Some(spec) => spec.evaluate(&ctx),
            None => RuleMatch::allow(format!("not guarded: {}", ctx.base_command)),
        };
        Ok(result)
    }
}
