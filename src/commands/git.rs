use crate::commands::CommandSpec;
use crate::config::GitConfig;
use crate::eval::{CommandContext, RuleMatch};

/// Global git options that consume the following word as their value.
const VALUE_OPTIONS: &[&str] = &[
    "-C",
    "-c",
    "--git-dir",
    "--work-tree",
    "--namespace",
    "--config-env",
];

pub struct GitSpec {
    guarded_subcommands: Vec<String>,
    bypass_flags: Vec<String>,
    message: String,
}

impl GitSpec {
    pub fn from_config(config: &GitConfig) -> Self {
        Self {
            guarded_subcommands: config.guarded_subcommands.clone(),
            bypass_flags: config.bypass_flags.clone(),
            message: config.message.clone(),
        }
    }

    /// Position of the subcommand within `args`, skipping global options
    /// (`git -C /repo -c core.x=y commit` → index of `commit`).
    fn subcommand_index(args: &[String]) -> Option<usize> {
        let mut i = 0;
        while i < args.len() {
            let word = args[i].as_str();
            if VALUE_OPTIONS.contains(&word) {
                i += 2;
                continue;
            }
            if word.starts_with('-') {
                i += 1;
                continue;
            }
            return Some(i);
        }
        None
    }
}

impl CommandSpec for GitSpec {
    fn evaluate(&self, ctx: &CommandContext) -> RuleMatch {
        let args = ctx.args();
        let Some(idx) = Self::subcommand_index(args) else {
            return RuleMatch::allow("git without subcommand");
        };
        let sub = args[idx].as_str();

        if !self.guarded_subcommands.iter().any(|s| s == sub) {
            return RuleMatch::allow(format!("git {sub} not guarded"));
        }

        match ctx.find_option(idx + 1, &self.bypass_flags) {
            Some(flag) => {
                log::warn!("blocked git {sub} {flag}");
                RuleMatch::block(self.message.clone())
            }
            None => RuleMatch::allow(format!("git {sub} runs hooks")),
        }
    }
}
