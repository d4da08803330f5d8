/// Context for evaluating one tokenized command.
#[derive(Debug)]
pub struct CommandContext {
    /// The base command name (e.g. "git"), basename of the first real word.
    pub base_command: String,
    /// All words in the command, quote-removed.
    pub words: Vec<String>,
    /// Leading NAME=value assignments.
    pub env_vars: Vec<(String, String)>,
}

impl CommandContext {
    /// Build a CommandContext from a command's tokens.
    pub fn from_words(words: Vec<String>) -> Self {
        let env_vars: Vec<(String, String)> = words
            .iter()
            .map_while(|w| assignment(w))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let base_command = words
            .get(env_vars.len())
            .map(|w| basename(w).to_string())
            .unwrap_or_default();

        Self {
            base_command,
            words,
            env_vars,
        }
    }

    /// Get words after skipping env vars and the base command.
    pub fn args(&self) -> &[String] {
        let skip = self.env_vars.len() + 1;
        self.words.get(skip..).unwrap_or(&[])
    }

    /// First argument at or after `start` that is one of `flags`.
    ///
    /// Scanning stops at `--`: everything after it is an operand.
    pub fn find_option(&self, start: usize, flags: &[String]) -> Option<&str> {
        self.args()
            .get(start..)?
            .iter()
            .take_while(|w| w.as_str() != "--")
            .find(|w| flags.contains(w))
            .map(String::as_str)
    }
}

/// Split `NAME=value` when NAME is a valid shell identifier.
fn assignment(word: &str) -> Option<(&str, &str)> {
    let (name, value) = word.split_once('=')?;
    let mut chars = name.chars();
    let first = chars.next()?;
    if (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        Some((name, value))
    } else {
        None
    }
}

/// /usr/bin/git → git, ./script.sh → script.sh
fn basename(word: &str) -> &str {
    match word.rsplit_once('/') {
        Some((_, name)) if !name.is_empty() => name,
        _ => word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(words: &[&str]) -> CommandContext {
        CommandContext::from_words(words.iter().map(|w| w.to_string()).collect())
    }

    fn flags(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn base_command_simple() {
        assert_eq!(ctx(&["ls", "-la"]).base_command, "ls");
    }

    #[test]
    fn base_command_with_env() {
        let c = ctx(&["GIT_CONFIG_GLOBAL=~/.gitconfig.ai", "git", "push"]);
        assert_eq!(c.base_command, "git");
        assert_eq!(c.env_vars[0].0, "GIT_CONFIG_GLOBAL");
        assert_eq!(c.args(), ["push"]);
    }

    #[test]
    fn env_value_with_spaces() {
        // Quote removal already happened, so the value is one word
        let c = ctx(&["MSG=hello world", "git", "commit"]);
        assert_eq!(c.env_vars, vec![("MSG".into(), "hello world".into())]);
        assert_eq!(c.base_command, "git");
    }

    #[test]
    fn base_command_absolute_path() {
        assert_eq!(ctx(&["/usr/bin/git", "status"]).base_command, "git");
    }

    #[test]
    fn base_command_relative_path() {
        assert_eq!(ctx(&["./script.sh", "--flag"]).base_command, "script.sh");
    }

    #[test]
    fn trailing_slash_kept() {
        assert_eq!(ctx(&["dir/"]).base_command, "dir/");
    }

    #[test]
    fn not_an_assignment() {
        let c = ctx(&["1X=2", "cmd"]);
        assert!(c.env_vars.is_empty());
        assert_eq!(c.base_command, "1X=2");
    }

    #[test]
    fn empty_words() {
        let c = ctx(&[]);
        assert_eq!(c.base_command, "");
        assert!(c.args().is_empty());
        assert_eq!(c.find_option(0, &flags(&["-n"])), None);
    }

    #[test]
    fn find_option_skips_command_word() {
        let c = ctx(&["-n", "git", "status"]);
        assert_eq!(c.base_command, "-n");
        assert_eq!(c.find_option(0, &flags(&["-n"])), None);
        assert_eq!(c.find_option(0, &flags(&["status"])), Some("status"));
    }

    #[test]
    fn find_option_respects_start() {
        let c = ctx(&["git", "-n", "commit", "--no-verify"]);
        let f = flags(&["-n", "--no-verify"]);
        assert_eq!(c.find_option(0, &f), Some("-n"));
        assert_eq!(c.find_option(2, &f), Some("--no-verify"));
        assert_eq!(c.find_option(9, &f), None);
    }

    #[test]
    fn find_option_stops_at_double_dash() {
        let c = ctx(&["git", "commit", "--", "-n"]);
        assert_eq!(c.find_option(1, &flags(&["-n"])), None);
    }
}
