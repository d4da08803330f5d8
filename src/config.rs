use serde::{Deserialize, Serialize};

use crate::parse::Dialect;

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub git: GitConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    /// Tokenizer dialect used to split the hook's command.
    #[serde(default)]
    pub dialect: Dialect,
    /// Level name understood by `log::LevelFilter` (`off` disables logging).
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Decision log path. A leading `~` is expanded.
    #[serde(default)]
    pub log_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            log_level: default_log_level(),
            log_file: String::new(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct GitConfig {
    /// Subcommands whose hooks must not be skipped (e.g. commit, push).
    #[serde(default)]
    pub guarded_subcommands: Vec<String>,
    /// Arguments that skip hooks on a guarded subcommand.
    #[serde(default)]
    pub bypass_flags: Vec<String>,
    /// Text reported back when a bypass is blocked.
    #[serde(default)]
    pub message: String,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    git: GitOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    dialect: Option<Dialect>,
    log_level: Option<String>,
    log_file: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct GitOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    guarded_subcommands: Vec<String>,
    #[serde(default)]
    bypass_flags: Vec<String>,
    message: Option<String>,
    #[serde(default)]
    remove_guarded_subcommands: Vec<String>,
    #[serde(default)]
    remove_bypass_flags: Vec<String>,
}

// ── Merge logic ──

/// Merge a user list into a default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: remove items first, then extend with additions (deduped).
fn merge_list(base: &mut Vec<String>, add: Vec<String>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
    } else {
        base.retain(|item| !remove.contains(item));
        for item in add {
            if !base.contains(&item) {
                base.push(item);
            }
        }
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/cc-hookguard/config.toml (if exists)
    ///
    /// User config merges with defaults: lists extend, scalars override.
    /// Set `replace = true` in a section to replace its default lists entirely.
    /// Use `remove_<field>` lists to subtract specific items from defaults.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Try to load user overlay from ~/.config/cc-hookguard/config.toml.
    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(".config/cc-hookguard/config.toml");
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                eprintln!("cc-hookguard: config parse error: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        // Settings: scalar overrides
        let s = overlay.settings;
        if let Some(v) = s.dialect {
            self.settings.dialect = v;
        }
        if let Some(v) = s.log_level {
            self.settings.log_level = v;
        }
        if let Some(v) = s.log_file {
            self.settings.log_file = v;
        }

        // Git
        let g = overlay.git;
        merge_list(
            &mut self.git.guarded_subcommands,
            g.guarded_subcommands,
            &g.remove_guarded_subcommands,
            g.replace,
        );
        merge_list(
            &mut self.git.bypass_flags,
            g.bypass_flags,
            &g.remove_bypass_flags,
            g.replace,
        );
        if let Some(v) = g.message {
            self.git.message = v;
        }
    }

    /// Render the merged configuration as TOML (for `--dump-config`).
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = Config::default_config();
        assert!(!config.git.guarded_subcommands.is_empty());
        assert!(!config.git.bypass_flags.is_empty());
        assert!(!config.git.message.is_empty());
        assert!(!config.settings.log_file.is_empty());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default_config();
        assert_eq!(config.settings.dialect, Dialect::Advanced);
        assert_eq!(config.settings.log_level, "info");
        assert_eq!(config.git.guarded_subcommands, vec!["commit", "push"]);
        assert_eq!(config.git.bypass_flags, vec!["--no-verify", "-n"]);
        assert_eq!(config.git.message, "DO NOT BYPASS pre-commit hook");
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.settings.dialect, Dialect::Advanced);
        assert_eq!(config.settings.log_level, "info");
        assert!(config.git.bypass_flags.is_empty());
    }

    // ── Merge semantics ──

    #[test]
    fn overlay_switches_dialect() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [settings]
            dialect = "basic"
        "#,
        );
        assert_eq!(config.settings.dialect, Dialect::Basic);
        // Other settings untouched
        assert_eq!(config.settings.log_level, "info");
    }

    #[test]
    fn overlay_rejects_unknown_dialect() {
        let result: Result<ConfigOverlay, _> = toml::from_str(
            r#"
            [settings]
            dialect = "zsh"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn overlay_extends_bypass_flags() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [git]
            bypass_flags = ["--no-gpg-sign"]
        "#,
        );
        assert!(config.git.bypass_flags.contains(&"--no-verify".to_string()));
        assert!(config.git.bypass_flags.contains(&"--no-gpg-sign".to_string()));
    }

    #[test]
    fn overlay_removes_flag() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [git]
            remove_bypass_flags = ["-n"]
        "#,
        );
        assert_eq!(config.git.bypass_flags, vec!["--no-verify"]);
    }

    #[test]
    fn overlay_no_duplicates() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [git]
            guarded_subcommands = ["commit", "merge"]
        "#,
        );
        assert_eq!(
            config.git.guarded_subcommands,
            vec!["commit", "push", "merge"]
        );
    }

    #[test]
    fn overlay_replace_git() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [git]
            replace = true
            guarded_subcommands = ["commit"]
        "#,
        );
        assert_eq!(config.git.guarded_subcommands, vec!["commit"]);
        assert!(config.git.bypass_flags.is_empty());
        // Scalars are not lists; replace leaves them alone
        assert_eq!(config.git.message, "DO NOT BYPASS pre-commit hook");
    }

    #[test]
    fn overlay_overrides_message() {
        let mut config = Config::default_config();
        config.apply_overlay_str(
            r#"
            [git]
            message = "hooks are mandatory here"
        "#,
        );
        assert_eq!(config.git.message, "hooks are mandatory here");
    }

    #[test]
    fn empty_overlay_changes_nothing() {
        let original = Config::default_config();
        let mut config = Config::default_config();
        config.apply_overlay_str("");
        assert_eq!(config.git.bypass_flags, original.git.bypass_flags);
        assert_eq!(config.settings.log_file, original.settings.log_file);
    }

    #[test]
    fn dump_round_trips() {
        let config = Config::default_config();
        let rendered = config.to_toml().unwrap();
        let reparsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(reparsed.git.bypass_flags, config.git.bypass_flags);
        assert_eq!(reparsed.settings.dialect, config.settings.dialect);
    }
}
