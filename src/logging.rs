use crate::config::Settings;
use crate::eval::RuleMatch;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::path::PathBuf;

/// Install a file logger from the `[settings]` section.
/// Best-effort: failures are silently ignored (logging must never block the hook).
pub fn init(settings: &Settings) {
    let level = level_filter(&settings.log_level);
    if level == LevelFilter::Off {
        return;
    }
    let Some(path) = log_path(&settings.log_file) else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    else {
        return;
    };

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let _ = WriteLogger::init(level, config, file);
}

/// Unknown level names fall back to `info`.
fn level_filter(name: &str) -> LevelFilter {
    name.parse().unwrap_or(LevelFilter::Info)
}

/// Expand `~` and environment variables in the configured path.
fn log_path(raw: &str) -> Option<PathBuf> {
    if raw.trim().is_empty() {
        return None;
    }
    let expanded = shellexpand::full(raw).ok()?;
    Some(PathBuf::from(expanded.as_ref()))
}

/// Record one hook decision as a single log line.
pub fn log_decision(command: &str, result: &RuleMatch) {
    // Compact single-line reason for the log (replace newlines with "; ")
    let reason_oneline = result.reason.replace('\n', "; ");
    let cmd_oneline: String = command
        .chars()
        .take(200)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();

    log::info!(
        "{decision}\t{cmd}\t{reason}",
        decision = result.decision.as_str(),
        cmd = cmd_oneline,
        reason = reason_oneline,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names() {
        assert_eq!(level_filter("off"), LevelFilter::Off);
        assert_eq!(level_filter("debug"), LevelFilter::Debug);
        assert_eq!(level_filter("WARN"), LevelFilter::Warn);
        assert_eq!(level_filter("chatty"), LevelFilter::Info);
    }

    #[test]
    fn empty_path_disables_file() {
        assert_eq!(log_path(""), None);
        assert_eq!(log_path("  "), None);
    }

    #[test]
    fn absolute_path_unchanged() {
        assert_eq!(
            log_path("/tmp/cc-hookguard/decisions.log"),
            Some(PathBuf::from("/tmp/cc-hookguard/decisions.log"))
        );
    }

    #[test]
    fn tilde_expanded() {
        let path = log_path("~/decisions.log").unwrap();
        assert!(!path.starts_with("~"));
        assert!(path.ends_with("decisions.log"));
    }
}
