//! cc-hookguard: PreToolUse hook for Claude Code.
//!
//! Reads the hook JSON from stdin, tokenizes the Bash command and blocks
//! `git commit` / `git push` runs that would skip client-side hooks.
//!
//! Exit codes:
//!   - 0: allowed (or not a Bash call)
//!   - 1: bad input (invalid JSON, unbalanced quotes); the call proceeds
//!   - 2: blocked; stderr is shown to the model

use serde::Deserialize;
use std::io::{IsTerminal, Read};

use cc_hookguard::config::Config;
use cc_hookguard::eval::Guard;
use cc_hookguard::logging;
use cc_hookguard::parse::Dialect;

#[derive(Deserialize)]
struct HookInput {
    tool_name: Option<String>,
    tool_input: Option<ToolInput>,
}

#[derive(Deserialize)]
struct ToolInput {
    command: Option<String>,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::load();

    if args.iter().any(|a| a == "--dump-config") {
        match config.to_toml() {
            Ok(text) => print!("{text}"),
            Err(e) => {
                eprintln!("cc-hookguard: failed to render config: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if args.first().is_some_and(|a| a == "--tokenize") {
        run_tokenize(&args[1..], &config);
        return;
    }

    logging::init(&config.settings);
    run_hook(&config);
}

/// `--tokenize [--basic|--advanced] <command...>`: print the words as a JSON array.
fn run_tokenize(args: &[String], config: &Config) {
    let mut guard = Guard::from_config(config);
    let rest = match args.first().map(String::as_str) {
        Some("--basic") => {
            guard.set_dialect(Dialect::Basic);
            &args[1..]
        }
        Some("--advanced") => {
            guard.set_dialect(Dialect::Advanced);
            &args[1..]
        }
        _ => args,
    };
    let command = rest.join(" ");

    match guard.tokenize(&command) {
        Ok(words) => println!("{}", serde_json::Value::from(words)),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run_hook(config: &Config) {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return;
    }

    let mut input = String::new();
    if stdin.lock().read_to_string(&mut input).is_err() {
        eprintln!("Error: Invalid JSON input");
        std::process::exit(1);
    }

    let hook_input: HookInput = match serde_json::from_str(&input) {
        Ok(v) => v,
        Err(e) => {
            log::error!("JSON parse error: {e}");
            eprintln!("Error: Invalid JSON input");
            std::process::exit(1);
        }
    };

    if hook_input.tool_name.as_deref() != Some("Bash") {
        return;
    }

    let command = hook_input
        .tool_input
        .and_then(|t| t.command)
        .unwrap_or_default();

    if command.trim().is_empty() {
        return;
    }

    let guard = Guard::from_config(config);
    let result = match guard.evaluate(&command) {
        Ok(result) => result,
        Err(e) => {
            log::warn!("tokenize failed ({e}): {command}");
            eprintln!("Error: could not tokenize command: {e}");
            std::process::exit(1);
        }
    };

    logging::log_decision(&command, &result);

    let code = result.decision.exit_code();
    if code != 0 {
        eprintln!("{}", result.reason);
        std::process::exit(code);
    }
}
