use super::quote::{ansi_c_quoted, double_quoted, single_quoted};
use super::types::{Dialect, TokenizeError};

/// Unquoted characters that separate words.
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Split a command into words with quote removal and backslash processing.
///
/// No expansion of any kind is performed: `$HOME` stays `$HOME`, `*` stays `*`.
pub fn tokenize(command: &str, dialect: Dialect) -> Result<Vec<String>, TokenizeError> {
    let chars: Vec<char> = command.chars().collect();
    let len = chars.len();
    let advanced = dialect == Dialect::Advanced;

    let mut words = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < len {
        let c = chars[i];

        if current.is_empty() && is_blank(c) {
            i += 1;
            continue;
        }

        // Comment: `#` at the start of a word runs to end of line
        if advanced && current.is_empty() && c == '#' {
            while i < len && chars[i] != '\n' {
                i += 1;
            }
            continue;
        }

        if c == '\'' {
            let (content, next) = single_quoted(&chars, i)?;
            current.push_str(&content);
            i = next;
            continue;
        }

        if c == '"' {
            let (content, next) = double_quoted(&chars, i, dialect)?;
            current.push_str(&content);
            i = next;
            continue;
        }

        if advanced && c == '$' && chars.get(i + 1) == Some(&'\'') {
            let (content, next) = ansi_c_quoted(&chars, i)?;
            current.push_str(&content);
            i = next;
            continue;
        }

        // A trailing backslash has nothing to escape and falls through as a literal
        if c == '\\' && i + 1 < len {
            let next = chars[i + 1];
            if next != '\n' {
                current.push(next);
            }
            i += 2;
            continue;
        }

        if is_blank(c) {
            words.push(std::mem::take(&mut current));
            i += 1;
            continue;
        }

        current.push(c);
        i += 1;
    }

    if !current.is_empty() {
        words.push(current);
    }
    Ok(words)
}

/// Tokenize with single quotes, double quotes and backslash escapes only.
pub fn tokenize_basic(command: &str) -> Result<Vec<String>, TokenizeError> {
    tokenize(command, Dialect::Basic)
}

/// Tokenize with comments, `$'...'` quoting and line continuation on top of
/// [`tokenize_basic`].
pub fn tokenize_advanced(command: &str) -> Result<Vec<String>, TokenizeError> {
    tokenize(command, Dialect::Advanced)
}
