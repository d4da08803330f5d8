//! Quote-content extractors shared by both tokenizer dialects.
//!
//! Each extractor takes the scanned input and the index of the opening
//! delimiter and returns the decoded content plus the index just past the
//! closing delimiter.

use super::types::{Dialect, QuoteKind, TokenizeError};

/// Decoded quote content and the index after the closing delimiter.
pub type Extracted = (String, usize);

/// `'...'`: everything up to the next `'` is copied verbatim.
pub fn single_quoted(chars: &[char], start: usize) -> Result<Extracted, TokenizeError> {
    let len = chars.len();
    let mut i = start + 1; // skip opening '
    let mut content = String::new();

    while i < len && chars[i] != '\'' {
        content.push(chars[i]);
        i += 1;
    }

    if i >= len {
        return Err(TokenizeError::UnterminatedQuote(QuoteKind::Single));
    }
    Ok((content, i + 1))
}

/// `"..."`: backslash escapes only `$`, `` ` ``, `"`, `\` and newline.
///
/// An escaped newline keeps the newline under [`Dialect::Basic`] and is
/// deleted as a line continuation under [`Dialect::Advanced`]. A backslash
/// before any other character stays in the content.
pub fn double_quoted(
    chars: &[char],
    start: usize,
    dialect: Dialect,
) -> Result<Extracted, TokenizeError> {
    let len = chars.len();
    let mut i = start + 1; // skip opening "
    let mut content = String::new();

    while i < len && chars[i] != '"' {
        if chars[i] == '\\' && i + 1 < len {
            let next = chars[i + 1];
            match next {
                '\n' if dialect == Dialect::Advanced => {
                    i += 2;
                }
                '$' | '`' | '"' | '\\' | '\n' => {
                    content.push(next);
                    i += 2;
                }
                _ => {
                    // Literal backslash; `next` is copied on the following pass
                    content.push('\\');
                    i += 1;
                }
            }
            continue;
        }
        content.push(chars[i]);
        i += 1;
    }

    if i >= len {
        return Err(TokenizeError::UnterminatedQuote(QuoteKind::Double));
    }
    Ok((content, i + 1))
}

/// `$'...'`: C-style escapes. `start` is the index of the `$`.
pub fn ansi_c_quoted(chars: &[char], start: usize) -> Result<Extracted, TokenizeError> {
    let len = chars.len();
    let mut i = start + 2; // skip $'
    let mut content = String::new();

    while i < len && chars[i] != '\'' {
        if chars[i] != '\\' || i + 1 >= len {
            content.push(chars[i]);
            i += 1;
            continue;
        }

        i += 1; // skip backslash
        let c = chars[i];
        match c {
            'a' => content.push('\x07'),
            'b' => content.push('\x08'),
            'e' => content.push('\x1b'),
            'f' => content.push('\x0c'),
            'n' => content.push('\n'),
            'r' => content.push('\r'),
            't' => content.push('\t'),
            'v' => content.push('\x0b'),
            '\\' | '\'' | '"' | '?' => content.push(c),
            'x' => match hex_pair(chars, i + 1) {
                Some(decoded) => {
                    content.push(decoded);
                    i += 2;
                }
                None => content.push('x'),
            },
            '0'..='7' => {
                let (decoded, digits) = octal_run(chars, i);
                content.push(decoded);
                i += digits - 1;
            }
            other => content.push(other),
        }
        i += 1;
    }

    if i >= len {
        return Err(TokenizeError::UnterminatedAnsiCQuote);
    }
    Ok((content, i + 1))
}

/// Two hex digits at `at` and `at + 1`, decoded to one character.
fn hex_pair(chars: &[char], at: usize) -> Option<char> {
    let hi = chars.get(at)?.to_digit(16)?;
    let lo = chars.get(at + 1)?.to_digit(16)?;
    // hi, lo < 16, so the value fits in a byte
    Some(char::from((hi * 16 + lo) as u8))
}

/// Up to three octal digits starting at `at` (the first is known to be
/// octal). Returns the decoded character and how many digits were used.
fn octal_run(chars: &[char], at: usize) -> (char, usize) {
    let mut value = 0u32;
    let mut digits = 0;
    while digits < 3 {
        let Some(d) = chars.get(at + digits).and_then(|c| c.to_digit(8)) else {
            break;
        };
        value = value * 8 + d;
        digits += 1;
    }
    // At most 0o777, always a valid scalar value
    let decoded = char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER);
    (decoded, digits)
}
