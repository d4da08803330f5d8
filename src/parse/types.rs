//! Types produced by the tokenizer and consumed by the eval layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Quoting dialect understood by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Single quotes, double quotes, backslash escapes, whitespace splitting.
    Basic,
    /// `Basic` plus `#` comments, `$'...'` ANSI-C quoting and
    /// line continuation inside double quotes.
    #[default]
    Advanced,
}

impl Dialect {
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Basic => "basic",
            Dialect::Advanced => "advanced",
        }
    }
}

/// Which kind of plain quote was left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteKind {
    /// `'...'`
    Single,
    /// `"..."`
    Double,
}

impl fmt::Display for QuoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteKind::Single => f.write_str("single"),
            QuoteKind::Double => f.write_str("double"),
        }
    }
}

/// Failure to tokenize a command string.
///
/// Raised only when input ends inside a quoting span. Malformed escapes
/// never fail; they degrade to literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    #[error("unterminated {0} quote")]
    UnterminatedQuote(QuoteKind),
    #[error("unterminated $' quote")]
    UnterminatedAnsiCQuote,
}
