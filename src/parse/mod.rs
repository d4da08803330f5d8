pub mod quote;
pub mod tokenize;
pub mod types;

pub use tokenize::{tokenize, tokenize_advanced, tokenize_basic};
pub use types::{Dialect, QuoteKind, TokenizeError};
