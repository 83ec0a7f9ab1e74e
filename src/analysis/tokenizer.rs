//! Tokenizer implementations for the built-in analyzer.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod keyword;
pub mod regex;
pub mod whitespace;

pub use keyword::KeywordTokenizer;
pub use regex::RegexTokenizer;
pub use whitespace::WhitespaceTokenizer;
