//! Text analysis for the built-in field types.
//!
//! Analysis proper belongs to the caller: anything implementing
//! [`Field`](crate::document::Field) can hand the index its own token
//! frequencies. This module only provides the small pipeline used by
//! [`TextField`](crate::document::TextField): a [`Tokenizer`] followed by
//! optional lowercasing, folded into a
//! [`TokenFrequencies`](crate::document::TokenFrequencies) table.

pub mod analyzer;
pub mod token;
pub mod tokenizer;

pub use analyzer::SimpleAnalyzer;
pub use token::{Token, TokenStream};
pub use tokenizer::{KeywordTokenizer, RegexTokenizer, Tokenizer, WhitespaceTokenizer};
