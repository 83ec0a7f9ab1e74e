//! Tokens produced by tokenizers.
//!
//! # Examples
//!
//! ```
//! use unidoc::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.span(), 6..11);
//!
//! let location = token.to_location("greeting", &[]);
//! assert_eq!(location.position, 2);
//! ```

use std::ops::Range;

use crate::document::token_freq::Location;

/// One token of analyzed text.
///
/// Positions are 0-based here; [`Token::to_location`] converts them to the
/// 1-based positions stored in a [`Location`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token text, after any normalization.
    pub text: String,

    /// 0-based position in the token stream.
    pub position: usize,

    /// Byte offset where the token starts in the source text.
    pub start_offset: usize,

    /// Byte offset where the token ends in the source text.
    pub end_offset: usize,
}

impl Token {
    /// Create a token spanning `start_offset..end_offset` of the source.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Byte span in the source text.
    pub fn span(&self) -> Range<usize> {
        self.start_offset..self.end_offset
    }

    /// The occurrence of this token in `field`.
    pub fn to_location(&self, field: &str, array_positions: &[u64]) -> Location {
        Location::new(field, self.start_offset, self.end_offset, self.position + 1)
            .with_array_positions(array_positions.to_vec())
    }
}

/// A stream of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;
