//! The analyzer used by the built-in text fields.
//!
//! # Examples
//!
//! ```
//! use unidoc::analysis::analyzer::SimpleAnalyzer;
//!
//! let analyzer = SimpleAnalyzer::default();
//! let (freqs, len) = analyzer.token_frequencies("body", "Phrase bleve bleve", &[]).unwrap();
//!
//! assert_eq!(len, 3);
//! assert_eq!(freqs.get("bleve").unwrap().frequency(), 2);
//! assert_eq!(freqs.get("phrase").unwrap().locations[0].position, 1);
//! ```

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::{KeywordTokenizer, Tokenizer, WhitespaceTokenizer};
use crate::document::token_freq::TokenFrequencies;
use crate::error::Result;

/// Tokenizes text and optionally lowercases each token.
#[derive(Clone)]
pub struct SimpleAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    lowercase: bool,
}

impl SimpleAnalyzer {
    /// Create a new analyzer with the given tokenizer. Tokens are lowercased.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        SimpleAnalyzer {
            tokenizer,
            lowercase: true,
        }
    }

    /// An analyzer that keeps the whole value as one case-preserved term.
    pub fn keyword() -> Self {
        SimpleAnalyzer {
            tokenizer: Arc::new(KeywordTokenizer::new()),
            lowercase: false,
        }
    }

    /// Set whether tokens are lowercased.
    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Produce the token stream for `text`.
    pub fn analyze(&self, text: &str) -> Result<TokenStream> {
        let tokens = self.tokenizer.tokenize(text)?;
        if !self.lowercase {
            return Ok(tokens);
        }
        Ok(Box::new(tokens.map(|mut token| {
            token.text = token.text.to_lowercase();
            token
        })))
    }

    /// Analyze `text` into a token-frequency table and its analyzed length.
    ///
    /// Positions in the table are 1-based; offsets are byte offsets into
    /// `text`.
    pub fn token_frequencies(
        &self,
        field: &str,
        text: &str,
        array_positions: &[u64],
    ) -> Result<(TokenFrequencies, usize)> {
        let mut freqs = TokenFrequencies::new();
        let mut length = 0;
        for token in self.analyze(text)? {
            freqs.add_occurrence(&token.text, token.to_location(field, array_positions));
            length += 1;
        }
        Ok((freqs, length))
    }
}

impl Default for SimpleAnalyzer {
    fn default() -> Self {
        SimpleAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
    }
}

impl std::fmt::Debug for SimpleAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field("lowercase", &self.lowercase)
            .finish()
    }
}
