//! Index configuration.
//!
//! # Examples
//!
//! ```
//! use unidoc::config::{FuzzyStrategy, IndexConfig};
//!
//! let config = IndexConfig::default().fuzzy_strategy(FuzzyStrategy::Automaton);
//! assert_eq!(config.initial_scratch_len, 64);
//! assert!(config.validate().is_ok());
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, UnidocError};

/// How fuzzy dictionaries test candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuzzyStrategy {
    /// Bounded dynamic-programming edit distance. Supports any fuzziness.
    #[default]
    EditDistance,
    /// Levenshtein DFA for fuzziness 1 and 2, edit distance otherwise.
    Automaton,
}

/// Configuration for a [`SingleDocIndex`](crate::index::SingleDocIndex).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Strategy used by fuzzy dictionaries.
    pub fuzzy_strategy: FuzzyStrategy,
    /// Initial length of the edit-distance scratch row.
    pub initial_scratch_len: usize,
    /// Memory cap, in bytes, for compiled regular expressions.
    pub regex_size_limit: Option<usize>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            fuzzy_strategy: FuzzyStrategy::EditDistance,
            initial_scratch_len: 64,
            regex_size_limit: Some(10 * (1 << 20)),
        }
    }
}

impl IndexConfig {
    /// Set the fuzzy strategy.
    pub fn fuzzy_strategy(mut self, strategy: FuzzyStrategy) -> Self {
        self.fuzzy_strategy = strategy;
        self
    }

    /// Set the initial scratch row length.
    pub fn initial_scratch_len(mut self, len: usize) -> Self {
        self.initial_scratch_len = len;
        self
    }

    /// Set the regex memory cap. `None` removes the cap.
    pub fn regex_size_limit(mut self, limit: Option<usize>) -> Self {
        self.regex_size_limit = limit;
        self
    }

    /// Check the configuration for values that can never work.
    pub fn validate(&self) -> Result<()> {
        if self.regex_size_limit == Some(0) {
            return Err(UnidocError::invalid_config(
                "regex_size_limit must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file. Missing keys take defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: IndexConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}
