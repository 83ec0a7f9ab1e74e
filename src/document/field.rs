//! Field capability traits and the built-in field types.

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::SimpleAnalyzer;
use crate::document::token_freq::TokenFrequencies;
use crate::error::Result;

/// Indexing options of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIndexingOptions {
    /// Whether the field is analyzed and indexed.
    pub indexed: bool,
    /// Whether the original value is stored.
    pub stored: bool,
    /// Whether the field takes part in doc values.
    pub doc_values: bool,
    /// Whether term vectors (locations) are kept.
    pub term_vectors: bool,
}

impl FieldIndexingOptions {
    /// Check if the field is indexed.
    pub fn is_indexed(&self) -> bool {
        self.indexed
    }

    /// Check if the field value is stored.
    pub fn is_stored(&self) -> bool {
        self.stored
    }

    /// Check if the field takes part in doc values.
    pub fn includes_doc_values(&self) -> bool {
        self.doc_values
    }

    /// Check if term vectors are kept.
    pub fn includes_term_vectors(&self) -> bool {
        self.term_vectors
    }
}

impl Default for FieldIndexingOptions {
    fn default() -> Self {
        FieldIndexingOptions {
            indexed: true,
            stored: false,
            doc_values: true,
            term_vectors: true,
        }
    }
}

/// A named, independently analyzed unit of document content.
pub trait Field {
    /// The field name.
    fn name(&self) -> &str;

    /// How the field should be indexed.
    fn options(&self) -> FieldIndexingOptions;

    /// Run analysis, filling the token frequencies and analyzed length.
    fn analyze(&mut self) -> Result<()>;

    /// Number of tokens produced by the last analysis.
    fn analyzed_length(&self) -> usize;

    /// Token frequencies produced by the last analysis.
    fn analyzed_token_frequencies(&self) -> &TokenFrequencies;

    /// Dimensionality of vector fields; `None` for everything else.
    fn vector_dims(&self) -> Option<usize> {
        None
    }
}

/// A field aggregating the analysis output of other fields.
pub trait CompositeField: Field {
    /// Fold the contribution of plain field `field` into this composite.
    fn compose(&mut self, field: &str, length: usize, freqs: &TokenFrequencies);
}

/// A text field analyzed with a [`SimpleAnalyzer`].
#[derive(Debug, Clone)]
pub struct TextField {
    name: String,
    value: String,
    array_positions: Vec<u64>,
    options: FieldIndexingOptions,
    analyzer: SimpleAnalyzer,
    analyzed_len: usize,
    analyzed_freqs: TokenFrequencies,
}

impl TextField {
    /// Create a new text field using the default whitespace analyzer.
    pub fn new<S: Into<String>, T: Into<String>>(name: S, value: T) -> Self {
        TextField {
            name: name.into(),
            value: value.into(),
            array_positions: Vec::new(),
            options: FieldIndexingOptions::default(),
            analyzer: SimpleAnalyzer::default(),
            analyzed_len: 0,
            analyzed_freqs: TokenFrequencies::new(),
        }
    }

    /// Set the analyzer.
    pub fn with_analyzer(mut self, analyzer: SimpleAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Set the array-position path (for values of multi-valued fields).
    pub fn with_array_positions(mut self, array_positions: Vec<u64>) -> Self {
        self.array_positions = array_positions;
        self
    }

    /// Set whether the field is indexed.
    pub fn indexed(mut self, indexed: bool) -> Self {
        self.options.indexed = indexed;
        self
    }

    /// Set whether the field value is stored.
    pub fn stored(mut self, stored: bool) -> Self {
        self.options.stored = stored;
        self
    }

    /// Get the raw value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the array-position path.
    pub fn array_positions(&self) -> &[u64] {
        &self.array_positions
    }
}

impl Field for TextField {
    fn name(&self) -> &str {
        &self.name
    }

    fn options(&self) -> FieldIndexingOptions {
        self.options
    }

    fn analyze(&mut self) -> Result<()> {
        let (freqs, len) =
            self.analyzer
                .token_frequencies(&self.name, &self.value, &self.array_positions)?;
        self.analyzed_freqs = freqs;
        self.analyzed_len = len;
        Ok(())
    }

    fn analyzed_length(&self) -> usize {
        self.analyzed_len
    }

    fn analyzed_token_frequencies(&self) -> &TokenFrequencies {
        &self.analyzed_freqs
    }
}

/// A composite field such as `_all`, built from plain field contributions.
///
/// With no explicit inclusions every field is included; exclusions always
/// win.
#[derive(Debug, Clone)]
pub struct CompositeTextField {
    name: String,
    included: Vec<String>,
    excluded: Vec<String>,
    options: FieldIndexingOptions,
    analyzed_len: usize,
    analyzed_freqs: TokenFrequencies,
}

impl CompositeTextField {
    /// Create a composite field including every plain field.
    pub fn new<S: Into<String>>(name: S) -> Self {
        CompositeTextField {
            name: name.into(),
            included: Vec::new(),
            excluded: Vec::new(),
            options: FieldIndexingOptions::default(),
            analyzed_len: 0,
            analyzed_freqs: TokenFrequencies::new(),
        }
    }

    /// The conventional `_all` composite.
    pub fn all() -> Self {
        Self::new("_all")
    }

    /// Restrict the composite to the given field (may be called repeatedly).
    pub fn include<S: Into<String>>(mut self, field: S) -> Self {
        self.included.push(field.into());
        self
    }

    /// Exclude a field from the composite.
    pub fn exclude<S: Into<String>>(mut self, field: S) -> Self {
        self.excluded.push(field.into());
        self
    }

    /// Check whether contributions from `field` are aggregated.
    pub fn includes_field(&self, field: &str) -> bool {
        if self.excluded.iter().any(|f| f == field) {
            return false;
        }
        self.included.is_empty() || self.included.iter().any(|f| f == field)
    }
}

impl Field for CompositeTextField {
    fn name(&self) -> &str {
        &self.name
    }

    fn options(&self) -> FieldIndexingOptions {
        self.options
    }

    // Composites are filled through `compose`.
    fn analyze(&mut self) -> Result<()> {
        Ok(())
    }

    fn analyzed_length(&self) -> usize {
        self.analyzed_len
    }

    fn analyzed_token_frequencies(&self) -> &TokenFrequencies {
        &self.analyzed_freqs
    }
}

impl CompositeField for CompositeTextField {
    fn compose(&mut self, field: &str, length: usize, freqs: &TokenFrequencies) {
        if !self.includes_field(field) {
            return;
        }
        self.analyzed_len += length;
        self.analyzed_freqs.merge_all(field, freqs);
    }
}

/// A dense vector field. It contributes no terms, only its dimensionality.
#[derive(Debug, Clone)]
pub struct VectorField {
    name: String,
    vector: Vec<f32>,
    options: FieldIndexingOptions,
    empty: TokenFrequencies,
}

impl VectorField {
    /// Create a new vector field.
    pub fn new<S: Into<String>>(name: S, vector: Vec<f32>) -> Self {
        VectorField {
            name: name.into(),
            vector,
            options: FieldIndexingOptions::default(),
            empty: TokenFrequencies::new(),
        }
    }

    /// Get the vector.
    pub fn vector(&self) -> &[f32] {
        &self.vector
    }
}

impl Field for VectorField {
    fn name(&self) -> &str {
        &self.name
    }

    fn options(&self) -> FieldIndexingOptions {
        self.options
    }

    fn analyze(&mut self) -> Result<()> {
        Ok(())
    }

    fn analyzed_length(&self) -> usize {
        0
    }

    fn analyzed_token_frequencies(&self) -> &TokenFrequencies {
        &self.empty
    }

    fn vector_dims(&self) -> Option<usize> {
        Some(self.vector.len())
    }
}
