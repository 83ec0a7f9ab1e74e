//! The read surface of a [`SingleDocIndex`].
//!
//! Every operation first checks whether a document is bound. When none is,
//! or when the requested field does not exist, the operation returns the
//! empty form of its result instead of an error.
//!
//! # Examples
//!
//! ```
//! use unidoc::document::Document;
//! use unidoc::index::SingleDocIndex;
//!
//! let mut index = SingleDocIndex::default();
//! index
//!     .update(Document::builder("a").add_text("body", "able baker ball basket").build())
//!     .unwrap();
//!
//! let mut reader = index.reader();
//! let mut dict = reader.field_dict_prefix("body", "ba").unwrap();
//! assert_eq!(dict.collect_terms().unwrap(), vec!["baker", "ball", "basket"]);
//! ```

use std::sync::Arc;

use ahash::AHashMap;

use crate::config::{FuzzyStrategy, IndexConfig};
use crate::document::document::IndexDocument;
use crate::error::{Result, UnidocError};
use crate::fuzzy::automaton::{LevenshteinDfa, RegexAutomaton};
use crate::fuzzy::distance::EditDistanceScratch;
use crate::index::dictionary::{
    AutomatonMatcher, FieldDict, FieldDictContains, FuzzyMatcher, PrefixMatcher, TermMatcher,
    inclusive_range, prefix_range,
};
use crate::index::doc_id::DocIdReader;
use crate::index::doc_values::DocValueReader;
use crate::index::postings::{INTERNAL_DOC_ID, IndexInternalId, TermFieldReader};
use crate::index::single::SingleDocIndex;

/// Compiled automata and scratch space kept across reads.
#[derive(Debug)]
pub(crate) struct ReaderCache {
    regex: AHashMap<String, Arc<RegexAutomaton>>,
    levenshtein: AHashMap<(String, usize), Arc<LevenshteinDfa>>,
    pub(crate) scratch: EditDistanceScratch,
}

impl ReaderCache {
    pub(crate) fn new(config: &IndexConfig) -> Self {
        ReaderCache {
            regex: AHashMap::new(),
            levenshtein: AHashMap::new(),
            scratch: EditDistanceScratch::with_capacity(config.initial_scratch_len),
        }
    }

    pub(crate) fn regex(
        &mut self,
        pattern: &str,
        size_limit: Option<usize>,
    ) -> Result<Arc<RegexAutomaton>> {
        if let Some(re) = self.regex.get(pattern) {
            return Ok(Arc::clone(re));
        }
        let re = Arc::new(RegexAutomaton::new(pattern, size_limit)?);
        self.regex.insert(pattern.to_string(), Arc::clone(&re));
        Ok(re)
    }

    pub(crate) fn levenshtein(&mut self, term: &str, fuzziness: usize) -> Result<Arc<LevenshteinDfa>> {
        let key = (term.to_string(), fuzziness);
        if let Some(dfa) = self.levenshtein.get(&key) {
            return Ok(Arc::clone(dfa));
        }
        let dfa = Arc::new(LevenshteinDfa::new(term, fuzziness)?);
        self.levenshtein.insert(key, Arc::clone(&dfa));
        Ok(dfa)
    }

    pub(crate) fn regex_len(&self) -> usize {
        self.regex.len()
    }

    pub(crate) fn levenshtein_len(&self) -> usize {
        self.levenshtein.len()
    }
}

/// A reader over the index. It is not isolated from later updates: it
/// borrows the index, so no update can happen while it is alive.
#[derive(Debug)]
pub struct IndexReader<'a> {
    index: &'a mut SingleDocIndex,
}

impl<'a> IndexReader<'a> {
    pub(crate) fn new(index: &'a mut SingleDocIndex) -> Self {
        IndexReader { index }
    }

    /// Postings of `term` in `field`.
    pub fn term_field_reader(
        &self,
        term: &[u8],
        field: &str,
        include_freq: bool,
        include_norm: bool,
        include_vectors: bool,
    ) -> Result<TermFieldReader<'_>> {
        let model = &self.index.model;
        if !model.has_document() {
            return Ok(TermFieldReader::empty());
        }
        let Ok((freqs, len)) = model.token_freqs_and_len(field) else {
            return Ok(TermFieldReader::empty());
        };
        let tf = std::str::from_utf8(term)
            .ok()
            .and_then(|term| freqs.get(term));
        Ok(match tf {
            Some(tf) => TermFieldReader::new(tf, len, include_freq, include_norm, include_vectors),
            None => TermFieldReader::empty(),
        })
    }

    /// Identifiers of every document.
    pub fn doc_id_reader_all(&self) -> Result<DocIdReader> {
        if !self.index.model.has_document() {
            return Ok(DocIdReader::empty());
        }
        Ok(DocIdReader::new())
    }

    /// Identifiers of the documents among `ids`.
    pub fn doc_id_reader_only<S: AsRef<str>>(&self, ids: &[S]) -> Result<DocIdReader> {
        if !self.index.model.has_document() {
            return Ok(DocIdReader::empty());
        }
        let current = self.index.model.document_id();
        if ids.iter().any(|id| Some(id.as_ref()) == current) {
            return Ok(DocIdReader::new());
        }
        Ok(DocIdReader::empty())
    }

    /// Every term of `field`.
    pub fn field_dict(&mut self, field: &str) -> Result<FieldDict<'_>> {
        let model = &mut self.index.model;
        if !model.has_document() {
            return Ok(FieldDict::empty());
        }
        let Ok(terms) = model.sorted_terms_for_field(field) else {
            return Ok(FieldDict::empty());
        };
        Ok(FieldDict::with_terms(terms, None))
    }

    /// Terms of `field` in `[start, end]`, both ends inclusive.
    pub fn field_dict_range(&mut self, field: &str, start: &str, end: &str) -> Result<FieldDict<'_>> {
        let model = &mut self.index.model;
        if !model.has_document() {
            return Ok(FieldDict::empty());
        }
        let Ok(terms) = model.sorted_terms_for_field(field) else {
            return Ok(FieldDict::empty());
        };
        Ok(FieldDict::with_terms(inclusive_range(terms, start, end), None))
    }

    /// Terms of `field` starting with `prefix`.
    pub fn field_dict_prefix(&mut self, field: &str, prefix: &str) -> Result<FieldDict<'_>> {
        let model = &mut self.index.model;
        if !model.has_document() {
            return Ok(FieldDict::empty());
        }
        let Ok(terms) = model.sorted_terms_for_field(field) else {
            return Ok(FieldDict::empty());
        };
        Ok(FieldDict::with_terms(
            prefix_range(terms, prefix),
            Some(Box::new(PrefixMatcher::new(prefix))),
        ))
    }

    /// Terms of `field` fully matching the regular expression `pattern`.
    ///
    /// The pattern is compiled (and cached) before the document is checked,
    /// so an invalid pattern fails even on an empty index.
    pub fn field_dict_regexp(&mut self, field: &str, pattern: &str) -> Result<FieldDict<'_>> {
        let SingleDocIndex {
            model,
            cache,
            config,
            ..
        } = &mut *self.index;
        let regex = cache.regex(pattern, config.regex_size_limit)?;
        if !model.has_document() {
            return Ok(FieldDict::empty());
        }
        let Ok(terms) = model.sorted_terms_for_field(field) else {
            return Ok(FieldDict::empty());
        };
        Ok(FieldDict::with_terms(
            terms,
            Some(Box::new(AutomatonMatcher::new(regex))),
        ))
    }

    /// Terms of `field` within `fuzziness` edits of `term`.
    ///
    /// A non-empty `prefix` restricts candidates to terms sharing it.
    pub fn field_dict_fuzzy(
        &mut self,
        field: &str,
        term: &str,
        fuzziness: usize,
        prefix: &str,
    ) -> Result<FieldDict<'_>> {
        let SingleDocIndex {
            model,
            cache,
            config,
            ..
        } = &mut *self.index;
        if !model.has_document() {
            return Ok(FieldDict::empty());
        }
        let Ok(terms) = model.sorted_terms_for_field(field) else {
            return Ok(FieldDict::empty());
        };
        let candidates = if prefix.is_empty() {
            terms
        } else {
            prefix_range(terms, prefix)
        };

        let automaton = match config.fuzzy_strategy {
            FuzzyStrategy::EditDistance => None,
            FuzzyStrategy::Automaton => match cache.levenshtein(term, fuzziness) {
                Ok(dfa) => Some(dfa),
                Err(e) => {
                    log::debug!("{e}; using edit distance for {term:?}");
                    None
                }
            },
        };
        let matcher: Box<dyn TermMatcher + '_> = match automaton {
            Some(dfa) => Box::new(AutomatonMatcher::new(dfa)),
            None => Box::new(FuzzyMatcher::new(term, fuzziness, &mut cache.scratch)),
        };
        Ok(FieldDict::with_terms(candidates, Some(matcher)))
    }

    /// Presence checks for the terms of `field`.
    pub fn field_dict_contains(&self, field: &str) -> Result<FieldDictContains<'_>> {
        let model = &self.index.model;
        if !model.has_document() {
            return Ok(FieldDictContains::empty());
        }
        let Ok((freqs, _)) = model.token_freqs_and_len(field) else {
            return Ok(FieldDictContains::empty());
        };
        Ok(FieldDictContains::new(freqs))
    }

    /// The resident document, if its identifier is `id`.
    pub fn document(&self, id: &str) -> Result<&dyn IndexDocument> {
        match self.resident() {
            Some(doc) if doc.id() == id => Ok(doc),
            _ => Err(UnidocError::doc_id_mismatch(id)),
        }
    }

    /// Doc values of `fields`.
    pub fn doc_value_reader<S: AsRef<str>>(&self, fields: &[S]) -> Result<DocValueReader<'_>> {
        let fields = fields.iter().map(|f| f.as_ref().to_string()).collect();
        Ok(DocValueReader::new(&self.index.model, fields))
    }

    fn resident(&self) -> Option<&dyn IndexDocument> {
        let model = &self.index.model;
        model.document().filter(|_| model.has_document())
    }

    /// Field names of the resident document.
    pub fn fields(&self) -> Result<&[String]> {
        Ok(self.index.model.fields())
    }

    /// A value from the internal key-value storage.
    pub fn get_internal(&self, key: &[u8]) -> Result<Option<&[u8]>> {
        Ok(self.index.internal.get(key).map(Vec::as_slice))
    }

    /// Number of documents: 0 or 1.
    pub fn doc_count(&self) -> Result<u64> {
        Ok(u64::from(self.index.model.has_document()))
    }

    /// External identifier for an internal one.
    pub fn external_id(&self, id: &[u8]) -> Result<String> {
        match self.resident().map(|doc| doc.id()) {
            Some(external) if id == INTERNAL_DOC_ID => Ok(external.to_string()),
            _ => Err(UnidocError::UnknownDocId(id.to_vec())),
        }
    }

    /// Internal identifier for an external one.
    pub fn internal_id(&self, id: &str) -> Result<IndexInternalId> {
        match self.resident().map(|doc| doc.id()) {
            Some(external) if external == id => Ok(INTERNAL_DOC_ID.to_vec()),
            _ => Err(UnidocError::doc_id_mismatch(id)),
        }
    }
}
