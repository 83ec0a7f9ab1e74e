//! The analyzed form of the resident document.
//!
//! [`DocumentModel`] holds one entry per field name: the merged token
//! frequencies, the summed analyzed length and the vector dimensionality.
//! Sorted term lists are built lazily per field and cached until the next
//! [`reset`](DocumentModel::reset).

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::document::document::{ID_FIELD_NAME, IndexDocument};
use crate::document::field::Field;
use crate::document::token_freq::TokenFrequencies;
use crate::error::{Result, UnidocError};

/// Analysis output for one field name.
#[derive(Debug, Clone, Default)]
pub struct FieldEntry {
    freqs: TokenFrequencies,
    len: usize,
    vector_dims: usize,
}

impl FieldEntry {
    /// Merged token frequencies.
    pub fn token_frequencies(&self) -> &TokenFrequencies {
        &self.freqs
    }

    /// Summed analyzed length.
    pub fn analyzed_length(&self) -> usize {
        self.len
    }

    /// Vector dimensionality, 0 for non-vector fields.
    pub fn vector_dims(&self) -> usize {
        self.vector_dims
    }
}

/// Hit and miss counters of the sorted-term cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to collect and sort.
    pub misses: u64,
}

#[derive(Debug, Default)]
struct FieldTable {
    indexes: AHashMap<String, usize>,
    names: Vec<String>,
    entries: Vec<FieldEntry>,
}

impl FieldTable {
    fn clear(&mut self) {
        self.indexes.clear();
        self.names.clear();
        self.entries.clear();
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.indexes
            .get(name)
            .copied()
            .ok_or_else(|| UnidocError::field_not_found(name))
    }

    // Same-name fields merge into the first entry.
    fn add<F: Field + ?Sized>(&mut self, field: &F) {
        let name = field.name();
        match self.indexes.get(name) {
            Some(&idx) => {
                let entry = &mut self.entries[idx];
                entry.freqs.merge_all(name, field.analyzed_token_frequencies());
                entry.len += field.analyzed_length();
            }
            None => {
                let mut freqs = field.analyzed_token_frequencies().clone();
                freqs.fill_missing_field(name);
                self.indexes.insert(name.to_string(), self.entries.len());
                self.names.push(name.to_string());
                self.entries.push(FieldEntry {
                    freqs,
                    len: field.analyzed_length(),
                    vector_dims: field.vector_dims().unwrap_or(0),
                });
            }
        }
    }
}

/// The analysis model of at most one document.
#[derive(Default)]
pub struct DocumentModel {
    doc: Option<Box<dyn IndexDocument>>,
    table: FieldTable,
    sorted_terms: AHashMap<String, Vec<String>>,
    stats: CacheStats,
}

impl DocumentModel {
    /// Create a model with no document bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the resident document.
    ///
    /// All field state and every cached sorted-term list is dropped first,
    /// keeping their storage. If analysis fails the model is left unbound.
    pub fn reset(&mut self, mut doc: Box<dyn IndexDocument>) -> Result<()> {
        self.unbind();
        match self.analyze(&mut *doc) {
            Ok(()) => {
                log::debug!(
                    "bound document {:?} with {} fields",
                    doc.id(),
                    self.table.names.len()
                );
                self.doc = Some(doc);
                Ok(())
            }
            Err(e) => {
                self.table.clear();
                Err(e)
            }
        }
    }

    /// Drop the resident document, keeping storage for the next one.
    pub fn clear(&mut self) {
        self.unbind();
    }

    fn unbind(&mut self) {
        self.doc = None;
        self.table.clear();
        for terms in self.sorted_terms.values_mut() {
            terms.clear();
        }
    }

    fn analyze(&mut self, doc: &mut dyn IndexDocument) -> Result<()> {
        let table = &mut self.table;
        let has_composite = doc.has_composite();
        let mut contributions: Vec<(String, usize, TokenFrequencies)> = Vec::new();

        doc.visit_fields(&mut |field| {
            if !field.options().is_indexed() {
                return Ok(());
            }
            field.analyze()?;
            table.add(&*field);
            if has_composite && field.name() != ID_FIELD_NAME {
                contributions.push((
                    field.name().to_string(),
                    field.analyzed_length(),
                    field.analyzed_token_frequencies().clone(),
                ));
            }
            Ok(())
        })?;

        if has_composite {
            doc.visit_composite(&mut |composite| {
                for (name, len, freqs) in &contributions {
                    composite.compose(name, *len, freqs);
                }
                table.add(&*composite);
                Ok(())
            })?;
        }
        Ok(())
    }

    /// Whether a document is bound.
    pub fn is_bound(&self) -> bool {
        self.doc.is_some()
    }

    /// Whether a bound document produced no field entry at all.
    pub fn is_empty_snapshot(&self) -> bool {
        self.table.entries.is_empty()
    }

    /// Whether a document is bound and has at least one indexed field.
    ///
    /// Every read surface of the index goes through this check; an empty
    /// snapshot reads exactly like an unbound model.
    pub fn has_document(&self) -> bool {
        self.is_bound() && !self.is_empty_snapshot()
    }

    /// The resident document.
    pub fn document(&self) -> Option<&dyn IndexDocument> {
        self.doc.as_deref()
    }

    /// External identifier of the resident document.
    pub fn document_id(&self) -> Option<&str> {
        self.doc.as_ref().map(|doc| doc.id())
    }

    /// Field names in first-seen order, composites last.
    pub fn fields(&self) -> &[String] {
        &self.table.names
    }

    /// Look up a field entry.
    pub fn entry(&self, name: &str) -> Result<&FieldEntry> {
        let idx = self.table.index_of(name)?;
        Ok(&self.table.entries[idx])
    }

    /// Token frequencies and analyzed length of a field.
    pub fn token_freqs_and_len(&self, name: &str) -> Result<(&TokenFrequencies, usize)> {
        let entry = self.entry(name)?;
        Ok((&entry.freqs, entry.len))
    }

    /// Sorted terms of a field, built on first use and cached.
    pub fn sorted_terms_for_field(&mut self, name: &str) -> Result<&[String]> {
        let idx = self.table.index_of(name)?;
        let cached = self
            .sorted_terms
            .get(name)
            .is_some_and(|terms| !terms.is_empty());
        if cached {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
            let freqs = &self.table.entries[idx].freqs;
            let terms = self.sorted_terms.entry(name.to_string()).or_default();
            terms.clear();
            terms.extend(freqs.terms().map(String::from));
            terms.sort_unstable();
            log::trace!("sorted {} terms for field {:?}", terms.len(), name);
        }
        Ok(self
            .sorted_terms
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    /// Vector dimensionality of a field, 0 for non-vector fields.
    pub fn vector_dims(&self, name: &str) -> Result<usize> {
        Ok(self.entry(name)?.vector_dims)
    }

    /// Sorted-term cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.stats
    }

    /// Number of fields with a non-empty sorted-term list cached.
    pub fn cached_fields(&self) -> usize {
        self.sorted_terms
            .values()
            .filter(|terms| !terms.is_empty())
            .count()
    }
}

impl std::fmt::Debug for DocumentModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentModel")
            .field("document", &self.document_id())
            .field("fields", &self.table.names)
            .field("stats", &self.stats)
            .finish()
    }
}
