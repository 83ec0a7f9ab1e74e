//! An index holding exactly one document.
//!
//! Updating the index replaces the resident document whatever its
//! identifier, and deleting any identifier removes it. Batches of several
//! documents are rejected.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::config::IndexConfig;
use crate::document::document::IndexDocument;
use crate::error::{Result, UnidocError};
use crate::index::model::DocumentModel;
use crate::index::reader::{IndexReader, ReaderCache};

/// Statistics about a [`SingleDocIndex`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of documents (0 or 1).
    pub doc_count: u64,
    /// Number of distinct field names.
    pub field_count: usize,
    /// Fields whose sorted terms are cached.
    pub cached_fields: usize,
    /// Compiled regular expressions kept for reuse.
    pub regex_cache_size: usize,
    /// Levenshtein automata kept for reuse.
    pub levenshtein_cache_size: usize,
    /// Sorted-term lookups served from the cache.
    pub sorted_term_hits: u64,
    /// Sorted-term lookups that built the list.
    pub sorted_term_misses: u64,
    /// Entries in the internal key-value storage.
    pub internal_entries: usize,
}

/// An in-memory index over a single document.
#[derive(Debug)]
pub struct SingleDocIndex {
    pub(crate) model: DocumentModel,
    pub(crate) internal: AHashMap<Vec<u8>, Vec<u8>>,
    pub(crate) cache: ReaderCache,
    pub(crate) config: IndexConfig,
}

impl SingleDocIndex {
    /// Create an empty index.
    pub fn new(config: IndexConfig) -> Self {
        SingleDocIndex {
            model: DocumentModel::new(),
            internal: AHashMap::new(),
            cache: ReaderCache::new(&config),
            config,
        }
    }

    /// Open the index. Nothing to do for an in-memory index.
    pub fn open(&mut self) -> Result<()> {
        Ok(())
    }

    /// Close the index. Nothing to do for an in-memory index.
    pub fn close(&mut self) -> Result<()> {
        Ok(())
    }

    /// Index `doc`, replacing the resident document.
    pub fn update<D: IndexDocument + 'static>(&mut self, doc: D) -> Result<()> {
        self.update_boxed(Box::new(doc))
    }

    /// Index an already boxed document.
    pub fn update_boxed(&mut self, doc: Box<dyn IndexDocument>) -> Result<()> {
        self.model.reset(doc)
    }

    /// Remove the resident document, whatever `id` is.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        log::debug!("deleting resident document (requested id {id:?})");
        self.model.clear();
        Ok(())
    }

    /// Always fails: this index holds a single document.
    pub fn batch(&mut self, docs: Vec<Box<dyn IndexDocument>>) -> Result<()> {
        log::warn!("rejected batch of {} documents", docs.len());
        Err(UnidocError::unsupported(
            "batch indexing is not supported by this index",
        ))
    }

    /// Store a value in the internal key-value storage.
    pub fn set_internal(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        self.internal.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    /// Remove a value from the internal key-value storage.
    pub fn delete_internal(&mut self, key: &[u8]) -> Result<()> {
        self.internal.remove(key);
        Ok(())
    }

    /// A reader over the index.
    pub fn reader(&mut self) -> IndexReader<'_> {
        IndexReader::new(self)
    }

    /// The configuration.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Current statistics.
    pub fn stats(&self) -> IndexStats {
        let cache_stats = self.model.cache_stats();
        IndexStats {
            doc_count: u64::from(self.model.has_document()),
            field_count: self.model.fields().len(),
            cached_fields: self.model.cached_fields(),
            regex_cache_size: self.cache.regex_len(),
            levenshtein_cache_size: self.cache.levenshtein_len(),
            sorted_term_hits: cache_stats.hits,
            sorted_term_misses: cache_stats.misses,
            internal_entries: self.internal.len(),
        }
    }
}

impl Default for SingleDocIndex {
    fn default() -> Self {
        Self::new(IndexConfig::default())
    }
}
