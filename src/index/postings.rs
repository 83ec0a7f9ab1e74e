//! Postings of one term in the resident document.
//!
//! A [`TermFieldReader`] always describes at most one posting: the single
//! document held by the index, identified by [`INTERNAL_DOC_ID`].
//!
//! # Examples
//!
//! ```
//! use unidoc::document::{Location, TokenFreq};
//! use unidoc::index::postings::{INTERNAL_DOC_ID, TermFieldReader};
//!
//! let mut tf = TokenFreq::new("marty");
//! tf.add_location(Location::new("name", 0, 5, 1));
//!
//! let mut reader = TermFieldReader::new(&tf, 1, true, true, true);
//! let posting = reader.next(None).unwrap().unwrap();
//! assert_eq!(posting.id, INTERNAL_DOC_ID);
//! assert_eq!(posting.freq, 1);
//! assert_eq!(posting.norm, 1.0);
//! assert!(reader.next(None).unwrap().is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::document::token_freq::TokenFreq;
use crate::error::Result;

/// Identifier of the resident document inside the index.
pub const INTERNAL_DOC_ID: &[u8] = &[0];

/// An internal document identifier.
pub type IndexInternalId = Vec<u8>;

/// One occurrence of the term, rebuilt from a location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermFieldVector {
    /// Field the occurrence came from.
    pub field: String,
    /// Array-position path.
    pub array_positions: Vec<u64>,
    /// 1-based token position.
    pub pos: u64,
    /// Byte start offset.
    pub start: u64,
    /// Byte end offset.
    pub end: u64,
}

/// A posting: the term as it occurs in one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermFieldDoc {
    /// The term.
    pub term: String,
    /// Internal identifier of the document.
    pub id: IndexInternalId,
    /// Term frequency, 0 unless requested.
    pub freq: u64,
    /// Length normalization, 0 unless requested.
    pub norm: f64,
    /// Occurrence vectors, empty unless requested.
    pub vectors: Vec<TermFieldVector>,
}

/// Length normalization for a field of `len` tokens.
///
/// Computed in single precision and widened. A zero-length field has no
/// normalization contribution.
pub fn norm_for_len(len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    f64::from((1.0 / (len as f64).sqrt()) as f32)
}

/// A reader over the (at most one) posting of a term.
#[derive(Debug, Clone)]
pub struct TermFieldReader<'a> {
    tf: Option<&'a TokenFreq>,
    len: usize,
    done: bool,
    include_freq: bool,
    include_norm: bool,
    include_vectors: bool,
}

impl<'a> TermFieldReader<'a> {
    /// A reader with no posting.
    pub const fn empty() -> Self {
        TermFieldReader {
            tf: None,
            len: 0,
            done: true,
            include_freq: false,
            include_norm: false,
            include_vectors: false,
        }
    }

    /// A reader over `tf` in a field of analyzed length `len`.
    pub fn new(
        tf: &'a TokenFreq,
        len: usize,
        include_freq: bool,
        include_norm: bool,
        include_vectors: bool,
    ) -> Self {
        TermFieldReader {
            tf: Some(tf),
            len,
            done: false,
            include_freq,
            include_norm,
            include_vectors,
        }
    }

    /// Pull the posting.
    ///
    /// `prealloc` is filled in place when given; its vector storage is reused.
    /// Parts that were not requested are reset to their zero value.
    pub fn next(&mut self, prealloc: Option<TermFieldDoc>) -> Result<Option<TermFieldDoc>> {
        if self.done {
            return Ok(None);
        }
        self.done = true;
        let Some(tf) = self.tf else {
            return Ok(None);
        };

        let mut rv = prealloc.unwrap_or_default();
        rv.term.clear();
        rv.term.push_str(&tf.term);
        rv.id.clear();
        rv.id.extend_from_slice(INTERNAL_DOC_ID);
        rv.freq = if self.include_freq {
            tf.frequency() as u64
        } else {
            0
        };
        rv.norm = if self.include_norm {
            norm_for_len(self.len)
        } else {
            0.0
        };
        if self.include_vectors {
            rv.vectors
                .resize_with(tf.locations.len(), TermFieldVector::default);
            for (vector, loc) in rv.vectors.iter_mut().zip(&tf.locations) {
                vector.field.clone_from(&loc.field);
                vector.array_positions.clone_from(&loc.array_positions);
                vector.pos = loc.position as u64;
                vector.start = loc.start as u64;
                vector.end = loc.end as u64;
            }
        } else {
            rv.vectors.clear();
        }
        Ok(Some(rv))
    }

    /// Skip to the first posting at or after `target`.
    pub fn advance(
        &mut self,
        target: &[u8],
        prealloc: Option<TermFieldDoc>,
    ) -> Result<Option<TermFieldDoc>> {
        if self.done {
            return Ok(None);
        }
        if target > INTERNAL_DOC_ID {
            self.done = true;
            return Ok(None);
        }
        self.next(prealloc)
    }

    /// Number of postings: 1 when a term is bound, 0 otherwise.
    pub fn count(&self) -> u64 {
        u64::from(self.tf.is_some())
    }
}
