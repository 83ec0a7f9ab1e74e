//! The single-document index.
//!
//! [`SingleDocIndex`] owns the [`DocumentModel`](model::DocumentModel) of the
//! resident document together with the caches used while reading it. All
//! queries go through an [`IndexReader`]:
//!
//! - term dictionaries ([`FieldDict`]): every term, prefix, inclusive range,
//!   regular expression and fuzzy enumerations, in sorted order;
//! - postings ([`TermFieldReader`]): frequency, norm and occurrence vectors
//!   of one term;
//! - presence checks, doc values, doc-id enumeration and identifier mapping.

pub mod dictionary;
pub mod doc_id;
pub mod doc_values;
pub mod model;
pub mod postings;
pub mod reader;
pub mod single;

pub use dictionary::{DictEntry, FieldDict, FieldDictContains, TermMatcher};
pub use doc_id::DocIdReader;
pub use doc_values::DocValueReader;
pub use model::{CacheStats, DocumentModel};
pub use postings::{INTERNAL_DOC_ID, IndexInternalId, TermFieldDoc, TermFieldReader, TermFieldVector};
pub use reader::IndexReader;
pub use single::{IndexStats, SingleDocIndex};
