//! # unidoc
//!
//! A term index over exactly one document.
//!
//! unidoc analyzes a single document into per-field term frequencies and
//! answers the read operations of a full inverted index against it: term
//! dictionaries (all, prefix, range, regular expression, fuzzy), postings
//! with frequencies, norms and occurrence vectors, presence checks, doc
//! values and identifier mapping. It is meant for matching one document
//! against many queries, such as percolation or highlighting.
//!
//! ## Features
//!
//! - Pluggable fields through the [`Field`](document::Field) and
//!   [`CompositeField`](document::CompositeField) traits
//! - Sorted term lists built lazily and cached per field
//! - Regular expression and Levenshtein automata from `regex-automata` and
//!   `levenshtein_automata`, cached across reads
//! - An allocation-free bounded edit distance for fuzzy enumeration
//!
//! # Examples
//!
//! ```
//! use unidoc::document::{CompositeTextField, Document};
//! use unidoc::index::SingleDocIndex;
//!
//! let doc = Document::builder("a")
//!     .add_text("name", "marty schoch")
//!     .add_text("title", "developer")
//!     .add_composite(CompositeTextField::all())
//!     .build();
//!
//! let mut index = SingleDocIndex::default();
//! index.update(doc).unwrap();
//!
//! let mut reader = index.reader();
//! let mut dict = reader.field_dict_fuzzy("_all", "marti", 1, "").unwrap();
//! assert_eq!(dict.collect_terms().unwrap(), vec!["marty"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod fuzzy;
pub mod index;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
