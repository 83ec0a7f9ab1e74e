//! Documents and fields as seen by the index.
//!
//! The index consumes documents through two capability traits:
//! [`IndexDocument`] (visit plain and composite fields, report the external
//! identifier) and [`Field`] (name, indexing options, analysis output).
//! Composite fields additionally implement [`CompositeField`] to aggregate
//! the contributions of plain fields.
//!
//! [`Document`], [`TextField`], [`CompositeTextField`] and [`VectorField`]
//! are the concrete implementations shipped with the crate.

#[allow(clippy::module_inception)]
pub mod document;
pub mod field;
pub mod token_freq;

pub use document::{Document, DocumentBuilder, IndexDocument, ID_FIELD_NAME};
pub use field::{
    CompositeField, CompositeTextField, Field, FieldIndexingOptions, TextField, VectorField,
};
pub use token_freq::{Location, TokenFreq, TokenFrequencies};
