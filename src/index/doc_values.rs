//! Doc-value access for the resident document.

use crate::error::{Result, UnidocError};
use crate::index::model::DocumentModel;
use crate::index::postings::INTERNAL_DOC_ID;

/// Visits the distinct terms of selected fields.
#[derive(Debug)]
pub struct DocValueReader<'a> {
    model: &'a DocumentModel,
    fields: Vec<String>,
}

impl<'a> DocValueReader<'a> {
    /// Create a reader over `fields` of `model`.
    pub fn new(model: &'a DocumentModel, fields: Vec<String>) -> Self {
        DocValueReader { model, fields }
    }

    /// The requested fields.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Call `visitor(field, term)` for every distinct term of every requested
    /// field present in document `id`.
    ///
    /// Terms are visited in no particular order. Requested fields the
    /// document lacks are skipped.
    pub fn visit_doc_values<F>(&self, id: &[u8], mut visitor: F) -> Result<()>
    where
        F: FnMut(&str, &[u8]),
    {
        if !self.model.has_document() {
            return Ok(());
        }
        if id != INTERNAL_DOC_ID {
            return Err(UnidocError::UnknownDocId(id.to_vec()));
        }
        for field in &self.fields {
            let Ok((freqs, _)) = self.model.token_freqs_and_len(field) else {
                continue;
            };
            for term in freqs.terms() {
                visitor(field, term.as_bytes());
            }
        }
        Ok(())
    }
}
