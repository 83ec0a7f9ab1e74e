//! The document capability trait and its concrete implementation.

use std::fmt;

use crate::analysis::analyzer::SimpleAnalyzer;
use crate::document::field::{CompositeField, Field, TextField, VectorField};
use crate::error::Result;

/// Name of the reserved identifier field.
///
/// It is indexed like any other field but never feeds composite fields.
pub const ID_FIELD_NAME: &str = "_id";

/// A document the index can analyze.
pub trait IndexDocument {
    /// The external identifier of the document.
    fn id(&self) -> &str;

    /// Visit every plain field, stopping at the first error.
    fn visit_fields(&mut self, visitor: &mut dyn FnMut(&mut dyn Field) -> Result<()>)
    -> Result<()>;

    /// Visit every composite field, stopping at the first error.
    fn visit_composite(
        &mut self,
        visitor: &mut dyn FnMut(&mut dyn CompositeField) -> Result<()>,
    ) -> Result<()>;

    /// Whether the document has any composite field.
    fn has_composite(&self) -> bool;
}

/// A document made of boxed fields.
///
/// # Examples
///
/// ```
/// use unidoc::document::{CompositeTextField, Document};
///
/// let doc = Document::builder("a")
///     .add_text("name", "marty")
///     .add_text_values("tags", ["one", "two"])
///     .add_composite(CompositeTextField::all())
///     .build();
///
/// assert_eq!(doc.id(), "a");
/// assert_eq!(doc.field_count(), 3);
/// ```
pub struct Document {
    id: String,
    fields: Vec<Box<dyn Field>>,
    composites: Vec<Box<dyn CompositeField>>,
}

impl Document {
    /// Create a new document with no fields.
    pub fn new<S: Into<String>>(id: S) -> Self {
        Document {
            id: id.into(),
            fields: Vec::new(),
            composites: Vec::new(),
        }
    }

    /// Create a builder for constructing documents.
    pub fn builder<S: Into<String>>(id: S) -> DocumentBuilder {
        DocumentBuilder::new(id)
    }

    /// Get the external identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Add a plain field.
    pub fn add_field<F: Field + 'static>(&mut self, field: F) {
        self.fields.push(Box::new(field));
    }

    /// Add a composite field.
    pub fn add_composite<F: CompositeField + 'static>(&mut self, field: F) {
        self.composites.push(Box::new(field));
    }

    /// Add the `_id` field holding the identifier as a single term.
    pub fn add_id_field(&mut self) {
        let field = TextField::new(ID_FIELD_NAME, self.id.clone())
            .with_analyzer(SimpleAnalyzer::keyword())
            .stored(true);
        self.add_field(field);
    }

    /// Number of plain fields (repeated names counted separately).
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Number of composite fields.
    pub fn composite_count(&self) -> usize {
        self.composites.len()
    }
}

impl IndexDocument for Document {
    fn id(&self) -> &str {
        &self.id
    }

    fn visit_fields(
        &mut self,
        visitor: &mut dyn FnMut(&mut dyn Field) -> Result<()>,
    ) -> Result<()> {
        for field in &mut self.fields {
            visitor(field.as_mut())?;
        }
        Ok(())
    }

    fn visit_composite(
        &mut self,
        visitor: &mut dyn FnMut(&mut dyn CompositeField) -> Result<()>,
    ) -> Result<()> {
        for composite in &mut self.composites {
            visitor(composite.as_mut())?;
        }
        Ok(())
    }

    fn has_composite(&self) -> bool {
        !self.composites.is_empty()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("id", &self.id)
            .field(
                "fields",
                &self.fields.iter().map(|field| field.name()).collect::<Vec<_>>(),
            )
            .field(
                "composites",
                &self
                    .composites
                    .iter()
                    .map(|field| field.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// A builder for constructing documents in a fluent manner.
#[derive(Debug)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Create a new document builder.
    pub fn new<S: Into<String>>(id: S) -> Self {
        DocumentBuilder {
            document: Document::new(id),
        }
    }

    /// Add a text field analyzed with the default analyzer.
    pub fn add_text<S: Into<String>, T: Into<String>>(mut self, name: S, value: T) -> Self {
        self.document.add_field(TextField::new(name, value));
        self
    }

    /// Add one text field per value, all sharing `name`.
    ///
    /// Each value carries its index as array position.
    pub fn add_text_values<S, I, T>(mut self, name: S, values: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let name = name.into();
        for (i, value) in values.into_iter().enumerate() {
            self.document
                .add_field(TextField::new(name.clone(), value).with_array_positions(vec![i as u64]));
        }
        self
    }

    /// Add a vector field.
    pub fn add_vector<S: Into<String>>(mut self, name: S, vector: Vec<f32>) -> Self {
        self.document.add_field(VectorField::new(name, vector));
        self
    }

    /// Add any plain field.
    pub fn add_field<F: Field + 'static>(mut self, field: F) -> Self {
        self.document.add_field(field);
        self
    }

    /// Add a composite field.
    pub fn add_composite<F: CompositeField + 'static>(mut self, field: F) -> Self {
        self.document.add_composite(field);
        self
    }

    /// Add the `_id` field.
    pub fn add_id_field(mut self) -> Self {
        self.document.add_id_field();
        self
    }

    /// Build the final document.
    pub fn build(self) -> Document {
        self.document
    }
}
