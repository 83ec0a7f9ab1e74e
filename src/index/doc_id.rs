//! Enumeration of internal document identifiers.

use crate::index::postings::INTERNAL_DOC_ID;

/// Yields the internal identifier of the resident document once.
#[derive(Debug, Clone, Default)]
pub struct DocIdReader {
    done: bool,
}

impl DocIdReader {
    /// A reader yielding the resident document.
    pub fn new() -> Self {
        DocIdReader { done: false }
    }

    /// A reader yielding nothing.
    pub const fn empty() -> Self {
        DocIdReader { done: true }
    }

    /// The next identifier, if any.
    pub fn next(&mut self) -> Option<&'static [u8]> {
        if self.done {
            return None;
        }
        self.done = true;
        Some(INTERNAL_DOC_ID)
    }

    /// The first identifier at or after `target`.
    pub fn advance(&mut self, target: &[u8]) -> Option<&'static [u8]> {
        if self.done {
            return None;
        }
        if target > INTERNAL_DOC_ID {
            self.done = true;
            return None;
        }
        self.next()
    }

    /// Whether the reader is exhausted.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_once() {
        let mut reader = DocIdReader::new();
        assert_eq!(reader.next(), Some(INTERNAL_DOC_ID));
        assert_eq!(reader.next(), None);
        assert!(reader.is_done());
    }

    #[test]
    fn test_empty() {
        let mut reader = DocIdReader::empty();
        assert_eq!(reader.next(), None);
        assert_eq!(reader.advance(&[0]), None);
    }

    #[test]
    fn test_advance() {
        let mut reader = DocIdReader::new();
        assert_eq!(reader.advance(&[0]), Some(INTERNAL_DOC_ID));

        let mut reader = DocIdReader::new();
        assert_eq!(reader.advance(&[0, 1]), None);
        assert_eq!(reader.next(), None);

        let mut reader = DocIdReader::new();
        assert_eq!(reader.advance(&[]), Some(INTERNAL_DOC_ID));
    }
}
