//! Token-frequency tables produced by analysis.
//!
//! A [`TokenFrequencies`] table maps each distinct term of one field to its
//! [`TokenFreq`]: how often it occurs and where. Tables from several fields
//! (or several values of a multi-valued field) combine with
//! [`TokenFrequencies::merge_all`].

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// One occurrence of a term inside a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Name of the field the occurrence came from. For composite fields this
    /// is the contributing field, not the composite.
    pub field: String,
    /// Byte offset where the occurrence starts.
    pub start: usize,
    /// Byte offset where the occurrence ends (exclusive).
    pub end: usize,
    /// 1-based token position.
    pub position: usize,
    /// Array-position path for values of multi-valued fields.
    pub array_positions: Vec<u64>,
}

impl Location {
    /// Create a location with no array positions.
    pub fn new<S: Into<String>>(field: S, start: usize, end: usize, position: usize) -> Self {
        Location {
            field: field.into(),
            start,
            end,
            position,
            array_positions: Vec::new(),
        }
    }

    /// Set the array-position path.
    pub fn with_array_positions(mut self, array_positions: Vec<u64>) -> Self {
        self.array_positions = array_positions;
        self
    }
}

/// A term with its frequency and locations within a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFreq {
    /// The term text.
    pub term: String,
    /// Locations of the occurrences, in analysis order.
    pub locations: Vec<Location>,
    frequency: usize,
}

impl TokenFreq {
    /// Create a token frequency with no occurrences.
    pub fn new<S: Into<String>>(term: S) -> Self {
        TokenFreq {
            term: term.into(),
            locations: Vec::new(),
            frequency: 0,
        }
    }

    /// Get the occurrence count.
    pub fn frequency(&self) -> usize {
        self.frequency
    }

    /// Override the occurrence count.
    ///
    /// Analyzers that do not record locations still report frequencies.
    pub fn set_frequency(&mut self, frequency: usize) {
        self.frequency = frequency;
    }

    /// Record one more occurrence at `location`.
    pub fn add_location(&mut self, location: Location) {
        self.locations.push(location);
        self.frequency += 1;
    }
}

/// Mapping from term to [`TokenFreq`] for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenFrequencies {
    terms: AHashMap<String, TokenFreq>,
}

impl TokenFrequencies {
    /// Create an empty table.
    pub fn new() -> Self {
        TokenFrequencies {
            terms: AHashMap::new(),
        }
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the table holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Look up a term.
    pub fn get(&self, term: &str) -> Option<&TokenFreq> {
        self.terms.get(term)
    }

    /// Check whether a term is present.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Insert a term, replacing any previous entry for it.
    pub fn insert(&mut self, token_freq: TokenFreq) {
        self.terms.insert(token_freq.term.clone(), token_freq);
    }

    /// Record an occurrence of `term`, creating the entry if needed.
    pub fn add_occurrence(&mut self, term: &str, location: Location) {
        match self.terms.get_mut(term) {
            Some(tf) => tf.add_location(location),
            None => {
                let mut tf = TokenFreq::new(term);
                tf.add_location(location);
                self.terms.insert(term.to_owned(), tf);
            }
        }
    }

    /// Iterate over the terms, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    /// Iterate over the entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &TokenFreq> {
        self.terms.values()
    }

    /// Remove every term, keeping the allocation.
    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Give every location without a field name the name `field`.
    pub fn fill_missing_field(&mut self, field: &str) {
        for tf in self.terms.values_mut() {
            for loc in tf.locations.iter_mut().filter(|loc| loc.field.is_empty()) {
                loc.field = field.to_owned();
            }
        }
    }

    /// Merge another table into this one.
    ///
    /// Every incoming location is attributed to `remote_field`. Locations of
    /// terms present in both tables are appended and frequencies summed.
    pub fn merge_all(&mut self, remote_field: &str, other: &TokenFrequencies) {
        for (term, tf) in &other.terms {
            let incoming = tf.locations.iter().map(|loc| Location {
                field: remote_field.to_owned(),
                ..loc.clone()
            });
            match self.terms.get_mut(term) {
                Some(existing) => {
                    existing.locations.extend(incoming);
                    existing.frequency += tf.frequency;
                }
                None => {
                    self.terms.insert(
                        term.clone(),
                        TokenFreq {
                            term: tf.term.clone(),
                            locations: incoming.collect(),
                            frequency: tf.frequency,
                        },
                    );
                }
            }
        }
    }
}

impl FromIterator<TokenFreq> for TokenFrequencies {
    fn from_iter<I: IntoIterator<Item = TokenFreq>>(iter: I) -> Self {
        let mut table = TokenFrequencies::new();
        for tf in iter {
            table.insert(tf);
        }
        table
    }
}
