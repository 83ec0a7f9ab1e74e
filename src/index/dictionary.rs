//! Term dictionaries over the sorted terms of one field.
//!
//! A [`FieldDict`] walks a slice of sorted terms and hands back, one at a
//! time, those accepted by an optional [`TermMatcher`]. Prefix, range, regex
//! and fuzzy dictionaries differ only in the slice they are given and in the
//! matcher.
//!
//! # Examples
//!
//! ```
//! use unidoc::index::dictionary::{FieldDict, PrefixMatcher};
//!
//! let terms: Vec<String> = ["able", "baker", "ball"].iter().map(|s| s.to_string()).collect();
//! let mut dict = FieldDict::with_terms(&terms, Some(Box::new(PrefixMatcher::new("ba"))));
//!
//! assert_eq!(dict.collect_terms().unwrap(), vec!["baker", "ball"]);
//! ```

use crate::document::token_freq::TokenFrequencies;
use crate::error::Result;
use crate::fuzzy::automaton::{TermAutomaton, automaton_match};
use crate::fuzzy::distance::EditDistanceScratch;

/// One dictionary term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictEntry {
    /// The term.
    pub term: String,
    /// Number of documents holding the term; always 1 here.
    pub count: u64,
}

/// A predicate deciding whether a candidate term is enumerated.
pub trait TermMatcher {
    /// Whether `term` is accepted.
    fn matches(&mut self, term: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> TermMatcher for F {
    fn matches(&mut self, term: &str) -> bool {
        self(term)
    }
}

/// Accepts terms starting with a literal prefix.
#[derive(Debug, Clone)]
pub struct PrefixMatcher {
    prefix: String,
}

impl PrefixMatcher {
    /// Create a prefix matcher.
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        PrefixMatcher {
            prefix: prefix.into(),
        }
    }
}

impl TermMatcher for PrefixMatcher {
    fn matches(&mut self, term: &str) -> bool {
        term.starts_with(&self.prefix)
    }
}

/// Accepts terms accepted by an automaton.
#[derive(Debug, Clone)]
pub struct AutomatonMatcher<A> {
    automaton: A,
}

impl<A: TermAutomaton> AutomatonMatcher<A> {
    /// Wrap an automaton.
    pub fn new(automaton: A) -> Self {
        AutomatonMatcher { automaton }
    }
}

impl<A: TermAutomaton> TermMatcher for AutomatonMatcher<A> {
    fn matches(&mut self, term: &str) -> bool {
        automaton_match(&self.automaton, term)
    }
}

/// Accepts terms within a bounded edit distance of a query term.
///
/// The scratch row is borrowed so it outlives the dictionary and is reused
/// by the next fuzzy enumeration.
#[derive(Debug)]
pub struct FuzzyMatcher<'a> {
    term: String,
    fuzziness: usize,
    scratch: &'a mut EditDistanceScratch,
}

impl<'a> FuzzyMatcher<'a> {
    /// Create a fuzzy matcher.
    pub fn new<S: Into<String>>(
        term: S,
        fuzziness: usize,
        scratch: &'a mut EditDistanceScratch,
    ) -> Self {
        FuzzyMatcher {
            term: term.into(),
            fuzziness,
            scratch,
        }
    }
}

impl TermMatcher for FuzzyMatcher<'_> {
    fn matches(&mut self, term: &str) -> bool {
        self.scratch.is_within(&self.term, term, self.fuzziness)
    }
}

/// A pull-style enumeration of matching terms in sorted order.
pub struct FieldDict<'a> {
    terms: &'a [String],
    index: usize,
    matcher: Option<Box<dyn TermMatcher + 'a>>,
    next: DictEntry,
}

impl<'a> FieldDict<'a> {
    /// A dictionary that is exhausted from the start.
    pub const fn empty() -> Self {
        FieldDict {
            terms: &[],
            index: 0,
            matcher: None,
            next: DictEntry {
                term: String::new(),
                count: 0,
            },
        }
    }

    /// Enumerate `terms`, keeping those accepted by `matcher` (all when
    /// `None`).
    pub fn with_terms(terms: &'a [String], matcher: Option<Box<dyn TermMatcher + 'a>>) -> Self {
        FieldDict {
            terms,
            index: 0,
            matcher,
            next: DictEntry::default(),
        }
    }

    /// The next accepted term, or `None` when the dictionary is exhausted.
    ///
    /// The returned entry is reused by the following call.
    pub fn next(&mut self) -> Result<Option<&DictEntry>> {
        let terms = self.terms;
        while self.index < terms.len() {
            let term = &terms[self.index];
            self.index += 1;
            if self.matcher.as_mut().is_some_and(|m| !m.matches(term)) {
                continue;
            }
            self.next.term.clear();
            self.next.term.push_str(term);
            self.next.count = 1;
            return Ok(Some(&self.next));
        }
        Ok(None)
    }

    /// Drain the remaining accepted terms.
    pub fn collect_terms(&mut self) -> Result<Vec<String>> {
        let mut terms = Vec::new();
        while let Some(entry) = self.next()? {
            terms.push(entry.term.clone());
        }
        Ok(terms)
    }

    /// Number of candidate terms, before filtering.
    pub fn candidates(&self) -> usize {
        self.terms.len()
    }
}

impl std::fmt::Debug for FieldDict<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDict")
            .field("candidates", &self.terms.len())
            .field("index", &self.index)
            .field("filtered", &self.matcher.is_some())
            .finish()
    }
}

/// The sub-slice of sorted `terms` sharing `prefix`.
pub fn prefix_range<'t>(terms: &'t [String], prefix: &str) -> &'t [String] {
    let start = terms.partition_point(|term| term.as_str() < prefix);
    let rest = &terms[start..];
    let end = rest.partition_point(|term| term.starts_with(prefix));
    &rest[..end]
}

/// The sub-slice of sorted `terms` within `[start, end]`, both inclusive.
pub fn inclusive_range<'t>(terms: &'t [String], start: &str, end: &str) -> &'t [String] {
    if start > end {
        return &[];
    }
    let start_idx = terms.partition_point(|term| term.as_str() < start);
    let rest = &terms[start_idx..];
    let mut end_idx = rest.partition_point(|term| term.as_str() < end);
    if rest.get(end_idx).is_some_and(|term| term == end) {
        end_idx += 1;
    }
    &rest[..end_idx]
}

/// Presence checks against the unsorted terms of one field.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldDictContains<'a> {
    freqs: Option<&'a TokenFrequencies>,
}

impl<'a> FieldDictContains<'a> {
    /// A contains index answering false for every key.
    pub const fn empty() -> Self {
        FieldDictContains { freqs: None }
    }

    /// Check presence against `freqs`.
    pub fn new(freqs: &'a TokenFrequencies) -> Self {
        FieldDictContains { freqs: Some(freqs) }
    }

    /// Whether `key` is a term of the field.
    pub fn contains(&self, key: &[u8]) -> Result<bool> {
        let Some(freqs) = self.freqs else {
            return Ok(false);
        };
        Ok(std::str::from_utf8(key).is_ok_and(|term| freqs.contains(term)))
    }
}
