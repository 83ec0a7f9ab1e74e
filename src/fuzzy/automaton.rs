//! Byte-at-a-time acceptance automata over terms.
//!
//! A [`TermAutomaton`] is driven one byte of a candidate term at a time. The
//! walk stops as soon as the automaton reports that no continuation can
//! match, so rejecting a candidate usually costs only a few transitions.
//!
//! Two implementations are provided:
//!
//! - [`RegexAutomaton`], a dense DFA compiled from a regular expression. The
//!   whole term must match the pattern.
//! - [`LevenshteinDfa`], accepting every term within edit distance 1 or 2 of
//!   a query term. The automaton builders for both distances are built once
//!   per process and shared read-only.
//!
//! # Examples
//!
//! ```
//! use unidoc::fuzzy::automaton::{RegexAutomaton, automaton_match};
//!
//! let re = RegexAutomaton::new("ba.*", None).unwrap();
//! assert!(automaton_match(&re, "baker"));
//! assert!(!automaton_match(&re, "abba"));
//! ```

use std::sync::Arc;

use lazy_static::lazy_static;
use levenshtein_automata::{Distance, LevenshteinAutomatonBuilder, SINK_STATE};
use regex_automata::dfa::{Automaton, StartKind, dense};
use regex_automata::util::primitives::StateID;
use regex_automata::{Anchored, Input, MatchKind};

use crate::error::{Result, UnidocError};

lazy_static! {
    static ref LEV_BUILDER_1: LevenshteinAutomatonBuilder = LevenshteinAutomatonBuilder::new(1, false);
    static ref LEV_BUILDER_2: LevenshteinAutomatonBuilder = LevenshteinAutomatonBuilder::new(2, false);
}

/// Largest fuzziness served by [`LevenshteinDfa`].
pub const MAX_AUTOMATON_FUZZINESS: usize = 2;

/// A deterministic automaton consuming terms byte by byte.
pub trait TermAutomaton {
    /// Automaton state.
    type State: Clone;

    /// The initial state.
    fn start(&self) -> Self::State;

    /// Transition on one input byte.
    fn accept(&self, state: &Self::State, byte: u8) -> Self::State;

    /// Whether any continuation from `state` can still match.
    fn can_match(&self, state: &Self::State) -> bool;

    /// Whether input ending in `state` is accepted.
    fn is_match(&self, state: &Self::State) -> bool;
}

impl<A: TermAutomaton + ?Sized> TermAutomaton for &A {
    type State = A::State;

    fn start(&self) -> Self::State {
        (**self).start()
    }

    fn accept(&self, state: &Self::State, byte: u8) -> Self::State {
        (**self).accept(state, byte)
    }

    fn can_match(&self, state: &Self::State) -> bool {
        (**self).can_match(state)
    }

    fn is_match(&self, state: &Self::State) -> bool {
        (**self).is_match(state)
    }
}

impl<A: TermAutomaton + ?Sized> TermAutomaton for Arc<A> {
    type State = A::State;

    fn start(&self) -> Self::State {
        (**self).start()
    }

    fn accept(&self, state: &Self::State, byte: u8) -> Self::State {
        (**self).accept(state, byte)
    }

    fn can_match(&self, state: &Self::State) -> bool {
        (**self).can_match(state)
    }

    fn is_match(&self, state: &Self::State) -> bool {
        (**self).is_match(state)
    }
}

/// Run `term` through `automaton`, stopping at the first dead state.
pub fn automaton_match<A: TermAutomaton>(automaton: &A, term: &str) -> bool {
    let mut state = automaton.start();
    for &byte in term.as_bytes() {
        state = automaton.accept(&state, byte);
        if !automaton.can_match(&state) {
            return false;
        }
    }
    automaton.is_match(&state)
}

/// A regular expression compiled to a dense DFA anchored at both ends.
#[derive(Debug, Clone)]
pub struct RegexAutomaton {
    pattern: String,
    dfa: dense::DFA<Vec<u32>>,
    start: StateID,
}

impl RegexAutomaton {
    /// Compile `pattern`.
    ///
    /// `size_limit` caps the memory of the compiled DFA. Patterns that fail to
    /// parse, exceed the limit, or use features a DFA cannot express (such as
    /// Unicode word boundaries) are reported as
    /// [`UnidocError::UnsupportedPattern`].
    pub fn new(pattern: &str, size_limit: Option<usize>) -> Result<Self> {
        let config = dense::Config::new()
            .start_kind(StartKind::Anchored)
            .match_kind(MatchKind::All)
            .dfa_size_limit(size_limit)
            .determinize_size_limit(size_limit);
        let dfa = dense::Builder::new()
            .configure(config)
            .build(&format!("(?:{pattern})$"))
            .map_err(|e| {
                UnidocError::unsupported_pattern(format!("error compiling regexp {pattern:?}: {e}"))
            })?;
        let start = dfa
            .start_state_forward(&Input::new("").anchored(Anchored::Yes))
            .map_err(|e| {
                UnidocError::unsupported_pattern(format!("error compiling regexp {pattern:?}: {e}"))
            })?;
        log::debug!(
            "compiled regexp {:?} ({} bytes)",
            pattern,
            dfa.memory_usage()
        );
        Ok(RegexAutomaton {
            pattern: pattern.to_string(),
            dfa,
            start,
        })
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the whole of `term` matches.
    pub fn is_full_match(&self, term: &str) -> bool {
        automaton_match(self, term)
    }
}

impl TermAutomaton for RegexAutomaton {
    type State = StateID;

    fn start(&self) -> StateID {
        self.start
    }

    fn accept(&self, state: &StateID, byte: u8) -> StateID {
        self.dfa.next_state(*state, byte)
    }

    fn can_match(&self, state: &StateID) -> bool {
        !self.dfa.is_dead_state(*state)
    }

    fn is_match(&self, state: &StateID) -> bool {
        let eoi = self.dfa.next_eoi_state(*state);
        self.dfa.is_match_state(eoi)
    }
}

/// A Levenshtein automaton accepting terms within 1 or 2 edits of a query.
///
/// Edits are counted in Unicode scalar values, unlike the byte-wise
/// [`levenshtein_distance_max_reuse`](crate::fuzzy::distance::levenshtein_distance_max_reuse).
/// The two agree on ASCII terms.
pub struct LevenshteinDfa {
    term: String,
    fuzziness: usize,
    dfa: levenshtein_automata::DFA,
}

impl LevenshteinDfa {
    /// Build the automaton for `term`.
    pub fn new(term: &str, fuzziness: usize) -> Result<Self> {
        let builder: &LevenshteinAutomatonBuilder = match fuzziness {
            1 => &LEV_BUILDER_1,
            2 => &LEV_BUILDER_2,
            _ => {
                return Err(UnidocError::unsupported_pattern(format!(
                    "fuzziness exceeds supported maximum: {fuzziness} (supported: 1..={MAX_AUTOMATON_FUZZINESS})"
                )));
            }
        };
        log::trace!("building levenshtein dfa for {term:?} at distance {fuzziness}");
        Ok(LevenshteinDfa {
            term: term.to_string(),
            fuzziness,
            dfa: builder.build_dfa(term),
        })
    }

    /// The query term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The maximum edit distance.
    pub fn fuzziness(&self) -> usize {
        self.fuzziness
    }
}

impl std::fmt::Debug for LevenshteinDfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevenshteinDfa")
            .field("term", &self.term)
            .field("fuzziness", &self.fuzziness)
            .finish()
    }
}

impl TermAutomaton for LevenshteinDfa {
    type State = u32;

    fn start(&self) -> u32 {
        self.dfa.initial_state()
    }

    fn accept(&self, state: &u32, byte: u8) -> u32 {
        self.dfa.transition(*state, byte)
    }

    fn can_match(&self, state: &u32) -> bool {
        *state != SINK_STATE
    }

    fn is_match(&self, state: &u32) -> bool {
        matches!(self.dfa.distance(*state), Distance::Exact(_))
    }
}
