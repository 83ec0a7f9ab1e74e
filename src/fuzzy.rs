//! Fuzzy and pattern matching over terms.
//!
//! Two families live here:
//!
//! - [`distance`]: a bounded Levenshtein distance computed on a single reused
//!   row, with early exit as soon as the bound cannot be met.
//! - [`automaton`]: byte-at-a-time acceptance automata ([`TermAutomaton`])
//!   backed by a compiled regular expression or a Levenshtein DFA.

pub mod automaton;
pub mod distance;

pub use automaton::{LevenshteinDfa, RegexAutomaton, TermAutomaton, automaton_match};
pub use distance::{EditDistanceScratch, levenshtein_distance_max_reuse};
