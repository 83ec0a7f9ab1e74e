//! Bounded Levenshtein distance with a reusable scratch row.
//!
//! The distance is computed byte-wise and is case-sensitive. Candidates whose
//! length differs from the query by more than the bound are rejected without
//! touching the row, and the computation stops after any row whose minimum
//! already exceeds the bound.
//!
//! # Examples
//!
//! ```
//! use unidoc::fuzzy::distance::EditDistanceScratch;
//!
//! let mut scratch = EditDistanceScratch::with_capacity(64);
//! assert_eq!(scratch.distance("cat", "cats", 1), (1, false));
//! assert_eq!(scratch.distance("cat", "catsss", 1), (1, true));
//! ```

use std::cmp::min;

/// Compute the edit distance between `a` and `b`, bounded by `max`.
///
/// Returns `(distance, exceeded, row)`. When `exceeded` is true the bound was
/// crossed and the reported distance is `max`. The row buffer is handed back
/// so the caller can reuse it for the next candidate; it only grows when `a`
/// is longer than any query seen so far.
pub fn levenshtein_distance_max_reuse(
    a: &str,
    b: &str,
    max: usize,
    mut row: Vec<usize>,
) -> (usize, bool, Vec<usize>) {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let la = a.len();
    let lb = b.len();

    if la.abs_diff(lb) > max {
        return (max, true, row);
    }
    // Only insertions remain, and the length check above bounds them.
    if la == 0 {
        return (lb, false, row);
    }

    if row.len() < la + 1 {
        row.resize(la + 1, 0);
    }
    let d = &mut row[..=la];
    for (j, cell) in d.iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=lb {
        d[0] = i;
        let mut last_diag = i - 1;
        let mut row_min = max.saturating_add(1);
        for j in 1..=la {
            let old_diag = d[j];
            let cost = usize::from(a[j - 1] != b[i - 1]);
            let value = min(min(d[j] + 1, d[j - 1] + 1), last_diag + cost);
            row_min = min(row_min, value);
            d[j] = value;
            last_diag = old_diag;
        }
        if row_min > max {
            return (max, true, row);
        }
    }

    let distance = d[la];
    (distance, false, row)
}

/// Owner of the scratch row used across one or more fuzzy enumerations.
///
/// Tracks how many times the row had to grow, which lets callers check that
/// repeated matching reaches a steady state with no further allocation.
#[derive(Debug, Clone, Default)]
pub struct EditDistanceScratch {
    row: Vec<usize>,
    grows: usize,
}

impl EditDistanceScratch {
    /// Create a scratch buffer pre-sized for queries up to `len - 1` bytes.
    pub fn with_capacity(len: usize) -> Self {
        EditDistanceScratch {
            row: vec![0; len],
            grows: 0,
        }
    }

    /// Compute the bounded distance, reusing the owned row.
    pub fn distance(&mut self, a: &str, b: &str, max: usize) -> (usize, bool) {
        let before = self.row.capacity();
        let row = std::mem::take(&mut self.row);
        let (distance, exceeded, row) = levenshtein_distance_max_reuse(a, b, max, row);
        if row.capacity() != before {
            self.grows += 1;
        }
        self.row = row;
        (distance, exceeded)
    }

    /// Whether `b` is within `max` edits of `a`.
    pub fn is_within(&mut self, a: &str, b: &str, max: usize) -> bool {
        let (distance, exceeded) = self.distance(a, b, max);
        distance <= max && !exceeded
    }

    /// Number of times the row had to be reallocated.
    pub fn grows(&self) -> usize {
        self.grows
    }

    /// Current length of the row.
    pub fn len(&self) -> usize {
        self.row.len()
    }

    /// Whether the row has no cells yet.
    pub fn is_empty(&self) -> bool {
        self.row.is_empty()
    }
}
