// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Compare operators - pairwise comparison of two sequences.
//!
//! One sequence is pushed while matched elements are pulled from the other
//! through its cursor, so both advance in lockstep within a single pass.
//!
//! # Length mismatch
//!
//! When either side outlives the other, the [`Comparison`] keeps its
//! partial counts and raises [`truncated`](Comparison::truncated). The
//! pushed side being shorter is detected by probing the pulled side once
//! after the push completes. An unequal-length comparison is therefore
//! always distinguishable from "all elements matched"; it is never
//! collapsed to an empty result.
//!
//! # Examples
//!
//! ```rust
//! use rill_seq::prelude::*;
//!
//! let a = from_vec(vec![1, 2, 3]);
//! let b = from_vec(vec![1, 9, 3]);
//! let report = a.compare(&b);
//! assert_eq!((report.matched, report.compared), (2, 3));
//! assert!(!report.truncated);
//! assert!(!a.equal(&b));
//! assert!(a.equal(&a.clone()));
//! ```

use rill_core::{Cursor, Sequence, Step};

/// Outcome of a pairwise comparison of two sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// Pairs the comparator accepted.
    pub matched: usize,
    /// Pairs actually compared before either side ran out.
    pub compared: usize,
    /// One side outlived the other.
    pub truncated: bool,
}

impl Comparison {
    /// True iff both sequences had the same length and every pair matched.
    #[must_use]
    pub const fn is_equal(&self) -> bool {
        !self.truncated && self.matched == self.compared
    }

    /// Share of compared pairs that matched, as a percentage.
    ///
    /// Two empty sequences are fully equal, so a comparison with no pairs
    /// reports 100 unless it was truncated.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.compared == 0 {
            if self.truncated {
                0.0
            } else {
                100.0
            }
        } else {
            self.matched as f64 / self.compared as f64 * 100.0
        }
    }
}

/// Extension trait providing the comparison operators.
pub trait CompareExt: Sequence {
    /// Compares this sequence against `other` pairwise with `compare`.
    fn compare_by<S2, F>(&self, other: &S2, compare: F) -> Comparison
    where
        S2: Sequence,
        F: FnMut(&Self::Item, &S2::Item) -> bool;

    /// Pairwise equality comparison.
    fn compare<S2>(&self, other: &S2) -> Comparison
    where
        S2: Sequence<Item = Self::Item>,
        Self::Item: PartialEq;

    /// Whether both sequences produce equal elements in equal number.
    fn equal<S2>(&self, other: &S2) -> bool
    where
        S2: Sequence<Item = Self::Item>,
        Self::Item: PartialEq;

    /// Percentage of pairwise-equal elements; see [`Comparison::percent`].
    fn compare_percent<S2>(&self, other: &S2) -> f64
    where
        S2: Sequence<Item = Self::Item>,
        Self::Item: PartialEq;
}

impl<S: Sequence> CompareExt for S {
    fn compare_by<S2, F>(&self, other: &S2, mut compare: F) -> Comparison
    where
        S2: Sequence,
        F: FnMut(&Self::Item, &S2::Item) -> bool,
    {
        let mut pulled = other.cursor();
        let mut matched = 0;
        let mut compared = 0;
        let mut truncated = false;
        let outcome = self.drive(|element| match pulled.advance() {
            Some(candidate) => {
                compared += 1;
                if compare(&element, &candidate) {
                    matched += 1;
                }
                Step::Continue
            }
            None => {
                truncated = true;
                Step::Stop
            }
        });
        if !outcome.was_stopped() && pulled.advance().is_some() {
            truncated = true;
        }
        Comparison {
            matched,
            compared,
            truncated,
        }
    }

    fn compare<S2>(&self, other: &S2) -> Comparison
    where
        S2: Sequence<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        self.compare_by(other, |a, b| a == b)
    }

    fn equal<S2>(&self, other: &S2) -> bool
    where
        S2: Sequence<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        self.compare(other).is_equal()
    }

    fn compare_percent<S2>(&self, other: &S2) -> f64
    where
        S2: Sequence<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        self.compare(other).percent()
    }
}
