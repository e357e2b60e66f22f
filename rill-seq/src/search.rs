// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Search operators - first-match and membership queries.
//!
//! Every operator here short-circuits through the stop contract: the
//! underlying sequence is halted the moment the answer is known, and no
//! element past that point is produced.
//!
//! # Examples
//!
//! ```rust
//! use rill_seq::prelude::*;
//!
//! let seq = from_vec(vec![1, 2, 42, 99]);
//! assert_eq!(seq.find(|n| *n > 10), Some(42));
//! assert!(seq.contains(&2));
//! assert!(seq.any(|n| *n > 90));
//! assert!(!seq.all(|n| *n > 1));
//! ```

use rill_core::{Sequence, Step};

/// Extension trait providing the search operators.
pub trait SearchExt: Sequence {
    /// First element satisfying `predicate`, or `None` when no element
    /// matches after a full traversal.
    fn find<P>(&self, predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool;

    /// Whether any element equals `value`.
    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq;

    /// Whether any element satisfies `predicate`; stops on the first hit.
    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool;

    /// Whether all elements satisfy `predicate`; stops on the first
    /// failure. Vacuously true on an empty sequence.
    fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool;
}

impl<S: Sequence> SearchExt for S {
    fn find<P>(&self, mut predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut found = None;
        let outcome = self.drive(|element| {
            if predicate(&element) {
                found = Some(element);
                Step::Stop
            } else {
                Step::Continue
            }
        });
        debug_assert_eq!(outcome.was_stopped(), found.is_some());
        found
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.find(|element| element == value).is_some()
    }

    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate).is_some()
    }

    fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        !self.any(|element| !predicate(element))
    }
}
