// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Scalar aggregations - sum, product, min, max, counting, draining.
//!
//! All of these consume the entire sequence, so input must be finite.
//! `sum` and `product` are first-element-seeded folds over the sealed
//! scalar kinds: on empty input they return the type's zero value, not the
//! additive or multiplicative identity. The product of an empty sequence
//! is therefore `0`. This is a deliberate choice matching the no-seed fold
//! semantics, not an oversight.
//!
//! `min` and `max` accept their first element unconditionally as the seed
//! and report absence as `None` on empty input.
//!
//! # Examples
//!
//! ```rust
//! use rill_seq::prelude::*;
//!
//! let seq = from_vec(vec![1, 2, 42, 99]);
//! assert_eq!(seq.sum(), 144);
//! assert_eq!(seq.product(), 8316);
//! assert_eq!(seq.min(), Some(1));
//! assert_eq!(seq.max(), Some(99));
//! assert_eq!(seq.len(), 4);
//! assert_eq!(seq.count(&42), 1);
//! ```

use rill_core::{Addable, Cursor, Numeric, Sequence};

use crate::reduce::ReduceExt;

/// Extension trait providing the scalar aggregations.
pub trait AggregateExt: Sequence {
    /// Adds all elements together; zero value on empty input.
    fn sum(&self) -> Self::Item
    where
        Self::Item: Addable;

    /// Multiplies all elements together; zero value on empty input.
    fn product(&self) -> Self::Item
    where
        Self::Item: Numeric;

    /// Smallest element, or `None` if the sequence is empty.
    fn min(&self) -> Option<Self::Item>
    where
        Self::Item: Ord;

    /// Largest element, or `None` if the sequence is empty.
    fn max(&self) -> Option<Self::Item>
    where
        Self::Item: Ord;

    /// Number of elements equal to `value`.
    fn count(&self, value: &Self::Item) -> usize
    where
        Self::Item: PartialEq;

    /// Number of elements satisfying `predicate`.
    fn count_if<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool;

    /// Number of elements. O(n): producers do not expose a cheap size.
    fn len(&self) -> usize;

    /// Runs the sequence to exhaustion for its effects.
    fn drain(&self);
}

impl<S: Sequence> AggregateExt for S {
    fn sum(&self) -> Self::Item
    where
        Self::Item: Addable,
    {
        self.fold(Addable::add)
    }

    fn product(&self) -> Self::Item
    where
        Self::Item: Numeric,
    {
        self.fold(Numeric::mul)
    }

    fn min(&self) -> Option<Self::Item>
    where
        Self::Item: Ord,
    {
        let mut cursor = self.cursor();
        let mut best = cursor.advance()?;
        while let Some(element) = cursor.advance() {
            if element < best {
                best = element;
            }
        }
        Some(best)
    }

    fn max(&self) -> Option<Self::Item>
    where
        Self::Item: Ord,
    {
        let mut cursor = self.cursor();
        let mut best = cursor.advance()?;
        while let Some(element) = cursor.advance() {
            if element > best {
                best = element;
            }
        }
        Some(best)
    }

    fn count(&self, value: &Self::Item) -> usize
    where
        Self::Item: PartialEq,
    {
        self.count_if(|element| element == value)
    }

    fn count_if<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut total = 0;
        let mut cursor = self.cursor();
        while let Some(element) = cursor.advance() {
            if predicate(&element) {
                total += 1;
            }
        }
        total
    }

    fn len(&self) -> usize {
        self.count_if(|_| true)
    }

    fn drain(&self) {
        let mut cursor = self.cursor();
        while cursor.advance().is_some() {}
    }
}
