// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reduce and fold - left-folding a sequence to a single value.
//!
//! `reduce` takes an explicit seed and is defined for empty sequences (it
//! returns the seed). `fold` has no seed: the first element becomes the
//! accumulator, which is why it runs on the pull adapter - the first
//! element is consumed specially before the combining loop begins. On an
//! empty sequence `fold` returns the type's zero value (`Default`) and
//! never invokes the combining function.
//!
//! Both consume the entire sequence; input must be finite.
//!
//! # Examples
//!
//! ```rust
//! use rill_seq::prelude::*;
//!
//! let total = from_vec(vec![1, 2, 3]).reduce(10, |acc, n| acc + n);
//! assert_eq!(total, 16);
//!
//! let max_len = from_vec(vec!["a", "abc", "ab"]).fold(|a, b| if b.len() > a.len() { b } else { a });
//! assert_eq!(max_len, "abc");
//! ```

use rill_core::{Cursor, Sequence};

/// Extension trait providing the fold family.
pub trait ReduceExt: Sequence {
    /// Left-fold with an explicit seed.
    fn reduce<A, F>(&self, seed: A, f: F) -> A
    where
        F: FnMut(A, Self::Item) -> A;

    /// Left-fold seeded by the first element; `Default` on empty input.
    fn fold<F>(&self, f: F) -> Self::Item
    where
        Self::Item: Default,
        F: FnMut(Self::Item, Self::Item) -> Self::Item;
}

impl<S: Sequence> ReduceExt for S {
    fn reduce<A, F>(&self, seed: A, mut f: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        let mut acc = seed;
        let mut cursor = self.cursor();
        while let Some(element) = cursor.advance() {
            acc = f(acc, element);
        }
        acc
    }

    fn fold<F>(&self, mut f: F) -> Self::Item
    where
        Self::Item: Default,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut cursor = self.cursor();
        let Some(mut acc) = cursor.advance() else {
            return Self::Item::default();
        };
        while let Some(element) = cursor.advance() {
            acc = f(acc, element);
        }
        acc
    }
}
