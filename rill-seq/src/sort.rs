// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sort operators - buffer, order, and re-expose as a sequence.
//!
//! Sorting is the one operator family that cannot stay lazy: the entire
//! input is buffered into a temporary container, ordered (stable std
//! sort), and re-exposed as a sequence. Never apply it to an unbounded
//! input.
//!
//! # Examples
//!
//! ```rust
//! use rill_seq::prelude::*;
//!
//! let ordered = from_vec(vec![3, 1, 2]).sorted();
//! assert_eq!(ordered.collect_vec(3), vec![1, 2, 3]);
//!
//! let reversed = from_vec(vec![3, 1, 2]).sorted_by(|a, b| b.cmp(a));
//! assert_eq!(reversed.collect_vec(3), vec![3, 2, 1]);
//! ```

use std::cmp::Ordering;

use rill_core::{from_vec, Cursor, Sequence};

/// Extension trait providing the `sorted` operators.
pub trait SortExt: Sequence {
    /// Buffers the sequence and re-exposes it in natural order.
    fn sorted(self) -> impl Sequence<Item = Self::Item>
    where
        Self::Item: Ord + Clone;

    /// Buffers the sequence and re-exposes it ordered by `compare`, which
    /// must be a consistent total order.
    fn sorted_by<F>(self, compare: F) -> impl Sequence<Item = Self::Item>
    where
        Self::Item: Clone,
        F: Fn(&Self::Item, &Self::Item) -> Ordering;
}

impl<S: Sequence> SortExt for S {
    fn sorted(self) -> impl Sequence<Item = Self::Item>
    where
        Self::Item: Ord + Clone,
    {
        self.sorted_by(Ord::cmp)
    }

    fn sorted_by<F>(self, compare: F) -> impl Sequence<Item = Self::Item>
    where
        Self::Item: Clone,
        F: Fn(&Self::Item, &Self::Item) -> Ordering,
    {
        let mut buffer = Vec::new();
        let mut cursor = self.into_cursor();
        while let Some(element) = cursor.advance() {
            buffer.push(element);
        }
        buffer.sort_by(compare);
        #[cfg(feature = "tracing")]
        tracing::trace!(len = buffer.len(), "sorted buffered sequence");
        from_vec(buffer)
    }
}
