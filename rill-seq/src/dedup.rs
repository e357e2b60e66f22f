// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Dedup operator - drops elements equal to any previously yielded one.
//!
//! Streaming and order-preserving: the first occurrence of each distinct
//! element is forwarded, later occurrences are dropped. The seen-set grows
//! with the number of distinct elements for the lifetime of one drive, not
//! with the number of elements consumed, so an unbounded input is safe as
//! long as its distinct-value count stays bounded.
//!
//! # Examples
//!
//! ```rust
//! use rill_seq::prelude::*;
//!
//! let seq = from_vec(vec![1, 2, 1, 3, 2]).dedup();
//! assert_eq!(seq.collect_vec(3), vec![1, 2, 3]);
//! ```

use ahash::AHashSet;
use std::hash::Hash;

use rill_core::{Cursor, Sequence};

/// Extension trait providing the `dedup` operator.
pub trait DedupExt: Sequence {
    /// Forwards only the first occurrence of each distinct element.
    fn dedup(self) -> impl Sequence<Item = Self::Item>
    where
        Self::Item: Eq + Hash + Clone;
}

impl<S: Sequence> DedupExt for S {
    fn dedup(self) -> impl Sequence<Item = Self::Item>
    where
        Self::Item: Eq + Hash + Clone,
    {
        Dedup { seq: self }
    }
}

#[derive(Clone)]
struct Dedup<S> {
    seq: S,
}

impl<S> Sequence for Dedup<S>
where
    S: Sequence,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;
    type Cursor = DedupCursor<S::Cursor>;

    fn into_cursor(self) -> Self::Cursor {
        DedupCursor {
            inner: self.seq.into_cursor(),
            seen: AHashSet::with_capacity(16),
        }
    }
}

struct DedupCursor<C: Cursor> {
    inner: C,
    seen: AHashSet<C::Item>,
}

impl<C> Cursor for DedupCursor<C>
where
    C: Cursor,
    C::Item: Eq + Hash + Clone,
{
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        while let Some(element) = self.inner.advance() {
            if self.seen.insert(element.clone()) {
                return Some(element);
            }
        }
        None
    }
}

#[cfg(feature = "tracing")]
impl<C: Cursor> Drop for DedupCursor<C> {
    fn drop(&mut self) {
        tracing::trace!(distinct = self.seen.len(), "dedup drive released");
    }
}
