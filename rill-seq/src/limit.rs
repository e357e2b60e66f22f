// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Limit operator - stops after n yielded elements.
//!
//! `limit` counts elements it actually yields, not raw upstream elements:
//! composed after a filter, it stops after n elements have passed the
//! filter. Once the limit is reached the upstream is not consumed further,
//! which is what makes bounding an infinite sequence safe.
//!
//! # Examples
//!
//! ```rust
//! use rill_seq::prelude::*;
//!
//! let head = from_vec(vec![1, 2, 3, 4]).limit(2);
//! assert_eq!(head.collect_vec(2), vec![1, 2]);
//!
//! // Bounding an infinite sequence.
//! let ones = from_vec(vec![1]).repeat().limit(3);
//! assert_eq!(ones.collect_vec(3), vec![1, 1, 1]);
//! ```
//!
//! # See Also
//!
//! - [`SkipExt::skip`](crate::SkipExt::skip) - Drop the first n instead
//! - [`RepeatExt::repeat`](crate::RepeatExt::repeat) - The main reason a bound exists

use rill_core::{Cursor, Sequence};

/// Extension trait providing the `limit` operator.
pub trait LimitExt: Sequence {
    /// Yields at most `n` elements, then reports exhaustion without
    /// touching the upstream again.
    fn limit(self, n: usize) -> impl Sequence<Item = Self::Item>;
}

impl<S: Sequence> LimitExt for S {
    fn limit(self, n: usize) -> impl Sequence<Item = Self::Item> {
        Limit { seq: self, n }
    }
}

#[derive(Clone)]
struct Limit<S> {
    seq: S,
    n: usize,
}

impl<S: Sequence> Sequence for Limit<S> {
    type Item = S::Item;
    type Cursor = LimitCursor<S::Cursor>;

    fn into_cursor(self) -> Self::Cursor {
        LimitCursor {
            inner: self.seq.into_cursor(),
            remaining: self.n,
        }
    }
}

struct LimitCursor<C> {
    inner: C,
    remaining: usize,
}

impl<C: Cursor> Cursor for LimitCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.inner.advance() {
            Some(element) => {
                self.remaining -= 1;
                Some(element)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }
}
