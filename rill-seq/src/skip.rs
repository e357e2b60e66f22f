// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Skip operator - discards the first n elements.
//!
//! # Examples
//!
//! ```rust
//! use rill_seq::prelude::*;
//!
//! let tail = from_vec(vec![1, 2, 3, 4]).skip(2);
//! assert_eq!(tail.collect_vec(2), vec![3, 4]);
//! ```
//!
//! # See Also
//!
//! - [`LimitExt::limit`](crate::LimitExt::limit) - Keep only the first n

use rill_core::{Cursor, Sequence};

/// Extension trait providing the `skip` operator.
pub trait SkipExt: Sequence {
    /// Discards the first `n` elements unconditionally, then forwards the
    /// rest. A sequence shorter than `n` comes out empty.
    fn skip(self, n: usize) -> impl Sequence<Item = Self::Item>;
}

impl<S: Sequence> SkipExt for S {
    fn skip(self, n: usize) -> impl Sequence<Item = Self::Item> {
        Skip { seq: self, n }
    }
}

#[derive(Clone)]
struct Skip<S> {
    seq: S,
    n: usize,
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    type Cursor = SkipCursor<S::Cursor>;

    fn into_cursor(self) -> Self::Cursor {
        SkipCursor {
            inner: self.seq.into_cursor(),
            remaining: self.n,
        }
    }
}

struct SkipCursor<C> {
    inner: C,
    remaining: usize,
}

impl<C: Cursor> Cursor for SkipCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            self.inner.advance()?;
        }
        self.inner.advance()
    }
}
