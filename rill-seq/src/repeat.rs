// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Repeat operator - replays an entire sequence indefinitely.
//!
//! The underlying blueprint is re-driven from the start each time it runs
//! out, so it must be safely re-drivable (which every blueprint in this
//! algebra is). The result is unbounded; the operator performs no bounding
//! itself, so the caller composes a [`limit`](crate::LimitExt::limit)
//! downstream. A sequence that turns out to be empty reports exhaustion
//! instead of replaying forever.
//!
//! # Examples
//!
//! ```rust
//! use rill_seq::prelude::*;
//!
//! let cycled = from_vec(vec![1, 2]).repeat().limit(5);
//! assert_eq!(cycled.collect_vec(5), vec![1, 2, 1, 2, 1]);
//! ```

use rill_core::{Cursor, Sequence};

/// Extension trait providing the `repeat` operator.
pub trait RepeatExt: Sequence {
    /// Replays this sequence from the start, indefinitely.
    fn repeat(self) -> impl Sequence<Item = Self::Item>;
}

impl<S: Sequence> RepeatExt for S {
    fn repeat(self) -> impl Sequence<Item = Self::Item> {
        Repeat { seq: self }
    }
}

#[derive(Clone)]
struct Repeat<S> {
    seq: S,
}

impl<S: Sequence> Sequence for Repeat<S> {
    type Item = S::Item;
    type Cursor = RepeatCursor<S>;

    fn into_cursor(self) -> Self::Cursor {
        RepeatCursor {
            inner: self.seq.cursor(),
            seq: self.seq,
            exhausted: false,
        }
    }
}

struct RepeatCursor<S: Sequence> {
    seq: S,
    inner: S::Cursor,
    exhausted: bool,
}

impl<S: Sequence> Cursor for RepeatCursor<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if let Some(element) = self.inner.advance() {
            return Some(element);
        }
        // Replay; an empty underlying sequence fuses instead of spinning.
        self.inner = self.seq.cursor();
        match self.inner.advance() {
            Some(element) => Some(element),
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}
