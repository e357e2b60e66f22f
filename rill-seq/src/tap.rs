// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Tap operator - observes elements without consuming or altering them.
//!
//! Useful for debugging a pipeline without breaking the chain.
//!
//! # Examples
//!
//! ```rust
//! use rill_seq::prelude::*;
//! use std::cell::Cell;
//!
//! let seen = Cell::new(0);
//! let seq = from_vec(vec![1, 2, 3]).tap(|_| seen.set(seen.get() + 1));
//! let _ = seq.collect_vec(3);
//! assert_eq!(seen.get(), 3);
//! ```

use rill_core::{Cursor, Sequence};

/// Extension trait providing the `tap` operator.
pub trait TapExt: Sequence {
    /// Calls `f` with a reference to each element as it passes through.
    fn tap<F>(self, f: F) -> impl Sequence<Item = Self::Item>
    where
        F: Fn(&Self::Item) + Clone;
}

impl<S: Sequence> TapExt for S {
    fn tap<F>(self, f: F) -> impl Sequence<Item = Self::Item>
    where
        F: Fn(&Self::Item) + Clone,
    {
        Tap { seq: self, f }
    }
}

#[derive(Clone)]
struct Tap<S, F> {
    seq: S,
    f: F,
}

impl<S, F> Sequence for Tap<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) + Clone,
{
    type Item = S::Item;
    type Cursor = TapCursor<S::Cursor, F>;

    fn into_cursor(self) -> Self::Cursor {
        TapCursor {
            inner: self.seq.into_cursor(),
            f: self.f,
        }
    }
}

struct TapCursor<C, F> {
    inner: C,
    f: F,
}

impl<C, F> Cursor for TapCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item),
{
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        let element = self.inner.advance()?;
        (self.f)(&element);
        Some(element)
    }
}
