// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Enumerate operators - pair each element with an index or derived key.
//!
//! # Examples
//!
//! ```rust
//! use rill_seq::prelude::*;
//!
//! let indexed = from_vec(vec!["a", "b"]).enumerate();
//! assert_eq!(indexed.collect_vec(2), vec![(0, "a"), (1, "b")]);
//!
//! let keyed = from_vec(vec!["a", "bb"]).enumerate_with(|s| s.len());
//! assert_eq!(keyed.collect_vec(2), vec![(1, "a"), (2, "bb")]);
//! ```

use rill_core::{Cursor, Sequence};

use crate::map::MapExt;

/// Extension trait providing the `enumerate` operators.
pub trait EnumerateExt: Sequence {
    /// Pairs each element with a `usize` counter starting at 0.
    ///
    /// The counter counts produced elements, so enumerating after a filter
    /// numbers the surviving elements. Counter state belongs to a single
    /// drive: every drive (and every clone) counts from 0 again.
    fn enumerate(self) -> impl Sequence<Item = (usize, Self::Item)>;

    /// Pairs each element with a key derived from it by `key`.
    fn enumerate_with<K, F>(self, key: F) -> impl Sequence<Item = (K, Self::Item)>
    where
        F: Fn(&Self::Item) -> K + Clone;
}

impl<S: Sequence> EnumerateExt for S {
    fn enumerate(self) -> impl Sequence<Item = (usize, Self::Item)> {
        Enumerate { seq: self }
    }

    fn enumerate_with<K, F>(self, key: F) -> impl Sequence<Item = (K, Self::Item)>
    where
        F: Fn(&Self::Item) -> K + Clone,
    {
        self.map(move |element| {
            let k = key(&element);
            (k, element)
        })
    }
}

#[derive(Clone)]
struct Enumerate<S> {
    seq: S,
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item = (usize, S::Item);
    type Cursor = EnumerateCursor<S::Cursor>;

    fn into_cursor(self) -> Self::Cursor {
        EnumerateCursor {
            inner: self.seq.into_cursor(),
            index: 0,
        }
    }
}

struct EnumerateCursor<C> {
    inner: C,
    index: usize,
}

impl<C: Cursor> Cursor for EnumerateCursor<C> {
    type Item = (usize, C::Item);

    fn advance(&mut self) -> Option<Self::Item> {
        let element = self.inner.advance()?;
        let index = self.index;
        self.index += 1;
        Some((index, element))
    }
}
