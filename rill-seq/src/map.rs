// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map operator - transforms each element one-for-one.
//!
//! # Arguments
//!
//! * `f` - Transformation applied to every element.
//!
//! # Returns
//!
//! A new sequence of the transformed elements. Cardinality and order are
//! unchanged.
//!
//! # Examples
//!
//! ```rust
//! use rill_seq::prelude::*;
//!
//! let doubled = from_vec(vec![1, 2, 3]).map(|n| n * 2);
//! assert_eq!(doubled.collect_vec(3), vec![2, 4, 6]);
//! ```
//!
//! # See Also
//!
//! - [`FilterExt::filter`](crate::FilterExt::filter) - Drop elements instead
//! - [`TapExt::tap`](crate::TapExt::tap) - Observe without transforming

use rill_core::{Cursor, Sequence};

/// Extension trait providing the `map` operator.
pub trait MapExt: Sequence {
    /// Transforms each element with `f`, preserving order and cardinality.
    ///
    /// See the [module-level documentation](crate::map) for examples.
    fn map<T, F>(self, f: F) -> impl Sequence<Item = T>
    where
        F: Fn(Self::Item) -> T + Clone;
}

impl<S: Sequence> MapExt for S {
    fn map<T, F>(self, f: F) -> impl Sequence<Item = T>
    where
        F: Fn(Self::Item) -> T + Clone,
    {
        Map { seq: self, f }
    }
}

#[derive(Clone)]
struct Map<S, F> {
    seq: S,
    f: F,
}

impl<S, T, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> T + Clone,
{
    type Item = T;
    type Cursor = MapCursor<S::Cursor, F>;

    fn into_cursor(self) -> Self::Cursor {
        MapCursor {
            inner: self.seq.into_cursor(),
            f: self.f,
        }
    }
}

struct MapCursor<C, F> {
    inner: C,
    f: F,
}

impl<C, T, F> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> T,
{
    type Item = T;

    fn advance(&mut self) -> Option<Self::Item> {
        self.inner.advance().map(&self.f)
    }
}
