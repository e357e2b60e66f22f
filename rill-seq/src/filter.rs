// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filter operator - forwards only elements satisfying a predicate.
//!
//! # Arguments
//!
//! * `predicate` - Decides, per element, whether to forward it.
//!
//! # Returns
//!
//! A new sequence producing the accepted elements in their original order.
//!
//! # Examples
//!
//! ```rust
//! use rill_seq::prelude::*;
//!
//! let evens = from_vec(vec![1, 2, 3, 4, 5]).filter(|n| n % 2 == 0);
//! assert_eq!(evens.collect_vec(2), vec![2, 4]);
//! ```
//!
//! # See Also
//!
//! - [`MapExt::map`](crate::MapExt::map) - Transform each element
//! - [`SearchExt::find`](crate::SearchExt::find) - First match only

use rill_core::{Cursor, Sequence};

/// Extension trait providing the `filter` operator.
pub trait FilterExt: Sequence {
    /// Forwards only elements for which `predicate` holds, preserving order.
    ///
    /// Filtering is lazy: the predicate runs while the returned sequence is
    /// driven, and a consumer stop propagates upstream immediately.
    ///
    /// See the [module-level documentation](crate::filter) for examples.
    fn filter<P>(self, predicate: P) -> impl Sequence<Item = Self::Item>
    where
        P: Fn(&Self::Item) -> bool + Clone;
}

impl<S: Sequence> FilterExt for S {
    fn filter<P>(self, predicate: P) -> impl Sequence<Item = Self::Item>
    where
        P: Fn(&Self::Item) -> bool + Clone,
    {
        Filter {
            seq: self,
            predicate,
        }
    }
}

#[derive(Clone)]
struct Filter<S, P> {
    seq: S,
    predicate: P,
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Cursor = FilterCursor<S::Cursor, P>;

    fn into_cursor(self) -> Self::Cursor {
        FilterCursor {
            inner: self.seq.into_cursor(),
            predicate: self.predicate,
        }
    }
}

struct FilterCursor<C, P> {
    inner: C,
    predicate: P,
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        while let Some(element) = self.inner.advance() {
            if (self.predicate)(&element) {
                return Some(element);
            }
        }
        None
    }
}
