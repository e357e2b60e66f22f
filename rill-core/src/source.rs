// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Conversions from native containers and iterators into sequences.
//!
//! All of the constructors here are spellings of one wrapper:
//! [`IterSource`] lifts any `Iterator + Clone` into the algebra. A cloneable
//! iterator is already a re-drivable description of an element order, which
//! is exactly what a [`Sequence`] blueprint is.

use std::collections::HashMap;

use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// A sequence backed by a cloneable iterator blueprint.
///
/// Driving clones the iterator and walks the clone, so the blueprint can be
/// driven any number of times. Infinite iterators are fine; the combinator
/// layer never drains a source it was not explicitly asked to buffer.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: I,
}

impl<I> IterSource<I> {
    /// Wrap an iterator blueprint as a sequence.
    #[must_use]
    pub const fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I> Sequence for IterSource<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;
    type Cursor = IterCursor<I>;

    fn into_cursor(self) -> Self::Cursor {
        IterCursor { iter: self.iter }
    }
}

/// Cursor over an [`IterSource`].
#[derive(Debug)]
pub struct IterCursor<I> {
    iter: I,
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

/// Sequence over the elements of a slice, cloned out on demand.
///
/// ```rust
/// use rill_core::{from_slice, Cursor, Sequence};
///
/// let numbers = [1, 2, 3];
/// let seq = from_slice(&numbers);
/// let mut cursor = seq.cursor();
/// assert_eq!(cursor.advance(), Some(1));
/// assert_eq!(cursor.advance(), Some(2));
/// ```
pub fn from_slice<T: Clone>(items: &[T]) -> impl Sequence<Item = T> + '_ {
    IterSource::new(items.iter().cloned())
}

/// Sequence that owns its elements.
pub fn from_vec<T: Clone>(items: Vec<T>) -> impl Sequence<Item = T> {
    IterSource::new(items.into_iter())
}

/// Pair sequence over owned key/value pairs.
pub fn from_pairs<K: Clone, V: Clone>(pairs: Vec<(K, V)>) -> impl Sequence<Item = (K, V)> {
    IterSource::new(pairs.into_iter())
}

/// Pair sequence over a map's entries, in the map's iteration order.
pub fn from_map<K, V, S>(map: &HashMap<K, V, S>) -> impl Sequence<Item = (K, V)> + '_
where
    K: Clone,
    V: Clone,
{
    IterSource::new(map.iter().map(|(k, v)| (k.clone(), v.clone())))
}
