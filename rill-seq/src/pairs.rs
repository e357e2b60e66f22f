// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Paired-sequence operators - the key/value face of the algebra.
//!
//! A pair sequence is any sequence of two-tuples, so the positional
//! operators (`skip`, `limit`, `concat`, `flatten`, `dedup`, `drain`, ...)
//! apply to it unchanged. This module contributes the operators whose
//! closure shape is pair-specific, plus the projections and the map
//! collection.
//!
//! # Examples
//!
//! ```rust
//! use rill_seq::prelude::*;
//!
//! let pairs = from_pairs(vec![("a", 1), ("b", 2), ("a", 3)]);
//! assert_eq!(pairs.clone().keys().collect_vec(3), vec!["a", "b", "a"]);
//! assert!(pairs.contains_key(&"b"));
//!
//! // Last write wins on duplicate keys.
//! let map = pairs.collect_map(3);
//! assert_eq!(map.get("a"), Some(&3));
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use rill_core::{Cursor, PairSequence, Sequence};

use crate::filter::FilterExt;
use crate::map::MapExt;
use crate::search::SearchExt;

/// Extension trait providing the pair-shaped operators.
pub trait PairSeqExt: PairSequence {
    /// Forwards only pairs for which `predicate` holds.
    fn filter_pairs<P>(self, predicate: P) -> impl Sequence<Item = (Self::Key, Self::Value)>
    where
        P: Fn(&Self::Key, &Self::Value) -> bool + Clone;

    /// Transforms each pair into a new pair.
    fn map_pairs<K2, V2, F>(self, f: F) -> impl Sequence<Item = (K2, V2)>
    where
        F: Fn(Self::Key, Self::Value) -> (K2, V2) + Clone;

    /// Projects the key half of each pair, lazily.
    fn keys(self) -> impl Sequence<Item = Self::Key>;

    /// Projects the value half of each pair, lazily.
    fn values(self) -> impl Sequence<Item = Self::Value>;

    /// First pair satisfying `predicate`, or `None` after a full traversal.
    fn find_pair<P>(&self, predicate: P) -> Option<(Self::Key, Self::Value)>
    where
        P: FnMut(&Self::Key, &Self::Value) -> bool;

    /// Whether any pair carries `key`.
    fn contains_key(&self, key: &Self::Key) -> bool
    where
        Self::Key: PartialEq;

    /// Whether any pair carries `value`.
    fn contains_value(&self, value: &Self::Value) -> bool
    where
        Self::Value: PartialEq;

    /// Left-fold over pairs with an explicit seed.
    fn reduce_pairs<A, F>(&self, seed: A, f: F) -> A
    where
        F: FnMut(A, Self::Key, Self::Value) -> A;

    /// Number of pairs satisfying `predicate`.
    fn count_pairs_if<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&Self::Key, &Self::Value) -> bool;

    /// Materializes into a map; on duplicate keys the last write wins,
    /// with sequence order deciding which write is last. `size_hint` is a
    /// capacity optimization only.
    fn collect_map(&self, size_hint: usize) -> HashMap<Self::Key, Self::Value>
    where
        Self::Key: Eq + Hash;
}

impl<S: PairSequence> PairSeqExt for S {
    fn filter_pairs<P>(self, predicate: P) -> impl Sequence<Item = (Self::Key, Self::Value)>
    where
        P: Fn(&Self::Key, &Self::Value) -> bool + Clone,
    {
        self.filter(move |(key, value)| predicate(key, value))
    }

    fn map_pairs<K2, V2, F>(self, f: F) -> impl Sequence<Item = (K2, V2)>
    where
        F: Fn(Self::Key, Self::Value) -> (K2, V2) + Clone,
    {
        self.map(move |(key, value)| f(key, value))
    }

    fn keys(self) -> impl Sequence<Item = Self::Key> {
        self.map(|(key, _)| key)
    }

    fn values(self) -> impl Sequence<Item = Self::Value> {
        self.map(|(_, value)| value)
    }

    fn find_pair<P>(&self, mut predicate: P) -> Option<(Self::Key, Self::Value)>
    where
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        self.find(|(key, value)| predicate(key, value))
    }

    fn contains_key(&self, key: &Self::Key) -> bool
    where
        Self::Key: PartialEq,
    {
        self.find_pair(|candidate, _| candidate == key).is_some()
    }

    fn contains_value(&self, value: &Self::Value) -> bool
    where
        Self::Value: PartialEq,
    {
        self.find_pair(|_, candidate| candidate == value).is_some()
    }

    fn reduce_pairs<A, F>(&self, seed: A, mut f: F) -> A
    where
        F: FnMut(A, Self::Key, Self::Value) -> A,
    {
        let mut acc = seed;
        let mut cursor = self.cursor();
        while let Some((key, value)) = cursor.advance() {
            acc = f(acc, key, value);
        }
        acc
    }

    fn count_pairs_if<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        let mut total = 0;
        let mut cursor = self.cursor();
        while let Some((key, value)) = cursor.advance() {
            if predicate(&key, &value) {
                total += 1;
            }
        }
        total
    }

    fn collect_map(&self, size_hint: usize) -> HashMap<Self::Key, Self::Value>
    where
        Self::Key: Eq + Hash,
    {
        let mut out = HashMap::with_capacity(size_hint);
        let mut cursor = self.cursor();
        while let Some((key, value)) = cursor.advance() {
            out.insert(key, value);
        }
        out
    }
}
