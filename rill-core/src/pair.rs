// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Paired (key/value) sequences.

use crate::sequence::Sequence;
use crate::step::{Drive, Step};

/// A sequence of key/value pairs.
///
/// Every [`Sequence`] whose element is a two-tuple is a `PairSequence`;
/// there is no second producer hierarchy. The trait contributes the
/// two-argument consumer shape, and the pair-specific combinators hang off
/// it. Positional combinators (skip, limit, concat, flatten, dedup) apply
/// to pair sequences unchanged, since a pair is just the element.
///
/// The algebra imposes no key-uniqueness invariant: uniqueness and ordering
/// are whatever the underlying source produced. Only an explicitly
/// map-collecting operation deduplicates keys.
pub trait PairSequence: Sequence<Item = (Self::Key, Self::Value)> {
    /// The key half of each pair.
    type Key;
    /// The value half of each pair.
    type Value;

    /// Run the sequence through a two-argument consumer.
    ///
    /// Same contract as [`Sequence::drive`], with the pair split into its
    /// halves.
    fn drive_pairs<F>(&self, mut consumer: F) -> Drive
    where
        F: FnMut(Self::Key, Self::Value) -> Step,
    {
        self.drive(|(key, value)| consumer(key, value))
    }
}

impl<K, V, S> PairSequence for S
where
    S: Sequence<Item = (K, V)>,
{
    type Key = K;
    type Value = V;
}
