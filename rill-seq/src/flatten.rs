// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Flatten and concat operators - splicing nested sequences end to end.
//!
//! `flatten` consumes an outer sequence of sequences, draining each inner
//! sequence to completion before advancing the outer one. A consumer stop
//! propagates out of the currently-draining inner sequence and aborts the
//! outer loop too, because both run under the same drive.
//!
//! `concat` is `flatten` applied to a fixed list of sequences.
//!
//! # Examples
//!
//! ```rust
//! use rill_seq::prelude::*;
//!
//! let spliced = concat(vec![from_vec(vec![1, 2]), from_vec(vec![3])]);
//! assert_eq!(spliced.collect_vec(3), vec![1, 2, 3]);
//! ```

use rill_core::{Cursor, Sequence};

/// Extension trait providing the `flatten` operator.
pub trait FlattenExt: Sequence {
    /// Splices the inner sequences of a sequence-of-sequences into one.
    fn flatten(self) -> impl Sequence<Item = <Self::Item as Sequence>::Item>
    where
        Self::Item: Sequence;
}

impl<S: Sequence> FlattenExt for S {
    fn flatten(self) -> impl Sequence<Item = <Self::Item as Sequence>::Item>
    where
        Self::Item: Sequence,
    {
        Flatten { seq: self }
    }
}

/// Splices a fixed list of sequences end to end.
pub fn concat<S: Sequence>(seqs: Vec<S>) -> impl Sequence<Item = S::Item> {
    rill_core::from_vec(seqs).flatten()
}

#[derive(Clone)]
struct Flatten<S> {
    seq: S,
}

impl<S> Sequence for Flatten<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    type Item = <S::Item as Sequence>::Item;
    type Cursor = FlattenCursor<S>;

    fn into_cursor(self) -> Self::Cursor {
        FlattenCursor {
            outer: self.seq.into_cursor(),
            inner: None,
        }
    }
}

struct FlattenCursor<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    outer: S::Cursor,
    inner: Option<<S::Item as Sequence>::Cursor>,
}

impl<S> Cursor for FlattenCursor<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    type Item = <S::Item as Sequence>::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(element) = inner.advance() {
                    return Some(element);
                }
                self.inner = None;
            }
            match self.outer.advance() {
                Some(next) => self.inner = Some(next.into_cursor()),
                None => return None,
            }
        }
    }
}
