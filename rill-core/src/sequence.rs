// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The push-driven sequence abstraction.

use crate::cursor::Cursor;
use crate::step::{Drive, Step};

/// A lazy, re-drivable producer of values.
///
/// A `Sequence` is a blueprint, not a running iteration. Driving it borrows
/// the blueprint and feeds its elements to a consumer, once per element and
/// in a fixed order, until the elements run out or the consumer answers
/// [`Step::Stop`]. Driving the same blueprint again reproduces the same
/// order; any mutable iteration state (counters, seen-sets) lives in the
/// [`Cursor`] of that one drive, so independent drives never share state.
///
/// `Clone` is the re-derivation mechanism: a clone is an independent
/// blueprint of the same elements. Combinators consume their input by value
/// and return a new blueprint, so pipelines are built without running
/// anything:
///
/// ```rust
/// use rill_core::{from_vec, Sequence, Step};
///
/// let numbers = from_vec(vec![1, 2, 3, 4]);
/// let mut seen = Vec::new();
/// let outcome = numbers.drive(|n| {
///     seen.push(n);
///     if n == 3 { Step::Stop } else { Step::Continue }
/// });
/// assert!(outcome.was_stopped());
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
///
/// # The two faces of the contract
///
/// The push face is [`drive`](Sequence::drive). The pull face is
/// [`into_cursor`](Sequence::into_cursor), which turns the blueprint into a
/// resumable [`Cursor`]. `drive` is defined as a loop over a fresh cursor,
/// which is what makes the stop contract hold uniformly across every
/// combinator: the loop never touches the cursor again after a `Stop`, and
/// the cursor's destructor runs before `drive` returns.
pub trait Sequence: Clone {
    /// The type of element this sequence produces.
    type Item;

    /// The cursor type backing one drive of this sequence.
    type Cursor: Cursor<Item = Self::Item>;

    /// Convert this blueprint into a cursor, consuming it.
    fn into_cursor(self) -> Self::Cursor;

    /// Start a fresh cursor without consuming the blueprint.
    fn cursor(&self) -> Self::Cursor {
        self.clone().into_cursor()
    }

    /// Run the sequence through `consumer`.
    ///
    /// The consumer is called once per element in sequence order. Returning
    /// [`Step::Stop`] at step *i* guarantees no callback past *i* and that
    /// the drive's state is released before this method returns.
    fn drive<F>(&self, mut consumer: F) -> Drive
    where
        F: FnMut(Self::Item) -> Step,
    {
        let mut cursor = self.cursor();
        while let Some(element) = cursor.advance() {
            if consumer(element).is_stop() {
                return Drive::Stopped;
            }
        }
        Drive::Completed
    }
}
