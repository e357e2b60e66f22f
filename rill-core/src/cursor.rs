// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The pull adapter: one-at-a-time access to a sequence's elements.

/// A resumable cursor over a sequence.
///
/// Each call to [`advance`](Cursor::advance) produces the next element, or
/// `None` once the sequence is exhausted. A cursor owns whatever state its
/// stage needs in order to resume after an element, so two independently
/// obtained cursors never interfere, and a cursor that is dropped before
/// exhaustion releases that state through its destructor. Abandoning a
/// cursor early is always safe.
///
/// Cursors are how two sequences get advanced in lockstep: hold a cursor
/// for one side while pushing the other.
pub trait Cursor {
    /// The type of element this cursor yields.
    type Item;

    /// Produce the next element, or `None` when no elements remain.
    fn advance(&mut self) -> Option<Self::Item>;
}
