// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Instrumented sequence wrapper for short-circuit assertions.
//!
//! `Probe` forwards its underlying sequence unchanged while counting how
//! many elements were actually produced and how many cursors were opened,
//! across all drives and clones. Tests use it to assert that an operator
//! stopped consuming its upstream at the right element.
//!
//! The shared counters deliberately violate the no-shared-state rule of
//! production blueprints; observation from the outside is the point here.

use std::cell::Cell;
use std::rc::Rc;

use rill_core::{Cursor, Sequence};

/// Pass-through sequence that counts what flows out of it.
#[derive(Clone)]
pub struct Probe<S> {
    seq: S,
    produced: Rc<Cell<usize>>,
    cursors: Rc<Cell<usize>>,
}

impl<S: Sequence> Probe<S> {
    #[must_use]
    pub fn new(seq: S) -> Self {
        Self {
            seq,
            produced: Rc::new(Cell::new(0)),
            cursors: Rc::new(Cell::new(0)),
        }
    }

    /// Handle for reading the counters after the probe moved into a
    /// pipeline.
    #[must_use]
    pub fn monitor(&self) -> ProbeMonitor {
        ProbeMonitor {
            produced: Rc::clone(&self.produced),
            cursors: Rc::clone(&self.cursors),
        }
    }
}

impl<S: Sequence> Sequence for Probe<S> {
    type Item = S::Item;
    type Cursor = ProbeCursor<S::Cursor>;

    fn into_cursor(self) -> Self::Cursor {
        self.cursors.set(self.cursors.get() + 1);
        ProbeCursor {
            inner: self.seq.into_cursor(),
            produced: self.produced,
        }
    }
}

pub struct ProbeCursor<C> {
    inner: C,
    produced: Rc<Cell<usize>>,
}

impl<C: Cursor> Cursor for ProbeCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        let element = self.inner.advance();
        if element.is_some() {
            self.produced.set(self.produced.get() + 1);
        }
        element
    }
}

/// Read side of a [`Probe`].
#[derive(Clone)]
pub struct ProbeMonitor {
    produced: Rc<Cell<usize>>,
    cursors: Rc<Cell<usize>>,
}

impl ProbeMonitor {
    /// Elements produced so far, across all drives.
    #[must_use]
    pub fn produced(&self) -> usize {
        self.produced.get()
    }

    /// Cursors opened so far (one per drive).
    #[must_use]
    pub fn cursors(&self) -> usize {
        self.cursors.get()
    }
}
