// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridge to the std iterator protocol.
//!
//! A cursor already is "next or exhausted", so any sequence can be walked
//! with `for`, adapted with std iterator combinators, or collected through
//! `FromIterator` without leaving the ecosystem's native idioms.
//!
//! # Examples
//!
//! ```rust
//! use rill_seq::prelude::*;
//!
//! let seq = from_vec(vec![1, 2, 3]);
//! let doubled: Vec<i32> = seq.iter().map(|n| n * 2).collect();
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

use rill_core::{Cursor, Sequence};

/// Extension trait exposing a sequence through [`Iterator`].
pub trait IterExt: Sequence {
    /// Iterates one drive of this sequence through the std protocol.
    fn iter(&self) -> SeqIter<Self::Cursor> {
        SeqIter {
            cursor: self.cursor(),
        }
    }
}

impl<S: Sequence> IterExt for S {}

/// Adapter yielding a cursor's elements as a std iterator.
#[derive(Debug)]
pub struct SeqIter<C> {
    cursor: C,
}

impl<C: Cursor> Iterator for SeqIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.advance()
    }
}
