// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core producer abstractions for the rill sequence algebra.
//!
//! Two producer shapes are foundational: [`Sequence`] (single values) and
//! [`PairSequence`] (key/value pairs). Both are lazy blueprints driven by a
//! stopping consumer; the [`Cursor`] pull adapter exposes the same elements
//! one at a time for the places where two sequences must advance in
//! lockstep. The combinator layer lives in `rill-seq` and is built purely
//! on these contracts.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod cursor;
pub mod numeric;
pub mod pair;
pub mod sequence;
pub mod source;
pub mod step;

pub use self::cursor::Cursor;
pub use self::numeric::{Addable, Numeric};
pub use self::pair::PairSequence;
pub use self::sequence::Sequence;
pub use self::source::{from_map, from_pairs, from_slice, from_vec, IterCursor, IterSource};
pub use self::step::{Drive, Step};
