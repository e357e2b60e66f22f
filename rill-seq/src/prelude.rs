// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all commonly used traits and types.
//!
//! Import this module for convenient access to the whole algebra:
//!
//! ```ignore
//! use rill_seq::prelude::*;
//!
//! let result = from_vec(numbers)
//!     .filter(...)
//!     .map(...)
//!     .limit(10)
//!     .collect_vec(10);
//! ```
//!
//! # Contents
//!
//! ## Extension Traits (Operators)
//!
//! - [`AggregateExt`] - Sum, product, min, max, counting, draining
//! - [`CollectExt`] - Materialize into a `Vec`
//! - [`CompareExt`] - Pairwise comparison of two sequences
//! - [`DedupExt`] - Drop previously seen elements
//! - [`EnumerateExt`] - Pair elements with indices or derived keys
//! - [`FilterExt`] - Keep elements satisfying a predicate
//! - [`FlattenExt`] - Splice nested sequences
//! - [`IterExt`] - Walk a sequence as a std iterator
//! - [`LimitExt`] - Stop after n yielded elements
//! - [`MapExt`] - Transform each element
//! - [`PairSeqExt`] - Key/value operators and projections
//! - [`ReduceExt`] - Seeded and first-element folds
//! - [`RepeatExt`] - Replay a sequence indefinitely
//! - [`SearchExt`] - First-match and membership queries
//! - [`SkipExt`] - Discard the first n elements
//! - [`SortExt`] - Buffer and reorder
//! - [`TapExt`] - Observe elements in passing
//!
//! ## Sources
//!
//! - [`from_slice`] / [`from_vec`] / [`from_pairs`] / [`from_map`] -
//!   Container conversions
//! - [`generate`] / [`generate_with`] - Seeded generation
//! - [`concat`] - Fixed list of sequences, spliced
//!
//! ## Core contracts
//!
//! - [`Sequence`] / [`PairSequence`] / [`Cursor`] - Producer abstractions
//! - [`Step`] / [`Drive`] - Termination protocol
//! - [`Comparison`] - Pairwise comparison outcome

pub use crate::aggregate::AggregateExt;
pub use crate::collect::CollectExt;
pub use crate::compare::{CompareExt, Comparison};
pub use crate::dedup::DedupExt;
pub use crate::enumerate::EnumerateExt;
pub use crate::filter::FilterExt;
pub use crate::flatten::{concat, FlattenExt};
pub use crate::generate::{generate, generate_with};
pub use crate::iter::IterExt;
pub use crate::limit::LimitExt;
pub use crate::map::MapExt;
pub use crate::pairs::PairSeqExt;
pub use crate::reduce::ReduceExt;
pub use crate::repeat::RepeatExt;
pub use crate::search::SearchExt;
pub use crate::skip::SkipExt;
pub use crate::sort::SortExt;
pub use crate::tap::TapExt;

pub use rill_core::{
    from_map, from_pairs, from_slice, from_vec, Addable, Cursor, Drive, Numeric, PairSequence,
    Sequence, Step,
};
