// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy sequence combinators with push-driven short-circuiting.
//!
//! Pipelines are composed from re-drivable blueprints and run nothing
//! until a terminal operation drives them:
//!
//! ```rust
//! use rill_seq::prelude::*;
//!
//! let firsts = from_vec(vec![4, 1, 8, 3, 9, 2])
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * 10)
//!     .limit(2)
//!     .collect_vec(2);
//! assert_eq!(firsts, vec![40, 80]);
//! ```
//!
//! Infinite sources compose safely because every operator is lazy and a
//! downstream bound truncates the pipeline:
//!
//! ```rust
//! use rill_seq::prelude::*;
//!
//! let n = from_vec(vec![42]).repeat().limit(4).count(&42);
//! assert_eq!(n, 4);
//! ```
//!
//! The producer contracts (`Sequence`, `PairSequence`, `Cursor`) live in
//! `rill-core` and are re-exported here.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod aggregate;
pub mod collect;
pub mod compare;
pub mod dedup;
pub mod enumerate;
pub mod filter;
pub mod flatten;
pub mod generate;
pub mod iter;
pub mod limit;
pub mod map;
pub mod pairs;
pub mod prelude;
pub mod reduce;
pub mod repeat;
pub mod search;
pub mod skip;
pub mod sort;
pub mod tap;

pub use self::aggregate::AggregateExt;
pub use self::collect::CollectExt;
pub use self::compare::{CompareExt, Comparison};
pub use self::dedup::DedupExt;
pub use self::enumerate::EnumerateExt;
pub use self::filter::FilterExt;
pub use self::flatten::{concat, FlattenExt};
pub use self::generate::{generate, generate_with};
pub use self::iter::{IterExt, SeqIter};
pub use self::limit::LimitExt;
pub use self::map::MapExt;
pub use self::pairs::PairSeqExt;
pub use self::reduce::ReduceExt;
pub use self::repeat::RepeatExt;
pub use self::search::SearchExt;
pub use self::skip::SkipExt;
pub use self::sort::SortExt;
pub use self::tap::TapExt;

pub use rill_core::{
    from_map, from_pairs, from_slice, from_vec, Addable, Cursor, Drive, IterSource, Numeric,
    PairSequence, Sequence, Step,
};
