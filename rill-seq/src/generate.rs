// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Generate sources - sequences produced from a seed instead of a container.
//!
//! `generate_with` is the general form: a start value, a successor
//! function, and a continuation predicate. The sequence is empty when the
//! start value already fails the predicate, and unbounded when the
//! predicate never fails - combine with
//! [`limit`](crate::LimitExt::limit) in that case.
//!
//! `generate` is the integer convenience form producing the arithmetic
//! progression `start, start + step, ...` while `value < stop`.
//!
//! # Examples
//!
//! ```rust
//! use rill_seq::prelude::*;
//!
//! assert_eq!(generate(0, 8, 2).collect_vec(4), vec![0, 2, 4, 6]);
//!
//! let powers = generate_with(1u64, |n| n * 2, |n| *n < 100);
//! assert_eq!(powers.collect_vec(7), vec![1, 2, 4, 8, 16, 32, 64]);
//! ```

use rill_core::{Cursor, Sequence};

/// Sequence from a seed, successor function, and continuation predicate.
pub fn generate_with<T, N, C>(start: T, next: N, continues: C) -> impl Sequence<Item = T>
where
    T: Clone,
    N: Fn(&T) -> T + Clone,
    C: Fn(&T) -> bool + Clone,
{
    GenerateWith {
        start,
        next,
        continues,
    }
}

/// Arithmetic progression from `start` while `value < stop`.
///
/// A zero or negative `step` never reaches `stop`, so the sequence is
/// unbounded; bound it downstream like any other unbounded source.
pub fn generate(start: i64, stop: i64, step: i64) -> impl Sequence<Item = i64> {
    generate_with(start, move |last| last + step, move |value| *value < stop)
}

#[derive(Clone)]
struct GenerateWith<T, N, C> {
    start: T,
    next: N,
    continues: C,
}

impl<T, N, C> Sequence for GenerateWith<T, N, C>
where
    T: Clone,
    N: Fn(&T) -> T + Clone,
    C: Fn(&T) -> bool + Clone,
{
    type Item = T;
    type Cursor = GenerateCursor<T, N, C>;

    fn into_cursor(self) -> Self::Cursor {
        GenerateCursor {
            current: self.start,
            next: self.next,
            continues: self.continues,
            done: false,
        }
    }
}

struct GenerateCursor<T, N, C> {
    current: T,
    next: N,
    continues: C,
    done: bool,
}

impl<T, N, C> Cursor for GenerateCursor<T, N, C>
where
    T: Clone,
    N: Fn(&T) -> T,
    C: Fn(&T) -> bool,
{
    type Item = T;

    fn advance(&mut self) -> Option<Self::Item> {
        if self.done || !(self.continues)(&self.current) {
            self.done = true;
            return None;
        }
        let value = self.current.clone();
        self.current = (self.next)(&value);
        Some(value)
    }
}
