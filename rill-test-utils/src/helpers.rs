// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::Debug;

use rill_core::{Sequence, Step};

/// Asserts that driving `seq` yields exactly `expected`, in order.
pub fn assert_elements<S>(seq: &S, expected: &[S::Item])
where
    S: Sequence,
    S::Item: PartialEq + Debug,
{
    let mut actual = Vec::new();
    let outcome = seq.drive(|element| {
        actual.push(element);
        Step::Continue
    });
    assert!(!outcome.was_stopped(), "full drive was cut short");
    assert_eq!(actual, expected);
}

/// Asserts that `seq` produces no elements at all.
pub fn assert_empty<S>(seq: &S)
where
    S: Sequence,
    S::Item: Debug,
{
    let outcome = seq.drive(|element| {
        panic!("expected no elements, got {element:?}");
    });
    assert!(!outcome.was_stopped());
}

/// Combining function for empty-input tests; must never be invoked.
pub fn panic_if_called<T>(_: T, _: T) -> T {
    panic!("combining function invoked on empty input");
}
