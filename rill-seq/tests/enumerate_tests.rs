// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_seq::prelude::*;
use rill_test_utils::assert_elements;

#[test]
fn test_enumerate_counts_from_zero() {
    let seq = from_vec(vec!["a", "b", "c"]).enumerate();

    assert_elements(&seq, &[(0, "a"), (1, "b"), (2, "c")]);
}

#[test]
fn test_enumerate_counts_produced_elements_post_filter() {
    let seq = from_vec(vec![10, 11, 12, 13])
        .filter(|n| n % 2 == 0)
        .enumerate();

    assert_elements(&seq, &[(0, 10), (1, 12)]);
}

#[test]
fn test_enumerate_restarts_per_drive() {
    let seq = from_vec(vec!["x", "y"]).enumerate();

    // The counter belongs to the drive, not the blueprint.
    assert_elements(&seq, &[(0, "x"), (1, "y")]);
    assert_elements(&seq, &[(0, "x"), (1, "y")]);
}

#[test]
fn test_enumerate_with_derives_keys_from_elements() {
    let seq = from_vec(vec!["a", "bb", "ccc"]).enumerate_with(|s| s.len());

    assert_elements(&seq, &[(1, "a"), (2, "bb"), (3, "ccc")]);
}

#[test]
fn test_enumerate_feeds_pair_operators() {
    let seq = from_vec(vec!["a", "b", "c", "d"]).enumerate();

    let odd_positions = seq.filter_pairs(|index, _| index % 2 == 1);

    assert_elements(&odd_positions, &[(1, "b"), (3, "d")]);
}
