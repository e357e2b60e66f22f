// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_seq::prelude::*;
use rill_test_utils::test_data::{animal_dog, person_alice, person_bob};
use rill_test_utils::{assert_elements, assert_empty};

#[test]
fn test_dedup_keeps_first_occurrence_order() {
    let seq = from_vec(vec![3, 1, 3, 2, 1, 3]).dedup();

    assert_elements(&seq, &[3, 1, 2]);
}

#[test]
fn test_dedup_of_distinct_input_is_identity() {
    let seq = from_vec(vec![1, 2, 3]).dedup();

    assert_elements(&seq, &[1, 2, 3]);
}

#[test]
fn test_dedup_on_empty_input() {
    let seq = from_vec(Vec::<i64>::new()).dedup();

    assert_empty(&seq);
}

#[test]
fn test_dedup_is_re_drivable_with_fresh_seen_set() {
    let seq = from_vec(vec![1, 1, 2]).dedup();

    assert_elements(&seq, &[1, 2]);
    // A second drive starts from an empty seen-set, not the last one.
    assert_elements(&seq, &[1, 2]);
}

#[test]
fn test_dedup_of_self_concat() {
    let base = from_vec(vec![1, 2, 42, 99]);
    let seq = concat(vec![base.clone(), base]).dedup();

    assert_elements(&seq, &[1, 2, 42, 99]);
}

#[test]
fn test_dedup_fixtures_by_structural_equality() -> anyhow::Result<()> {
    // Arrange
    let seq = from_vec(vec![
        person_alice(),
        animal_dog(),
        person_alice(),
        person_bob(),
    ]);

    // Act
    let distinct = seq.dedup();

    // Assert
    assert_elements(&distinct, &[person_alice(), animal_dog(), person_bob()]);
    Ok(())
}

#[test]
fn test_dedup_bounds_unbounded_input_with_bounded_distinct_values() {
    // Infinite repetition of two values; dedup plus limit terminates.
    let seq = from_vec(vec![1, 2]).repeat().dedup().limit(2);

    assert_elements(&seq, &[1, 2]);
}
