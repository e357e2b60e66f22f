// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_seq::prelude::*;
use rill_test_utils::test_data::{animal_spider, person_alice, person_bob};
use rill_test_utils::TestData;

#[test]
fn test_find_returns_first_match() {
    let found = from_vec(vec![1, 8, 3, 12]).find(|n| *n > 5);

    assert_eq!(found, Some(8));
}

#[test]
fn test_find_no_match_returns_none() {
    let found = from_vec(vec![1, 2, 3]).find(|n| *n > 10);

    assert_eq!(found, None);
}

#[test]
fn test_find_on_empty_returns_none() {
    let found = from_vec(Vec::<i32>::new()).find(|_| true);

    assert_eq!(found, None);
}

#[test]
fn test_contains_value() {
    let seq = from_vec(vec![1, 2, 42]);

    assert!(seq.contains(&42));
    assert!(!seq.contains(&7));
}

#[test]
fn test_any_short_circuits_on_first_hit() {
    let seq = from_vec(vec![1, 2, 3]);

    assert!(seq.any(|n| *n == 2));
    assert!(!seq.any(|n| *n > 99));
}

#[test]
fn test_all_requires_every_element() {
    let seq = from_vec(vec![2, 4, 6]);

    assert!(seq.all(|n| n % 2 == 0));
    assert!(!seq.clone().map(|n| n + 1).all(|n| n % 2 == 0));
}

#[test]
fn test_all_is_vacuously_true_on_empty() {
    let seq = from_vec(Vec::<i32>::new());

    assert!(seq.all(|_| false));
}

#[test]
fn test_find_fixture_by_variant() -> anyhow::Result<()> {
    // Arrange
    let seq = from_vec(vec![person_alice(), animal_spider(), person_bob()]);

    // Act
    let first_animal = seq.find(|data| matches!(data, TestData::Animal(_)));

    // Assert
    assert_eq!(first_animal, Some(animal_spider()));
    Ok(())
}
