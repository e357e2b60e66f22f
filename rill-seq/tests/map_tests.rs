// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_seq::prelude::*;
use rill_test_utils::test_data::{person_alice, person_bob};
use rill_test_utils::{assert_elements, TestData};

#[test]
fn test_map_transforms_each_element() {
    let seq = from_vec(vec![1, 2, 3]).map(|n| n * 10);

    assert_elements(&seq, &[10, 20, 30]);
}

#[test]
fn test_map_preserves_cardinality() {
    let seq = from_vec(vec![5, 6, 7, 8]);

    assert_eq!(seq.clone().map(|n| n * n).len(), seq.len());
}

#[test]
fn test_map_can_change_element_type() {
    let seq = from_vec(vec![1, 22, 333]).map(|n: i32| n.to_string());

    assert_elements(&seq, &["1".to_string(), "22".to_string(), "333".to_string()]);
}

#[test]
fn test_map_extracts_fixture_fields() -> anyhow::Result<()> {
    // Arrange
    let seq = from_vec(vec![person_alice(), person_bob()]);

    // Act
    let ages = seq.map(|data| match data {
        TestData::Person(person) => person.age,
        TestData::Animal(animal) => animal.legs,
    });

    // Assert
    assert_elements(&ages, &[25, 30]);
    Ok(())
}

#[test]
fn test_map_then_filter_composition() {
    let seq = from_vec(vec![1, 2, 3, 4, 5])
        .map(|n| n * 3)
        .filter(|n| n % 2 == 1);

    assert_elements(&seq, &[3, 9, 15]);
}
