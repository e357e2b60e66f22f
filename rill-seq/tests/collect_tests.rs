// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_seq::prelude::*;
use rill_test_utils::test_data::{animal_dog, person_alice};

#[test]
fn test_collect_vec_preserves_order() {
    let collected = from_vec(vec![3, 1, 2]).collect_vec(3);

    assert_eq!(collected, vec![3, 1, 2]);
}

#[test]
fn test_collect_vec_size_hint_is_not_binding() {
    // Hint too small and too large both work; capacity only.
    assert_eq!(from_vec(vec![1, 2, 3]).collect_vec(0), vec![1, 2, 3]);
    assert_eq!(from_vec(vec![1, 2, 3]).collect_vec(100), vec![1, 2, 3]);
}

#[test]
fn test_collect_vec_of_empty_sequence() {
    let collected = from_vec(Vec::<i32>::new()).collect_vec(4);

    assert!(collected.is_empty());
}

#[test]
fn test_collect_vec_of_fixtures() {
    let collected = from_vec(vec![person_alice(), animal_dog()]).collect_vec(2);

    assert_eq!(collected, vec![person_alice(), animal_dog()]);
}

#[test]
fn test_collect_roundtrip_through_slice_source() {
    let original = vec![5, 6, 7];
    let collected = from_slice(&original).collect_vec(3);

    assert_eq!(collected, original);
}
