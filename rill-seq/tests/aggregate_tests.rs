// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_seq::prelude::*;

#[test]
fn test_sum_of_integers() {
    assert_eq!(from_vec(vec![1, 2, 42, 99]).sum(), 144);
}

#[test]
fn test_sum_of_floats() {
    let total: f64 = from_vec(vec![0.5, 1.25, 2.25]).sum();

    assert!((total - 4.0).abs() < f64::EPSILON);
}

#[test]
fn test_sum_of_strings_concatenates() {
    let joined = from_vec(vec!["ab".to_string(), "cd".to_string()]).sum();

    assert_eq!(joined, "abcd");
}

#[test]
fn test_sum_on_empty_returns_zero_value() {
    assert_eq!(from_vec(Vec::<u32>::new()).sum(), 0);
    assert_eq!(from_vec(Vec::<String>::new()).sum(), "");
}

#[test]
fn test_product_of_integers() {
    assert_eq!(from_vec(vec![1, 2, 42, 99]).product(), 8316);
}

#[test]
fn test_product_on_empty_is_zero_value_not_identity() {
    // First-element-seeded fold semantics: no element, so the zero value.
    assert_eq!(from_vec(Vec::<i64>::new()).product(), 0);
}

#[test]
fn test_min_and_max_presence() {
    let seq = from_vec(vec![5, -3, 12, 0]);

    assert_eq!(seq.min(), Some(-3));
    assert_eq!(seq.max(), Some(12));
}

#[test]
fn test_min_and_max_absent_on_empty() {
    let seq = from_vec(Vec::<i32>::new());

    assert_eq!(seq.min(), None);
    assert_eq!(seq.max(), None);
}

#[test]
fn test_max_seeds_from_first_element_even_when_negative() {
    // The first element is accepted before any comparison happens.
    let seq = from_vec(vec![-5, -9, -7]);

    assert_eq!(seq.max(), Some(-5));
    assert_eq!(seq.min(), Some(-9));
}

#[test]
fn test_min_max_single_element() {
    let seq = from_vec(vec![8]);

    assert_eq!(seq.min(), Some(8));
    assert_eq!(seq.max(), Some(8));
}

#[test]
fn test_count_matches_value_occurrences() {
    let seq = from_vec(vec![1, 42, 1, 1]);

    assert_eq!(seq.count(&1), 3);
    assert_eq!(seq.count(&42), 1);
    assert_eq!(seq.count(&7), 0);
}

#[test]
fn test_count_if_with_predicate() {
    let seq = from_vec(vec![1, 2, 3, 4, 5]);

    assert_eq!(seq.count_if(|n| n % 2 == 0), 2);
}

#[test]
fn test_len_is_full_traversal_count() {
    assert_eq!(from_vec(vec![9, 9, 9]).len(), 3);
    assert_eq!(from_vec(Vec::<i32>::new()).len(), 0);
}

#[test]
fn test_drain_runs_side_effects_to_exhaustion() {
    use std::cell::Cell;

    let seen = Cell::new(0);
    let seq = from_vec(vec![1, 2, 3]).tap(|_| seen.set(seen.get() + 1));

    seq.drain();

    assert_eq!(seen.get(), 3);
}
