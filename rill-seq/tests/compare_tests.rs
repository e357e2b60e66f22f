// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rill_seq::prelude::*;

#[test]
fn test_equal_is_reflexive() {
    let seq = from_vec(vec![1, 2, 42, 99]);

    assert!(seq.equal(&seq.clone()));
}

#[test]
fn test_equal_of_empty_sequences() {
    let a = from_vec(Vec::<i32>::new());
    let b = from_vec(Vec::<i32>::new());

    assert!(a.equal(&b));
}

#[test]
fn test_compare_counts_matching_pairs() {
    let a = from_vec(vec![1, 2, 3, 4]);
    let b = from_vec(vec![1, 9, 3, 9]);

    let report = a.compare(&b);

    assert_eq!(report.matched, 2);
    assert_eq!(report.compared, 4);
    assert!(!report.truncated);
    assert!(!report.is_equal());
}

#[test]
fn test_compare_truncated_when_pulled_side_is_shorter() {
    let a = from_vec(vec![1, 2, 42, 99]);
    let b = from_vec(vec![1, 2, 42]);

    let report = a.compare(&b);

    // Partial counts survive; the mismatch is flagged, not zeroed out.
    assert_eq!(report.matched, 3);
    assert_eq!(report.compared, 3);
    assert!(report.truncated);
    assert!(!report.is_equal());
    assert!(!a.equal(&b));
}

#[test]
fn test_compare_truncated_when_pushed_side_is_shorter() {
    let a = from_vec(vec![1, 2, 42]);
    let b = from_vec(vec![1, 2, 42, 99]);

    let report = a.compare(&b);

    assert_eq!(report.matched, 3);
    assert_eq!(report.compared, 3);
    assert!(report.truncated);
    assert!(!a.equal(&b));
}

#[test]
fn test_compare_by_custom_comparator() {
    let a = from_vec(vec![1, 2, 3]);
    let b = from_vec(vec![10, 20, 44]);

    let report = a.compare_by(&b, |x, y| y / 10 == *x);

    assert_eq!(report.matched, 2);
    assert_eq!(report.compared, 3);
}

#[test]
fn test_compare_percent() {
    let a = from_vec(vec![1, 2, 3, 4]);
    let b = from_vec(vec![1, 2, 9, 9]);

    let percent = a.compare_percent(&b);

    assert!((percent - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_compare_percent_of_empty_sequences_is_full_match() {
    let a = from_vec(Vec::<i32>::new());

    assert!((a.compare_percent(&a.clone()) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_compare_percent_zero_when_truncated_with_no_pairs() {
    let a = from_vec(Vec::<i32>::new());
    let b = from_vec(vec![1]);

    assert!(a.compare_percent(&b).abs() < f64::EPSILON);
}

#[test]
fn test_equal_with_same_elements_in_different_order_is_false() {
    let a = from_vec(vec![1, 2, 3]);
    let b = from_vec(vec![3, 2, 1]);

    assert!(!a.equal(&b));
}
