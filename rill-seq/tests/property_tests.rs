// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Algebraic properties of the combinators over arbitrary finite inputs.

use proptest::collection::vec as arb_vec;
use proptest::prelude::*;
use rill_seq::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: filtering matches the native iterator filter, order included.
    #[test]
    fn prop_filter_matches_native_filter(values in arb_vec(-1000i64..1000, 0..100)) {
        let expected: Vec<i64> = values.iter().copied().filter(|n| n % 3 == 0).collect();

        let actual = from_vec(values).filter(|n| n % 3 == 0).collect_vec(16);

        prop_assert_eq!(actual, expected);
    }

    /// Property: map preserves length; it never changes cardinality.
    #[test]
    fn prop_map_preserves_len(values in arb_vec(any::<i32>(), 0..100)) {
        let seq = from_vec(values);

        prop_assert_eq!(seq.clone().map(|n| i64::from(n) * 2).len(), seq.len());
    }

    /// Property: limit yields min(n, len) and skip yields len - min(n, len).
    #[test]
    fn prop_limit_and_skip_cardinality(
        values in arb_vec(any::<u8>(), 0..100),
        n in 0usize..150,
    ) {
        let len = values.len();
        let seq = from_vec(values);

        prop_assert_eq!(seq.clone().limit(n).len(), n.min(len));
        prop_assert_eq!(seq.skip(n).len(), len - n.min(len));
    }

    /// Property: deduplicating a self-concatenation equals deduplicating
    /// the sequence itself.
    #[test]
    fn prop_dedup_absorbs_self_concat(values in arb_vec(0u8..16, 0..60)) {
        let base = from_vec(values);

        let doubled = concat(vec![base.clone(), base.clone()]).dedup();

        prop_assert!(doubled.equal(&base.dedup()));
    }

    /// Property: every sequence equals itself.
    #[test]
    fn prop_equal_is_reflexive(values in arb_vec(any::<i64>(), 0..100)) {
        let seq = from_vec(values);

        prop_assert!(seq.equal(&seq.clone()));
    }

    /// Property: sum over integers agrees with the native iterator sum.
    #[test]
    fn prop_sum_matches_native_sum(values in arb_vec(-10_000i64..10_000, 0..100)) {
        let expected: i64 = values.iter().sum();

        prop_assert_eq!(from_vec(values).sum(), expected);
    }

    /// Property: sorting yields the same multiset in nondecreasing order.
    #[test]
    fn prop_sorted_matches_native_sort(values in arb_vec(any::<i32>(), 0..100)) {
        let mut expected = values.clone();
        expected.sort_unstable();

        prop_assert_eq!(from_vec(values).sorted().collect_vec(16), expected);
    }

    /// Property: enumerate indices are exactly 0..len.
    #[test]
    fn prop_enumerate_indices_are_dense(values in arb_vec(any::<u16>(), 0..100)) {
        let len = values.len();
        let indices = from_vec(values).enumerate().keys().collect_vec(len);

        prop_assert_eq!(indices, (0..len).collect::<Vec<_>>());
    }
}
