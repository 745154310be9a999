//! # Property-Based Tests
//!
//! Invariants of the operator families checked with proptest.

use proptest::collection::vec;
use proptest::prelude::*;
use seqkit::{
    SeqError, StdRandomizer, has_at_least, has_exactly_one, in_batches_of, interlace, max_by,
    min_by, shuffle_with, to_circular, to_stepped, zip2,
};
use std::collections::BTreeMap;

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Concatenating the batches reproduces the input; only the last may be short.
    #[test]
    fn batches_partition_input(values in vec(any::<i32>(), 0..200), size in 1usize..20) {
        let batches: Vec<Vec<i32>> = in_batches_of(values.clone(), size).expect("batches").collect();

        let flattened: Vec<i32> = batches.iter().flatten().copied().collect();
        prop_assert_eq!(&flattened, &values);

        if let Some((last, full)) = batches.split_last() {
            prop_assert!(full.iter().all(|b| b.len() == size));
            prop_assert!(!last.is_empty() && last.len() <= size);
        }
        prop_assert_eq!(batches.len(), values.len().div_ceil(size));
    }

    /// Zip succeeds exactly when the lengths agree.
    #[test]
    fn zip_strictness(a in vec(any::<u8>(), 0..50), b in vec(any::<u8>(), 0..50)) {
        let result: Result<Vec<_>, SeqError> = zip2(a.clone(), b.clone()).collect();
        if a.len() == b.len() {
            let pairs = result.expect("equal lengths");
            prop_assert_eq!(pairs.len(), a.len());
        } else {
            let is_length_mismatch = matches!(result, Err(SeqError::LengthMismatch { .. }));
            prop_assert!(is_length_mismatch);
        }
    }

    /// Interlace never fails and yields twice the shorter length.
    #[test]
    fn interlace_length(a in vec(any::<u8>(), 0..50), b in vec(any::<u8>(), 0..50)) {
        let result: Vec<u8> = interlace(a.clone(), b.clone()).collect();
        prop_assert_eq!(result.len(), 2 * a.len().min(b.len()));
    }

    /// Sampling yields a sub-multiset of the input of the requested size.
    #[test]
    fn shuffle_is_sub_multiset(
        values in vec(0u8..10, 0..60),
        count in proptest::option::of(0usize..80),
        seed in any::<u64>()
    ) {
        let sample: Vec<u8> =
            shuffle_with(values.clone(), StdRandomizer::seeded(seed), count).collect();
        let expected_len = count.unwrap_or(values.len()).min(values.len());
        prop_assert_eq!(sample.len(), expected_len);

        let mut available: BTreeMap<u8, usize> = BTreeMap::new();
        for v in &values {
            *available.entry(*v).or_default() += 1;
        }
        for v in &sample {
            let slot = available.get_mut(v).expect("sampled value exists in input");
            prop_assert!(*slot > 0);
            *slot -= 1;
        }
    }

    /// Min/max agree with a first-wins linear scan.
    #[test]
    fn extremum_first_wins(values in vec(0i32..5, 1..40)) {
        let min_index = min_by(0..values.len(), |&i| values[i]).expect("non-empty");
        let max_index = max_by(0..values.len(), |&i| values[i]).expect("non-empty");

        let min_value = values.iter().min().copied().expect("non-empty");
        let max_value = values.iter().max().copied().expect("non-empty");

        prop_assert_eq!(Some(min_index), values.iter().position(|&v| v == min_value));
        prop_assert_eq!(Some(max_index), values.iter().position(|&v| v == max_value));
    }

    /// A circular prefix repeats the input period.
    #[test]
    fn circular_prefix(values in vec(any::<i16>(), 1..20), take in 0usize..100) {
        let prefix: Vec<i16> = to_circular(values.clone()).take(take).collect();
        prop_assert_eq!(prefix.len(), take);
        for (i, v) in prefix.iter().enumerate() {
            prop_assert_eq!(*v, values[i % values.len()]);
        }
    }

    /// Stepped output matches std step_by.
    #[test]
    fn stepped_matches_step_by(values in vec(any::<u8>(), 0..100), step in 1usize..10) {
        let ours: Vec<u8> = to_stepped(values.clone(), step).expect("step").collect();
        let std_version: Vec<u8> = values.into_iter().step_by(step).collect();
        prop_assert_eq!(ours, std_version);
    }

    /// Cardinality predicates agree with the element count.
    #[test]
    fn cardinality_matches_len(values in vec(any::<u8>(), 0..10), n in 0usize..12) {
        prop_assert_eq!(has_at_least(values.clone(), n), values.len() >= n);
        prop_assert_eq!(has_exactly_one(values.clone()), values.len() == 1);
    }
}
