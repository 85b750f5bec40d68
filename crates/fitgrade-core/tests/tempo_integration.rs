//! Integration tests for tempo aggregation.
//!
//! This test file verifies:
//! - Window counts partition every in-domain offset exactly once
//! - Chunk sums preserve the total and reject uneven input
//! - Pace and clock formatting

use fitgrade_core::stats::{
    average_pace, format_clock, format_pace, per_kilometer_splits, pushup_tempo,
};
use fitgrade_core::{count_by_window, sum_chunks, BucketMetric, MalformedInputError};
use proptest::prelude::*;

fn counts(offsets: &[f64], boundaries: &[f64]) -> Vec<u32> {
    count_by_window(offsets, boundaries)
        .unwrap()
        .iter()
        .filter_map(|b| b.count())
        .collect()
}

#[test]
fn test_pushup_tempo_windows() {
    let buckets = pushup_tempo(&[5.0, 32.0, 65.0, 95.0, 118.0]).unwrap();
    assert_eq!(buckets.len(), 4);
    assert_eq!(buckets[0].label(), "0-30s");
    assert_eq!(buckets[3].label(), "90-120s");
    assert_eq!(buckets[3].metric, BucketMetric::Count(2));
}

#[test]
fn test_end_of_domain_counts_in_last_window() {
    assert_eq!(counts(&[120.0], &[0.0, 30.0, 60.0, 90.0, 120.0]), vec![0, 0, 0, 1]);
    assert_eq!(counts(&[120.5, -1.0], &[0.0, 30.0, 60.0, 90.0, 120.0]), vec![0, 0, 0, 0]);
}

#[test]
fn test_bad_boundaries_rejected() {
    assert!(matches!(
        count_by_window(&[1.0], &[0.0]),
        Err(MalformedInputError::InvalidBoundaries(_))
    ));
    assert!(matches!(
        count_by_window(&[1.0], &[0.0, 30.0, 30.0]),
        Err(MalformedInputError::InvalidBoundaries(_))
    ));
}

#[test]
fn test_sum_chunks_three_kilometers() {
    let mut durations = vec![5.0; 10];
    durations.extend(vec![6.0; 10]);
    durations.extend(vec![4.0; 10]);
    assert_eq!(sum_chunks(&durations, 10).unwrap(), vec![50.0, 60.0, 40.0]);
}

#[test]
fn test_uneven_splits_rejected() {
    let err = sum_chunks(&[1.0; 29], 10).unwrap_err();
    assert_eq!(
        err,
        MalformedInputError::LengthMismatch {
            expected: "a multiple of 10".to_string(),
            actual: 29
        }
    );
    assert!(per_kilometer_splits(&[1.0; 40]).is_err());
    assert_eq!(sum_chunks(&[1.0; 3], 0), Err(MalformedInputError::ZeroChunkSize));
}

#[test]
fn test_pace_formatting() {
    assert_eq!(format_pace(250.0), "4'10''");
    assert_eq!(format_pace(245.4), "4'05.4''");
    assert_eq!(format_pace(59.96), "1'00''");
    assert_eq!(format_pace(0.0), "0'00''");
    assert_eq!(format_clock(780.0), "13:00");
    assert_eq!(average_pace(&[250.0, 260.0, 270.0]), Some(260.0));
    assert_eq!(average_pace(&[]), None);
}

proptest! {
    #[test]
    fn prop_window_counts_sum_to_in_domain_offsets(
        offsets in prop::collection::vec(-30.0f64..150.0, 0..100)
    ) {
        let bounds = [0.0, 30.0, 60.0, 90.0, 120.0];
        let total: u32 = counts(&offsets, &bounds).iter().sum();
        let in_domain = offsets.iter().filter(|&&o| (0.0..=120.0).contains(&o)).count();
        prop_assert_eq!(total as usize, in_domain);
    }

    #[test]
    fn prop_chunk_sums_preserve_total(
        size in 1usize..12,
        chunks in 1usize..8,
        seed in prop::collection::vec(0u16..600, 96)
    ) {
        let durations: Vec<f64> = seed.iter().take(size * chunks).map(|&s| f64::from(s) / 10.0).collect();
        prop_assume!(durations.len() == size * chunks);
        let sums = sum_chunks(&durations, size).unwrap();
        prop_assert_eq!(sums.len(), chunks);
        let total: f64 = durations.iter().sum();
        let summed: f64 = sums.iter().sum();
        prop_assert!((total - summed).abs() < 1e-6);
    }

    #[test]
    fn prop_uneven_length_always_fails(size in 2usize..12, extra in 1usize..11) {
        prop_assume!(extra % size != 0);
        let durations = vec![1.0; size * 3 + extra];
        let is_length_mismatch = matches!(
            sum_chunks(&durations, size),
            Err(MalformedInputError::LengthMismatch { .. })
        );
        prop_assert!(is_length_mismatch);
    }
}
