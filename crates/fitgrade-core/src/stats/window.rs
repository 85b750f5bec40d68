//! Event-density buckets over a bounded session timeline.
//!
//! `n` boundaries define `n - 1` windows `[b[i], b[i+1])`. The last window is
//! closed on its right edge so an event exactly at the end of the domain is
//! still counted.

use crate::error::MalformedInputError;
use crate::records::{BucketMetric, IntervalBucket};

/// Push-up tempo timeline: two minutes in four 30-second windows.
pub const PUSHUP_TEMPO_BOUNDARIES: [f64; 5] = [0.0, 30.0, 60.0, 90.0, 120.0];

/// Count `offsets` into the windows described by `boundaries`.
///
/// Offsets outside `[b[0], b[last]]` are not counted.
pub fn count_by_window(
    offsets: &[f64],
    boundaries: &[f64],
) -> Result<Vec<IntervalBucket>, MalformedInputError> {
    validate_boundaries(boundaries)?;

    let last = boundaries.len() - 2;
    let mut counts = vec![0u32; boundaries.len() - 1];

    for &offset in offsets {
        // partition_point gives the number of boundaries <= offset.
        let upper = boundaries.partition_point(|&b| b <= offset);
        let index = match upper {
            0 => continue,
            i if i < boundaries.len() => i - 1,
            // offset >= last boundary: only the exact end is inside the closed window
            _ if offset == boundaries[boundaries.len() - 1] => last,
            _ => continue,
        };
        counts[index] += 1;
    }

    Ok(boundaries
        .windows(2)
        .zip(counts)
        .map(|(edge, count)| IntervalBucket {
            start_offset_seconds: edge[0],
            end_offset_seconds: edge[1],
            metric: BucketMetric::Count(count),
        })
        .collect())
}

/// Rep counts per 30-second window of a two-minute push-up session.
pub fn pushup_tempo(offsets: &[f64]) -> Result<Vec<IntervalBucket>, MalformedInputError> {
    count_by_window(offsets, &PUSHUP_TEMPO_BOUNDARIES)
}

fn validate_boundaries(boundaries: &[f64]) -> Result<(), MalformedInputError> {
    if boundaries.len() < 2 {
        return Err(MalformedInputError::InvalidBoundaries(format!(
            "need at least 2 boundaries, got {}",
            boundaries.len()
        )));
    }
    if boundaries.iter().any(|b| !b.is_finite()) {
        return Err(MalformedInputError::InvalidBoundaries(
            "boundaries must be finite".to_string(),
        ));
    }
    if boundaries.windows(2).any(|w| w[0] >= w[1]) {
        return Err(MalformedInputError::InvalidBoundaries(
            "boundaries must be strictly ascending".to_string(),
        ));
    }
    Ok(())
}
