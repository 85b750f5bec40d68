//! Fixed-size chunk sums over an ordered sequence of split durations.
//!
//! Unlike [`super::window`], membership here is by index, not by time: chunk
//! `k` is elements `k*size .. (k+1)*size`. Inputs that do not divide evenly are
//! rejected whole.

use crate::error::MalformedInputError;

/// Number of 100 m splits in a 3 km run.
pub const RUNNING_SPLIT_COUNT: usize = 30;

/// 100 m splits per kilometer.
pub const SPLITS_PER_KILOMETER: usize = 10;

/// Sum `durations` in contiguous groups of `chunk_size`.
pub fn sum_chunks(durations: &[f64], chunk_size: usize) -> Result<Vec<f64>, MalformedInputError> {
    if chunk_size == 0 {
        return Err(MalformedInputError::ZeroChunkSize);
    }
    if durations.is_empty() {
        return Err(MalformedInputError::Empty);
    }
    if durations.len() % chunk_size != 0 {
        return Err(MalformedInputError::LengthMismatch {
            expected: format!("a multiple of {chunk_size}"),
            actual: durations.len(),
        });
    }

    Ok(durations
        .chunks_exact(chunk_size)
        .map(|chunk| chunk.iter().sum())
        .collect())
}

/// Per-kilometer totals from exactly 30 100 m splits.
pub fn per_kilometer_splits(splits: &[f64]) -> Result<[f64; 3], MalformedInputError> {
    if splits.len() != RUNNING_SPLIT_COUNT {
        return Err(MalformedInputError::LengthMismatch {
            expected: format!("exactly {RUNNING_SPLIT_COUNT}"),
            actual: splits.len(),
        });
    }
    let sums = sum_chunks(splits, SPLITS_PER_KILOMETER)?;
    Ok([sums[0], sums[1], sums[2]])
}

/// Mean of the per-kilometer totals, in seconds.
pub fn average_pace(per_km: &[f64]) -> Option<f64> {
    if per_km.is_empty() {
        return None;
    }
    Some(per_km.iter().sum::<f64>() / per_km.len() as f64)
}

/// Round to tenths of a second, clamping negatives and NaN to zero.
fn tenths(seconds: f64) -> u64 {
    (seconds.max(0.0) * 10.0).round() as u64
}

/// Format seconds as a pace string: `M'SS''`.
///
/// Seconds below 10 are zero-padded. One decimal is kept only when it is not
/// zero, so `65.5` is `1'05.5''` and `60.0` is `1'00''`.
pub fn format_pace(seconds: f64) -> String {
    let total = tenths(seconds);
    let minutes = total / 600;
    let rem = total % 600;
    let (whole, frac) = (rem / 10, rem % 10);
    if frac == 0 {
        format!("{minutes}'{whole:02}''")
    } else {
        format!("{minutes}'{whole:02}.{frac}''")
    }
}

/// Format seconds as a clock: `MM:SS`, e.g. `02:00` for a two-minute set.
pub fn format_clock(seconds: f64) -> String {
    let total = (seconds.max(0.0)).round() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
