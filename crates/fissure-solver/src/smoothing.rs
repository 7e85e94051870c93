//! Lateral low-pass filter over the ring.
//!
//! Each sweep visits markers in index order and replaces marker `j`'s
//! lateral coordinate with the mean of the five coordinates centered on
//! `j` (wrapping around the ring). The sweep reads and writes a single
//! buffer, so marker `j` already sees the updated values of `j-1` and
//! `j-2`. Every update is a convex combination, so repeated sweeps can
//! only shrink the differences between passes.

use fissure_types::constants::SMOOTHING_WINDOW;

use crate::config::SmoothingConfig;
use crate::marker::Marker;

/// Smooths `values` in place. Entries with `frozen[j] == true` are read
/// but never written. Returns the largest absolute change of any entry.
///
/// `frozen` may be empty (nothing frozen); otherwise it must be as long
/// as `values`.
pub fn smooth_ring(values: &mut [f64], frozen: &[bool], iterations: u32) -> f64 {
    let n = values.len();
    if n == 0 || iterations == 0 {
        return 0.0;
    }
    debug_assert!(frozen.is_empty() || frozen.len() == n);

    let original = values.to_vec();
    let half = SMOOTHING_WINDOW / 2;

    for _ in 0..iterations {
        for j in 0..n {
            if frozen.get(j).copied().unwrap_or(false) {
                continue;
            }
            let mut sum = 0.0;
            for k in 0..SMOOTHING_WINDOW {
                // j - half + k, wrapped
                let idx = (j + n * half + k - half) % n;
                sum += values[idx];
            }
            values[j] = sum / SMOOTHING_WINDOW as f64;
        }
    }

    values
        .iter()
        .zip(&original)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}

/// Applies [`smooth_ring`] to the markers' lateral coordinates.
pub fn smooth_markers(markers: &mut [Marker], config: &SmoothingConfig) -> f64 {
    if config.iterations == 0 || markers.is_empty() {
        return 0.0;
    }

    let mut values: Vec<f64> = markers.iter().map(Marker::lateral_coordinate).collect();
    let frozen: Vec<bool> = if config.freeze_finished {
        markers.iter().map(Marker::is_finished).collect()
    } else {
        Vec::new()
    };

    let shift = smooth_ring(&mut values, &frozen, config.iterations);

    for (marker, &value) in markers.iter_mut().zip(&values) {
        if config.freeze_finished && marker.is_finished() {
            continue;
        }
        marker.set_lateral_coordinate(value);
    }
    shift
}
