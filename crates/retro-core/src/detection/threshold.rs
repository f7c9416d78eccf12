use ndarray::Array2;

use crate::consts::{MAX_PIXEL_VALUE, OTSU_HISTOGRAM_BINS};

use super::config::{DetectorConfig, ThresholdMode, ThresholdSource};

/// Resolve the cutoff for one frame.
pub fn compute_threshold(data: &Array2<u8>, config: &DetectorConfig) -> f64 {
    match config.threshold_source {
        ThresholdSource::Fixed => config.threshold,
        ThresholdSource::Otsu => otsu_threshold(data) as f64,
    }
}

/// Apply a fixed-level threshold to an 8-bit frame.
///
/// The cutoff is floored before comparison, so `200.7` behaves as `200`.
/// Nonzero output pixels are foreground for contour extraction.
pub fn apply_threshold(data: &Array2<u8>, threshold: f64, mode: ThresholdMode) -> Array2<u8> {
    let t = threshold.floor().clamp(0.0, MAX_PIXEL_VALUE as f64) as u8;
    let max = MAX_PIXEL_VALUE;

    data.mapv(|v| {
        let above = v > t;
        match mode {
            ThresholdMode::Binary => {
                if above {
                    max
                } else {
                    0
                }
            }
            ThresholdMode::BinaryInverted => {
                if above {
                    0
                } else {
                    max
                }
            }
            ThresholdMode::Truncate => {
                if above {
                    t
                } else {
                    v
                }
            }
            ThresholdMode::ToZero => {
                if above {
                    v
                } else {
                    0
                }
            }
            ThresholdMode::ToZeroInverted => {
                if above {
                    0
                } else {
                    v
                }
            }
        }
    })
}

/// Otsu's thresholding: find the level that maximizes between-class variance.
///
/// Returns the last background level; pixels strictly above it are foreground.
pub fn otsu_threshold(data: &Array2<u8>) -> u8 {
    let mut histogram = [0u64; OTSU_HISTOGRAM_BINS];
    for &v in data.iter() {
        histogram[v as usize] += 1;
    }

    let total = data.len() as f64;
    let mut sum_all: f64 = 0.0;
    for (i, &count) in histogram.iter().enumerate() {
        sum_all += i as f64 * count as f64;
    }

    let mut weight_bg: f64 = 0.0;
    let mut sum_bg: f64 = 0.0;
    let mut best_variance = 0.0_f64;
    let mut best_bin = 0usize;

    for (i, &count) in histogram.iter().enumerate() {
        weight_bg += count as f64;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += i as f64 * count as f64;
        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (sum_all - sum_bg) / weight_fg;
        let between_variance = weight_bg * weight_fg * (mean_bg - mean_fg).powi(2);

        if between_variance > best_variance {
            best_variance = between_variance;
            best_bin = i;
        }
    }

    best_bin as u8
}
