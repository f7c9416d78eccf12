use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH, DEFAULT_THRESHOLD};
use crate::error::{Result, RetroError};

/// How a pixel is mapped once compared against the threshold.
///
/// Semantics match the classic 8-bit fixed-level family with a maximum
/// value of 255. A pixel is foreground when the thresholded value is nonzero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdMode {
    /// `src > t ? 255 : 0`
    #[default]
    Binary,
    /// `src > t ? 0 : 255`
    BinaryInverted,
    /// `src > t ? t : src`
    Truncate,
    /// `src > t ? src : 0`
    ToZero,
    /// `src > t ? 0 : src`
    ToZeroInverted,
}

impl fmt::Display for ThresholdMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => write!(f, "Binary"),
            Self::BinaryInverted => write!(f, "Binary Inverted"),
            Self::Truncate => write!(f, "Truncate"),
            Self::ToZero => write!(f, "To Zero"),
            Self::ToZeroInverted => write!(f, "To Zero Inverted"),
        }
    }
}

/// Where the cutoff comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdSource {
    /// Use [`DetectorConfig::threshold`].
    #[default]
    Fixed,
    /// Compute the cutoff per frame with Otsu's method.
    Otsu,
}

impl fmt::Display for ThresholdSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "Fixed"),
            Self::Otsu => write!(f, "Otsu"),
        }
    }
}

/// Which borders become targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContourRetrieval {
    /// Every border, including holes and islands inside holes.
    #[default]
    Tree,
    /// Only outermost borders.
    External,
}

impl fmt::Display for ContourRetrieval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tree => write!(f, "Tree"),
            Self::External => write!(f, "External"),
        }
    }
}

/// How sub-pixel centroids become integer pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CentroidRounding {
    /// Drop the fractional part. Biases centroids toward the image origin.
    #[default]
    Truncate,
    /// Round half away from zero.
    Nearest,
}

impl CentroidRounding {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Truncate => value.trunc(),
            Self::Nearest => value.round(),
        }
    }
}

impl fmt::Display for CentroidRounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncate => write!(f, "Truncate"),
            Self::Nearest => write!(f, "Nearest"),
        }
    }
}

/// Which detections are drawn on the debug frame handed to the sink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotationPolicy {
    /// Outline and mark every detected target.
    #[default]
    AllTargets,
    /// Only the last target in discovery order (legacy tooling parity).
    LastOnly,
    /// Never render or present a debug frame.
    Disabled,
}

impl fmt::Display for AnnotationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllTargets => write!(f, "All Targets"),
            Self::LastOnly => write!(f, "Last Only"),
            Self::Disabled => write!(f, "Disabled"),
        }
    }
}

/// Configuration for target detection. Fixed for the lifetime of a detector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Expected frame width in pixels.
    #[serde(default = "default_frame_width")]
    pub frame_width: i32,
    /// Expected frame height in pixels.
    #[serde(default = "default_frame_height")]
    pub frame_height: i32,
    /// Binarization cutoff in [0, 255].
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub threshold_mode: ThresholdMode,
    #[serde(default)]
    pub threshold_source: ThresholdSource,
    #[serde(default)]
    pub retrieval: ContourRetrieval,
    #[serde(default)]
    pub rounding: CentroidRounding,
    #[serde(default)]
    pub annotation: AnnotationPolicy,
}

fn default_frame_width() -> i32 {
    DEFAULT_FRAME_WIDTH
}
fn default_frame_height() -> i32 {
    DEFAULT_FRAME_HEIGHT
}
fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
            threshold: DEFAULT_THRESHOLD,
            threshold_mode: ThresholdMode::default(),
            threshold_source: ThresholdSource::default(),
            retrieval: ContourRetrieval::default(),
            rounding: CentroidRounding::default(),
            annotation: AnnotationPolicy::default(),
        }
    }
}

impl DetectorConfig {
    pub fn new(frame_width: i32, frame_height: i32, threshold: f64, mode: ThresholdMode) -> Self {
        Self {
            frame_width,
            frame_height,
            threshold,
            threshold_mode: mode,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        FrameGeometry::new(self.frame_width, self.frame_height)?;
        if !self.threshold.is_finite() || !(0.0..=255.0).contains(&self.threshold) {
            return Err(RetroError::InvalidConfiguration(format!(
                "threshold {} is outside [0, 255]",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Validated frame size with the cached optical-center offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameGeometry {
    pub width: u32,
    pub height: u32,
    pub horizontal_offset: f64,
    pub vertical_offset: f64,
}

impl FrameGeometry {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(RetroError::InvalidConfiguration(format!(
                "frame dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
            horizontal_offset: width as f64 / 2.0,
            vertical_offset: height as f64 / 2.0,
        })
    }
}
