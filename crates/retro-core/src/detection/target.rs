use serde::{Deserialize, Serialize};

/// A detected blob, positioned relative to the frame's optical center.
///
/// Positive `x` is right of center, positive `y` is below center.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// `[x, y]` in pixels.
    pub centroid: [f64; 2],
}

impl Target {
    pub fn new(x: f64, y: f64) -> Self {
        Self { centroid: [x, y] }
    }

    pub fn x(&self) -> f64 {
        self.centroid[0]
    }

    pub fn y(&self) -> f64 {
        self.centroid[1]
    }
}

/// Targets found in one frame, in contour discovery order.
///
/// The order is not a ranking: it is not sorted by size, position or
/// confidence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub targets: Vec<Target>,
}

impl DetectionResult {
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
