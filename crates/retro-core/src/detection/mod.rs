pub mod config;
pub mod contours;
pub mod detector;
pub mod moments;
pub mod target;
pub mod threshold;

pub use config::{
    AnnotationPolicy, CentroidRounding, ContourRetrieval, DetectorConfig, FrameGeometry,
    ThresholdMode, ThresholdSource,
};
pub use detector::TargetDetector;
pub use target::{DetectionResult, Target};
