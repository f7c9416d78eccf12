pub mod consts;
pub mod detection;
pub mod display;
pub mod error;
pub mod frame;
pub mod io;

pub use detection::{DetectionResult, DetectorConfig, Target, TargetDetector, ThresholdMode};
pub use error::{Result, RetroError};
pub use frame::Frame;
