//! Single-frame retroreflective target detection.
//!
//! Pipeline: threshold -> border following -> chain simplification ->
//! polygon moments -> center-relative centroids -> optional annotation.

use std::fmt;
use std::sync::Arc;

use imageproc::point::Point;
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::consts::PARALLEL_FRAME_THRESHOLD;
use crate::display::{annotate_frame, FrameSink, Marker};
use crate::error::{Result, RetroError};
use crate::frame::Frame;

use super::config::{AnnotationPolicy, DetectorConfig, FrameGeometry, ThresholdMode};
use super::contours::extract_contours;
use super::moments::Moments;
use super::target::{DetectionResult, Target};
use super::threshold::{apply_threshold, compute_threshold};

/// Finds bright blobs in frames of a fixed size.
///
/// Holds only immutable configuration, so one detector can serve `find`
/// calls from many threads at once.
#[derive(Clone)]
pub struct TargetDetector {
    config: DetectorConfig,
    geometry: FrameGeometry,
    sink: Option<Arc<dyn FrameSink>>,
}

/// A surviving contour together with its absolute pixel centroid.
struct Detection {
    outline: Vec<Point<i32>>,
    pixel: (i32, i32),
}

impl TargetDetector {
    pub fn new(width: i32, height: i32, threshold: f64, mode: ThresholdMode) -> Result<Self> {
        Self::from_config(DetectorConfig::new(width, height, threshold, mode))
    }

    pub fn from_config(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        let geometry = FrameGeometry::new(config.frame_width, config.frame_height)?;
        Ok(Self {
            config,
            geometry,
            sink: None,
        })
    }

    /// Attach a sink that receives an annotated copy of every processed frame.
    pub fn with_sink(mut self, sink: Arc<dyn FrameSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn geometry(&self) -> FrameGeometry {
        self.geometry
    }

    /// Change the expected frame size and recompute the center offsets.
    ///
    /// On error the previous geometry stays in effect.
    pub fn reconfigure(&mut self, width: i32, height: i32) -> Result<()> {
        let geometry = FrameGeometry::new(width, height)?;
        self.config.frame_width = width;
        self.config.frame_height = height;
        self.geometry = geometry;
        debug!(width, height, "Detector geometry reconfigured");
        Ok(())
    }

    /// Detect targets in one frame.
    ///
    /// Contours that enclose no area (isolated pixels, one-pixel-wide lines)
    /// are skipped rather than reported.
    pub fn find(&self, frame: &Frame) -> Result<DetectionResult> {
        self.check_frame(frame)?;

        let cutoff = compute_threshold(&frame.data, &self.config);
        let mask = apply_threshold(&frame.data, cutoff, self.config.threshold_mode);
        let contours = extract_contours(&mask, self.config.retrieval);

        let mut detections = Vec::with_capacity(contours.len());
        let mut targets = Vec::with_capacity(contours.len());
        let mut skipped = 0usize;

        for contour in contours {
            let Some((cx, cy)) = Moments::of_polygon(&contour.points).centroid() else {
                trace!(
                    points = contour.points.len(),
                    "Skipping contour with zero area"
                );
                skipped += 1;
                continue;
            };

            let px = self.config.rounding.apply(cx);
            let py = self.config.rounding.apply(cy);
            targets.push(Target::new(
                px - self.geometry.horizontal_offset,
                py - self.geometry.vertical_offset,
            ));
            detections.push(Detection {
                outline: contour.points,
                pixel: (px as i32, py as i32),
            });
        }

        debug!(
            frame = frame.metadata.frame_index,
            cutoff,
            targets = targets.len(),
            skipped,
            "Frame processed"
        );

        self.present(frame, &detections);

        Ok(DetectionResult { targets })
    }

    /// Run [`find`](Self::find) over independent frames, in parallel when
    /// there are enough of them. Results keep the input order.
    pub fn find_batch(&self, frames: &[Frame]) -> Vec<Result<DetectionResult>> {
        if frames.len() >= PARALLEL_FRAME_THRESHOLD {
            frames.par_iter().map(|f| self.find(f)).collect()
        } else {
            frames.iter().map(|f| self.find(f)).collect()
        }
    }

    fn check_frame(&self, frame: &Frame) -> Result<()> {
        if frame.is_empty() {
            return Err(RetroError::DetectionFailure("empty frame".into()));
        }
        let (w, h) = (frame.width(), frame.height());
        if w != self.geometry.width as usize || h != self.geometry.height as usize {
            return Err(RetroError::DetectionFailure(format!(
                "frame is {w}x{h}, detector expects {}x{}",
                self.geometry.width, self.geometry.height
            )));
        }
        Ok(())
    }

    fn present(&self, frame: &Frame, detections: &[Detection]) {
        let Some(sink) = &self.sink else {
            return;
        };

        let selected: &[Detection] = match self.config.annotation {
            AnnotationPolicy::Disabled => return,
            AnnotationPolicy::AllTargets => detections,
            AnnotationPolicy::LastOnly => match detections.split_last() {
                Some((last, _)) => std::slice::from_ref(last),
                None => &[],
            },
        };

        let markers: Vec<Marker<'_>> = selected
            .iter()
            .map(|d| Marker {
                outline: &d.outline,
                center: d.pixel,
            })
            .collect();

        let annotated = annotate_frame(frame, &markers);
        if let Err(e) = sink.present(&annotated) {
            warn!(frame = frame.metadata.frame_index, error = %e, "Frame sink failed");
        }
    }
}

impl fmt::Debug for TargetDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetDetector")
            .field("config", &self.config)
            .field("geometry", &self.geometry)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}
