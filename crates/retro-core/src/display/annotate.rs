//! Debug rendering of detections onto a color copy of the input frame.

use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use imageproc::point::Point;

use crate::consts::{
    CENTROID_LABEL, CENTROID_MARKER_RADIUS, CONTOUR_COLOR, CONTOUR_THICKNESS, LABEL_OFFSET,
    MARKER_COLOR,
};
use crate::frame::Frame;

/// One detection to draw: its outline and its centroid in frame pixels.
#[derive(Clone, Copy, Debug)]
pub struct Marker<'a> {
    pub outline: &'a [Point<i32>],
    pub center: (i32, i32),
}

/// Text placed next to a marker.
///
/// Glyph rendering needs a font the core does not ship, so labels travel
/// alongside the image and sinks that own a font draw them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    /// Top-left anchor in frame pixels. May lie outside the image.
    pub position: (i32, i32),
}

/// An annotated copy of one frame, ready for display.
#[derive(Clone, Debug)]
pub struct AnnotatedFrame {
    pub frame_index: usize,
    pub timestamp_us: Option<u64>,
    pub image: RgbImage,
    pub labels: Vec<Label>,
}

/// Render `markers` onto an RGB copy of `frame`. The frame itself is untouched.
pub fn annotate_frame(frame: &Frame, markers: &[Marker<'_>]) -> AnnotatedFrame {
    let mut image = DynamicImage::ImageLuma8(frame.to_gray_image()).to_rgb8();
    let mut labels = Vec::with_capacity(markers.len());

    for marker in markers {
        draw_outline(&mut image, marker.outline);
        draw_filled_circle_mut(
            &mut image,
            marker.center,
            CENTROID_MARKER_RADIUS,
            Rgb(MARKER_COLOR),
        );
        labels.push(Label {
            text: CENTROID_LABEL.to_string(),
            position: (marker.center.0 - LABEL_OFFSET, marker.center.1 - LABEL_OFFSET),
        });
    }

    AnnotatedFrame {
        frame_index: frame.metadata.frame_index,
        timestamp_us: frame.metadata.timestamp_us,
        image,
        labels,
    }
}

/// Stroke a closed polyline `CONTOUR_THICKNESS` pixels wide.
fn draw_outline(image: &mut RgbImage, outline: &[Point<i32>]) {
    let n = outline.len();
    if n == 0 {
        return;
    }

    for dy in 0..CONTOUR_THICKNESS {
        for dx in 0..CONTOUR_THICKNESS {
            for i in 0..n {
                let a = outline[i];
                let b = outline[(i + 1) % n];
                draw_line_segment_mut(
                    image,
                    ((a.x + dx) as f32, (a.y + dy) as f32),
                    ((b.x + dx) as f32, (b.y + dy) as f32),
                    Rgb(CONTOUR_COLOR),
                );
            }
        }
    }
}
