//! Border extraction on a thresholded frame.
//!
//! Borders are traced with Suzuki-Abe border following (via `imageproc`),
//! which reports them in raster order of their starting pixel: top to bottom,
//! left to right, with an outer border always preceding the holes it encloses.
//! Each border is then reduced to its corner points.
//!
//! The mask is traced inside a one-pixel zero border so regions touching the
//! frame edge are found like interior ones.

use image::{GrayImage, Luma};
use imageproc::contours::{find_contours, BorderType};
use imageproc::point::Point;
use ndarray::Array2;

use super::config::ContourRetrieval;

/// A simplified boundary polyline of one foreground region or hole.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    /// Corner points in tracing order. The polygon is implicitly closed.
    pub points: Vec<Point<i32>>,
    pub kind: BorderKind,
    /// Index of the enclosing contour in the full traced list, if any.
    pub parent: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderKind {
    Outer,
    Hole,
}

/// Extract borders of every nonzero region in `mask`.
pub fn extract_contours(mask: &Array2<u8>, retrieval: ContourRetrieval) -> Vec<Contour> {
    let (h, w) = mask.dim();
    if h == 0 || w == 0 {
        return Vec::new();
    }

    let padded = pad_mask(mask);
    find_contours::<i32>(&padded)
        .into_iter()
        .filter(|c| match retrieval {
            ContourRetrieval::Tree => true,
            ContourRetrieval::External => c.parent.is_none(),
        })
        .map(|c| {
            let points: Vec<Point<i32>> = c
                .points
                .iter()
                .map(|p| Point::new(p.x - 1, p.y - 1))
                .collect();
            Contour {
                points: simplify_chain(&points),
                kind: match c.border_type {
                    BorderType::Outer => BorderKind::Outer,
                    BorderType::Hole => BorderKind::Hole,
                },
                parent: c.parent,
            }
        })
        .collect()
}

/// Copy `mask` into an image one pixel larger on every side, zero-filled.
fn pad_mask(mask: &Array2<u8>) -> GrayImage {
    let (h, w) = mask.dim();
    GrayImage::from_fn(w as u32 + 2, h as u32 + 2, |x, y| {
        let (row, col) = (y as usize, x as usize);
        if row == 0 || col == 0 || row > h || col > w {
            Luma([0])
        } else {
            Luma([mask[[row - 1, col - 1]]])
        }
    })
}

/// Collapse runs of collinear, same-direction points on a closed polyline,
/// keeping only the end points of each straight run.
///
/// Reversals (a one-pixel-wide spur traced out and back) are kept.
pub fn simplify_chain(points: &[Point<i32>]) -> Vec<Point<i32>> {
    // Drop repeated points first; they carry no direction.
    let mut deduped: Vec<Point<i32>> = Vec::with_capacity(points.len());
    for &p in points {
        if deduped.last() != Some(&p) {
            deduped.push(p);
        }
    }
    while deduped.len() > 1 && deduped.first() == deduped.last() {
        deduped.pop();
    }

    let n = deduped.len();
    if n < 3 {
        return deduped;
    }

    let simplified: Vec<Point<i32>> = (0..n)
        .filter(|&i| {
            let prev = deduped[(i + n - 1) % n];
            let cur = deduped[i];
            let next = deduped[(i + 1) % n];
            !continues_straight(prev, cur, next)
        })
        .map(|i| deduped[i])
        .collect();

    if simplified.is_empty() {
        // A closed trace always turns somewhere.
        deduped.truncate(1);
        return deduped;
    }
    simplified
}

fn continues_straight(prev: Point<i32>, cur: Point<i32>, next: Point<i32>) -> bool {
    let (ax, ay) = (cur.x - prev.x, cur.y - prev.y);
    let (bx, by) = (next.x - cur.x, next.y - cur.y);
    let cross = ax as i64 * by as i64 - ay as i64 * bx as i64;
    let dot = ax as i64 * bx as i64 + ay as i64 * by as i64;
    cross == 0 && dot > 0
}
