#![allow(dead_code)]

use ndarray::Array2;
use retro_core::Frame;

/// Pixel value used for synthetic tape blobs.
pub const TAPE: u8 = 230;

/// Pixel value used for the dark background.
pub const BACKGROUND: u8 = 15;

/// Build a dark frame of the given size.
pub fn blank_frame(width: usize, height: usize) -> Frame {
    Frame::new(Array2::from_elem((height, width), BACKGROUND))
}

/// Fill the square of side `2 * half + 1` centered on `(cx, cy)` with `value`.
pub fn fill_square(frame: &mut Frame, cx: usize, cy: usize, half: usize, value: u8) {
    fill_rect(frame, cx - half, cy - half, cx + half, cy + half, value);
}

/// Fill the inclusive pixel rectangle `[x0, x1] x [y0, y1]` with `value`.
pub fn fill_rect(frame: &mut Frame, x0: usize, y0: usize, x1: usize, y1: usize, value: u8) {
    for row in y0..=y1 {
        for col in x0..=x1 {
            frame.data[[row, col]] = value;
        }
    }
}

/// A dark frame with one bright square per center.
pub fn frame_with_squares(
    width: usize,
    height: usize,
    centers: &[(usize, usize)],
    half: usize,
) -> Frame {
    let mut frame = blank_frame(width, height);
    for &(cx, cy) in centers {
        fill_square(&mut frame, cx, cy, half, TAPE);
    }
    frame
}
