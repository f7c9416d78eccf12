use std::path::Path;

use image::ImageFormat;

use crate::display::AnnotatedFrame;
use crate::error::Result;
use crate::frame::Frame;

/// Load an image file of any supported format into a single-channel Frame.
///
/// Color and 16-bit images are reduced to 8-bit luma.
pub fn load_frame(path: &Path) -> Result<Frame> {
    let img = image::open(path)?;
    Ok(Frame::from_dynamic(&img))
}

/// Save a frame as 8-bit grayscale PNG.
pub fn save_frame_png(frame: &Frame, path: &Path) -> Result<()> {
    frame
        .to_gray_image()
        .save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save an annotated frame as 8-bit RGB PNG.
pub fn save_annotated(frame: &AnnotatedFrame, path: &Path) -> Result<()> {
    frame.image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
