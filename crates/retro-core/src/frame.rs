use image::{DynamicImage, GrayImage, Luma};
use ndarray::Array2;

use crate::error::{Result, RetroError};

/// A single-channel 8-bit camera frame.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<u8>,
    /// Optional per-frame metadata
    pub metadata: FrameMetadata,
}

impl Frame {
    pub fn new(data: Array2<u8>) -> Self {
        Self {
            data,
            metadata: FrameMetadata::default(),
        }
    }

    /// Wrap a tightly packed row-major luma buffer.
    pub fn from_raw(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self> {
        let len = pixels.len();
        let data = Array2::from_shape_vec((height, width), pixels).map_err(|_| {
            RetroError::DetectionFailure(format!(
                "buffer of {len} bytes does not match a {width}x{height} single-channel frame"
            ))
        })?;
        Ok(Self::new(data))
    }

    pub fn from_gray_image(img: &GrayImage) -> Self {
        let (w, h) = img.dimensions();
        let data = Array2::from_shape_vec((h as usize, w as usize), img.as_raw().clone())
            .expect("luma buffer length matches image dimensions");
        Self::new(data)
    }

    /// Reduce any decoded image to a single luma channel.
    pub fn from_dynamic(img: &DynamicImage) -> Self {
        Self::from_gray_image(&img.to_luma8())
    }

    pub fn with_index(mut self, frame_index: usize) -> Self {
        self.metadata.frame_index = frame_index;
        self
    }

    pub fn with_timestamp(mut self, timestamp_us: u64) -> Self {
        self.metadata.timestamp_us = Some(timestamp_us);
        self
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn to_gray_image(&self) -> GrayImage {
        let (h, w) = self.data.dim();
        GrayImage::from_fn(w as u32, h as u32, |x, y| {
            Luma([self.data[[y as usize, x as usize]]])
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct FrameMetadata {
    pub frame_index: usize,
    pub timestamp_us: Option<u64>,
}
