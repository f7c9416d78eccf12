use thiserror::Error;

#[derive(Error, Debug)]
pub enum RetroError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Detection failed: {0}")]
    DetectionFailure(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RetroError>;
