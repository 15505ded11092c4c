//! Error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Texture length must be a power of two, got: {0}")]
    NotPowerOfTwo(usize),

    #[error("Texel count {found} does not match {width}x{height}")]
    TexelCountMismatch {
        width: usize,
        height: usize,
        found: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RasterError>;
