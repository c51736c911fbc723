//! Unified error type for resize.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resizing an image.
#[derive(Debug, Error)]
pub enum ResizeError {
    /// No input image was given on the command line.
    #[error("missing input image. Usage: resize <image_file_name>")]
    Usage,

    /// The input path does not resolve to a readable file.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Decoding, resampling or encoding failed.
    #[error("An unexpected error occurred: {0}")]
    Image(#[from] image::ImageError),

    /// An I/O error occurred outside the image codec.
    #[error("An unexpected error occurred: {0}")]
    Io(#[from] std::io::Error),
}
