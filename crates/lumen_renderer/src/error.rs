//! Errors raised at the render boundary.
//!
//! The tracing core itself has no failure modes; these cover worker pool
//! setup and writing the finished image.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for render and output operations.
pub type RenderResult<T> = Result<T, RenderError>;
