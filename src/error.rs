//! Error taxonomy for the processing pipeline.
//!
//! Every failure is surfaced synchronously at the boundary where it occurs;
//! the transforms themselves are total over decoded images and have no error
//! path.

use thiserror::Error;

/// Failures the pipeline can report to its caller.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// Input bytes cannot be interpreted as a raster image.
    #[error("cannot decode input as a raster image: {0}")]
    Decode(String),

    /// Phase selector is neither `arterial` nor `venous`.
    #[error("phase must be 'arterial' or 'venous', got '{0}'")]
    InvalidPhase(String),

    /// PNG serialization failed.
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, ProcessError>;
