//! Renderer errors.

use super::error_code::{self, MandelErrorCode};

/// Errors raised while building a renderer or filling its grid.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("{field} must be greater than zero")]
    ZeroDimension { field: &'static str },

    #[error("{field} of {value} exceeds the maximum of {max}")]
    DimensionTooLarge {
        field: &'static str,
        value: u32,
        max: u32,
    },

    #[error("max_iterations must be between 1 and {max}, got {value}")]
    InvalidMaxIterations { value: u32, max: u32 },

    #[error("zoom must be positive and finite, got {value}")]
    InvalidZoom { value: f64 },

    #[error("{field} must be finite, got {value}")]
    InvalidShift { field: &'static str, value: f64 },

    #[error("failed to build render thread pool: {message}")]
    ThreadPool { message: String },

    #[error("Render cancelled")]
    Cancelled,
}

impl MandelErrorCode for RenderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Cancelled => error_code::CANCELLED,
            _ => error_code::RENDER_ERROR,
        }
    }
}
