//! Image export errors.

use std::path::PathBuf;

use super::error_code::{self, MandelErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode {path}: {message}")]
    Encode { path: PathBuf, message: String },

    #[error("Unsupported image format for {path}, expected .png")]
    UnsupportedFormat { path: PathBuf },
}

impl MandelErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        error_code::EXPORT_ERROR
    }
}
