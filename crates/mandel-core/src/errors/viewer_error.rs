//! Top-level errors of the `mandel` binary.
//! Aggregates subsystem errors via `From` conversions.

use super::error_code::{self, MandelErrorCode};
use super::{ConfigError, ExportError, RenderError};

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Window error: {message}")]
    Window { message: String },

    #[error("Failed to start render worker: {message}")]
    WorkerSpawn { message: String },

    #[error("Render worker disconnected")]
    WorkerDisconnected,
}

impl MandelErrorCode for ViewerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Render(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
            Self::Window { .. } => error_code::WINDOW_ERROR,
            Self::WorkerSpawn { .. } | Self::WorkerDisconnected => error_code::WORKER_ERROR,
        }
    }
}
