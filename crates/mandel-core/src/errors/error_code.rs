//! MandelErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable code string,
/// printed by the CLI in front of the message.
pub trait MandelErrorCode {
    /// Returns the error code string (e.g., "RENDER_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RENDER_ERROR: &str = "RENDER_ERROR";
pub const CANCELLED: &str = "CANCELLED";
pub const EXPORT_ERROR: &str = "EXPORT_ERROR";
pub const WINDOW_ERROR: &str = "WINDOW_ERROR";
pub const WORKER_ERROR: &str = "WORKER_ERROR";
