//! Error handling for mandel.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod export_error;
pub mod render_error;
pub mod viewer_error;

pub use config_error::ConfigError;
pub use error_code::MandelErrorCode;
pub use export_error::ExportError;
pub use render_error::RenderError;
pub use viewer_error::ViewerError;
