//! Event payload types.

use std::path::PathBuf;

/// Payload for `on_render_started`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStartedEvent {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub zoom: f64,
}

/// Payload for `on_render_complete`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCompleteEvent {
    pub pixels: usize,
    pub interior_pixels: usize,
    pub fill_ms: u64,
    pub colorize_ms: u64,
}

/// Payload for `on_render_cancelled`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCancelledEvent {
    pub rows_completed: usize,
    pub rows_total: usize,
}

/// Payload for `on_view_changed`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewChangedEvent {
    pub action: String,
    pub zoom: f64,
    pub shift_x: f64,
    pub shift_y: f64,
    pub max_iterations: u32,
}

/// Payload for `on_image_exported`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageExportedEvent {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub duration_ms: u64,
}

/// Payload for `on_error`.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorEvent {
    pub code: String,
    pub message: String,
}
