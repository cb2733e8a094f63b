//! Handler that forwards every event to `tracing`.

use super::handler::RenderEventHandler;
use super::types::*;

#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingEventHandler;

impl RenderEventHandler for LoggingEventHandler {
    fn on_render_started(&self, e: &RenderStartedEvent) {
        tracing::debug!(
            width = e.width,
            height = e.height,
            max_iterations = e.max_iterations,
            zoom = e.zoom,
            "render started"
        );
    }

    fn on_render_complete(&self, e: &RenderCompleteEvent) {
        tracing::info!(
            pixels = e.pixels,
            interior_pixels = e.interior_pixels,
            fill_ms = e.fill_ms,
            colorize_ms = e.colorize_ms,
            "render complete"
        );
    }

    fn on_render_cancelled(&self, e: &RenderCancelledEvent) {
        tracing::debug!(
            rows_completed = e.rows_completed,
            rows_total = e.rows_total,
            "render cancelled"
        );
    }

    fn on_view_changed(&self, e: &ViewChangedEvent) {
        tracing::info!(
            action = %e.action,
            zoom = e.zoom,
            shift_x = e.shift_x,
            shift_y = e.shift_y,
            max_iterations = e.max_iterations,
            "view changed"
        );
    }

    fn on_image_exported(&self, e: &ImageExportedEvent) {
        tracing::info!(
            path = %e.path.display(),
            width = e.width,
            height = e.height,
            duration_ms = e.duration_ms,
            "image exported"
        );
    }

    fn on_error(&self, e: &ErrorEvent) {
        tracing::error!(code = %e.code, "{}", e.message);
    }
}
