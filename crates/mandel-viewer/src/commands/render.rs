//! `mandel render`: one frame straight to a PNG file.

use std::path::Path;

use mandel_core::config::MandelConfig;
use mandel_core::errors::ViewerError;
use mandel_core::events::EventDispatcher;
use mandel_render::{RenderSettings, Renderer};
use tracing::info;

/// Render the configured view and write it to `output`.
/// Returns a one-line summary for the terminal.
pub fn run(
    config: &MandelConfig,
    output: &Path,
    events: EventDispatcher,
) -> Result<String, ViewerError> {
    let settings = RenderSettings::from_config(config)?;
    let renderer = Renderer::with_events(settings, events)?;
    renderer.export_png(output)?;

    let dims = renderer.dimensions();
    let interior = renderer.last_fill().map_or(0, |f| f.interior_pixels);
    info!(path = %output.display(), "render written");
    Ok(format!(
        "wrote {} ({}x{}, {} iterations, {:.1}% interior)",
        output.display(),
        dims.width(),
        dims.height(),
        renderer.max_iterations(),
        interior as f64 * 100.0 / dims.pixel_count() as f64,
    ))
}
