//! RenderEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for handling render events.
///
/// Requires `Send + Sync` because renders run on worker threads.
pub trait RenderEventHandler: Send + Sync {
    fn on_render_started(&self, _event: &RenderStartedEvent) {}
    fn on_render_complete(&self, _event: &RenderCompleteEvent) {}
    fn on_render_cancelled(&self, _event: &RenderCancelledEvent) {}
    fn on_view_changed(&self, _event: &ViewChangedEvent) {}
    fn on_image_exported(&self, _event: &ImageExportedEvent) {}
    fn on_error(&self, _event: &ErrorEvent) {}
}
