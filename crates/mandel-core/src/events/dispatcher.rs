//! EventDispatcher: synchronous fan-out to registered handlers.

use std::sync::Arc;

use super::handler::RenderEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn RenderEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn RenderEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler does not prevent later handlers from running.
    fn emit<F: Fn(&dyn RenderEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::error!("render event handler panicked");
            }
        }
    }

    pub fn emit_render_started(&self, event: &RenderStartedEvent) {
        self.emit(|h| h.on_render_started(event));
    }

    pub fn emit_render_complete(&self, event: &RenderCompleteEvent) {
        self.emit(|h| h.on_render_complete(event));
    }

    pub fn emit_render_cancelled(&self, event: &RenderCancelledEvent) {
        self.emit(|h| h.on_render_cancelled(event));
    }

    pub fn emit_view_changed(&self, event: &ViewChangedEvent) {
        self.emit(|h| h.on_view_changed(event));
    }

    pub fn emit_image_exported(&self, event: &ImageExportedEvent) {
        self.emit(|h| h.on_image_exported(event));
    }

    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
