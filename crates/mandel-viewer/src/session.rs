//! Viewer state independent of the window toolkit.

use mandel_core::config::MandelConfig;
use mandel_core::errors::{MandelErrorCode, ViewerError};
use mandel_core::events::{ErrorEvent, EventDispatcher, ViewChangedEvent};
use mandel_core::types::Projection;
use mandel_render::{Action, Dimensions, Navigator, RenderSettings, Renderer, ViewState};
use tracing::warn;

use crate::worker::{Frame, RenderWorker, WorkerEvent};

/// Target view, the view on screen, and the worker between them.
#[derive(Debug)]
pub struct Session {
    worker: RenderWorker,
    navigator: Navigator,
    events: EventDispatcher,
    dims: Dimensions,
    projection: Projection,
    view: ViewState,
    shown_view: ViewState,
    shown_generation: u64,
    last_error: Option<String>,
}

impl Session {
    /// Build the renderer from `config`, render the first frame, and start the worker.
    pub fn start(config: &MandelConfig, events: EventDispatcher) -> Result<Self, ViewerError> {
        let settings = RenderSettings::from_config(config)?;
        let renderer = Renderer::with_events(settings, events)?;
        Self::with_renderer(renderer)
    }

    pub fn with_renderer(renderer: Renderer) -> Result<Self, ViewerError> {
        let navigator = *renderer.navigator();
        let events = renderer.events().clone();
        let dims = renderer.dimensions();
        let projection = renderer.projection();
        let view = *renderer.view();
        let worker = RenderWorker::spawn(renderer)?;
        Ok(Self {
            worker,
            navigator,
            events,
            dims,
            projection,
            view,
            shown_view: view,
            shown_generation: 0,
            last_error: None,
        })
    }

    /// Apply a control and queue a render if the view changed.
    pub fn apply(&mut self, action: Action) -> Result<bool, ViewerError> {
        if !self.navigator.apply(&mut self.view, action) {
            return Ok(false);
        }
        self.events.emit_view_changed(&ViewChangedEvent {
            action: action.name().to_string(),
            zoom: self.view.zoom,
            shift_x: self.view.shift_x,
            shift_y: self.view.shift_y,
            max_iterations: self.view.max_iterations,
        });
        self.worker.submit(self.view)?;
        Ok(true)
    }

    /// Drain worker results. Returns the newest frame to display, if any.
    pub fn poll(&mut self) -> Result<Option<Frame>, ViewerError> {
        let mut newest = None;
        while let Some(event) = self.worker.try_recv()? {
            if let Some(frame) = self.accept(event) {
                newest = Some(frame);
            }
        }
        Ok(newest)
    }

    /// Like [`poll`](Self::poll), blocking up to `timeout` for the first result.
    pub fn poll_timeout(&mut self, timeout: std::time::Duration) -> Result<Option<Frame>, ViewerError> {
        match self.worker.recv_timeout(timeout)? {
            Some(event) => {
                let first = self.accept(event);
                Ok(self.poll()?.or(first))
            }
            None => Ok(None),
        }
    }

    fn accept(&mut self, event: WorkerEvent) -> Option<Frame> {
        match event {
            WorkerEvent::Frame(frame) => {
                if frame.generation < self.shown_generation {
                    return None;
                }
                self.shown_generation = frame.generation;
                self.shown_view = frame.view;
                if frame.generation == self.worker.latest_generation() {
                    self.last_error = None;
                }
                Some(frame)
            }
            WorkerEvent::Failed { generation, error } => {
                warn!(generation, code = error.error_code(), "render failed: {error}");
                self.events.emit_error(&ErrorEvent {
                    code: error.error_code().to_string(),
                    message: error.to_string(),
                });
                self.shown_generation = self.shown_generation.max(generation);
                self.last_error = Some(error.coded_message());
                None
            }
        }
    }

    /// True while the latest submitted view has not come back.
    pub fn is_rendering(&self) -> bool {
        self.shown_generation < self.worker.latest_generation()
    }

    /// View the controls have navigated to.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// View of the frame on screen.
    pub fn shown_view(&self) -> &ViewState {
        &self.shown_view
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }
}
