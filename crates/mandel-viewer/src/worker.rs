//! Background render thread.
//!
//! The UI thread submits views; the worker renders the newest one and sends
//! finished frames back. Submitting a view cancels the render in flight.

use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use mandel_core::errors::{RenderError, ViewerError};
use mandel_core::traits::{Cancellable, CancellationToken};
use mandel_render::{RenderStats, Renderer, RgbaImage, ViewState};
use tracing::{debug, warn};

/// A finished render.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Submission counter of the view; the initial frame is 0.
    pub generation: u64,
    pub view: ViewState,
    pub image: RgbaImage,
    pub interior_pixels: usize,
}

#[derive(Debug)]
pub enum WorkerEvent {
    Frame(Frame),
    Failed { generation: u64, error: RenderError },
}

struct RenderRequest {
    generation: u64,
    view: ViewState,
    cancel: CancellationToken,
}

pub struct RenderWorker {
    requests: Option<Sender<RenderRequest>>,
    results: Receiver<WorkerEvent>,
    in_flight: Option<CancellationToken>,
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl RenderWorker {
    /// Move `renderer` onto a new thread. Its current image is queued as frame 0.
    pub fn spawn(renderer: Renderer) -> Result<Self, ViewerError> {
        let (request_tx, request_rx) = crossbeam_channel::unbounded();
        let (result_tx, result_rx) = crossbeam_channel::unbounded();

        let initial = Frame {
            generation: 0,
            view: *renderer.view(),
            image: renderer.image().clone(),
            interior_pixels: renderer.last_fill().map_or(0, |f| f.interior_pixels),
        };
        // The receiver is still held here, so this cannot fail.
        let _ = result_tx.send(WorkerEvent::Frame(initial));

        let handle = std::thread::Builder::new()
            .name("mandel-worker".to_string())
            .spawn(move || worker_loop(renderer, request_rx, result_tx))
            .map_err(|e| ViewerError::WorkerSpawn {
                message: e.to_string(),
            })?;

        Ok(Self {
            requests: Some(request_tx),
            results: result_rx,
            in_flight: None,
            generation: 0,
            handle: Some(handle),
        })
    }

    /// Queue `view` for rendering and cancel whatever is in flight.
    /// Returns the generation the resulting frame will carry.
    pub fn submit(&mut self, view: ViewState) -> Result<u64, ViewerError> {
        if let Some(previous) = self.in_flight.take() {
            previous.cancel();
        }
        let sender = self.requests.as_ref().ok_or(ViewerError::WorkerDisconnected)?;
        let generation = self.generation + 1;
        let cancel = CancellationToken::new();
        sender
            .send(RenderRequest {
                generation,
                view,
                cancel: cancel.clone(),
            })
            .map_err(|_| ViewerError::WorkerDisconnected)?;
        self.generation = generation;
        self.in_flight = Some(cancel);
        Ok(generation)
    }

    /// Generation of the most recent submission.
    pub fn latest_generation(&self) -> u64 {
        self.generation
    }

    /// Non-blocking poll for the next result.
    pub fn try_recv(&self) -> Result<Option<WorkerEvent>, ViewerError> {
        match self.results.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(ViewerError::WorkerDisconnected),
        }
    }

    /// Wait up to `timeout` for the next result.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<WorkerEvent>, ViewerError> {
        match self.results.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(ViewerError::WorkerDisconnected),
        }
    }
}

impl Drop for RenderWorker {
    fn drop(&mut self) {
        if let Some(cancel) = self.in_flight.take() {
            cancel.cancel();
        }
        // Closing the request channel ends the worker loop.
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("render worker panicked");
            }
        }
    }
}

impl std::fmt::Debug for RenderWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderWorker")
            .field("generation", &self.generation)
            .field("running", &self.handle.is_some())
            .finish_non_exhaustive()
    }
}

fn worker_loop(
    mut renderer: Renderer,
    requests: Receiver<RenderRequest>,
    results: Sender<WorkerEvent>,
) {
    while let Ok(mut request) = requests.recv() {
        // Only the newest queued view matters.
        while let Ok(newer) = requests.try_recv() {
            request = newer;
        }
        if request.cancel.is_cancelled() {
            continue;
        }

        let outcome = renderer
            .set_view(request.view)
            .and_then(|()| renderer.render_with(&request.cancel));
        let event = match outcome {
            Ok(stats) => WorkerEvent::Frame(frame_of(&renderer, request.generation, stats)),
            Err(RenderError::Cancelled) => {
                debug!(generation = request.generation, "render superseded");
                continue;
            }
            Err(error) => WorkerEvent::Failed {
                generation: request.generation,
                error,
            },
        };
        if results.send(event).is_err() {
            break;
        }
    }
    debug!("render worker stopped");
}

fn frame_of(renderer: &Renderer, generation: u64, stats: RenderStats) -> Frame {
    Frame {
        generation,
        view: *renderer.view(),
        image: renderer.image().clone(),
        interior_pixels: stats.interior_pixels,
    }
}
