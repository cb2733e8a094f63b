//! Cooperative cancellation for grid fills.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Polled by the grid fill before each row; a set flag skips the remaining rows.
pub trait Cancellable {
    fn is_cancelled(&self) -> bool;

    fn cancel(&self);
}

/// Shared stop flag handed from the viewer to the render worker.
/// Clones observe the same flag; it never resets.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}
