//! Seams shared across crates.

pub mod cancellation;

pub use cancellation::{Cancellable, CancellationToken};
