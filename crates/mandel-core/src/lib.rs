//! # mandel-core
//!
//! Foundation crate for the mandel renderer and viewer.
//! Provides shared enums, constants, errors, configuration,
//! render events, cancellation, and tracing setup.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
pub mod types;

pub use config::MandelConfig;
pub use types::{PaletteKind, Projection};
