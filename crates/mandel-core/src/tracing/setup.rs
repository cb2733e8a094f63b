//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Default filter when `MANDEL_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "mandel_core=info,mandel_render=info,mandel_viewer=info";

/// Initialize the tracing/logging system.
///
/// Reads `MANDEL_LOG` for per-crate log levels, e.g.
/// `MANDEL_LOG=mandel_render=debug,mandel_viewer=info`.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("MANDEL_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed (tests, embedding apps).
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
