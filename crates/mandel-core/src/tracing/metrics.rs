//! Structured span field names shared by the renderer and the viewer.

/// Fill: iteration grid computation time in milliseconds.
pub const FILL_DURATION_MS: &str = "fill_duration_ms";

/// Colorize: image build time in milliseconds.
pub const COLORIZE_DURATION_MS: &str = "colorize_duration_ms";

/// Fill throughput in pixels per second.
pub const PIXELS_PER_SECOND: &str = "pixels_per_second";

/// Share of pixels that never escaped (0.0 - 1.0).
pub const INTERIOR_RATIO: &str = "interior_ratio";

/// Export: PNG encode and write time in milliseconds.
pub const EXPORT_DURATION_MS: &str = "export_duration_ms";
