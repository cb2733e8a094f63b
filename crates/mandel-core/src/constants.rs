//! Shared constants for the mandel renderer.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest accepted image side, in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

/// Upper bound for the iteration budget.
pub const MAX_ITERATIONS_LIMIT: u32 = 1_048_576;

/// Squared escape radius of the quadratic map.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Half-width of the fixed complex plane, x and y span [-2, 2].
pub const PLANE_HALF_SPAN: f64 = 2.0;

/// Scale divisor of the centered-scale projection: `(w + h) * 0.125`.
pub const CENTERED_SCALE_FACTOR: f64 = 0.125;

/// Default zoom level for every projection.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Library default iteration budget, used when nothing else applies.
pub const DEFAULT_MAX_ITERATIONS: u32 = 256;

// ---- Fixed-plane viewer ----

pub const FIXED_PLANE_WIDTH: u32 = 1280;
pub const FIXED_PLANE_HEIGHT: u32 = 720;
pub const FIXED_PLANE_MAX_ITERATIONS: u32 = 1024;
pub const FIXED_PLANE_ZOOM_FACTOR: f64 = 2.0;
/// Pan distance in plane units at zoom 1; divided by the current zoom.
pub const FIXED_PLANE_PAN_STEP: f64 = 1.0;
pub const FIXED_PLANE_ITERATION_GROWTH: f64 = 1.0;

// ---- Centered-scale viewer ----

pub const CENTERED_SCALE_WIDTH: u32 = 800;
pub const CENTERED_SCALE_HEIGHT: u32 = 600;
pub const CENTERED_SCALE_MAX_ITERATIONS: u32 = 100;
pub const CENTERED_SCALE_ZOOM_FACTOR: f64 = 1.2;
/// Pan distance in pixels.
pub const CENTERED_SCALE_PAN_STEP: f64 = 30.0;
pub const CENTERED_SCALE_ITERATION_GROWTH: f64 = 1.03;

/// Step applied by the increase/decrease iteration controls.
pub const DEFAULT_ITERATION_STEP: u32 = 64;

/// Window title of the desktop viewer.
pub const DEFAULT_WINDOW_TITLE: &str = "Mandelbrot Set";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "mandel.toml";
