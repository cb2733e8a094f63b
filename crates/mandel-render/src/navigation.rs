//! Pan/zoom controls applied to a [`ViewState`].
//!
//! The two projections interpret controls differently:
//!
//! - `FixedPlane` keeps shifts in plane units. Zooming leaves the shift as is,
//!   panning moves by `pan_step / zoom` so one press covers the same share of
//!   the screen at every depth.
//! - `CenteredScale` keeps shifts in pixels at the current zoom. Zooming scales
//!   the shift along with the zoom so the screen center stays put, and grows
//!   the iteration budget by `iteration_growth`. Panning moves `pan_step` pixels.

use mandel_core::config::MandelConfig;
use mandel_core::constants::MAX_ITERATIONS_LIMIT;
use mandel_core::types::{Direction, Projection};

use crate::view::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ZoomIn,
    ZoomOut,
    Pan(Direction),
    IncreaseIterations,
    DecreaseIterations,
    Reset,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ZoomIn => "zoom_in",
            Self::ZoomOut => "zoom_out",
            Self::Pan(Direction::Up) => "pan_up",
            Self::Pan(Direction::Down) => "pan_down",
            Self::Pan(Direction::Left) => "pan_left",
            Self::Pan(Direction::Right) => "pan_right",
            Self::IncreaseIterations => "increase_iterations",
            Self::DecreaseIterations => "decrease_iterations",
            Self::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationSettings {
    pub projection: Projection,
    pub zoom_factor: f64,
    pub pan_step: f64,
    pub iteration_growth: f64,
    pub iteration_step: u32,
}

impl NavigationSettings {
    pub fn for_projection(projection: Projection) -> Self {
        Self::from_config(&MandelConfig::default(), projection)
    }

    pub fn from_config(config: &MandelConfig, projection: Projection) -> Self {
        let nav = &config.navigation;
        Self {
            projection,
            zoom_factor: nav.effective_zoom_factor(projection),
            pan_step: nav.effective_pan_step(projection),
            iteration_growth: nav.effective_iteration_growth(projection),
            iteration_step: nav.effective_iteration_step(),
        }
    }
}

/// Applies [`Action`]s; remembers the initial view for `Reset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Navigator {
    settings: NavigationSettings,
    initial: ViewState,
}

impl Navigator {
    pub fn new(settings: NavigationSettings, initial: ViewState) -> Self {
        Self { settings, initial }
    }

    pub fn settings(&self) -> &NavigationSettings {
        &self.settings
    }

    pub fn initial(&self) -> &ViewState {
        &self.initial
    }

    /// Mutates `view`; returns whether anything changed.
    pub fn apply(&self, view: &mut ViewState, action: Action) -> bool {
        let before = *view;
        let s = &self.settings;
        match action {
            Action::ZoomIn | Action::ZoomOut => {
                let zoom_in = action == Action::ZoomIn;
                let scale = |v: f64| if zoom_in { v * s.zoom_factor } else { v / s.zoom_factor };
                let zoom = scale(view.zoom);
                let (shift_x, shift_y) = match s.projection {
                    Projection::FixedPlane => (view.shift_x, view.shift_y),
                    Projection::CenteredScale => (scale(view.shift_x), scale(view.shift_y)),
                };
                // Subnormal, zero or infinite zoom never scales back.
                if !is_valid_zoom(zoom) || !shift_x.is_finite() || !shift_y.is_finite() {
                    return false;
                }
                view.zoom = zoom;
                view.shift_x = shift_x;
                view.shift_y = shift_y;
                let iterations = if zoom_in {
                    view.max_iterations as f64 * s.iteration_growth
                } else {
                    view.max_iterations as f64 / s.iteration_growth
                };
                view.max_iterations = clamp_iterations(iterations as u64);
            }
            Action::Pan(direction) => {
                let step = match s.projection {
                    Projection::FixedPlane => s.pan_step / view.zoom,
                    Projection::CenteredScale => s.pan_step,
                };
                let (shift_x, shift_y) = match direction {
                    Direction::Up => (view.shift_x, view.shift_y - step),
                    Direction::Down => (view.shift_x, view.shift_y + step),
                    Direction::Left => (view.shift_x - step, view.shift_y),
                    Direction::Right => (view.shift_x + step, view.shift_y),
                };
                if !shift_x.is_finite() || !shift_y.is_finite() {
                    return false;
                }
                view.shift_x = shift_x;
                view.shift_y = shift_y;
            }
            Action::IncreaseIterations => {
                view.max_iterations = clamp_iterations(
                    view.max_iterations as u64 + s.iteration_step as u64,
                );
            }
            Action::DecreaseIterations => {
                view.max_iterations =
                    clamp_iterations(view.max_iterations.saturating_sub(s.iteration_step) as u64);
            }
            Action::Reset => *view = self.initial,
        }
        *view != before
    }
}

fn is_valid_zoom(zoom: f64) -> bool {
    zoom.is_normal() && zoom > 0.0
}

fn clamp_iterations(iterations: u64) -> u32 {
    iterations.clamp(1, MAX_ITERATIONS_LIMIT as u64) as u32
}
