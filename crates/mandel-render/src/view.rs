//! Mutable view parameters.

use mandel_core::config::MandelConfig;
use mandel_core::constants::{DEFAULT_MAX_ITERATIONS, DEFAULT_ZOOM, MAX_ITERATIONS_LIMIT};
use mandel_core::errors::RenderError;

/// Zoom, shift, and iteration budget. Shift units depend on the projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub zoom: f64,
    pub shift_x: f64,
    pub shift_y: f64,
    pub max_iterations: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            shift_x: 0.0,
            shift_y: 0.0,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl ViewState {
    pub fn from_config(config: &MandelConfig) -> Self {
        Self {
            zoom: config.view.effective_zoom(),
            shift_x: config.view.effective_shift_x(),
            shift_y: config.view.effective_shift_y(),
            max_iterations: config.render.effective_max_iterations(),
        }
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(RenderError::InvalidZoom { value: self.zoom });
        }
        for (field, value) in [("shift_x", self.shift_x), ("shift_y", self.shift_y)] {
            if !value.is_finite() {
                return Err(RenderError::InvalidShift { field, value });
            }
        }
        if self.max_iterations == 0 || self.max_iterations > MAX_ITERATIONS_LIMIT {
            return Err(RenderError::InvalidMaxIterations {
                value: self.max_iterations,
                max: MAX_ITERATIONS_LIMIT,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_non_finite_shift() {
        let view = ViewState {
            shift_y: f64::NEG_INFINITY,
            ..ViewState::default()
        };
        assert!(matches!(
            view.validate(),
            Err(RenderError::InvalidShift { field: "shift_y", .. })
        ));
        assert!(ViewState::default().validate().is_ok());
    }
}
