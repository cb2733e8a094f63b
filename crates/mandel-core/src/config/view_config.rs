//! Initial view configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ZOOM;

/// Starting zoom and shift. Shift units depend on the projection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    pub zoom: Option<f64>,
    pub shift_x: Option<f64>,
    pub shift_y: Option<f64>,
}

impl ViewConfig {
    pub fn effective_zoom(&self) -> f64 {
        self.zoom.unwrap_or(DEFAULT_ZOOM)
    }

    pub fn effective_shift_x(&self) -> f64 {
        self.shift_x.unwrap_or(0.0)
    }

    pub fn effective_shift_y(&self) -> f64 {
        self.shift_y.unwrap_or(0.0)
    }
}
