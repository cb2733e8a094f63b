//! Navigation configuration: how hard each control pushes the view.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ITERATION_STEP;
use crate::types::Projection;

/// Pan/zoom tuning. Unset fields fall back to the projection's defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Multiplier applied on zoom in, divisor on zoom out.
    pub zoom_factor: Option<f64>,
    /// Pan distance. Plane units / zoom for fixed_plane, pixels for centered_scale.
    pub pan_step: Option<f64>,
    /// Iteration budget multiplier applied together with a zoom step.
    pub iteration_growth: Option<f64>,
    /// Amount added or removed by the iteration controls. Default: 64.
    pub iteration_step: Option<u32>,
}

impl NavigationConfig {
    pub fn effective_zoom_factor(&self, projection: Projection) -> f64 {
        self.zoom_factor
            .unwrap_or_else(|| projection.default_zoom_factor())
    }

    pub fn effective_pan_step(&self, projection: Projection) -> f64 {
        self.pan_step.unwrap_or_else(|| projection.default_pan_step())
    }

    pub fn effective_iteration_growth(&self, projection: Projection) -> f64 {
        self.iteration_growth
            .unwrap_or_else(|| projection.default_iteration_growth())
    }

    pub fn effective_iteration_step(&self) -> u32 {
        self.iteration_step.unwrap_or(DEFAULT_ITERATION_STEP)
    }
}
