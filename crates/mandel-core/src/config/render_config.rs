//! Render configuration.

use serde::{Deserialize, Serialize};

use crate::types::{PaletteKind, Projection};

/// Configuration for the pixel grid and its parallel fill.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels. Default depends on the projection.
    pub width: Option<u32>,
    /// Image height in pixels. Default depends on the projection.
    pub height: Option<u32>,
    /// Iteration budget per pixel. Default depends on the projection.
    pub max_iterations: Option<u32>,
    /// Worker threads for the fill. Unset = one per core.
    pub threads: Option<usize>,
    /// Pixel-to-plane mapping. Default: fixed_plane.
    pub projection: Option<Projection>,
    /// Color scheme. Default: orange.
    pub palette: Option<PaletteKind>,
}

impl RenderConfig {
    pub fn effective_projection(&self) -> Projection {
        self.projection.unwrap_or_default()
    }

    pub fn effective_palette(&self) -> PaletteKind {
        self.palette.unwrap_or_default()
    }

    pub fn effective_width(&self) -> u32 {
        self.width
            .unwrap_or_else(|| self.effective_projection().default_width())
    }

    pub fn effective_height(&self) -> u32 {
        self.height
            .unwrap_or_else(|| self.effective_projection().default_height())
    }

    pub fn effective_max_iterations(&self) -> u32 {
        self.max_iterations
            .unwrap_or_else(|| self.effective_projection().default_max_iterations())
    }
}
