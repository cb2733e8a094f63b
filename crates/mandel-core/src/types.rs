//! Enums shared by config, renderer, and viewer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// How pixel coordinates map onto the complex plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    /// Fixed [-2, 2] plane, aspect-corrected horizontally. Shifts are plane units.
    #[default]
    FixedPlane,
    /// Pixel-centered scale of `(w + h) / 8 * zoom`. Shifts are pixels.
    CenteredScale,
}

impl Projection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FixedPlane => "fixed_plane",
            Self::CenteredScale => "centered_scale",
        }
    }

    pub fn all() -> &'static [Projection] {
        &[Self::FixedPlane, Self::CenteredScale]
    }

    pub fn default_width(&self) -> u32 {
        match self {
            Self::FixedPlane => FIXED_PLANE_WIDTH,
            Self::CenteredScale => CENTERED_SCALE_WIDTH,
        }
    }

    pub fn default_height(&self) -> u32 {
        match self {
            Self::FixedPlane => FIXED_PLANE_HEIGHT,
            Self::CenteredScale => CENTERED_SCALE_HEIGHT,
        }
    }

    pub fn default_max_iterations(&self) -> u32 {
        match self {
            Self::FixedPlane => FIXED_PLANE_MAX_ITERATIONS,
            Self::CenteredScale => CENTERED_SCALE_MAX_ITERATIONS,
        }
    }

    pub fn default_zoom_factor(&self) -> f64 {
        match self {
            Self::FixedPlane => FIXED_PLANE_ZOOM_FACTOR,
            Self::CenteredScale => CENTERED_SCALE_ZOOM_FACTOR,
        }
    }

    pub fn default_pan_step(&self) -> f64 {
        match self {
            Self::FixedPlane => FIXED_PLANE_PAN_STEP,
            Self::CenteredScale => CENTERED_SCALE_PAN_STEP,
        }
    }

    pub fn default_iteration_growth(&self) -> f64 {
        match self {
            Self::FixedPlane => FIXED_PLANE_ITERATION_GROWTH,
            Self::CenteredScale => CENTERED_SCALE_ITERATION_GROWTH,
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Projection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "fixed_plane" | "plane" => Ok(Self::FixedPlane),
            "centered_scale" | "scale" => Ok(Self::CenteredScale),
            other => Err(format!("unknown projection '{other}'")),
        }
    }
}

/// Color scheme applied to escape counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteKind {
    /// Black interior, red → yellow → white bands.
    #[default]
    Orange,
    Grayscale,
}

impl PaletteKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Orange => "orange",
            Self::Grayscale => "grayscale",
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "orange" => Ok(Self::Orange),
            "grayscale" | "greyscale" | "gray" | "grey" => Ok(Self::Grayscale),
            other => Err(format!("unknown palette '{other}'")),
        }
    }
}

/// Pan direction in screen terms; up moves toward smaller row indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}
