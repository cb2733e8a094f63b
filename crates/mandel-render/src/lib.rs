//! # mandel-render
//!
//! Escape-time Mandelbrot renderer. A [`Renderer`] owns the view, an
//! [`IterationGrid`] filled in parallel on rayon, and the RGBA image
//! colored from it.

pub mod colorize;
pub mod dimensions;
pub mod escape;
pub mod export;
pub mod grid;
pub mod navigation;
pub mod palette;
pub mod projection;
pub mod renderer;
pub mod view;

pub use dimensions::Dimensions;
pub use grid::{FillReport, IterationGrid};
pub use navigation::{Action, NavigationSettings, Navigator};
pub use palette::Palette;
pub use renderer::{RenderSettings, RenderStats, Renderer};
pub use view::ViewState;

pub use image::RgbaImage;
pub use num_complex::Complex64;
