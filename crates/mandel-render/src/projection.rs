//! Pixel → complex-plane mappings.

use mandel_core::constants::{CENTERED_SCALE_FACTOR, PLANE_HALF_SPAN};
use mandel_core::types::Projection;
use num_complex::Complex64;

use crate::dimensions::Dimensions;
use crate::view::ViewState;

/// Maps a pixel of a `Dimensions`-sized image to the point `c` it samples.
pub trait PixelMapper {
    fn point_at(&self, x: u32, y: u32, dims: Dimensions, view: &ViewState) -> Complex64;
}

impl PixelMapper for Projection {
    #[inline]
    fn point_at(&self, x: u32, y: u32, dims: Dimensions, view: &ViewState) -> Complex64 {
        let (w, h) = (dims.width() as f64, dims.height() as f64);
        let (x, y) = (x as f64, y as f64);
        match self {
            Projection::FixedPlane => {
                let span = 2.0 * PLANE_HALF_SPAN;
                let nx = -PLANE_HALF_SPAN + x * (span / w);
                let ny = -PLANE_HALF_SPAN + y * (span / h);
                Complex64::new(
                    (nx / (h / w)) / view.zoom + view.shift_x,
                    ny / view.zoom + view.shift_y,
                )
            }
            Projection::CenteredScale => {
                let scale = (w + h) * CENTERED_SCALE_FACTOR * view.zoom;
                Complex64::new(
                    (x - w / 2.0) / scale + view.shift_x / scale,
                    (y - h / 2.0) / scale + view.shift_y / scale,
                )
            }
        }
    }
}
