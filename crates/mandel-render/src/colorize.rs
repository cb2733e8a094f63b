//! Grid → RGBA image, in parallel.

use image::RgbaImage;
use rayon::prelude::*;

use crate::grid::IterationGrid;
use crate::palette::Palette;

/// Color every cell of `grid` into `image`. Both must have the same size.
pub fn colorize_into(grid: &IterationGrid, max_iterations: u32, palette: &dyn Palette, image: &mut RgbaImage) {
    debug_assert_eq!(
        (image.width(), image.height()),
        (grid.dimensions().width(), grid.dimensions().height())
    );
    let buffer: &mut [u8] = &mut **image;
    buffer
        .par_chunks_mut(4)
        .zip(grid.cells().par_iter())
        .for_each(|(pixel, &iterations)| {
            pixel.copy_from_slice(&palette.color(iterations, max_iterations).0);
        });
}

/// Allocate a fresh image and color `grid` into it.
pub fn colorize(grid: &IterationGrid, max_iterations: u32, palette: &dyn Palette) -> RgbaImage {
    let dims = grid.dimensions();
    let mut image = RgbaImage::new(dims.width(), dims.height());
    colorize_into(grid, max_iterations, palette, &mut image);
    image
}
