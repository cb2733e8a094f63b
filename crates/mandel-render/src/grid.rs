//! Row-major escape-count grid and its parallel fill.

use std::sync::atomic::{AtomicUsize, Ordering};

use mandel_core::traits::Cancellable;
use mandel_core::types::Projection;
use rayon::prelude::*;

use crate::dimensions::Dimensions;
use crate::escape::escape_iterations;
use crate::projection::PixelMapper;
use crate::view::ViewState;

/// Outcome of one fill pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillReport {
    pub rows_completed: usize,
    pub rows_total: usize,
    /// Pixels that reached the iteration budget, counted over completed rows.
    pub interior_pixels: usize,
}

impl FillReport {
    pub fn is_complete(&self) -> bool {
        self.rows_completed == self.rows_total
    }
}

#[derive(Debug, Clone)]
pub struct IterationGrid {
    dims: Dimensions,
    cells: Vec<u32>,
    /// Budget of the last complete fill; `None` until one succeeds.
    filled_with: Option<u32>,
}

impl IterationGrid {
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![0; dims.pixel_count()],
            filled_with: None,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.dims.width() || y >= self.dims.height() {
            return None;
        }
        let idx = y as usize * self.dims.width() as usize + x as usize;
        self.cells.get(idx).copied()
    }

    /// Iteration budget the current contents were computed with.
    pub fn filled_with(&self) -> Option<u32> {
        self.filled_with
    }

    /// Recompute every cell, one rayon task per row, on the current pool.
    ///
    /// `cancel` is polled before each row. Rows skipped after cancellation keep
    /// stale values and the grid is reported as not filled.
    pub fn fill<C>(&mut self, projection: Projection, view: &ViewState, cancel: &C) -> FillReport
    where
        C: Cancellable + Sync,
    {
        let dims = self.dims;
        let width = dims.width() as usize;
        let max_iterations = view.max_iterations;
        let rows_completed = AtomicUsize::new(0);

        let interior_pixels: usize = self
            .cells
            .par_chunks_mut(width)
            .enumerate()
            .map(|(y, row)| {
                if cancel.is_cancelled() {
                    return 0;
                }
                let mut interior = 0;
                for (x, cell) in row.iter_mut().enumerate() {
                    let c = projection.point_at(x as u32, y as u32, dims, view);
                    let n = escape_iterations(c, max_iterations);
                    if n == max_iterations {
                        interior += 1;
                    }
                    *cell = n;
                }
                rows_completed.fetch_add(1, Ordering::Relaxed);
                interior
            })
            .sum();

        let report = FillReport {
            rows_completed: rows_completed.into_inner(),
            rows_total: dims.height() as usize,
            interior_pixels,
        };
        self.filled_with = report.is_complete().then_some(max_iterations);
        report
    }
}
