//! The renderer: view state, iteration grid, and image in one place.

use std::path::Path;
use std::time::Instant;

use image::RgbaImage;
use mandel_core::config::MandelConfig;
use mandel_core::errors::{ExportError, MandelErrorCode, RenderError};
use mandel_core::events::*;
use mandel_core::tracing::metrics::{
    COLORIZE_DURATION_MS, EXPORT_DURATION_MS, FILL_DURATION_MS, INTERIOR_RATIO, PIXELS_PER_SECOND,
};
use mandel_core::traits::{Cancellable, CancellationToken};
use mandel_core::types::{PaletteKind, Projection};
use num_complex::Complex64;
use rayon::ThreadPool;
use tracing::{debug, instrument};

use crate::colorize::colorize_into;
use crate::dimensions::Dimensions;
use crate::export::save_png;
use crate::grid::{FillReport, IterationGrid};
use crate::navigation::{Action, NavigationSettings, Navigator};
use crate::palette::{palette_for, Palette};
use crate::projection::PixelMapper;
use crate::view::ViewState;

/// Everything needed to build a [`Renderer`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub dimensions: Dimensions,
    pub projection: Projection,
    pub palette: PaletteKind,
    pub view: ViewState,
    pub navigation: NavigationSettings,
    /// Dedicated worker count; `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl RenderSettings {
    /// Defaults of `projection` at the given size.
    pub fn new(width: u32, height: u32, projection: Projection) -> Result<Self, RenderError> {
        Ok(Self {
            dimensions: Dimensions::new(width, height)?,
            projection,
            palette: PaletteKind::default(),
            view: ViewState {
                max_iterations: projection.default_max_iterations(),
                ..ViewState::default()
            },
            navigation: NavigationSettings::for_projection(projection),
            threads: None,
        })
    }

    pub fn from_config(config: &MandelConfig) -> Result<Self, RenderError> {
        let render = &config.render;
        let projection = render.effective_projection();
        let settings = Self {
            dimensions: Dimensions::new(render.effective_width(), render.effective_height())?,
            projection,
            palette: render.effective_palette(),
            view: ViewState::from_config(config),
            navigation: NavigationSettings::from_config(config, projection),
            threads: render.threads,
        };
        settings.view.validate()?;
        Ok(settings)
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.view.max_iterations = max_iterations;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_palette(mut self, palette: PaletteKind) -> Self {
        self.palette = palette;
        self
    }
}

/// Timing and coverage of one `render` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub pixels: usize,
    pub interior_pixels: usize,
    pub fill_ms: u64,
    pub colorize_ms: u64,
}

/// Holds the escape counts and the image for the current view.
///
/// `refresh` recomputes counts, `build_image` recolors them; `render` does both.
/// View mutations mark the grid stale until the next successful refresh.
pub struct Renderer {
    dims: Dimensions,
    projection: Projection,
    palette_kind: PaletteKind,
    palette: Box<dyn Palette>,
    view: ViewState,
    navigator: Navigator,
    grid: IterationGrid,
    image: RgbaImage,
    pool: Option<ThreadPool>,
    events: EventDispatcher,
    stale: bool,
    last_fill: Option<FillReport>,
}

impl Renderer {
    /// Build a renderer and compute the first image.
    pub fn new(settings: RenderSettings) -> Result<Self, RenderError> {
        Self::with_events(settings, EventDispatcher::new())
    }

    pub fn with_events(settings: RenderSettings, events: EventDispatcher) -> Result<Self, RenderError> {
        settings.view.validate()?;
        let pool = match settings.threads {
            Some(0) => return Err(RenderError::ThreadPool {
                message: "thread count must be greater than zero".to_string(),
            }),
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("mandel-render-{i}"))
                    .build()
                    .map_err(|e| RenderError::ThreadPool {
                        message: e.to_string(),
                    })?,
            ),
            None => None,
        };

        let dims = settings.dimensions;
        let mut renderer = Self {
            dims,
            projection: settings.projection,
            palette_kind: settings.palette,
            palette: palette_for(settings.palette),
            view: settings.view,
            navigator: Navigator::new(settings.navigation, settings.view),
            grid: IterationGrid::new(dims),
            image: RgbaImage::new(dims.width(), dims.height()),
            pool,
            events,
            stale: true,
            last_fill: None,
        };
        renderer.render()?;
        Ok(renderer)
    }

    // ---- Rendering ----

    /// Recompute the iteration grid for the current view.
    pub fn refresh(&mut self) -> Result<FillReport, RenderError> {
        self.refresh_with(&CancellationToken::new())
    }

    /// Like [`refresh`](Self::refresh), polling `cancel` between rows.
    #[instrument(name = "refresh", level = "debug", skip_all)]
    pub fn refresh_with<C>(&mut self, cancel: &C) -> Result<FillReport, RenderError>
    where
        C: Cancellable + Sync,
    {
        self.view.validate()?;
        self.events.emit_render_started(&RenderStartedEvent {
            width: self.dims.width(),
            height: self.dims.height(),
            max_iterations: self.view.max_iterations,
            zoom: self.view.zoom,
        });

        let start = Instant::now();
        let projection = self.projection;
        let view = self.view;
        let grid = &mut self.grid;
        let report = match &self.pool {
            Some(pool) => pool.install(|| grid.fill(projection, &view, cancel)),
            None => grid.fill(projection, &view, cancel),
        };
        let elapsed = start.elapsed();
        self.last_fill = Some(report);

        if !report.is_complete() {
            self.stale = true;
            self.events.emit_render_cancelled(&RenderCancelledEvent {
                rows_completed: report.rows_completed,
                rows_total: report.rows_total,
            });
            let err = RenderError::Cancelled;
            debug!(code = err.error_code(), rows = report.rows_completed, "fill cancelled");
            return Err(err);
        }

        self.stale = false;
        let pixels = self.dims.pixel_count();
        debug!(
            { FILL_DURATION_MS } = elapsed.as_millis() as u64,
            { PIXELS_PER_SECOND } = pixels as f64 / elapsed.as_secs_f64().max(1e-9),
            { INTERIOR_RATIO } = report.interior_pixels as f64 / pixels as f64,
            "grid filled"
        );
        Ok(report)
    }

    /// Color the grid into the image. A stale grid is rendered in full first.
    pub fn build_image(&mut self) -> Result<&RgbaImage, RenderError> {
        if self.stale {
            self.render()?;
        } else {
            self.colorize();
        }
        Ok(&self.image)
    }

    fn colorize(&mut self) -> u64 {
        let start = Instant::now();
        let max_iterations = self.grid.filled_with().unwrap_or(self.view.max_iterations);
        let palette = self.palette.as_ref();
        let grid = &self.grid;
        let image = &mut self.image;
        match &self.pool {
            Some(pool) => pool.install(|| colorize_into(grid, max_iterations, palette, image)),
            None => colorize_into(grid, max_iterations, palette, image),
        }
        let ms = start.elapsed().as_millis() as u64;
        debug!({ COLORIZE_DURATION_MS } = ms, "image colorized");
        ms
    }

    /// Refresh and build the image.
    pub fn render(&mut self) -> Result<RenderStats, RenderError> {
        self.render_with(&CancellationToken::new())
    }

    #[instrument(name = "render", skip(self, cancel), fields(width = self.dims.width(), height = self.dims.height(), zoom = self.view.zoom))]
    pub fn render_with<C>(&mut self, cancel: &C) -> Result<RenderStats, RenderError>
    where
        C: Cancellable + Sync,
    {
        let start = Instant::now();
        let report = self.refresh_with(cancel)?;
        let fill_ms = start.elapsed().as_millis() as u64;
        let colorize_ms = self.colorize();

        let stats = RenderStats {
            pixels: self.dims.pixel_count(),
            interior_pixels: report.interior_pixels,
            fill_ms,
            colorize_ms,
        };
        self.events.emit_render_complete(&RenderCompleteEvent {
            pixels: stats.pixels,
            interior_pixels: stats.interior_pixels,
            fill_ms: stats.fill_ms,
            colorize_ms: stats.colorize_ms,
        });
        Ok(stats)
    }

    // ---- Navigation ----

    /// Apply a control action to the view. Returns whether the view changed.
    pub fn apply(&mut self, action: Action) -> bool {
        let changed = self.navigator.apply(&mut self.view, action);
        if changed {
            self.stale = true;
            self.events.emit_view_changed(&ViewChangedEvent {
                action: action.name().to_string(),
                zoom: self.view.zoom,
                shift_x: self.view.shift_x,
                shift_y: self.view.shift_y,
                max_iterations: self.view.max_iterations,
            });
        }
        changed
    }

    pub fn set_view(&mut self, view: ViewState) -> Result<(), RenderError> {
        view.validate()?;
        if view != self.view {
            self.view = view;
            self.stale = true;
        }
        Ok(())
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn zoom(&self) -> f64 {
        self.view.zoom
    }

    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), RenderError> {
        self.set_view(ViewState { zoom, ..self.view })
    }

    pub fn shift_x(&self) -> f64 {
        self.view.shift_x
    }

    pub fn set_shift_x(&mut self, shift: f64) -> Result<(), RenderError> {
        self.set_view(ViewState { shift_x: shift, ..self.view })
    }

    pub fn shift_y(&self) -> f64 {
        self.view.shift_y
    }

    pub fn set_shift_y(&mut self, shift: f64) -> Result<(), RenderError> {
        self.set_view(ViewState { shift_y: shift, ..self.view })
    }

    pub fn max_iterations(&self) -> u32 {
        self.view.max_iterations
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), RenderError> {
        self.set_view(ViewState {
            max_iterations,
            ..self.view
        })
    }

    // ---- Accessors ----

    /// Complex point sampled by pixel `(x, y)` under the current view.
    pub fn point_at(&self, x: u32, y: u32) -> Complex64 {
        self.projection.point_at(x, y, self.dims, &self.view)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn palette(&self) -> PaletteKind {
        self.palette_kind
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn grid(&self) -> &IterationGrid {
        &self.grid
    }

    /// Image of the last colorize pass; may lag the view while stale.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn last_fill(&self) -> Option<FillReport> {
        self.last_fill
    }

    pub fn events(&self) -> &EventDispatcher {
        &self.events
    }

    /// Write the current image as PNG.
    pub fn export_png(&self, path: &Path) -> Result<(), ExportError> {
        let start = Instant::now();
        if let Err(e) = save_png(&self.image, path) {
            self.events.emit_error(&ErrorEvent {
                code: e.error_code().to_string(),
                message: e.to_string(),
            });
            return Err(e);
        }
        let duration_ms = start.elapsed().as_millis() as u64;
        debug!({ EXPORT_DURATION_MS } = duration_ms, path = %path.display(), "png written");
        self.events.emit_image_exported(&ImageExportedEvent {
            path: path.to_path_buf(),
            width: self.dims.width(),
            height: self.dims.height(),
            duration_ms,
        });
        Ok(())
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("dims", &self.dims)
            .field("projection", &self.projection)
            .field("palette", &self.palette_kind)
            .field("view", &self.view)
            .field("stale", &self.stale)
            .finish_non_exhaustive()
    }
}
