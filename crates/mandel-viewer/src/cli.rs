//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mandel_core::config::CliOverrides;
use mandel_core::types::{PaletteKind, Projection};

#[derive(Debug, Parser)]
#[command(name = "mandel", version, about = "Escape-time Mandelbrot viewer")]
pub struct Cli {
    /// Config file to use instead of ./mandel.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive viewer window
    View(RenderArgs),
    /// Render one frame to a PNG file
    Render(RenderToFileArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct RenderArgs {
    /// fixed_plane (widget viewer) or centered_scale (key-press viewer)
    #[arg(long)]
    pub projection: Option<Projection>,
    #[arg(long)]
    pub width: Option<u32>,
    #[arg(long)]
    pub height: Option<u32>,
    #[arg(long)]
    pub max_iterations: Option<u32>,
    /// Worker threads; defaults to one per core
    #[arg(long)]
    pub threads: Option<usize>,
    /// orange or grayscale
    #[arg(long)]
    pub palette: Option<PaletteKind>,
    #[arg(long)]
    pub zoom: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    pub shift_x: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    pub shift_y: Option<f64>,
}

impl RenderArgs {
    pub fn overrides(&self, config_file: Option<PathBuf>) -> CliOverrides {
        CliOverrides {
            config_file,
            width: self.width,
            height: self.height,
            max_iterations: self.max_iterations,
            threads: self.threads,
            projection: self.projection,
            palette: self.palette,
            zoom: self.zoom,
            shift_x: self.shift_x,
            shift_y: self.shift_y,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct RenderToFileArgs {
    #[command(flatten)]
    pub render: RenderArgs,

    /// Output PNG path
    #[arg(long, short)]
    pub output: PathBuf,
}
