//! # mandel-viewer
//!
//! The `mandel` binary: a desktop window with pan/zoom controls over a
//! background render worker, and a headless `render` command writing PNGs.

pub mod app;
pub mod cli;
pub mod commands;
pub mod controls;
pub mod session;
pub mod worker;

use std::path::Path;
use std::sync::Arc;

use mandel_core::config::MandelConfig;
use mandel_core::errors::ViewerError;
use mandel_core::events::{EventDispatcher, LoggingEventHandler};

use crate::cli::{Cli, Command};

/// Resolve configuration and dispatch the selected command.
pub fn run(cli: Cli) -> Result<(), ViewerError> {
    match &cli.command {
        Command::View(args) => {
            let config = MandelConfig::load(Path::new("."), Some(&args.overrides(cli.config.clone())))?;
            commands::view::run(&config, logging_events())
        }
        Command::Render(args) => {
            let config = MandelConfig::load(
                Path::new("."),
                Some(&args.render.overrides(cli.config.clone())),
            )?;
            let summary = commands::render::run(&config, &args.output, logging_events())?;
            println!("{summary}");
            Ok(())
        }
    }
}

fn logging_events() -> EventDispatcher {
    let mut events = EventDispatcher::new();
    events.register(Arc::new(LoggingEventHandler));
    events
}
