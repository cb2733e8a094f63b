//! eframe front-end: the fractal image with a control panel beside it.

use std::time::Duration;

use eframe::egui;
use mandel_core::errors::{MandelErrorCode, ViewerError};
use tracing::{error, info};

use crate::controls;
use crate::session::Session;
use crate::worker::Frame;

/// Width of the control panel next to the image, in points.
pub const CONTROL_PANEL_WIDTH: f32 = 180.0;

const POLL_INTERVAL: Duration = Duration::from_millis(16);

pub struct ViewerApp {
    session: Session,
    texture: Option<egui::TextureHandle>,
    fatal: Option<String>,
}

impl ViewerApp {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            texture: None,
            fatal: None,
        }
    }

    fn upload(&mut self, ctx: &egui::Context, frame: &Frame) {
        let size = [frame.image.width() as usize, frame.image.height() as usize];
        let pixels = egui::ColorImage::from_rgba_unmultiplied(size, frame.image.as_raw());
        match &mut self.texture {
            Some(texture) => texture.set(pixels, egui::TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("mandelbrot", pixels, egui::TextureOptions::NEAREST));
            }
        }
    }

    fn handle(&mut self, result: Result<bool, ViewerError>) {
        if let Err(e) = result {
            error!(code = e.error_code(), "{e}");
            self.fatal = Some(e.coded_message());
        }
    }

    fn control_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        for row in controls::BUTTONS.chunks(2) {
            ui.horizontal(|ui| {
                for (label, action) in row {
                    let button = egui::Button::new(*label).min_size(egui::vec2(80.0, 24.0));
                    if ui.add_enabled(self.fatal.is_none(), button).clicked() {
                        let result = self.session.apply(*action);
                        self.handle(result);
                    }
                }
            });
        }

        ui.separator();
        for label in controls::status_labels(self.session.view()) {
            ui.label(label);
        }
        if self.session.is_rendering() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Rendering");
            });
        }
        if let Some(message) = self.fatal.as_deref().or(self.session.last_error()) {
            ui.colored_label(ui.visuals().error_fg_color, message);
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        if self.fatal.is_none() {
            for action in ctx.input(controls::pressed_actions) {
                let result = self.session.apply(action);
                self.handle(result);
            }
            match self.session.poll() {
                Ok(Some(frame)) => self.upload(ctx, &frame),
                Ok(None) => {}
                Err(e) => {
                    error!(code = e.error_code(), "{e}");
                    self.fatal = Some(e.coded_message());
                }
            }
        }

        egui::SidePanel::right("controls")
            .resizable(false)
            .exact_width(CONTROL_PANEL_WIDTH)
            .show(ctx, |ui| self.control_panel(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| match &self.texture {
                Some(texture) => {
                    ui.image((texture.id(), texture.size_vec2()));
                }
                None => {
                    ui.centered_and_justified(|ui| ui.spinner());
                }
            });

        if self.session.is_rendering() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }
}

/// Open the window and block until it is closed.
pub fn run(title: &str, session: Session) -> Result<(), ViewerError> {
    let dims = session.dimensions();
    let inner_size = [
        dims.width() as f32 + CONTROL_PANEL_WIDTH,
        dims.height() as f32,
    ];
    info!(
        width = dims.width(),
        height = dims.height(),
        projection = %session.projection(),
        "opening viewer window"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size(inner_size)
            .with_resizable(false),
        ..Default::default()
    };
    let app = ViewerApp::new(session);
    eframe::run_native(title, options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| ViewerError::Window {
            message: e.to_string(),
        })
}
