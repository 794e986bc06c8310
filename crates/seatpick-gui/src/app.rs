use std::path::PathBuf;
use std::sync::{mpsc, Arc};

use image::RgbaImage;
use seatpick_core::config::PickerConfig;
use seatpick_core::geometry::GeometryStore;
use seatpick_core::picker::SectionPicker;
use seatpick_core::scene::Palette;
use tracing::error;

use crate::convert::rgba_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{UIState, ViewportState};
use crate::worker;

pub struct SeatpickApp {
    pub cmd_tx: Option<mpsc::Sender<WorkerCommand>>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub config: PickerConfig,
    pub palette: Palette,
    pub picker: Option<SectionPicker>,
    pub bitmap: Option<Arc<RgbaImage>>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub show_about: bool,
}

impl SeatpickApp {
    pub fn new(ctx: &egui::Context, geometry: Option<PathBuf>, image: Option<PathBuf>) -> Self {
        let config = PickerConfig::default();
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = match worker::spawn_worker(result_tx.clone(), ctx.clone(), config.source_size())
        {
            Ok(tx) => Some(tx),
            Err(e) => {
                error!("Failed to spawn loader thread: {e}");
                None
            }
        };

        let mut app = Self {
            cmd_tx,
            result_tx,
            result_rx,
            config,
            palette: Palette::default(),
            picker: None,
            bitmap: None,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            show_about: false,
        };
        if let Some(path) = geometry {
            app.open_geometry(path);
        }
        if let Some(path) = image {
            app.open_image(path);
        }
        app
    }

    pub fn open_geometry(&mut self, path: PathBuf) {
        self.send_command(WorkerCommand::LoadGeometry {
            path,
            fallback_size: self.config.source_size(),
        });
    }

    pub fn open_image(&mut self, path: PathBuf) {
        self.send_command(WorkerCommand::LoadImage { path });
    }

    pub fn send_command(&mut self, cmd: WorkerCommand) {
        let sent = self
            .cmd_tx
            .as_ref()
            .is_some_and(|tx| tx.send(cmd).is_ok());
        if sent {
            self.ui_state.pending_loads += 1;
        } else {
            self.ui_state.add_log("ERROR: loader thread is not running".into());
        }
    }

    /// Return loupe, focus and selection to their initial state.
    pub fn reset(&mut self) {
        if let Some(picker) = self.picker.as_mut() {
            picker.reset();
        }
        self.viewport.invalidate_zoom();
        self.ui_state.add_log("Picker reset".into());
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::GeometryChosen { path } => self.open_geometry(path),
                WorkerResult::ImageChosen { path } => self.open_image(path),
                WorkerResult::GeometryLoaded { path, store } => {
                    self.ui_state.load_finished();
                    let size = store.source_size();
                    self.ui_state.add_log(format!(
                        "Opened: {} ({} sections, {} skipped, {}x{})",
                        path.display(),
                        store.len(),
                        store.skipped(),
                        size.width,
                        size.height
                    ));
                    self.ui_state.geometry_path = Some(path);
                    self.install_store(Arc::new(store));
                }
                WorkerResult::ImageLoaded { path, image } => {
                    self.ui_state.load_finished();
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{})",
                        path.display(),
                        image.width(),
                        image.height()
                    ));
                    let texture = ctx.load_texture(
                        "overview",
                        rgba_to_color_image(&image),
                        egui::TextureOptions::LINEAR,
                    );
                    self.viewport.overview_texture = Some(texture);
                    self.viewport.invalidate_zoom();
                    self.bitmap = Some(Arc::new(image));
                    self.ui_state.image_path = Some(path);
                }
                WorkerResult::ConfigImported { config } => {
                    self.apply_config(config);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.load_finished();
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn install_store(&mut self, store: Arc<GeometryStore>) {
        let mut picker = match SectionPicker::new(store, self.config.clone()) {
            Ok(picker) => picker,
            Err(e) => {
                self.ui_state.add_log(format!("ERROR: {e}"));
                return;
            }
        };
        if let Some(old) = &self.picker {
            picker.set_overview_size(old.overview_size());
        }
        self.picker = Some(picker);
        self.viewport.invalidate_zoom();
    }

    fn apply_config(&mut self, config: PickerConfig) {
        if let Err(e) = config.validate() {
            self.ui_state.add_log(format!("ERROR: {e}"));
            return;
        }
        self.config = config;
        if let Some(store) = self.picker.as_ref().map(|p| Arc::clone(p.store())) {
            self.install_store(store);
        }
        self.ui_state.add_log("Config imported".into());
    }
}

impl eframe::App for SeatpickApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::overview::show(ui, self);
            ui.add_space(8.0);
            panels::zoom::show(ui, self);
        });

        if self.show_about {
            egui::Window::new("About Seatpick")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Seatpick");
                        ui.label("Stadium section picker");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
