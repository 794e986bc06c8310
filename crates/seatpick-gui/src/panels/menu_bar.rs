use std::path::PathBuf;

use seatpick_core::config::PickerConfig;

use crate::app::SeatpickApp;
use crate::messages::WorkerResult;

pub fn show(ctx: &egui::Context, app: &mut SeatpickApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Geometry...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_geometry(ctx, app);
                }

                if ui.button("Open Image...").clicked() {
                    ui.close();
                    open_image(ctx, app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(ctx, app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.add_enabled(app.picker.is_some(), egui::Button::new("Reset")).clicked() {
                    ui.close();
                    app.reset();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_geometry(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Dialogs run on their own thread so the UI keeps painting. The picked path
/// comes back through the result channel and is loaded from there.
fn open_geometry(ctx: &egui::Context, app: &SeatpickApp) {
    pick_in_background(ctx, app, "Geometry", &["json"], |path| WorkerResult::GeometryChosen { path });
}

fn open_image(ctx: &egui::Context, app: &SeatpickApp) {
    pick_in_background(ctx, app, "Images", &["png", "jpg", "jpeg", "webp"], |path| {
        WorkerResult::ImageChosen { path }
    });
}

fn pick_in_background(
    ctx: &egui::Context,
    app: &SeatpickApp,
    filter: &'static str,
    extensions: &'static [&'static str],
    into_result: fn(PathBuf) -> WorkerResult,
) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter(filter, extensions)
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = result_tx.send(into_result(path));
            ctx.request_repaint();
        }
    });
}

fn import_config(ctx: &egui::Context, app: &SeatpickApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let parsed = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| toml::from_str::<PickerConfig>(&content).map_err(|e| e.to_string()));
        let result = match parsed {
            Ok(config) => WorkerResult::ConfigImported { config },
            Err(e) => WorkerResult::Log {
                message: format!("ERROR: {}: {e}", path.display()),
            },
        };
        let _ = result_tx.send(result);
        ctx.request_repaint();
    });
}
