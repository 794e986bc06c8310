use crate::app::SeatpickApp;

pub fn show(ctx: &egui::Context, app: &mut SeatpickApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve the lines to prevent layout jump.
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if app.ui_state.is_busy() {
                ui.spinner();
                ui.label("Loading...");
                ui.separator();
            }
            match &app.picker {
                Some(picker) => {
                    let size = picker.store().source_size();
                    ui.label(format!("{}x{}", size.width, size.height));
                    ui.separator();
                    ui.label(format!("{} sections", picker.store().len()));
                    ui.separator();
                    ui.label(format!("{} near focus", picker.candidate_count()));
                    if let Some(f) = picker.focus() {
                        ui.separator();
                        ui.label(format!("Focus: {:.0}, {:.0}", f.x, f.y));
                    }
                }
                None => {
                    ui.label("No geometry");
                }
            }
            ui.separator();
            ui.label(format!("Fill: {}", app.config.fill_rule));
            for path in [&app.ui_state.geometry_path, &app.ui_state.image_path]
                .into_iter()
                .flatten()
            {
                if let Some(name) = path.file_name() {
                    ui.separator();
                    ui.label(name.to_string_lossy().to_string());
                }
            }
        });

        ui.add_space(2.0);
    });
}
