use seatpick_core::geometry::Point;
use seatpick_core::raster::PixelCanvas;
use seatpick_core::scene::render_zoom;
use tracing::warn;

use crate::app::SeatpickApp;
use crate::convert::rgba_to_color_image;
use crate::states::ZoomKey;

/// Square magnified view around the focus, plus the selection caption.
pub fn show(ui: &mut egui::Ui, app: &mut SeatpickApp) {
    let edge = app.config.zoom_view_size as f32;

    ui.vertical_centered(|ui| {
        let (rect, response) = ui.allocate_exact_size(egui::Vec2::splat(edge), egui::Sense::click());
        ui.painter().rect_filled(rect, 0.0, egui::Color32::BLACK);

        let Some(picker) = app.picker.as_mut() else {
            return;
        };

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - rect.min;
                picker.zoom_tap(Point::new(f64::from(local.x), f64::from(local.y)));
            }
        }

        refresh_texture(ui.ctx(), app);

        if let Some(texture) = &app.viewport.zoom_texture {
            ui.painter().image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }

        if let Some(picker) = &app.picker {
            ui.add_space(6.0);
            ui.label(egui::RichText::new(picker.caption()).size(16.0));
        }
    });
}

/// Re-render the zoom texture when the focus or selection has changed.
fn refresh_texture(ctx: &egui::Context, app: &mut SeatpickApp) {
    let Some(picker) = &app.picker else {
        return;
    };
    let Some(focus) = picker.focus() else {
        app.viewport.zoom_texture = None;
        app.viewport.zoom_key = None;
        return;
    };
    let key = ZoomKey {
        focus,
        selection: picker.selection_state(),
    };
    if app.viewport.zoom_key == Some(key) && app.viewport.zoom_texture.is_some() {
        return;
    }

    let edge = app.config.zoom_view_size.round().max(1.0) as u32;
    let mut canvas = match PixelCanvas::new(
        edge,
        edge,
        picker.store().source_size(),
        app.config.fill_rule,
    ) {
        Ok(canvas) => canvas,
        Err(e) => {
            warn!("Zoom view not rendered: {e}");
            return;
        }
    };
    if let Some(bitmap) = app.bitmap.as_deref() {
        canvas = canvas.with_bitmap(bitmap);
    }
    render_zoom(picker, &app.palette, &mut canvas);
    let image = rgba_to_color_image(&canvas.to_image());

    match &mut app.viewport.zoom_texture {
        Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
        None => {
            app.viewport.zoom_texture =
                Some(ctx.load_texture("zoom", image, egui::TextureOptions::NEAREST));
        }
    }
    app.viewport.zoom_key = Some(key);
}
