use seatpick_core::focus::PointerPhase;
use seatpick_core::geometry::{Point, Size};

use super::to_vec2;
use crate::app::SeatpickApp;

const BACKGROUND: egui::Color32 = egui::Color32::from_gray(30);
const OUTLINE: egui::Color32 = egui::Color32::from_gray(110);
const LOUPE_STROKE: egui::Color32 = egui::Color32::from_rgb(230, 40, 40);

/// Full-width strip showing the whole stadium with the loupe on top.
pub fn show(ui: &mut egui::Ui, app: &mut SeatpickApp) {
    let size = egui::vec2(ui.available_width(), app.config.overview_height as f32);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
    ui.painter().rect_filled(rect, 0.0, BACKGROUND);

    let Some(picker) = app.picker.as_mut() else {
        show_placeholder(ui, rect);
        return;
    };
    picker.set_overview_size(Size::new(f64::from(rect.width()), f64::from(rect.height())));

    if let Some(pos) = response.interact_pointer_pos() {
        let phase = ui.input(|i| {
            if i.pointer.any_pressed() {
                PointerPhase::Down
            } else if i.pointer.any_released() {
                PointerPhase::Up
            } else {
                PointerPhase::Move
            }
        });
        let local = pos - rect.min;
        picker.pointer(phase, Point::new(f64::from(local.x), f64::from(local.y)));
    }

    if let Some(fit) = picker.overview_fit() {
        let content = egui::Rect::from_min_size(
            rect.min + egui::vec2(fit.offset_x as f32, fit.offset_y as f32),
            to_vec2(Point::new(fit.content_size().width, fit.content_size().height)),
        );
        match &app.viewport.overview_texture {
            Some(texture) => {
                ui.painter().image(
                    texture.id(),
                    content,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
            None => {
                // No bitmap: sketch the section boxes instead.
                let stroke = egui::Stroke::new(1.0, OUTLINE);
                for section in picker.store().sections() {
                    let b = section.bounding_box;
                    let min = fit.to_view(Point::new(b.x, b.y));
                    let max = fit.to_view(Point::new(b.right(), b.bottom()));
                    let r = egui::Rect::from_min_max(rect.min + to_vec2(min), rect.min + to_vec2(max));
                    ui.painter().rect_stroke(r, 0.0, stroke, egui::StrokeKind::Middle);
                }
            }
        }
    }

    let loupe = egui::Rect::from_min_size(
        rect.min + to_vec2(picker.loupe_position()),
        egui::Vec2::splat(app.config.loupe_size as f32),
    );
    ui.painter().rect_stroke(
        loupe,
        0.0,
        egui::Stroke::new(2.0, LOUPE_STROKE),
        egui::StrokeKind::Inside,
    );
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Open a geometry file to begin",
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
}
