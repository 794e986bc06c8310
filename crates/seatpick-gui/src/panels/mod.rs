pub mod menu_bar;
pub mod overview;
pub mod status;
pub mod zoom;

/// Convert a core point to an egui offset.
pub(crate) fn to_vec2(p: seatpick_core::geometry::Point) -> egui::Vec2 {
    egui::vec2(p.x as f32, p.y as f32)
}
