use seatpick_core::geometry::Point;
use seatpick_core::selection::Selection;

/// What the zoom texture was last rendered for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomKey {
    pub focus: Point,
    pub selection: Selection,
}

/// Textures for the overview and zoom panes.
#[derive(Default)]
pub struct ViewportState {
    /// Stadium bitmap, uploaded once per load.
    pub overview_texture: Option<egui::TextureHandle>,
    pub zoom_texture: Option<egui::TextureHandle>,
    pub zoom_key: Option<ZoomKey>,
}

impl ViewportState {
    /// Force the zoom view to re-render on the next frame.
    pub fn invalidate_zoom(&mut self) {
        self.zoom_key = None;
    }
}
