use serde::{Deserialize, Serialize};

use crate::geometry::Section;
use crate::mapping::ZoomTransform;
use crate::picker::SectionPicker;

/// Straight (non-premultiplied) RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    /// Build from 8-bit channels and a 0..=1 alpha, CSS `rgba()` style.
    pub fn from_css(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self([r, g, b, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8])
    }
}

/// Fill colours for section outlines in the zoom view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub selected: Rgba,
    pub candidate: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            selected: Rgba::from_css(0, 200, 0, 0.8),
            candidate: Rgba::from_css(255, 215, 100, 0.5),
        }
    }
}

/// Drawing capabilities the zoom view needs from a host renderer.
///
/// Both calls receive the zoom transform so the renderer can map source
/// coordinates into its own surface.
pub trait SceneRenderer {
    /// Draw the stadium bitmap covering the whole source canvas.
    fn draw_image(&mut self, zoom: &ZoomTransform);

    /// Fill one section outline.
    fn fill_section(&mut self, zoom: &ZoomTransform, section: &Section, color: Rgba);
}

/// Draw the zoom view: bitmap first, then every candidate outline coloured by
/// selection state. Returns `false` and draws nothing while there is no focus.
pub fn render_zoom<R: SceneRenderer + ?Sized>(
    picker: &SectionPicker,
    palette: &Palette,
    renderer: &mut R,
) -> bool {
    let Some(zoom) = picker.zoom_transform() else {
        return false;
    };
    renderer.draw_image(&zoom);
    let selection = picker.selection_state();
    for (index, section) in picker.candidates() {
        let color = if selection.is_selected(index) {
            palette.selected
        } else {
            palette.candidate
        };
        renderer.fill_section(&zoom, section, color);
    }
    true
}
