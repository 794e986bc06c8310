use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_INITIAL_LOUPE, DEFAULT_LOUPE_SIZE, DEFAULT_OVERVIEW_HEIGHT, DEFAULT_ZOOM_RADIUS,
    DEFAULT_ZOOM_SCALE, DEFAULT_ZOOM_VIEW_SIZE, SOURCE_HEIGHT, SOURCE_WIDTH,
};
use crate::error::{Result, SeatpickError};
use crate::geometry::{FillRule, Point, Size};

/// Tunable parameters of the section picker.
///
/// Every field has a default matching the shipped stadium map, so a TOML file
/// only needs to name the values it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Height of the overview container in pixels. Width follows the host layout.
    pub overview_height: f64,
    /// Edge length of the square loupe indicator.
    pub loupe_size: f64,
    /// Edge length of the square zoom view.
    pub zoom_view_size: f64,
    /// Source-to-zoom-view scale factor.
    pub zoom_scale: f64,
    /// Margin around section boxes for the candidate filter, in source units.
    pub zoom_radius: f64,
    /// Source canvas width, used when the geometry file carries no viewBox.
    pub source_width: f64,
    /// Source canvas height, used when the geometry file carries no viewBox.
    pub source_height: f64,
    pub fill_rule: FillRule,
    /// Loupe top-left before the first pointer event, `[x, y]`.
    pub initial_loupe: [f64; 2],
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            overview_height: DEFAULT_OVERVIEW_HEIGHT,
            loupe_size: DEFAULT_LOUPE_SIZE,
            zoom_view_size: DEFAULT_ZOOM_VIEW_SIZE,
            zoom_scale: DEFAULT_ZOOM_SCALE,
            zoom_radius: DEFAULT_ZOOM_RADIUS,
            source_width: SOURCE_WIDTH,
            source_height: SOURCE_HEIGHT,
            fill_rule: FillRule::default(),
            initial_loupe: [DEFAULT_INITIAL_LOUPE.0, DEFAULT_INITIAL_LOUPE.1],
        }
    }
}

impl PickerConfig {
    pub fn source_size(&self) -> Size {
        Size::new(self.source_width, self.source_height)
    }

    pub fn initial_loupe(&self) -> Point {
        Point::new(self.initial_loupe[0], self.initial_loupe[1])
    }

    /// Reject values that would make the coordinate maps degenerate.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("overview_height", self.overview_height),
            ("loupe_size", self.loupe_size),
            ("zoom_view_size", self.zoom_view_size),
            ("zoom_scale", self.zoom_scale),
            ("source_width", self.source_width),
            ("source_height", self.source_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SeatpickError::Config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if !(self.zoom_radius.is_finite() && self.zoom_radius >= 0.0) {
            return Err(SeatpickError::Config(format!(
                "zoom_radius must be non-negative, got {}",
                self.zoom_radius
            )));
        }
        Ok(())
    }
}
