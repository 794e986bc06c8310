//! Transforms between the three coordinate spaces of the picker: the laid-out
//! overview, the fixed source canvas, and the zoom view.

use crate::geometry::{Point, Size};

/// "Contain" placement of the source canvas inside a view: uniform scale to
/// fit, centred on the axis with slack, never cropped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainFit {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    source: Size,
}

impl ContainFit {
    /// Returns `None` when either size has a zero, negative, or non-finite dimension.
    pub fn new(source: Size, view: Size) -> Option<Self> {
        if !source.is_positive() || !view.is_positive() {
            return None;
        }
        let (scale, offset_x, offset_y) = if view.aspect_ratio() > source.aspect_ratio() {
            // Wider than the source: fit height, centre horizontally.
            let scale = view.height / source.height;
            (scale, (view.width - source.width * scale) / 2.0, 0.0)
        } else {
            let scale = view.width / source.width;
            (scale, 0.0, (view.height - source.height * scale) / 2.0)
        };
        Some(Self {
            scale,
            offset_x,
            offset_y,
            source,
        })
    }

    /// View-local point to source coordinates, `None` outside the canvas.
    pub fn to_source(&self, p: Point) -> Option<Point> {
        let sx = (p.x - self.offset_x) / self.scale;
        let sy = (p.y - self.offset_y) / self.scale;
        if sx < 0.0 || sy < 0.0 || sx > self.source.width || sy > self.source.height {
            return None;
        }
        Some(Point::new(sx, sy))
    }

    /// Source point to view-local coordinates. Unchecked.
    pub fn to_view(&self, p: Point) -> Point {
        Point::new(
            p.x * self.scale + self.offset_x,
            p.y * self.scale + self.offset_y,
        )
    }

    /// Size of the displayed content rectangle within the view.
    pub fn content_size(&self) -> Size {
        Size::new(
            self.source.width * self.scale,
            self.source.height * self.scale,
        )
    }
}

/// Map an overview-local point onto the source canvas.
pub fn overview_to_source(p: Point, view: Size, source: Size) -> Option<Point> {
    ContainFit::new(source, view)?.to_source(p)
}

/// Zoom view placement: source content scaled by `scale` and translated so
/// that `focus` sits at the centre of a square view of edge `view_size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    pub focus: Point,
    pub view_size: f64,
    pub scale: f64,
}

impl ZoomTransform {
    pub fn new(focus: Point, view_size: f64, scale: f64) -> Self {
        Self {
            focus,
            view_size,
            scale,
        }
    }

    /// Zoom-view-local point to source coordinates. Not clamped: taps near
    /// the canvas edge may land outside it.
    pub fn to_source(&self, p: Point) -> Point {
        let half = self.view_size / 2.0;
        Point::new(
            self.focus.x + (p.x - half) / self.scale,
            self.focus.y + (p.y - half) / self.scale,
        )
    }

    pub fn to_view(&self, p: Point) -> Point {
        let half = self.view_size / 2.0;
        Point::new(
            half + (p.x - self.focus.x) * self.scale,
            half + (p.y - self.focus.y) * self.scale,
        )
    }
}

pub fn zoom_tap_to_source(tap: Point, focus: Point, view_size: f64, scale: f64) -> Point {
    ZoomTransform::new(focus, view_size, scale).to_source(tap)
}
