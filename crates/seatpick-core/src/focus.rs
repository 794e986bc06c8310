use tracing::trace;

use crate::geometry::{Point, Size};
use crate::mapping::{overview_to_source, ContainFit};

/// Phase of a pointer event reported by the host surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// Result of feeding one pointer event to the [`FocusController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusUpdate {
    pub loupe_position: Point,
    pub focus: Option<Point>,
}

/// Tracks the loupe over the overview and the focus point it implies.
#[derive(Clone, Debug)]
pub struct FocusController {
    loupe_size: f64,
    source_size: Size,
    initial_loupe: Point,
    loupe_position: Point,
    focus: Option<Point>,
}

impl FocusController {
    pub fn new(loupe_size: f64, source_size: Size, initial_loupe: Point) -> Self {
        Self {
            loupe_size,
            source_size,
            initial_loupe,
            loupe_position: initial_loupe,
            focus: None,
        }
    }

    pub fn loupe_position(&self) -> Point {
        self.loupe_position
    }

    pub fn loupe_size(&self) -> f64 {
        self.loupe_size
    }

    pub fn focus(&self) -> Option<Point> {
        self.focus
    }

    /// Centre the loupe on the pointer, clamped inside the overview, and
    /// re-derive the focus. A loupe centre that maps outside the source canvas
    /// keeps the previous focus.
    pub fn on_pointer(&mut self, local: Point, overview: Size) -> FocusUpdate {
        let half = self.loupe_size / 2.0;
        let nx = clamp_axis(local.x - half, overview.width - self.loupe_size);
        let ny = clamp_axis(local.y - half, overview.height - self.loupe_size);
        self.loupe_position = Point::new(nx, ny);

        let center = Point::new(nx + half, ny + half);
        if let Some(p) = overview_to_source(center, overview, self.source_size) {
            self.focus = Some(p);
        }
        trace!(x = nx, y = ny, focus = ?self.focus, "Loupe moved");
        self.update()
    }

    /// Focus a source point directly, clamped onto the canvas, and move the
    /// loupe over it as far as the overview allows. The loupe stays put while
    /// the overview has no size.
    pub fn focus_on(&mut self, source: Point, overview: Size) -> FocusUpdate {
        let focus = Point::new(
            clamp_axis(source.x, self.source_size.width),
            clamp_axis(source.y, self.source_size.height),
        );
        if let Some(fit) = ContainFit::new(self.source_size, overview) {
            let half = self.loupe_size / 2.0;
            let view = fit.to_view(focus);
            self.loupe_position = Point::new(
                clamp_axis(view.x - half, overview.width - self.loupe_size),
                clamp_axis(view.y - half, overview.height - self.loupe_size),
            );
        }
        self.focus = Some(focus);
        self.update()
    }

    /// Dispatch a host pointer event. Only down and move phases move the loupe.
    pub fn on_pointer_event(
        &mut self,
        phase: PointerPhase,
        local: Point,
        overview: Size,
    ) -> FocusUpdate {
        match phase {
            PointerPhase::Down | PointerPhase::Move => self.on_pointer(local, overview),
            PointerPhase::Up => self.update(),
        }
    }

    pub fn reset(&mut self) {
        self.loupe_position = self.initial_loupe;
        self.focus = None;
    }

    fn update(&self) -> FocusUpdate {
        FocusUpdate {
            loupe_position: self.loupe_position,
            focus: self.focus,
        }
    }
}

/// Clamp to `[0, max]`, pinning at 0 when `max` is negative (overview smaller
/// than the loupe).
fn clamp_axis(value: f64, max: f64) -> f64 {
    value.min(max).max(0.0)
}
