use tracing::debug;

use crate::geometry::{BoundingBox, FillRule, Point, Section};
use crate::mapping::ZoomTransform;

/// True when `focus` lies inside `bbox` grown by `radius` on every side.
pub fn is_near_focus(bbox: &BoundingBox, focus: Point, radius: f64) -> bool {
    bbox.expanded(radius).contains(focus)
}

/// Indices of the sections near `focus`, in stored order.
pub fn filter_candidates(sections: &[Section], focus: Point, radius: f64) -> Vec<usize> {
    sections
        .iter()
        .enumerate()
        .filter(|(_, s)| is_near_focus(&s.bounding_box, focus, radius))
        .map(|(i, _)| i)
        .collect()
}

/// First candidate, in the order given, whose outline contains `point`.
pub fn hit_test(
    point: Point,
    sections: &[Section],
    candidates: &[usize],
    rule: FillRule,
) -> Option<usize> {
    candidates
        .iter()
        .copied()
        .find(|&i| sections.get(i).is_some_and(|s| s.outline.contains(point, rule)))
}

/// Candidate set memoized on the focus value.
#[derive(Clone, Debug, Default)]
pub struct CandidateCache {
    key: Option<Point>,
    indices: Vec<usize>,
    recomputes: usize,
}

impl CandidateCache {
    /// Candidates for `focus`, recomputed only when the focus differs from
    /// the last call. No focus means no candidates.
    pub fn get(&mut self, sections: &[Section], focus: Option<Point>, radius: f64) -> &[usize] {
        if focus != self.key {
            self.indices = match focus {
                Some(f) => filter_candidates(sections, f, radius),
                None => Vec::new(),
            };
            self.key = focus;
            self.recomputes += 1;
        }
        &self.indices
    }

    /// Candidates last computed, without touching the cache.
    pub fn current(&self) -> &[usize] {
        &self.indices
    }

    /// Drop the memoized result, e.g. after the section set changes.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.indices.clear();
    }

    /// How many times the candidate set has been rebuilt.
    pub fn recomputes(&self) -> usize {
        self.recomputes
    }
}

/// Selection state of the picker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unselected,
    /// Index into the geometry store's sections.
    Selected(usize),
}

impl Selection {
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Unselected => None,
            Self::Selected(i) => Some(*i),
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        *self == Self::Selected(index)
    }
}

/// Turns taps in the zoom view into section selections.
#[derive(Clone, Debug, Default)]
pub struct SelectionController {
    selection: Selection,
}

impl SelectionController {
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Map the tap back to source space and select the first candidate
    /// containing it. A tap that hits nothing, or arrives before any focus
    /// exists, clears the selection.
    pub fn on_zoom_tap(
        &mut self,
        tap: Point,
        zoom: Option<ZoomTransform>,
        sections: &[Section],
        candidates: &[usize],
        rule: FillRule,
    ) -> Selection {
        self.selection = match zoom {
            Some(zoom) => {
                let source = zoom.to_source(tap);
                let hit = hit_test(source, sections, candidates, rule);
                debug!(x = source.x, y = source.y, hit = ?hit.map(|i| &sections[i].id), "Zoom tap");
                hit.map_or(Selection::Unselected, Selection::Selected)
            }
            None => Selection::Unselected,
        };
        self.selection
    }

    pub fn clear(&mut self) {
        self.selection = Selection::Unselected;
    }
}
