use std::sync::Arc;

use tracing::info;

use crate::config::PickerConfig;
use crate::error::Result;
use crate::focus::{FocusController, FocusUpdate, PointerPhase};
use crate::geometry::{GeometryStore, Point, Section, Size};
use crate::mapping::{ContainFit, ZoomTransform};
use crate::selection::{CandidateCache, Selection, SelectionController};

/// Caption shown while nothing is selected.
pub const NO_SELECTION_CAPTION: &str = "Pick a section in the zoom view";

/// Interactive state of the stadium section picker: overview layout, loupe,
/// focus, candidate set, and selection over one shared geometry store.
#[derive(Clone, Debug)]
pub struct SectionPicker {
    store: Arc<GeometryStore>,
    config: PickerConfig,
    overview_size: Size,
    focus: FocusController,
    candidates: CandidateCache,
    selection: SelectionController,
}

impl SectionPicker {
    pub fn new(store: Arc<GeometryStore>, config: PickerConfig) -> Result<Self> {
        config.validate()?;
        let focus = FocusController::new(
            config.loupe_size,
            store.source_size(),
            config.initial_loupe(),
        );
        Ok(Self {
            store,
            config,
            overview_size: Size::default(),
            focus,
            candidates: CandidateCache::default(),
            selection: SelectionController::default(),
        })
    }

    pub fn store(&self) -> &Arc<GeometryStore> {
        &self.store
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Record the measured overview size. Takes effect on the next pointer event.
    pub fn set_overview_size(&mut self, size: Size) {
        self.overview_size = size;
    }

    pub fn overview_size(&self) -> Size {
        self.overview_size
    }

    /// Placement of the source canvas in the overview, once laid out.
    pub fn overview_fit(&self) -> Option<ContainFit> {
        ContainFit::new(self.store.source_size(), self.overview_size)
    }

    /// Feed a pointer event from the overview surface.
    pub fn pointer(&mut self, phase: PointerPhase, local: Point) -> FocusUpdate {
        let update = self
            .focus
            .on_pointer_event(phase, local, self.overview_size);
        self.candidates
            .get(self.store.sections(), update.focus, self.config.zoom_radius);
        update
    }

    /// Focus a source point without a pointer, e.g. from the command line.
    pub fn focus_on(&mut self, source: Point) -> FocusUpdate {
        let update = self.focus.focus_on(source, self.overview_size);
        self.candidates
            .get(self.store.sections(), update.focus, self.config.zoom_radius);
        update
    }

    /// Feed a tap inside the zoom view; returns the resulting selection.
    pub fn zoom_tap(&mut self, local: Point) -> Option<&Section> {
        let zoom = self.zoom_transform();
        let selection = self.selection.on_zoom_tap(
            local,
            zoom,
            self.store.sections(),
            self.candidates.current(),
            self.config.fill_rule,
        );
        selection.index().and_then(|i| self.store.get(i))
    }

    /// Zoom view placement for the current focus.
    pub fn zoom_transform(&self) -> Option<ZoomTransform> {
        self.focus.focus().map(|f| {
            ZoomTransform::new(f, self.config.zoom_view_size, self.config.zoom_scale)
        })
    }

    pub fn loupe_position(&self) -> Point {
        self.focus.loupe_position()
    }

    pub fn focus(&self) -> Option<Point> {
        self.focus.focus()
    }

    /// Sections near the focus, in stored order.
    pub fn candidates(&self) -> impl Iterator<Item = (usize, &Section)> + '_ {
        self.candidates
            .current()
            .iter()
            .filter_map(|&i| self.store.get(i).map(|s| (i, s)))
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.current().len()
    }

    /// How many times the candidate set has been rebuilt since creation.
    pub fn candidate_recomputes(&self) -> usize {
        self.candidates.recomputes()
    }

    pub fn selection_state(&self) -> Selection {
        self.selection.selection()
    }

    pub fn selection(&self) -> Option<&Section> {
        self.selection
            .selection()
            .index()
            .and_then(|i| self.store.get(i))
    }

    pub fn caption(&self) -> String {
        match self.selection() {
            Some(section) => format!("Selected: {}", section.id),
            None => NO_SELECTION_CAPTION.to_string(),
        }
    }

    /// Return loupe, focus and selection to their initial state, as if the
    /// picker had just been created. Overview size and geometry are kept.
    pub fn reset(&mut self) {
        self.focus.reset();
        self.candidates.invalidate();
        self.selection.clear();
        info!("Picker reset");
    }
}
