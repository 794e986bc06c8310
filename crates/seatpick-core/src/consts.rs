/// Width of the source canvas the stadium map and section outlines are authored in.
pub const SOURCE_WIDTH: f64 = 2816.0;

/// Height of the source canvas.
pub const SOURCE_HEIGHT: f64 = 2641.0;

/// Height in pixels of the overview container.
pub const DEFAULT_OVERVIEW_HEIGHT: f64 = 200.0;

/// Edge length in pixels of the square loupe indicator.
pub const DEFAULT_LOUPE_SIZE: f64 = 50.0;

/// Edge length in pixels of the square zoom view.
pub const DEFAULT_ZOOM_VIEW_SIZE: f64 = 250.0;

/// Source-to-zoom-view scale factor. Below 1.0 because the source canvas is
/// much larger than the zoom view; it is still far larger than the overview scale.
pub const DEFAULT_ZOOM_SCALE: f64 = 0.3;

/// Margin (source units) added around each section's bounding box when
/// deciding whether it is near the focus point.
pub const DEFAULT_ZOOM_RADIUS: f64 = 200.0;

/// Loupe top-left before the first pointer event.
pub const DEFAULT_INITIAL_LOUPE: (f64, f64) = (40.0, 40.0);

/// Maximum distance (source units) between a flattened curve and the true curve.
pub const FLATTEN_TOLERANCE: f64 = 0.25;

/// Upper bound on segments emitted for a single Bezier curve.
pub const MAX_CURVE_SEGMENTS: usize = 64;

/// Upper bound on segments emitted for a single arc. Full circles up to a
/// radius of several hundred thousand source units stay within
/// [`FLATTEN_TOLERANCE`] below it.
pub const MAX_ARC_SEGMENTS: usize = 4096;

/// Smallest grid spacing (source units) accepted by the coverage survey.
pub const MIN_SURVEY_STEP: f64 = 0.01;

/// Small epsilon to avoid division by zero in floating-point comparisons.
pub const EPSILON: f64 = 1e-9;
