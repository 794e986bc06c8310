use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::consts::MIN_SURVEY_STEP;
use crate::geometry::{FillRule, GeometryStore, Point};

/// Result of sampling the source canvas on a regular grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoverageReport {
    pub samples: usize,
    /// Samples inside no section.
    pub uncovered: usize,
    /// Samples inside more than one section.
    pub overlapping: usize,
    /// Sample hits per section, indexed like the store's sections.
    pub hits: Vec<usize>,
}

impl CoverageReport {
    pub fn covered_fraction(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        (self.samples - self.uncovered) as f64 / self.samples as f64
    }

    pub fn overlap_fraction(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.overlapping as f64 / self.samples as f64
    }
}

/// Sample every `step` source units (cell centres) and record which sections
/// contain each sample. `progress` receives the number of finished rows.
pub fn survey_coverage(
    store: &GeometryStore,
    step: f64,
    rule: FillRule,
    progress: &(dyn Fn(usize) + Sync),
) -> CoverageReport {
    let size = store.source_size();
    if !is_valid_step(step) {
        return CoverageReport::default();
    }
    let cols = (size.width / step).floor() as usize;
    let rows = (size.height / step).floor() as usize;
    let sections = store.sections();
    let done = AtomicUsize::new(0);

    let per_row: Vec<CoverageReport> = (0..rows)
        .into_par_iter()
        .map(|row| {
            let mut report = CoverageReport {
                hits: vec![0; sections.len()],
                ..Default::default()
            };
            let y = (row as f64 + 0.5) * step;
            for col in 0..cols {
                let p = Point::new((col as f64 + 0.5) * step, y);
                let mut inside = 0;
                for (i, s) in sections.iter().enumerate() {
                    if s.outline.contains(p, rule) {
                        report.hits[i] += 1;
                        inside += 1;
                    }
                }
                report.samples += 1;
                match inside {
                    0 => report.uncovered += 1,
                    1 => {}
                    _ => report.overlapping += 1,
                }
            }
            progress(done.fetch_add(1, Ordering::Relaxed) + 1);
            report
        })
        .collect();

    per_row.into_iter().fold(
        CoverageReport {
            hits: vec![0; sections.len()],
            ..Default::default()
        },
        |mut acc, r| {
            acc.samples += r.samples;
            acc.uncovered += r.uncovered;
            acc.overlapping += r.overlapping;
            for (a, h) in acc.hits.iter_mut().zip(r.hits) {
                *a += h;
            }
            acc
        },
    )
}

/// Number of grid rows `survey_coverage` will process for `step`.
pub fn survey_rows(store: &GeometryStore, step: f64) -> usize {
    if !is_valid_step(step) {
        return 0;
    }
    (store.source_size().height / step).floor() as usize
}

/// Finite and no smaller than [`MIN_SURVEY_STEP`], so the grid stays countable.
pub fn is_valid_step(step: f64) -> bool {
    step.is_finite() && step >= MIN_SURVEY_STEP
}
