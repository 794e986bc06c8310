use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, SeatpickError};
use crate::geometry::{BoundingBox, Outline, Size};

/// One section as stored in the geometry resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub id: String,
    /// SVG path data of the outline, in source coordinates.
    #[serde(rename = "d")]
    pub outline: String,
    /// Precomputed bounds of the outline, in source coordinates.
    #[serde(rename = "box")]
    pub bounding_box: BoundingBox,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StadiumInfo {
    #[serde(rename = "viewBox")]
    pub view_box: String,
}

/// Top-level layout of the geometry JSON file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometryFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stadium: Option<StadiumInfo>,
    pub sections: Vec<SectionRecord>,
}

impl GeometryFile {
    /// Source canvas size from the `viewBox`, or `None` if the file has no stadium block.
    pub fn canvas_size(&self) -> Result<Option<Size>> {
        match self.stadium {
            Some(ref stadium) => parse_view_box(&stadium.view_box).map(Some),
            None => Ok(None),
        }
    }
}

/// Parse `"min-x min-y width height"` (whitespace and/or comma separated).
pub fn parse_view_box(view_box: &str) -> Result<Size> {
    let values = view_box
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| SeatpickError::InvalidViewBox(view_box.to_string()))?;

    let &[_, _, width, height] = values.as_slice() else {
        return Err(SeatpickError::InvalidViewBox(view_box.to_string()));
    };
    let size = Size::new(width, height);
    if !size.is_positive() {
        return Err(SeatpickError::InvalidDimensions { width, height });
    }
    Ok(size)
}

/// A selectable stadium section with its parsed outline.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub outline: Outline,
    pub bounding_box: BoundingBox,
}

/// The immutable set of sections, parsed once.
#[derive(Clone, Debug)]
pub struct GeometryStore {
    source_size: Size,
    sections: Vec<Section>,
    skipped: usize,
}

impl GeometryStore {
    /// Parse every record's outline, dropping records whose path data is
    /// malformed. Input order is preserved for the rest.
    pub fn load<'a, I>(records: I, source_size: Size) -> Self
    where
        I: IntoIterator<Item = &'a SectionRecord>,
    {
        let mut sections = Vec::new();
        let mut skipped = 0;
        for record in records {
            match Outline::parse(&record.outline) {
                Ok(outline) => sections.push(Section {
                    id: record.id.clone(),
                    outline,
                    bounding_box: record.bounding_box,
                }),
                Err(e) => {
                    debug!(id = %record.id, error = %e, "Skipping section with malformed outline");
                    skipped += 1;
                }
            }
        }
        info!(
            loaded = sections.len(),
            skipped,
            width = source_size.width,
            height = source_size.height,
            "Geometry loaded"
        );
        Self {
            source_size,
            sections,
            skipped,
        }
    }

    /// Build a store from a parsed file. `fallback_size` is used when the file
    /// does not declare a `viewBox`.
    pub fn from_file(file: &GeometryFile, fallback_size: Size) -> Result<Self> {
        let size = file.canvas_size()?.unwrap_or(fallback_size);
        if !size.is_positive() {
            return Err(SeatpickError::InvalidDimensions {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self::load(&file.sections, size))
    }

    pub fn from_json_str(json: &str, fallback_size: Size) -> Result<Self> {
        let file: GeometryFile = serde_json::from_str(json)?;
        Self::from_file(&file, fallback_size)
    }

    pub fn open(path: &Path, fallback_size: Size) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json, fallback_size)
    }

    pub fn source_size(&self) -> Size {
        self.source_size
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of records dropped because their outline did not parse.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Sections whose supplied box differs from the flattened outline's
    /// bounds by more than `tolerance` on any edge, with the derived bounds.
    pub fn box_mismatches(&self, tolerance: f64) -> Vec<(&Section, Option<BoundingBox>)> {
        self.sections
            .iter()
            .filter_map(|s| match s.outline.bounds() {
                Some(b) if b.max_edge_delta(&s.bounding_box) <= tolerance => None,
                derived => Some((s, derived)),
            })
            .collect()
    }
}
