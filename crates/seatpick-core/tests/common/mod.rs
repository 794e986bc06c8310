#![allow(dead_code)]

use std::sync::Arc;

use seatpick_core::config::PickerConfig;
use seatpick_core::geometry::{BoundingBox, GeometryStore, SectionRecord, Size};
use seatpick_core::picker::SectionPicker;

/// Axis-aligned square section drawn clockwise with relative commands.
pub fn square(id: &str, x: f64, y: f64, size: f64) -> SectionRecord {
    SectionRecord {
        id: id.to_string(),
        outline: format!("M {x} {y} h {size} v {size} h -{size} Z"),
        bounding_box: BoundingBox::new(x, y, size, size),
    }
}

/// Record whose outline cannot be parsed.
pub fn malformed(id: &str) -> SectionRecord {
    SectionRecord {
        id: id.to_string(),
        outline: "M 0 0 L 10".to_string(),
        bounding_box: BoundingBox::new(0.0, 0.0, 10.0, 10.0),
    }
}

/// Two adjacent 100x100 squares, A at the origin and B to its right, plus a
/// far-away section C, on a 1000x1000 canvas.
pub fn adjacent_store() -> GeometryStore {
    let records = vec![
        square("A", 0.0, 0.0, 100.0),
        square("B", 100.0, 0.0, 100.0),
        square("C", 800.0, 800.0, 100.0),
    ];
    GeometryStore::load(&records, Size::new(1000.0, 1000.0))
}

/// Picker over `adjacent_store` with a 1000x1000 overview, so overview pixels
/// and source units coincide.
pub fn unit_picker() -> SectionPicker {
    let mut picker = SectionPicker::new(Arc::new(adjacent_store()), PickerConfig::default())
        .expect("default config is valid");
    picker.set_overview_size(Size::new(1000.0, 1000.0));
    picker
}

pub const FIXTURE_JSON: &str = r#"{
    "stadium": { "viewBox": "0 0 1000 800" },
    "sections": [
        { "id": "101", "d": "M 0 0 L 100 0 L 100 100 L 0 100 Z", "box": { "x": 0, "y": 0, "width": 100, "height": 100 } },
        { "id": "102", "d": "M 100 0 l 100 0 l 0 100 l -100 0 z", "box": { "x": 100, "y": 0, "width": 100, "height": 100 } },
        { "id": "bad", "d": "L 5 5 Z", "box": { "x": 0, "y": 0, "width": 5, "height": 5 } },
        { "id": "103", "d": "M 300 300 C 300 400 400 400 400 300 Z", "box": { "x": 300, "y": 300, "width": 100, "height": 75 } }
    ]
}"#;
