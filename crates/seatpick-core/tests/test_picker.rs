mod common;

use std::sync::Arc;

use seatpick_core::config::PickerConfig;
use seatpick_core::error::SeatpickError;
use seatpick_core::focus::PointerPhase;
use seatpick_core::geometry::{GeometryStore, Point, Size};
use seatpick_core::picker::{SectionPicker, NO_SELECTION_CAPTION};
use seatpick_core::selection::Selection;

use common::{unit_picker, FIXTURE_JSON};

#[test]
fn test_new_picker_has_no_focus_and_no_selection() {
    let picker = unit_picker();
    assert_eq!(picker.loupe_position(), Point::new(40.0, 40.0));
    assert!(picker.focus().is_none());
    assert!(picker.zoom_transform().is_none());
    assert_eq!(picker.candidate_count(), 0);
    assert_eq!(picker.caption(), NO_SELECTION_CAPTION);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = PickerConfig {
        zoom_scale: 0.0,
        ..PickerConfig::default()
    };
    let store = Arc::new(common::adjacent_store());
    let err = SectionPicker::new(store, config).unwrap_err();
    assert!(matches!(err, SeatpickError::Config(_)));
}

#[test]
fn test_pointer_then_tap_selects_section() {
    let mut picker = unit_picker();
    let update = picker.pointer(PointerPhase::Down, Point::new(50.0, 50.0));
    assert_eq!(update.loupe_position, Point::new(25.0, 25.0));
    assert_eq!(picker.focus(), Some(Point::new(50.0, 50.0)));

    let ids: Vec<&str> = picker.candidates().map(|(_, s)| s.id.as_str()).collect();
    assert_eq!(ids, ["A", "B"]);

    let selected = picker.zoom_tap(Point::new(128.0, 125.0)).map(|s| s.id.clone());
    assert_eq!(selected.as_deref(), Some("A"));
    assert_eq!(picker.selection_state(), Selection::Selected(0));
    assert_eq!(picker.caption(), "Selected: A");

    let selected = picker.zoom_tap(Point::new(155.0, 125.0)).map(|s| s.id.clone());
    assert_eq!(selected.as_deref(), Some("B"));
    assert_eq!(picker.caption(), "Selected: B");
}

#[test]
fn test_tap_in_empty_area_clears_selection() {
    let mut picker = unit_picker();
    picker.pointer(PointerPhase::Down, Point::new(50.0, 50.0));
    picker.zoom_tap(Point::new(128.0, 125.0));
    assert!(picker.selection().is_some());

    assert!(picker.zoom_tap(Point::new(125.0, 155.0)).is_none());
    assert_eq!(picker.selection_state(), Selection::Unselected);
    assert_eq!(picker.caption(), NO_SELECTION_CAPTION);
}

#[test]
fn test_repeat_tap_keeps_selection() {
    let mut picker = unit_picker();
    picker.pointer(PointerPhase::Down, Point::new(50.0, 50.0));

    for _ in 0..2 {
        let selected = picker.zoom_tap(Point::new(128.0, 125.0)).map(|s| s.id.clone());
        assert_eq!(selected.as_deref(), Some("A"));
        assert_eq!(picker.selection_state(), Selection::Selected(0));
        assert_eq!(picker.caption(), "Selected: A");
    }
}

#[test]
fn test_tap_before_focus_selects_nothing() {
    let mut picker = unit_picker();
    assert!(picker.zoom_tap(Point::new(125.0, 125.0)).is_none());
    assert_eq!(picker.selection_state(), Selection::Unselected);
}

#[test]
fn test_candidates_follow_focus() {
    let mut picker = unit_picker();
    picker.pointer(PointerPhase::Down, Point::new(850.0, 850.0));
    let ids: Vec<&str> = picker.candidates().map(|(_, s)| s.id.as_str()).collect();
    assert_eq!(ids, ["C"]);

    // Selection survives a focus move even when the section leaves the
    // candidate set.
    picker.zoom_tap(Point::new(125.0, 125.0));
    assert_eq!(picker.caption(), "Selected: C");
    picker.pointer(PointerPhase::Move, Point::new(50.0, 50.0));
    assert_eq!(picker.caption(), "Selected: C");
    assert_eq!(picker.candidate_count(), 2);
}

#[test]
fn test_candidates_recomputed_only_when_focus_changes() {
    let mut picker = unit_picker();
    picker.pointer(PointerPhase::Down, Point::new(50.0, 50.0));
    let after_down = picker.candidate_recomputes();

    picker.pointer(PointerPhase::Up, Point::new(400.0, 400.0));
    picker.pointer(PointerPhase::Move, Point::new(50.0, 50.0));
    assert_eq!(picker.candidate_recomputes(), after_down);

    picker.pointer(PointerPhase::Move, Point::new(60.0, 50.0));
    assert_eq!(picker.candidate_recomputes(), after_down + 1);
}

#[test]
fn test_pointer_before_layout_leaves_focus_unset() {
    let store = Arc::new(common::adjacent_store());
    let mut picker = SectionPicker::new(store, PickerConfig::default()).unwrap();
    picker.pointer(PointerPhase::Down, Point::new(50.0, 50.0));
    assert!(picker.focus().is_none());

    picker.set_overview_size(Size::new(1000.0, 1000.0));
    picker.pointer(PointerPhase::Move, Point::new(50.0, 50.0));
    assert!(picker.focus().is_some());
    assert!(picker.overview_fit().is_some());
}

#[test]
fn test_reset_returns_to_initial_state() {
    let mut picker = unit_picker();
    picker.pointer(PointerPhase::Down, Point::new(50.0, 50.0));
    picker.zoom_tap(Point::new(128.0, 125.0));

    picker.reset();
    assert_eq!(picker.loupe_position(), Point::new(40.0, 40.0));
    assert!(picker.focus().is_none());
    assert_eq!(picker.candidate_count(), 0);
    assert_eq!(picker.caption(), NO_SELECTION_CAPTION);
    assert_eq!(picker.overview_size(), Size::new(1000.0, 1000.0));
}

#[test]
fn test_picker_over_fixture_file() {
    let store = GeometryStore::from_json_str(FIXTURE_JSON, Size::new(10.0, 10.0)).unwrap();
    let mut picker = SectionPicker::new(Arc::new(store), PickerConfig::default()).unwrap();
    picker.set_overview_size(Size::new(1000.0, 800.0));

    picker.pointer(PointerPhase::Down, Point::new(350.0, 330.0));
    let selected = picker.zoom_tap(Point::new(125.0, 125.0)).map(|s| s.id.clone());
    assert_eq!(selected.as_deref(), Some("103"));
}

#[test]
fn test_focus_on_then_tap() {
    let mut picker = unit_picker();
    picker.focus_on(Point::new(150.0, 50.0));
    assert_eq!(picker.candidate_count(), 2);
    let selected = picker.zoom_tap(Point::new(125.0, 125.0)).map(|s| s.id.clone());
    assert_eq!(selected.as_deref(), Some("B"));
}
