mod common;

use std::sync::Arc;

use image::RgbaImage;

use seatpick_core::config::PickerConfig;
use seatpick_core::focus::PointerPhase;
use seatpick_core::geometry::{
    BoundingBox, FillRule, GeometryStore, Point, Section, SectionRecord, Size,
};
use seatpick_core::mapping::ZoomTransform;
use seatpick_core::picker::SectionPicker;
use seatpick_core::raster::PixelCanvas;
use seatpick_core::scene::{render_zoom, Palette, Rgba, SceneRenderer};

use common::unit_picker;

const BLACK: [u8; 4] = [0, 0, 0, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];
const CANDIDATE_OVER_BLACK: [u8; 4] = [128, 108, 50, 255];
const SELECTED_OVER_BLACK: [u8; 4] = [0, 160, 0, 255];

fn canvas(picker: &SectionPicker) -> PixelCanvas<'static> {
    PixelCanvas::new(250, 250, picker.store().source_size(), FillRule::NonZero).unwrap()
}

/// Channel-wise comparison allowing for rounding in the blend pipeline.
fn close(actual: [u8; 4], expected: [u8; 4]) -> bool {
    actual
        .iter()
        .zip(expected)
        .all(|(&a, e)| a.abs_diff(e) <= 2)
}

fn assert_pixel(img: &RgbaImage, x: u32, y: u32, expected: [u8; 4]) {
    let actual = img.get_pixel(x, y).0;
    assert!(close(actual, expected), "pixel ({x}, {y}) is {actual:?}, expected {expected:?}");
}

#[test]
fn test_default_palette_colours() {
    let palette = Palette::default();
    assert_eq!(palette.selected, Rgba([0, 200, 0, 204]));
    assert_eq!(palette.candidate, Rgba([255, 215, 100, 128]));
}

#[test]
fn test_nothing_drawn_without_focus() {
    let picker = unit_picker();
    let mut target = canvas(&picker);
    assert!(!render_zoom(&picker, &Palette::default(), &mut target));
    assert!(target.to_image().pixels().all(|p| p.0 == BLACK));
}

#[test]
fn test_candidates_filled_around_focus() {
    let mut picker = unit_picker();
    picker.pointer(PointerPhase::Down, Point::new(50.0, 50.0));
    let mut target = canvas(&picker);
    assert!(render_zoom(&picker, &Palette::default(), &mut target));
    let img = target.to_image();

    // A covers view pixels 110..140 on both axes, B continues to 170.
    assert_pixel(&img, 120, 120, CANDIDATE_OVER_BLACK);
    assert_pixel(&img, 150, 120, CANDIDATE_OVER_BLACK);
    assert_eq!(img.get_pixel(5, 5).0, BLACK);
    assert_eq!(img.get_pixel(230, 230).0, BLACK);
    assert_eq!(img.get_pixel(120, 200).0, BLACK);
}

#[test]
fn test_selected_section_uses_selected_colour() {
    let mut picker = unit_picker();
    picker.pointer(PointerPhase::Down, Point::new(50.0, 50.0));
    picker.zoom_tap(Point::new(128.0, 125.0));

    let mut target = canvas(&picker);
    render_zoom(&picker, &Palette::default(), &mut target);
    let img = target.to_image();
    assert_pixel(&img, 120, 120, SELECTED_OVER_BLACK);
    assert_pixel(&img, 150, 120, CANDIDATE_OVER_BLACK);
}

#[test]
fn test_bitmap_drawn_under_sections() {
    let mut picker = unit_picker();
    picker.pointer(PointerPhase::Down, Point::new(50.0, 50.0));
    let bitmap = RgbaImage::from_pixel(10, 10, image::Rgba(WHITE));

    let mut target = PixelCanvas::new(250, 250, picker.store().source_size(), FillRule::NonZero)
        .unwrap()
        .with_bitmap(&bitmap);
    render_zoom(&picker, &Palette::default(), &mut target);
    let img = target.to_image();

    // Left of the canvas edge stays black; open canvas shows the bitmap.
    assert_eq!(img.get_pixel(5, 5).0, BLACK);
    assert_pixel(&img, 200, 200, WHITE);
    let tinted = img.get_pixel(120, 120).0;
    assert!(!close(tinted, WHITE));
    assert!(!close(tinted, CANDIDATE_OVER_BLACK));
}

#[test]
fn test_even_odd_leaves_inner_ring_unfilled() {
    // Two nested squares wound the same way: the hole only opens under even-odd.
    let records = vec![SectionRecord {
        id: "ring".to_string(),
        outline: "M 0 0 H 100 V 100 H 0 Z M 25 25 H 75 V 75 H 25 Z".to_string(),
        bounding_box: BoundingBox::new(0.0, 0.0, 100.0, 100.0),
    }];
    let store = Arc::new(GeometryStore::load(&records, Size::new(1000.0, 1000.0)));
    let mut picker = SectionPicker::new(store, PickerConfig::default()).unwrap();
    picker.set_overview_size(Size::new(1000.0, 1000.0));
    picker.focus_on(Point::new(50.0, 50.0));

    // The hole spans view pixels 117.5..132.5; 125 is its centre, 112 lies in the ring.
    let source = picker.store().source_size();
    let mut winding = PixelCanvas::new(250, 250, source, FillRule::NonZero).unwrap();
    render_zoom(&picker, &Palette::default(), &mut winding);
    let img = winding.to_image();
    assert_pixel(&img, 125, 125, CANDIDATE_OVER_BLACK);
    assert_pixel(&img, 112, 125, CANDIDATE_OVER_BLACK);

    let mut even_odd = PixelCanvas::new(250, 250, source, FillRule::EvenOdd).unwrap();
    render_zoom(&picker, &Palette::default(), &mut even_odd);
    let img = even_odd.to_image();
    assert_eq!(img.get_pixel(125, 125).0, BLACK);
    assert_pixel(&img, 112, 125, CANDIDATE_OVER_BLACK);
}

/// Records calls so the draw order can be checked.
#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl SceneRenderer for Recorder {
    fn draw_image(&mut self, _zoom: &ZoomTransform) {
        self.calls.push("image".to_string());
    }

    fn fill_section(&mut self, _zoom: &ZoomTransform, section: &Section, color: Rgba) {
        self.calls.push(format!("{}:{}", section.id, color.0[3]));
    }
}

#[test]
fn test_image_drawn_before_outlines_in_candidate_order() {
    let mut picker = unit_picker();
    picker.pointer(PointerPhase::Down, Point::new(50.0, 50.0));
    picker.zoom_tap(Point::new(155.0, 125.0));

    let mut recorder = Recorder::default();
    render_zoom(&picker, &Palette::default(), &mut recorder);
    assert_eq!(recorder.calls, ["image", "A:128", "B:204"]);
}
