use image::RgbaImage;
use tiny_skia::{
    Color, ColorU8, FilterQuality, Paint, PathBuilder, Pixmap, PixmapPaint, Transform,
};

use crate::error::{Result, SeatpickError};
use crate::geometry::{FillRule, Point, Section, Size};
use crate::mapping::ZoomTransform;
use crate::scene::{Rgba, SceneRenderer};

/// [`SceneRenderer`] drawing the zoom view into a `tiny_skia` pixmap.
///
/// The bitmap is stretched over the whole source canvas and sampled
/// nearest-neighbour; fills are anti-aliased and blended source-over.
pub struct PixelCanvas<'a> {
    pixmap: Pixmap,
    bitmap: Option<&'a RgbaImage>,
    source_size: Size,
    fill_rule: FillRule,
}

impl<'a> PixelCanvas<'a> {
    /// An opaque black canvas of `width`×`height` pixels.
    pub fn new(width: u32, height: u32, source_size: Size, fill_rule: FillRule) -> Result<Self> {
        let mut pixmap = Pixmap::new(width, height).ok_or(SeatpickError::InvalidDimensions {
            width: f64::from(width),
            height: f64::from(height),
        })?;
        pixmap.fill(Color::BLACK);
        Ok(Self {
            pixmap,
            bitmap: None,
            source_size,
            fill_rule,
        })
    }

    pub fn with_bitmap(mut self, bitmap: &'a RgbaImage) -> Self {
        self.bitmap = Some(bitmap);
        self
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha copy of the canvas.
    pub fn to_image(&self) -> RgbaImage {
        let mut out = RgbaImage::new(self.pixmap.width(), self.pixmap.height());
        for (dst, src) in out.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }
}

impl SceneRenderer for PixelCanvas<'_> {
    fn draw_image(&mut self, zoom: &ZoomTransform) {
        let Some(bitmap) = self.bitmap else {
            return;
        };
        let source = self.source_size;
        let (bw, bh) = bitmap.dimensions();
        if bw == 0 || bh == 0 || !source.is_positive() {
            return;
        }
        let kx = f64::from(bw) / source.width;
        let ky = f64::from(bh) / source.height;

        // Only the bitmap pixels under the view are premultiplied and drawn.
        let top_left = zoom.to_source(Point::new(0.0, 0.0));
        let bottom_right = zoom.to_source(Point::new(
            f64::from(self.pixmap.width()),
            f64::from(self.pixmap.height()),
        ));
        let x0 = (top_left.x * kx).floor().clamp(0.0, f64::from(bw)) as u32;
        let y0 = (top_left.y * ky).floor().clamp(0.0, f64::from(bh)) as u32;
        let x1 = (bottom_right.x * kx).ceil().clamp(0.0, f64::from(bw)) as u32;
        let y1 = (bottom_right.y * ky).ceil().clamp(0.0, f64::from(bh)) as u32;
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let Some(tile) = premultiplied_tile(bitmap, x0, y0, x1 - x0, y1 - y0) else {
            return;
        };

        let origin = zoom.to_view(Point::new(f64::from(x0) / kx, f64::from(y0) / ky));
        let transform = Transform::from_row(
            (zoom.scale / kx) as f32,
            0.0,
            0.0,
            (zoom.scale / ky) as f32,
            origin.x as f32,
            origin.y as f32,
        );
        let paint = PixmapPaint {
            quality: FilterQuality::Nearest,
            ..Default::default()
        };
        self.pixmap
            .draw_pixmap(0, 0, tile.as_ref(), &paint, transform, None);
    }

    fn fill_section(&mut self, zoom: &ZoomTransform, section: &Section, color: Rgba) {
        let mut path = PathBuilder::new();
        for contour in section.outline.contours() {
            let Some((first, rest)) = contour.split_first() else {
                continue;
            };
            path.move_to(first.x as f32, first.y as f32);
            for p in rest {
                path.line_to(p.x as f32, p.y as f32);
            }
            path.close();
        }
        let Some(path) = path.finish() else {
            return;
        };

        let origin = zoom.to_view(Point::new(0.0, 0.0));
        let s = zoom.scale as f32;
        let transform = Transform::from_row(s, 0.0, 0.0, s, origin.x as f32, origin.y as f32);

        let [r, g, b, a] = color.0;
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        self.pixmap
            .fill_path(&path, &paint, skia_fill_rule(self.fill_rule), transform, None);
    }
}

fn skia_fill_rule(rule: FillRule) -> tiny_skia::FillRule {
    match rule {
        FillRule::NonZero => tiny_skia::FillRule::Winding,
        FillRule::EvenOdd => tiny_skia::FillRule::EvenOdd,
    }
}

/// Premultiplied copy of a `width`×`height` region of `image` at (`x`, `y`).
fn premultiplied_tile(
    bitmap: &RgbaImage,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Option<Pixmap> {
    let mut tile = Pixmap::new(width, height)?;
    let region = image::imageops::crop_imm(bitmap, x, y, width, height).to_image();
    for (dst, src) in tile.pixels_mut().iter_mut().zip(region.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(tile)
}
