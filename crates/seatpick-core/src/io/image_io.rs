use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::{info, warn};

use crate::error::Result;
use crate::geometry::Size;

/// Load the stadium bitmap as 8-bit RGBA.
///
/// The bitmap is drawn stretched over the source canvas, so a size mismatch
/// only distorts the picture; it is logged rather than rejected.
pub fn load_bitmap(path: &Path, source_size: Size) -> Result<RgbaImage> {
    let img = image::open(path)?.to_rgba8();
    let (w, h) = img.dimensions();
    if f64::from(w) != source_size.width || f64::from(h) != source_size.height {
        warn!(
            width = w,
            height = h,
            source_width = source_size.width,
            source_height = source_size.height,
            "Bitmap size differs from the source canvas"
        );
    }
    info!(path = %path.display(), width = w, height = h, "Bitmap loaded");
    Ok(img)
}

/// Save an RGBA image as PNG.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
