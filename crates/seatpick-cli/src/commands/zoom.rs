use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use seatpick_core::config::PickerConfig;
use seatpick_core::geometry::Point;
use seatpick_core::io::image_io::{load_bitmap, save_png};
use seatpick_core::raster::PixelCanvas;
use seatpick_core::scene::{render_zoom, Palette};
use tracing::debug;

use super::{canvas_picker, open_store, parse_point};

#[derive(Args)]
pub struct ZoomArgs {
    /// Geometry file (JSON)
    pub file: PathBuf,

    /// Focus point in source coordinates, X,Y
    #[arg(long, value_parser = parse_point)]
    pub focus: Point,

    /// Stadium bitmap drawn under the sections
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Tap inside the zoom view before rendering, X,Y
    #[arg(long, value_parser = parse_point)]
    pub select: Option<Point>,

    /// Output PNG path
    #[arg(short, long, default_value = "zoom.png")]
    pub output: PathBuf,
}

pub fn run(args: &ZoomArgs, config: &PickerConfig) -> Result<()> {
    let store = open_store(&args.file, config)?;
    let source = store.source_size();
    let bitmap = args
        .image
        .as_deref()
        .map(|p| load_bitmap(p, source).with_context(|| format!("Failed to load {}", p.display())))
        .transpose()?;

    let mut picker = canvas_picker(store, config)?;
    picker.focus_on(args.focus);
    if let Some(tap) = args.select {
        picker.zoom_tap(tap);
    }

    let edge = config.zoom_view_size.round().max(1.0) as u32;
    let mut canvas = PixelCanvas::new(edge, edge, source, config.fill_rule)?;
    if let Some(ref bitmap) = bitmap {
        canvas = canvas.with_bitmap(bitmap);
    }
    let drawn = render_zoom(&picker, &Palette::default(), &mut canvas);
    debug!(
        "Rendered {edge}x{edge} zoom view (bitmap: {}, drawn: {drawn})",
        bitmap.is_some()
    );

    save_png(&canvas.to_image(), &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!(
        "Zoom view ({} candidates) saved to {}",
        picker.candidate_count(),
        args.output.display()
    );
    println!("{}", picker.caption());

    Ok(())
}
