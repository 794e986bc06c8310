use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use seatpick_core::config::PickerConfig;
use seatpick_core::geometry::Point;

use tracing::debug;

use super::{canvas_picker, open_store, parse_point};

#[derive(Args)]
pub struct PickArgs {
    /// Geometry file (JSON)
    pub file: PathBuf,

    /// Focus point in source coordinates, X,Y
    #[arg(long, value_parser = parse_point)]
    pub focus: Point,

    /// Tap position inside the zoom view, X,Y
    #[arg(long, value_parser = parse_point)]
    pub tap: Point,
}

pub fn run(args: &PickArgs, config: &PickerConfig) -> Result<()> {
    let store = open_store(&args.file, config)?;
    let mut picker = canvas_picker(store, config)?;
    picker.focus_on(args.focus);

    let Some(zoom) = picker.zoom_transform() else {
        anyhow::bail!("No focus");
    };
    let source = zoom.to_source(args.tap);
    let candidates: Vec<String> = picker.candidates().map(|(_, s)| s.id.clone()).collect();
    picker.zoom_tap(args.tap);
    debug!("Tap at {:?} resolved to {:?}", args.tap, picker.selection_state());

    println!("Focus:       {:.2}, {:.2}", zoom.focus.x, zoom.focus.y);
    println!("Tap source:  {:.2}, {:.2}", source.x, source.y);
    println!("Candidates:  {} [{}]", candidates.len(), candidates.join(", "));
    println!("{}", picker.caption());

    Ok(())
}
