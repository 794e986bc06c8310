use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use seatpick_core::config::PickerConfig;
use seatpick_core::focus::PointerPhase;
use seatpick_core::geometry::{Point, Size};
use seatpick_core::mapping::overview_to_source;
use seatpick_core::selection::hit_test;

use super::{canvas_picker, open_store, parse_point, parse_size};

#[derive(Args)]
pub struct LocateArgs {
    /// Geometry file (JSON)
    pub file: PathBuf,

    /// Laid-out overview size, WxH
    #[arg(long, value_parser = parse_size)]
    pub view: Size,

    /// Pointer position inside the overview, X,Y
    #[arg(long, value_parser = parse_point)]
    pub at: Point,
}

pub fn run(args: &LocateArgs, config: &PickerConfig) -> Result<()> {
    let store = open_store(&args.file, config)?;
    let source = store.source_size();

    let under_pointer = overview_to_source(args.at, args.view, source).map(|p| {
        let all: Vec<usize> = (0..store.len()).collect();
        let hit = hit_test(p, store.sections(), &all, config.fill_rule)
            .and_then(|i| store.get(i))
            .map(|s| s.id.clone());
        (p, hit)
    });

    let mut picker = canvas_picker(store, config)?;
    picker.set_overview_size(args.view);
    let update = picker.pointer(PointerPhase::Down, args.at);

    println!("Overview:    {}x{}", args.view.width, args.view.height);
    println!("Pointer:     {}, {}", args.at.x, args.at.y);
    match under_pointer {
        Some((p, hit)) => {
            println!("Source:      {:.2}, {:.2}", p.x, p.y);
            println!("Section:     {}", hit.as_deref().unwrap_or("-"));
        }
        None => println!("Source:      outside the canvas"),
    }
    println!(
        "Loupe:       {:.2}, {:.2}",
        update.loupe_position.x, update.loupe_position.y
    );
    match update.focus {
        Some(f) => println!("Focus:       {:.2}, {:.2}", f.x, f.y),
        None => println!("Focus:       none"),
    }
    println!("Candidates:  {}", picker.candidate_count());

    Ok(())
}
