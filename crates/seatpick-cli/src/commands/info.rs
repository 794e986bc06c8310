use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use seatpick_core::config::PickerConfig;

use super::open_store;
use crate::summary::print_geometry_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Geometry file (JSON)
    pub file: PathBuf,

    /// Largest allowed difference between a declared box and the outline's
    /// extent before it is reported
    #[arg(long, default_value = "1.0")]
    pub tolerance: f64,
}

pub fn run(args: &InfoArgs, config: &PickerConfig) -> Result<()> {
    let store = open_store(&args.file, config)?;
    let mismatches = store.box_mismatches(args.tolerance);
    print_geometry_summary(&args.file, &store, config, &mismatches, args.tolerance);
    Ok(())
}
