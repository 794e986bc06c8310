use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use seatpick_core::config::PickerConfig;
use seatpick_core::consts::MIN_SURVEY_STEP;
use seatpick_core::survey::{is_valid_step, survey_coverage, survey_rows};
use tracing::info;

use super::open_store;

#[derive(Args)]
pub struct CoverageArgs {
    /// Geometry file (JSON)
    pub file: PathBuf,

    /// Grid spacing in source units
    #[arg(long, default_value = "4.0")]
    pub step: f64,

    /// Show the N sections with the fewest hits
    #[arg(long, default_value = "10")]
    pub top: usize,
}

pub fn run(args: &CoverageArgs, config: &PickerConfig) -> Result<()> {
    if !is_valid_step(args.step) {
        anyhow::bail!(
            "--step must be a number no smaller than {MIN_SURVEY_STEP}, got {}",
            args.step
        );
    }
    let store = open_store(&args.file, config)?;
    let rows = survey_rows(&store, args.step);
    info!(
        "Surveying {} sections: {rows} rows at step {} ({})",
        store.len(),
        args.step,
        config.fill_rule
    );

    let pb = ProgressBar::new(rows as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Sampling rows");

    let report = survey_coverage(&store, args.step, config.fill_rule, &|done| {
        pb.set_position(done as u64);
    });
    pb.finish_with_message(format!("Sampled {} points", report.samples));

    println!();
    println!("Sections:    {}", store.len());
    println!("Fill rule:   {}", config.fill_rule);
    println!("Covered:     {:.2}%", report.covered_fraction() * 100.0);
    println!("Overlapping: {:.2}%", report.overlap_fraction() * 100.0);

    let mut ranked: Vec<(&str, usize)> = store
        .sections()
        .iter()
        .zip(&report.hits)
        .map(|(s, &h)| (s.id.as_str(), h))
        .collect();
    ranked.sort_by_key(|&(_, h)| h);

    let missed = ranked.iter().filter(|&&(_, h)| h == 0).count();
    if missed > 0 {
        println!("Unsampled:   {missed} sections smaller than the grid");
    }

    println!(
        "\nSmallest {} sections by hits:",
        args.top.min(ranked.len())
    );
    println!("{:>10}  {:>10}", "Section", "Hits");
    println!("{}", "-".repeat(22));
    for (id, hits) in ranked.iter().take(args.top) {
        println!("{:>10}  {:>10}", id, hits);
    }

    Ok(())
}
