mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seatpick", about = "Stadium section picker tools")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Picker settings (TOML); defaults apply to anything not set
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show geometry file contents and consistency checks
    Info(commands::info::InfoArgs),
    /// Map an overview point onto the source canvas
    Locate(commands::locate::LocateArgs),
    /// Resolve a tap in the zoom view to a section
    Pick(commands::pick::PickArgs),
    /// Render the zoom view around a focus point to PNG
    Zoom(commands::zoom::ZoomArgs),
    /// Sample the canvas and report section coverage
    Coverage(commands::coverage::CoverageArgs),
    /// Print or save the picker configuration as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = commands::load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Info(args) => commands::info::run(args, &config),
        Commands::Locate(args) => commands::locate::run(args, &config),
        Commands::Pick(args) => commands::pick::run(args, &config),
        Commands::Zoom(args) => commands::zoom::run(args, &config),
        Commands::Coverage(args) => commands::coverage::run(args, &config),
        Commands::Config(args) => commands::config::run(args, &config),
    }
}
