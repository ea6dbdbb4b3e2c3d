use std::path::PathBuf;

/// Generates per-DPI, per-theme PNG symbol sets from SVG sources.
#[derive(clap::Parser)]
#[command(version)]
pub struct Cli {
    /// Path to the styles root (usually data/styles)
    #[arg(value_name = "STYLES_ROOT")]
    pub styles_root: Option<PathBuf>,

    /// Sets a configuration file with symbol sizes
    #[arg(short, long, env = "SKINGEN_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Sets the scratch directory used for staging
    #[arg(long, value_name = "DIR")]
    pub scratch_dir: Option<PathBuf>,

    /// Stops after the first combination, matching the legacy generator
    #[arg(long)]
    pub first_only: bool,

    /// Prints the planned combinations without generating anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enables debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
