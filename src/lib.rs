pub mod cli;
pub mod commands;

use crate::cli::Cli;
use clap::Parser;
use eyre::WrapErr;
use skingen_core::{config::Config, generate::RunMode, layout::StylesRoot};

fn setup_logger(verbose: bool) -> eyre::Result<()> {
    use std::io::IsTerminal;
    use tracing::Level;
    use tracing_subscriber::{
        filter::LevelFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Registry,
    };

    let level = if verbose { Level::DEBUG } else { Level::INFO };
    Registry::default()
        .with(LevelFilter::from(level))
        .with(
            layer()
                .with_ansi(std::io::stdout().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .try_init()?;
    Ok(())
}

fn load_config(args: &Cli) -> eyre::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::parse_file(path)?,
        None => Config::default(),
    };
    if let Some(scratch_dir) = &args.scratch_dir {
        config.scratch_dir = scratch_dir.clone();
    }
    Ok(config)
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg0| arg0.to_string_lossy().into_owned())
        .unwrap_or_else(|| "skingen".to_owned())
}

/// Entry point shared by the `skingen` binary and its test wrapper.
pub fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    run(Cli::parse())
}

/// Runs the generator for parsed command-line arguments.
pub fn run(args: Cli) -> eyre::Result<()> {
    let Some(styles_root) = args.styles_root.as_deref() else {
        println!("Usage: {} <path_to_styles_root>", program_name());
        return Ok(());
    };
    if !styles_root.is_dir() {
        println!("Invalid path to styles folder");
        return Ok(());
    }

    setup_logger(args.verbose)?;
    let config = load_config(&args).wrap_err("failed to load configuration")?;
    let styles = StylesRoot::new(styles_root);
    let mode = if args.first_only {
        RunMode::FirstOnly
    } else {
        RunMode::All
    };

    if args.dry_run {
        commands::dry_run(&config, &styles, mode)
    } else {
        commands::generate(&config, &styles, mode)
            .wrap_err_with(|| format!("failed to generate symbols from {}", styles_root.display()))
    }
}
