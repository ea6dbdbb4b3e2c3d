use skingen_core::{
    config::Config,
    generate::{self, RunMode},
    layout::StylesRoot,
};

pub fn generate(config: &Config, styles: &StylesRoot, mode: RunMode) -> eyre::Result<()> {
    let report = generate::run(styles, &config.skins, &config.scratch_dir, mode)?;
    tracing::info!(
        combinations = report.combinations,
        rendered = report.svgs_rendered,
        copied = report.overrides_copied,
        "done"
    );
    Ok(())
}

pub fn dry_run(config: &Config, styles: &StylesRoot, mode: RunMode) -> eyre::Result<()> {
    let plan = generate::plan(&config.skins);
    let count = match mode {
        RunMode::All => plan.len(),
        RunMode::FirstOnly => plan.len().min(1),
    };
    for combination in plan.iter().take(count) {
        println!(
            "{}\t{}\t{}\t{}x{}\t{}",
            combination.theme.style_suffix(),
            combination.variant,
            combination.dpi,
            combination.size,
            combination.size,
            styles
                .output_dir(combination.theme, combination.dpi)
                .display()
        );
    }
    Ok(())
}
