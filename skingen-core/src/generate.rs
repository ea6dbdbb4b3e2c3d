use crate::{
    layout::StylesRoot,
    render::{RenderError, SvgRenderer},
    scratch::ScratchDir,
    skin::{DpiLevel, SkinTable, SkinVariant, Theme},
};
use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to prepare scratch directory {}", .0.display())]
    Scratch(PathBuf, #[source] std::io::Error),
    #[error("failed to create output directory {}", .0.display())]
    CreateOutputDir(PathBuf, #[source] std::io::Error),
    #[error("failed to copy PNG overrides from {} to {}", .from.display(), .to.display())]
    CopyOverrides {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to list SVG sources in {}", .0.display())]
    ListSources(PathBuf, #[source] std::io::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to publish {} into {}", .from.display(), .to.display())]
    Publish {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One (theme, skin variant, DPI level) unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combination {
    pub theme: Theme,
    pub variant: SkinVariant,
    pub dpi: DpiLevel,
    /// symbol edge length in pixels
    pub size: u32,
}

/// Every combination in generation order: themes, then skin variants, then
/// DPI levels.
pub fn plan(skins: &SkinTable) -> Vec<Combination> {
    Theme::ALL
        .into_iter()
        .flat_map(move |theme| {
            skins.iter().map(move |(variant, dpi, size)| Combination {
                theme,
                variant,
                dpi,
                size,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    All,
    /// Stop after the first combination, matching the legacy generator.
    FirstOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CombinationStats {
    pub overrides_copied: usize,
    pub svgs_rendered: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Report {
    pub combinations: usize,
    pub overrides_copied: usize,
    pub svgs_rendered: usize,
}

/// Stages one combination in `scratch`: PNG overrides first, then the SVG
/// renders on top of them.
pub fn generate_one_combination(
    combination: &Combination,
    styles: &StylesRoot,
    scratch: &ScratchDir,
    renderer: &SvgRenderer,
) -> Result<CombinationStats, GenerateError> {
    let mut stats = CombinationStats::default();

    let png_dir = styles.png_overrides(combination.theme, combination.variant, combination.dpi);
    if png_dir.exists() {
        stats.overrides_copied =
            scratch
                .seed_from(&png_dir)
                .map_err(|source| GenerateError::CopyOverrides {
                    from: png_dir.clone(),
                    to: scratch.path().to_owned(),
                    source,
                })?;
        tracing::debug!(
            from = %png_dir.display(),
            count = stats.overrides_copied,
            "copied PNG overrides"
        );
    }
    scratch
        .ensure_created()
        .map_err(|e| GenerateError::Scratch(scratch.path().to_owned(), e))?;

    let svg_dir = styles.svg_sources(combination.theme, combination.variant);
    for (svg, png_file) in svg_sources(&svg_dir)? {
        let png = scratch.path().join(png_file);
        tracing::debug!(svg = %svg.display(), size = combination.size, "rendering");
        renderer.render_file(&svg, &png, combination.size)?;
        stats.svgs_rendered += 1;
    }

    Ok(stats)
}

/// Lists `*.svg` entries with the name of their PNG render, sorted by file
/// name. Names need not be valid UTF-8.
fn svg_sources(dir: &Path) -> Result<Vec<(PathBuf, OsString)>, GenerateError> {
    let entries =
        std::fs::read_dir(dir).map_err(|e| GenerateError::ListSources(dir.to_owned(), e))?;
    let mut sources = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| GenerateError::ListSources(dir.to_owned(), e))?;
        let file_name = entry.file_name();
        if !file_name.as_encoded_bytes().ends_with(b".svg") {
            continue;
        }
        sources.push((entry.path(), png_name(&file_name)));
    }
    sources.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(sources)
}

/// `<basename>.png` for `<basename>.svg`.
fn png_name(svg_name: &OsStr) -> OsString {
    if svg_name == OsStr::new(".svg") {
        return OsString::from(".png");
    }
    Path::new(svg_name).with_extension("png").into_os_string()
}

/// Generates every planned combination and publishes each into its
/// `resources-*` directory.
pub fn run(
    styles: &StylesRoot,
    skins: &SkinTable,
    scratch_dir: &Path,
    mode: RunMode,
) -> Result<Report, GenerateError> {
    let renderer = SvgRenderer::new();
    let mut report = Report::default();

    for combination in plan(skins) {
        let output_dir = styles.output_dir(combination.theme, combination.dpi);
        let scratch = ScratchDir::acquire(scratch_dir)
            .map_err(|e| GenerateError::Scratch(scratch_dir.to_owned(), e))?;
        if !output_dir.exists() {
            std::fs::create_dir_all(&output_dir)
                .map_err(|e| GenerateError::CreateOutputDir(output_dir.clone(), e))?;
        }

        tracing::info!(
            "Generating for: {}, {}, {}",
            combination.theme.style_suffix(),
            combination.dpi,
            combination.variant.path_suffix()
        );
        let stats = generate_one_combination(&combination, styles, &scratch, &renderer)?;
        scratch
            .publish_into(&output_dir)
            .map_err(|source| GenerateError::Publish {
                from: scratch.path().to_owned(),
                to: output_dir.clone(),
                source,
            })?;
        scratch
            .release()
            .map_err(|e| GenerateError::Scratch(scratch_dir.to_owned(), e))?;

        report.combinations += 1;
        report.overrides_copied += stats.overrides_copied;
        report.svgs_rendered += stats.svgs_rendered;

        if mode == RunMode::FirstOnly {
            tracing::info!("stopping after the first combination");
            break;
        }
    }

    // the loop releases every scratch directory it acquires; this only
    // covers an empty plan
    crate::tree::remove_tree(scratch_dir)
        .map_err(|e| GenerateError::Scratch(scratch_dir.to_owned(), e))?;

    Ok(report)
}
