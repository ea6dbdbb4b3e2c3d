use crate::skin::{DpiLevel, SkinVariant, Theme};
use std::path::{Path, PathBuf};

/// The `data/styles` directory holding the icon sources.
///
/// Sources are always taken from the `clear` subtree, also for the night
/// theme: only the `style<suffix>` directory below it differs per theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesRoot(PathBuf);

impl StylesRoot {
    pub fn new(path: impl Into<PathBuf>) -> StylesRoot {
        StylesRoot(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    fn style_dir(&self, theme: Theme) -> PathBuf {
        self.0
            .join("clear")
            .join(format!("style{}", theme.style_suffix()))
    }

    /// `clear/style<theme>/<dpi><variant>`, optional pre-rendered PNGs
    pub fn png_overrides(&self, theme: Theme, variant: SkinVariant, dpi: DpiLevel) -> PathBuf {
        self.style_dir(theme)
            .join(format!("{}{}", dpi.name(), variant.path_suffix()))
    }

    /// `clear/style<theme>/symbols<variant>`, the SVG sources
    pub fn svg_sources(&self, theme: Theme, variant: SkinVariant) -> PathBuf {
        self.style_dir(theme)
            .join(format!("symbols{}", variant.path_suffix()))
    }

    /// `../resources-<dpi><theme>`, a sibling of the styles root
    pub fn output_dir(&self, theme: Theme, dpi: DpiLevel) -> PathBuf {
        self.0
            .join("..")
            .join(format!("resources-{}{}", dpi.name(), theme.output_suffix()))
    }
}
