use resvg::{tiny_skia, usvg};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to read SVG file {}", .0.display())]
    Read(PathBuf, #[source] std::io::Error),
    #[error("failed to parse SVG file {}", .0.display())]
    Parse(PathBuf, #[source] usvg::Error),
    #[error("invalid symbol size {0}x{0}")]
    InvalidSize(u32),
    #[error("failed to encode PNG for {}", .0.display())]
    Encode(PathBuf, #[source] eyre::Report),
    #[error("failed to write PNG file {}", .0.display())]
    Write(PathBuf, #[source] std::io::Error),
}

/// Rasterizes SVG icons into square PNGs.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl SvgRenderer {
    pub fn new() -> SvgRenderer {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        tracing::debug!(faces = fontdb.len(), "loaded system fonts");
        SvgRenderer {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Renders `svg` to `png` at exactly `size`x`size` pixels.
    ///
    /// The drawing is stretched on each axis to fill the square.
    pub fn render_file(&self, svg: &Path, png: &Path, size: u32) -> Result<(), RenderError> {
        let data = std::fs::read(svg).map_err(|e| RenderError::Read(svg.to_owned(), e))?;
        let pixmap = self.render(svg, &data, size)?;
        let encoded = pixmap
            .encode_png()
            .map_err(|e| RenderError::Encode(png.to_owned(), e.into()))?;
        std::fs::write(png, encoded).map_err(|e| RenderError::Write(png.to_owned(), e))?;
        Ok(())
    }

    /// Renders SVG `data`; `svg` names the source for errors and for
    /// resolving relative references.
    pub fn render(
        &self,
        svg: &Path,
        data: &[u8],
        size: u32,
    ) -> Result<tiny_skia::Pixmap, RenderError> {
        let options = usvg::Options {
            resources_dir: svg.parent().map(Path::to_path_buf),
            fontdb: self.fontdb.clone(),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_data(data, &options)
            .map_err(|e| RenderError::Parse(svg.to_owned(), e))?;

        let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or(RenderError::InvalidSize(size))?;
        let natural = tree.size();
        let transform = tiny_skia::Transform::from_scale(
            size as f32 / natural.width(),
            size as f32 / natural.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());
        Ok(pixmap)
    }
}
