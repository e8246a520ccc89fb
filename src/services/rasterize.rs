use crate::error::GenerateError;
use crate::models::{GeneratedFile, IconConfig};
use anyhow::{Context, Result};
use camino::Utf8Path;
use resvg::{tiny_skia, usvg};
use std::fs;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while rendering a single PNG
#[derive(Error, Debug)]
pub enum RasterizeError {
    #[error("Failed to read SVG: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse SVG: {0}")]
    Parse(#[from] usvg::Error),

    #[error("Cannot allocate a {0}x{0} pixmap")]
    Pixmap(u32),

    #[error("Failed to write PNG: {0}")]
    Encode(String),
}

/// Lists the files a run produces, in generation order.
///
/// Sizes keep their configured order; each standard file is followed by its
/// `@2x` counterpart when retina output is enabled.
pub fn plan_icons(config: &IconConfig) -> Vec<GeneratedFile> {
    let mut planned = Vec::with_capacity(config.expected_file_count());

    for &size in &config.icon_sizes {
        planned.push(GeneratedFile::standard(size));
        if config.generate_retina {
            planned.push(GeneratedFile::retina(size));
        }
    }

    planned
}

/// Renders one SVG into the PNG sizes of an icon set.
///
/// The source is parsed once and rendered at every planned size. Rendering stops at
/// the first failure; files already written are left in place.
pub struct IconRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl IconRasterizer {
    /// Create a rasterizer with system fonts loaded for `<text>` elements.
    pub fn new() -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        tracing::debug!("Loaded {} font faces", fontdb.len());

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Parses the SVG at `svg_path`, resolving relative resources next to it.
    pub fn load_tree(&self, svg_path: &Utf8Path) -> Result<usvg::Tree, RasterizeError> {
        let svg_data = fs::read(svg_path)?;

        let options = usvg::Options {
            resources_dir: svg_path.parent().map(|dir| dir.as_std_path().to_path_buf()),
            fontdb: Arc::clone(&self.fontdb),
            ..usvg::Options::default()
        };

        Ok(usvg::Tree::from_data(&svg_data, &options)?)
    }

    /// Renders `tree` onto a `size`x`size` transparent PNG at `output_path`.
    ///
    /// Width and height are scaled independently so the output is always square.
    pub fn render_png(
        &self,
        tree: &usvg::Tree,
        size: u32,
        output_path: &Utf8Path,
    ) -> Result<(), RasterizeError> {
        let tree_size = tree.size();
        let scale_x = size as f32 / tree_size.width();
        let scale_y = size as f32 / tree_size.height();

        let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or(RasterizeError::Pixmap(size))?;
        pixmap.fill(tiny_skia::Color::TRANSPARENT);

        let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);
        resvg::render(tree, transform, &mut pixmap.as_mut());

        pixmap
            .save_png(output_path)
            .map_err(|e| RasterizeError::Encode(e.to_string()))
    }

    /// Generates every configured icon for `svg_path` into `output_dir`.
    ///
    /// # Returns
    /// The generated files in generation order
    ///
    /// # Errors
    /// - [`GenerateError::InvalidIconSize`] before anything is written, for a zero or oversized size
    /// - [`GenerateError::Rasterize`] naming the first file that failed
    pub fn generate_icons(
        &self,
        svg_path: &Utf8Path,
        output_dir: &Utf8Path,
        config: &IconConfig,
    ) -> Result<Vec<GeneratedFile>> {
        if let Some(size) = config.invalid_size() {
            return Err(GenerateError::InvalidIconSize(size).into());
        }

        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create output directory: {}", output_dir))?;

        let planned = plan_icons(config);
        let Some(first) = planned.first() else {
            tracing::warn!("No icon sizes configured, nothing to generate");
            return Ok(planned);
        };

        let tree = self
            .load_tree(svg_path)
            .map_err(|source| GenerateError::Rasterize {
                filename: first.filename.clone(),
                source,
            })?;

        for file in &planned {
            println!("  Generating {}...", file.filename);
            self.render_png(&tree, file.pixel_size, &output_dir.join(&file.filename))
                .map_err(|source| GenerateError::Rasterize {
                    filename: file.filename.clone(),
                    source,
                })?;
            tracing::debug!("Rendered {} at {}px", file.filename, file.pixel_size);
        }

        tracing::info!("Generated {} icon files in {}", planned.len(), output_dir);
        Ok(planned)
    }
}

impl Default for IconRasterizer {
    fn default() -> Self {
        Self::new()
    }
}
