//! resvg Rasterizer
//!
//! Implements the Rasterizer port with `resvg` (parsing via `usvg`,
//! drawing and PNG encoding via `tiny-skia`).

use std::path::Path;
use std::sync::{Arc, OnceLock};

use resvg::{tiny_skia, usvg};

use crate::domain::entities::{RasterBuffer, VectorSource};
use crate::domain::ports::{RasterError, RasterResult, Rasterizer};
use crate::domain::value_objects::Padding;

/// Rasterizer backed by resvg
///
/// The font database is built on the first render, so a run that stops
/// before rendering never scans the system fonts.
pub struct ResvgRasterizer {
    system_fonts: bool,
    fontdb: OnceLock<Arc<usvg::fontdb::Database>>,
}

impl ResvgRasterizer {
    /// Rasterizer that can render `<text>` with the system fonts
    pub fn new() -> Self {
        Self {
            system_fonts: true,
            fontdb: OnceLock::new(),
        }
    }

    /// Rasterizer with an empty font database (text is dropped)
    pub fn without_fonts() -> Self {
        Self {
            system_fonts: false,
            fontdb: OnceLock::new(),
        }
    }

    fn fontdb(&self) -> Arc<usvg::fontdb::Database> {
        self.fontdb
            .get_or_init(|| {
                let mut fontdb = usvg::fontdb::Database::new();
                if self.system_fonts {
                    fontdb.load_system_fonts();
                }
                Arc::new(fontdb)
            })
            .clone()
    }

    fn parse(&self, source: &VectorSource) -> RasterResult<usvg::Tree> {
        let options = usvg::Options {
            resources_dir: source.path().parent().map(Path::to_path_buf),
            fontdb: self.fontdb(),
            ..usvg::Options::default()
        };
        usvg::Tree::from_data(source.data(), &options).map_err(|e| RasterError::Parse(e.to_string()))
    }
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for ResvgRasterizer {
    fn rasterize(
        &self,
        source: &VectorSource,
        size: u32,
        padding: Padding,
    ) -> RasterResult<RasterBuffer> {
        let geometry = padding
            .geometry(size)
            .ok_or(RasterError::InvalidSize { size })?;
        let tree = self.parse(source)?;

        // Render at the inner size, then pad; never scale the full raster.
        let art = render_contained(&tree, geometry.inner)?;
        let pixmap = if geometry.margin == 0 {
            art
        } else {
            let mut canvas =
                tiny_skia::Pixmap::new(size, size).ok_or(RasterError::Allocation { size })?;
            canvas.draw_pixmap(
                geometry.margin as i32,
                geometry.margin as i32,
                art.as_ref(),
                &tiny_skia::PixmapPaint::default(),
                tiny_skia::Transform::identity(),
                None,
            );
            canvas
        };

        let png = pixmap
            .encode_png()
            .map_err(|e| RasterError::Encode(e.to_string()))?;
        Ok(RasterBuffer::new(size, png))
    }
}

/// Fit the tree inside a transparent `size`x`size` square, centered.
fn render_contained(tree: &usvg::Tree, size: u32) -> RasterResult<tiny_skia::Pixmap> {
    let svg_size = tree.size();
    let (width, height) = (svg_size.width(), svg_size.height());
    if !(width > 0.0 && height > 0.0) {
        return Err(RasterError::EmptyCanvas);
    }

    let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or(RasterError::Allocation { size })?;

    let edge = size as f32;
    let scale = (edge / width).min(edge / height);
    let tx = (edge - width * scale) / 2.0;
    let ty = (edge - height * scale) / 2.0;
    let transform = tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, tx, ty);

    resvg::render(tree, transform, &mut pixmap.as_mut());
    Ok(pixmap)
}
