use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::Canvas;
use crate::foundation::error::{CalendarError, CalendarResult};

/// Straight-alpha RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8, `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl RasterImage {
    /// RGBA of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Parse an SVG document and rasterize it 1:1 onto a `canvas`-sized pixmap.
#[tracing::instrument(level = "debug", skip(svg, opts))]
pub fn rasterize_svg(
    svg: &str,
    opts: &usvg::Options<'_>,
    canvas: Canvas,
) -> CalendarResult<RasterImage> {
    let tree = usvg::Tree::from_str(svg, opts)
        .map_err(|e| CalendarError::render(format!("parse generated svg: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height).ok_or_else(|| {
        CalendarError::render(format!(
            "failed to allocate {}x{} pixmap",
            canvas.width, canvas.height
        ))
    })?;

    let sx = canvas.width as f32 / tree.size().width();
    let sy = canvas.height as f32 / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut data = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(RasterImage {
        width: canvas.width,
        height: canvas.height,
        data,
    })
}

fn ensure_parent_dir(path: &Path) -> CalendarResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))
            .map_err(|e| CalendarError::export(format!("{e:#}")))?;
    }
    Ok(())
}

/// Write an RGBA image as PNG, creating parent directories.
pub fn write_png(path: &Path, image: &RasterImage) -> CalendarResult<()> {
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &image.data,
        image.width,
        image.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
    .map_err(|e| CalendarError::export(format!("{e:#}")))?;
    tracing::info!(path = %path.display(), "wrote png");
    Ok(())
}

/// Write an SVG document, creating parent directories.
pub fn write_svg(path: &Path, svg: &str) -> CalendarResult<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, svg)
        .with_context(|| format!("write svg '{}'", path.display()))
        .map_err(|e| CalendarError::export(format!("{e:#}")))?;
    tracing::info!(path = %path.display(), "wrote svg");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
