//! The three render phases, enforced by the type of the canvas.
//!
//! [`CalendarCanvas::setup`] fixes the radial limits and the page, [`CalendarCanvas::draw`]
//! runs the prepare pass and every layer's `plot`, and [`CalendarCanvas::finish`] adds the
//! footers and rasterizes. Nothing touches the filesystem until [`Rendered::export`].

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::config::settings::Settings;
use crate::data::city::Coordinates;
use crate::foundation::core::{HourRange, Point, Rect};
use crate::foundation::error::CalendarResult;
use crate::layers::{Derived, Layer, LayerContext, global_range, z};
use crate::plot::layout::{LayoutKind, PageLayout};
use crate::render::fonts::FontBook;
use crate::render::raster::{RasterImage, rasterize_svg, write_png, write_svg};
use crate::render::scene::{DrawKind, Scene, TextStyle};
use crate::render::svg::scene_to_svg;

/// Phase marker: page fixed, nothing drawn yet.
#[derive(Debug)]
pub struct Setup;

/// Phase marker: every layer has plotted.
#[derive(Debug)]
pub struct Drawn;

/// Page placement requested by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Print poster.
    Poster,
    /// Wallpaper turned counter-clockwise by `rotation` radians.
    Wallpaper {
        /// Extra dial rotation.
        rotation: f64,
    },
}

/// A calendar being rendered, typed by the phase it is in.
pub struct CalendarCanvas<'a, P> {
    settings: &'a Settings,
    layers: Vec<Box<dyn Layer>>,
    derived: Vec<Derived>,
    range: HourRange,
    page: PageLayout,
    scene: Scene,
    coordinates: Coordinates,
    _phase: PhantomData<P>,
}

impl<P> std::fmt::Debug for CalendarCanvas<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarCanvas")
            .field("layers", &self.layers.iter().map(|l| l.name()).collect::<Vec<_>>())
            .field("range", &self.range)
            .field("kind", &self.page.kind)
            .field("ops", &self.scene.len())
            .finish()
    }
}

impl<'a, P> CalendarCanvas<'a, P> {
    fn context(&self) -> LayerContext<'a> {
        LayerContext {
            year: self.settings.year,
            range: self.range,
            settings: self.settings,
        }
    }

    /// Visible hour window.
    pub fn range(&self) -> HourRange {
        self.range
    }

    /// Page geometry.
    pub fn page(&self) -> &PageLayout {
        &self.page
    }

    /// Draw operations so far.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    fn into_phase<Q>(self) -> CalendarCanvas<'a, Q> {
        CalendarCanvas {
            settings: self.settings,
            layers: self.layers,
            derived: self.derived,
            range: self.range,
            page: self.page,
            scene: self.scene,
            coordinates: self.coordinates,
            _phase: PhantomData,
        }
    }
}

impl<'a> CalendarCanvas<'a, Setup> {
    /// Fix the visible range from the layers' extents and lay out the page.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn setup(
        settings: &'a Settings,
        layers: Vec<Box<dyn Layer>>,
        placement: Placement,
        coordinates: Coordinates,
    ) -> CalendarResult<Self> {
        let range = global_range(&layers)?;
        let page = match placement {
            Placement::Poster => PageLayout::poster(&settings.poster, range)?,
            Placement::Wallpaper { rotation } => {
                PageLayout::wallpaper(&settings.wallpaper, range, rotation)?
            }
        };
        tracing::debug!(
            start = range.start,
            end = range.end,
            layers = layers.len(),
            "canvas set up"
        );
        Ok(Self {
            settings,
            layers,
            derived: Vec::new(),
            range,
            page,
            scene: Scene::new(),
            coordinates,
            _phase: PhantomData,
        })
    }

    /// Compute every layer's derived values, then plot all layers and the title.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn draw(mut self) -> CalendarResult<CalendarCanvas<'a, Drawn>> {
        let ctx = self.context();
        self.derived = self
            .layers
            .iter()
            .map(|layer| layer.prepare(&ctx))
            .collect::<CalendarResult<_>>()?;

        self.paint_background();
        for (layer, derived) in self.layers.iter().zip(&self.derived) {
            tracing::debug!(layer = layer.name(), "plot");
            layer.plot(&mut self.scene, &ctx, derived)?;
        }
        self.paint_title();
        Ok(self.into_phase())
    }

    fn paint_background(&mut self) {
        let colors = &self.settings.colors;
        let canvas = self.page.figure.canvas;
        self.scene.push(
            z::BACKGROUND,
            DrawKind::FigureRect {
                rect: Rect::new(0.0, 0.0, f64::from(canvas.width), f64::from(canvas.height)),
                fill: colors.background,
            },
        );
        if self.page.kind == LayoutKind::Poster {
            let axes = self.page.figure.axes;
            self.scene.push(
                z::DIAL,
                DrawKind::FigureCircle {
                    center: axes.center,
                    radius: axes.radius,
                    fill: colors.dial,
                },
            );
        }
    }

    fn paint_title(&mut self) {
        let color = self.settings.colors.title_text;
        let t = self.page.title;
        let lines = [
            (self.settings.year.to_string(), false),
            (self.settings.city_name.clone(), true),
            (self.coordinates.label(), false),
        ];
        for (((text, bold), at), size) in lines.into_iter().zip(t.anchors).zip(t.sizes_pt) {
            let mut style = TextStyle::new(size, color).align(t.align).title();
            if bold {
                style = style.bold();
            }
            self.scene.figure_text(z::CHROME, at, text, style);
        }
    }
}

impl<'a> CalendarCanvas<'a, Drawn> {
    /// Draw every footer into its own rectangle, then rasterize the page.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn finish(mut self, fonts: &FontBook) -> CalendarResult<Rendered> {
        let ctx = self.context();
        let with_footer: Vec<usize> = self
            .layers
            .iter()
            .enumerate()
            .filter(|(i, l)| l.footer().is_some() && self.derived[*i] != Derived::None)
            .map(|(i, _)| i)
            .collect();
        let areas = self.page.footer_areas(with_footer.len());
        for (i, area) in with_footer.into_iter().zip(&areas) {
            if let Some(footer) = self.layers[i].footer() {
                footer.draw_footer(&mut self.scene, area, &ctx, &self.derived[i])?;
            }
        }

        let svg = scene_to_svg(&self.scene, &self.page.figure, fonts);
        let image = rasterize_svg(&svg, &fonts.options(), self.page.figure.canvas)?;
        tracing::info!(
            width = image.width,
            height = image.height,
            ops = self.scene.len(),
            "calendar rendered"
        );
        Ok(Rendered {
            kind: self.page.kind,
            range: self.range,
            scene: self.scene,
            svg,
            image,
        })
    }
}

/// A finished render held in memory.
#[derive(Clone, Debug)]
pub struct Rendered {
    /// Page format.
    pub kind: LayoutKind,
    /// Visible hour window.
    pub range: HourRange,
    /// Every draw operation, footers included.
    pub scene: Scene,
    /// Vector document.
    pub svg: String,
    /// Raster pixels.
    pub image: RasterImage,
}

impl Rendered {
    /// Write `<dir>/png/<stem>.png` and, for posters, `<dir>/svg/<stem>.svg`.
    ///
    /// Either every file is written or none is left behind.
    pub fn export(&self, dir: &Path, stem: &str) -> CalendarResult<Vec<PathBuf>> {
        let png = dir.join("png").join(format!("{stem}.png"));
        write_png(&png, &self.image)?;
        if self.kind != LayoutKind::Poster {
            return Ok(vec![png]);
        }

        let svg = dir.join("svg").join(format!("{stem}.svg"));
        if let Err(err) = write_svg(&svg, &self.svg) {
            if let Err(cleanup) = std::fs::remove_file(&png) {
                tracing::warn!(path = %png.display(), %cleanup, "could not remove partial output");
            }
            return Err(err);
        }
        Ok(vec![png, svg])
    }

    /// Pixel at `at`, rounded down.
    pub fn pixel_at(&self, at: Point) -> Option<[u8; 4]> {
        if at.x < 0.0 || at.y < 0.0 {
            return None;
        }
        self.image.pixel(at.x as u32, at.y as u32)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plot/canvas.rs"]
mod tests;
