use crate::foundation::core::{Point, Rect};
use crate::foundation::error::CalendarResult;
use crate::foundation::math::{linspace, min_max};
use crate::layers::{Derived, FooterArea, FooterLayer, Layer, LayerContext, z};
use crate::render::scene::{DrawKind, Scene, TextStyle};
use crate::signal::Signal;
use crate::signal::adjust::fit_to_days;
use crate::style::colormap::{Colormap, Normalize};

/// Radial subdivisions of the ring mesh.
const RADIAL_STEPS: usize = 20;
/// Ticks on the footer colorbar.
const COLORBAR_TICKS: usize = 5;

/// Which weather signal a [`ScalarBandLayer`] shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarKind {
    /// Mean daily temperature, °C.
    Temperature,
    /// Mean daily precipitation, mm.
    Precipitation,
}

impl ScalarKind {
    fn name(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Precipitation => "precipitation",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Temperature => "Average temperature (°C)",
            Self::Precipitation => "Average precipitation (mm)",
        }
    }

    /// Colorbar tick label for `v`.
    pub fn tick_label(self, v: f64) -> String {
        match self {
            Self::Temperature => format!("{v:.1}°C"),
            Self::Precipitation => format!("{v:.1}mm"),
        }
    }
}

/// Repaired signal and the range its colors are normalized to.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarSummary {
    /// One value per day of the rendered year.
    pub values: Signal,
    /// Smallest observed value.
    pub min: f64,
    /// Largest observed value.
    pub max: f64,
}

/// Thin colored ring just inside the outer edge, one color per day.
#[derive(Clone, Debug)]
pub struct ScalarBandLayer {
    kind: ScalarKind,
    values: Signal,
}

impl ScalarBandLayer {
    /// Temperature ring.
    pub fn temperature(values: Signal) -> Self {
        Self {
            kind: ScalarKind::Temperature,
            values,
        }
    }

    /// Precipitation ring.
    pub fn precipitation(values: Signal) -> Self {
        Self {
            kind: ScalarKind::Precipitation,
            values,
        }
    }

    /// Which signal this ring shows.
    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    fn colormap<'a>(&self, ctx: &'a LayerContext<'_>) -> &'a Colormap {
        match self.kind {
            ScalarKind::Temperature => &ctx.settings.colors.temperature,
            ScalarKind::Precipitation => &ctx.settings.colors.precipitation,
        }
    }

    fn offset(&self, ctx: &LayerContext<'_>) -> f64 {
        match self.kind {
            ScalarKind::Temperature => ctx.settings.offsets.temperature,
            ScalarKind::Precipitation => ctx.settings.offsets.precipitation,
        }
    }
}

impl Layer for ScalarBandLayer {
    fn name(&self) -> &'static str {
        self.kind.name()
    }

    fn prepare(&self, ctx: &LayerContext<'_>) -> CalendarResult<Derived> {
        if self.values.is_empty() {
            tracing::warn!("no {} data available", self.kind.name());
            return Ok(Derived::None);
        }
        let values = fit_to_days(self.kind.name(), &self.values, ctx.days());
        let Some((min, max)) = min_max(&values) else {
            tracing::warn!("{} data has no finite values", self.kind.name());
            return Ok(Derived::None);
        };
        Ok(Derived::Scalar(ScalarSummary { values, min, max }))
    }

    fn plot(&self, scene: &mut Scene, ctx: &LayerContext<'_>, derived: &Derived) -> CalendarResult<()> {
        let Derived::Scalar(summary) = derived else {
            return Ok(());
        };
        let r_mid = ctx.range.r_max() - ctx.span_fraction(self.offset(ctx));
        let half = ctx.span_fraction(ctx.settings.offsets.band_width) / 2.0;
        let r = linspace(r_mid - half, r_mid + half, RADIAL_STEPS);

        let cmap = self.colormap(ctx);
        let norm = Normalize {
            min: summary.min,
            max: summary.max,
        };
        let day_colors: Vec<_> = summary.values.iter().map(|&v| cmap.map(v, norm)).collect();
        let rows = r.len() - 1;
        let cells = day_colors
            .iter()
            .copied()
            .cycle()
            .take(day_colors.len() * rows)
            .collect();

        scene.push(
            z::SCALAR_RING,
            DrawKind::Mesh {
                theta: ctx.day_edges(),
                r,
                cells,
            },
        );
        Ok(())
    }

    fn footer(&self) -> Option<&dyn FooterLayer> {
        Some(self)
    }
}

impl FooterLayer for ScalarBandLayer {
    fn draw_footer(
        &self,
        scene: &mut Scene,
        area: &FooterArea,
        ctx: &LayerContext<'_>,
        derived: &Derived,
    ) -> CalendarResult<()> {
        let Derived::Scalar(summary) = derived else {
            return Ok(());
        };
        let text = ctx.palette().title_text;
        let r = area.rect;
        let (w, h) = (r.width(), r.height());
        let bar = Rect::new(
            r.x0 + 0.2 * w,
            r.y0 + 0.42 * h,
            r.x1 - 0.2 * w,
            r.y0 + 0.5 * h,
        );

        scene.figure_text(
            z::CHROME,
            Point::new(r.x0 + 0.5 * w, r.y0 + 0.25 * h),
            self.kind.title(),
            TextStyle::new(8.0, text),
        );
        scene.push(
            z::CHROME,
            DrawKind::ColorBar {
                rect: bar,
                stops: self.colormap(ctx).stops().to_vec(),
            },
        );
        let label = TextStyle::new(6.0, text.with_opacity(0.5));
        for (x, v) in linspace(bar.x0, bar.x1, COLORBAR_TICKS)
            .into_iter()
            .zip(linspace(summary.min, summary.max, COLORBAR_TICKS))
        {
            scene.figure_text(
                z::CHROME,
                Point::new(x, r.y0 + 0.68 * h),
                self.kind.tick_label(v),
                label,
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/scalar.rs"]
mod tests;
