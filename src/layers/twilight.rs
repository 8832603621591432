use crate::data::city::SunData;
use crate::foundation::core::Point;
use crate::foundation::error::CalendarResult;
use crate::foundation::math::{ceil_quarter, floor_quarter, linspace, min_max, radius_of_hour};
use crate::layers::{Derived, FooterArea, FooterLayer, Layer, LayerContext, z};
use crate::render::scene::{DrawKind, Scene, TextStyle};
use crate::signal::adjust::fit_to_days;
use crate::signal::smooth::smooth_to_len;
use crate::style::color::Color;

/// Which half of the day the twilight layer covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TwilightKind {
    /// Night to sunrise only; the visible range hugs the dawn.
    Dawn,
    /// The whole day, dusk phases mirrored after noon.
    Day,
}

/// Evening boundaries, present for [`TwilightKind::Day`].
#[derive(Clone, Debug, PartialEq)]
pub struct DuskCurves {
    /// Sunset.
    pub sunset: Vec<f64>,
    /// End of civil twilight.
    pub civil: Vec<f64>,
    /// End of nautical twilight.
    pub nautical: Vec<f64>,
    /// End of astronomical twilight.
    pub astro: Vec<f64>,
}

/// Twilight boundaries, one value per day, on the normalized radius scale.
#[derive(Clone, Debug, PartialEq)]
pub struct TwilightCurves {
    /// Sunrise.
    pub sunrise: Vec<f64>,
    /// Start of civil twilight.
    pub civil: Vec<f64>,
    /// Start of nautical twilight.
    pub nautical: Vec<f64>,
    /// Start of astronomical twilight.
    pub astro: Vec<f64>,
    /// Evening boundaries.
    pub dusk: Option<DuskCurves>,
}

/// Night, twilight and daylight bands bounded by the sun event signals.
#[derive(Clone, Debug)]
pub struct TwilightLayer {
    kind: TwilightKind,
    sun: SunData,
}

impl TwilightLayer {
    /// Build a layer over `sun`.
    pub fn new(kind: TwilightKind, sun: SunData) -> Self {
        Self { kind, sun }
    }

    /// Dawn or day.
    pub fn kind(&self) -> TwilightKind {
        self.kind
    }

    fn curve(&self, name: &str, raw: &[f64], ctx: &LayerContext<'_>) -> Vec<f64> {
        let days = ctx.days();
        let hours = if ctx.settings.smoothen {
            smooth_to_len(raw, days, true)
        } else {
            fit_to_days(name, raw, days)
        };
        hours.into_iter().map(radius_of_hour).collect()
    }
}

/// Close a per-day curve so it has one value per day boundary, wrapping to day 0.
fn closed(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    if let Some(&first) = values.first() {
        out.push(first);
    }
    out
}

impl Layer for TwilightLayer {
    fn name(&self) -> &'static str {
        match self.kind {
            TwilightKind::Dawn => "dawn",
            TwilightKind::Day => "day",
        }
    }

    fn start_time(&self) -> Option<f64> {
        match self.kind {
            TwilightKind::Dawn => min_max(&self.sun.astro_dawn).map(|(lo, _)| floor_quarter(lo)),
            TwilightKind::Day => Some(0.0),
        }
    }

    fn end_time(&self) -> Option<f64> {
        match self.kind {
            TwilightKind::Dawn => {
                min_max(&self.sun.sunrise).map(|(_, hi)| ceil_quarter(hi) + 0.25)
            }
            TwilightKind::Day => Some(24.0),
        }
    }

    fn prepare(&self, ctx: &LayerContext<'_>) -> CalendarResult<Derived> {
        let s = &self.sun;
        if s.sunrise.is_empty() || s.astro_dawn.is_empty() {
            tracing::warn!(layer = self.name(), "no sun data available, skipping layer");
            return Ok(Derived::None);
        }
        let dusk = match self.kind {
            TwilightKind::Dawn => None,
            TwilightKind::Day => Some(DuskCurves {
                sunset: self.curve("sunset", &s.sunset, ctx),
                civil: self.curve("civil_dusk", &s.civil_dusk, ctx),
                nautical: self.curve("nautical_dusk", &s.nautical_dusk, ctx),
                astro: self.curve("astro_dusk", &s.astro_dusk, ctx),
            }),
        };
        Ok(Derived::Twilight(TwilightCurves {
            sunrise: self.curve("sunrise", &s.sunrise, ctx),
            civil: self.curve("civil_dawn", &s.civil_dawn, ctx),
            nautical: self.curve("nautical_dawn", &s.nautical_dawn, ctx),
            astro: self.curve("astro_dawn", &s.astro_dawn, ctx),
            dusk,
        }))
    }

    fn plot(&self, scene: &mut Scene, ctx: &LayerContext<'_>, derived: &Derived) -> CalendarResult<()> {
        let Derived::Twilight(c) = derived else {
            return Ok(());
        };
        let colors = ctx.palette();
        let theta = ctx.day_edges();
        let n = theta.len();
        let floor = vec![0.0; n];
        let top = vec![ctx.range.r_max() - ctx.span_fraction(ctx.settings.offsets.daylight); n];

        let sunrise = closed(&c.sunrise);
        let civil = closed(&c.civil);
        let nautical = closed(&c.nautical);
        let astro = closed(&c.astro);

        scene.fill_between(z::BASE_BANDS, &theta, &floor, &sunrise, colors.night);
        scene.fill_between(z::BASE_BANDS, &theta, &sunrise, &top, colors.daylight);
        scene.fill_between(z::TWILIGHT, &theta, &astro, &nautical, colors.astro);
        scene.fill_between(z::TWILIGHT, &theta, &nautical, &civil, colors.nautical);
        scene.fill_between(z::TWILIGHT, &theta, &civil, &sunrise, colors.civil);

        if let Some(d) = &c.dusk {
            let sunset = closed(&d.sunset);
            let civil = closed(&d.civil);
            let nautical = closed(&d.nautical);
            let astro = closed(&d.astro);
            scene.fill_between(z::BASE_BANDS, &theta, &sunset, &top, colors.night);
            scene.fill_between(z::TWILIGHT, &theta, &sunset, &civil, colors.civil);
            scene.fill_between(z::TWILIGHT, &theta, &civil, &nautical, colors.nautical);
            scene.fill_between(z::TWILIGHT, &theta, &nautical, &astro, colors.astro);
        }
        Ok(())
    }

    fn footer(&self) -> Option<&dyn FooterLayer> {
        Some(self)
    }
}

const LEGEND: [(&str, &str); 5] = [
    ("Daylight", "Sun above horizon"),
    ("Civil Twilight", "Sun ≤6° below horizon"),
    ("Nautical Twilight", "Sun 6° to 12° below horizon"),
    ("Astronomical Twilight", "Sun 12° to 18° below horizon"),
    ("Night", "Sun > 18° below horizon"),
];

impl FooterLayer for TwilightLayer {
    fn draw_footer(
        &self,
        scene: &mut Scene,
        area: &FooterArea,
        ctx: &LayerContext<'_>,
        derived: &Derived,
    ) -> CalendarResult<()> {
        if matches!(derived, Derived::None) {
            return Ok(());
        }
        let colors = ctx.palette();
        let swatches: [Color; 5] = [
            colors.daylight,
            colors.civil,
            colors.nautical,
            colors.astro,
            colors.night,
        ];
        let r = area.rect;
        let swatch_radius = (r.height() * 0.12).min(r.width() * 0.03);
        let label = TextStyle::new(8.0, colors.title_text.with_opacity(0.7)).bold();
        let desc = TextStyle::new(6.0, colors.title_text.with_opacity(0.5));

        for ((x, (name, description)), fill) in linspace(0.1, 0.9, LEGEND.len())
            .into_iter()
            .zip(LEGEND)
            .zip(swatches)
        {
            let cx = r.x0 + x * r.width();
            scene.push(
                z::CHROME,
                DrawKind::FigureCircle {
                    center: Point::new(cx, r.y0 + r.height() * 0.25),
                    radius: swatch_radius,
                    fill,
                },
            );
            scene.figure_text(z::CHROME, Point::new(cx, r.y0 + r.height() * 0.55), name, label);
            scene.figure_text(
                z::CHROME,
                Point::new(cx, r.y0 + r.height() * 0.75),
                description,
                desc,
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/twilight.rs"]
mod tests;
