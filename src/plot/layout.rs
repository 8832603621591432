use crate::config::settings::{FigureRect, PosterSettings, WallpaperSettings};
use crate::foundation::core::{Canvas, HourRange, Point, Rect, Vec2, Year};
use crate::foundation::error::{CalendarError, CalendarResult};
use crate::foundation::math::angle_of_day;
use crate::layers::FooterArea;
use crate::render::polar::PolarAxes;
use crate::render::scene::HAlign;
use crate::render::svg::Figure;

/// Point sizes of the year, city and coordinate lines.
const POSTER_TITLE_PT: [f64; 3] = [48.0, 64.0, 20.0];
const WALLPAPER_TITLE_PT: [f64; 3] = [36.0, 48.0, 16.0];
/// Baselines of the poster title lines, as figure fractions between the dial and the top.
const POSTER_TITLE_Y: [f64; 3] = [0.965, 0.937, 0.908];
/// Right-aligned wallpaper title: x, then the three line heights.
const WALLPAPER_TITLE_X: f64 = 0.95;
const WALLPAPER_TITLE_Y: [f64; 3] = [0.9, 0.85, 0.8];

/// Page format of a render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutKind {
    /// Print poster, dial centred with a title above and a footer strip below.
    Poster,
    /// Fixed-pixel wallpaper, oversized dial off to the lower left.
    Wallpaper,
}

/// Where the title lines go and how large they are.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitlePlacement {
    /// Anchors of the year, city and coordinate lines.
    pub anchors: [Point; 3],
    /// Point sizes of the year, city and coordinate lines.
    pub sizes_pt: [f64; 3],
    /// Horizontal anchor shared by all lines.
    pub align: HAlign,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum FooterPlan {
    Rows(Rect),
    Stacked { first: Rect, step: f64 },
}

/// Page geometry fixed in the setup phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageLayout {
    /// Page format.
    pub kind: LayoutKind,
    /// Canvas and polar axes.
    pub figure: Figure,
    /// Title lines.
    pub title: TitlePlacement,
    footer: FooterPlan,
}

fn to_px(fig: &Figure, r: FigureRect) -> Rect {
    fig.frac_rect(r.left, r.bottom, r.width, r.height)
}

fn polar_in(rect: Rect, range: HourRange, rotation: f64) -> PolarAxes {
    let radius = rect.width().min(rect.height()) / 2.0;
    PolarAxes::clockwise(rect.center(), radius, range, rotation)
}

impl PageLayout {
    /// Poster page of `width_in × height_in` inches at `dpi`.
    pub fn poster(p: &PosterSettings, range: HourRange) -> CalendarResult<Self> {
        let canvas = Canvas::new(
            (p.width_in * p.dpi).round() as u32,
            (p.height_in * p.dpi).round() as u32,
        )?;
        let mut figure = Figure {
            canvas,
            axes: polar_in(Rect::ZERO, range, 0.0),
            px_per_pt: p.dpi / 72.0,
        };
        let dial = to_px(&figure, p.dial);
        figure.axes = polar_in(dial, range, 0.0);

        let h = f64::from(canvas.height);
        let cx = dial.center().x;
        let title = TitlePlacement {
            anchors: POSTER_TITLE_Y.map(|y| Point::new(cx, (1.0 - y) * h)),
            sizes_pt: POSTER_TITLE_PT,
            align: HAlign::Center,
        };
        Ok(Self {
            kind: LayoutKind::Poster,
            figure,
            title,
            footer: FooterPlan::Rows(to_px(&figure, p.footer)),
        })
    }

    /// Wallpaper page, the dial turned counter-clockwise by `rotation` radians.
    pub fn wallpaper(
        wp: &WallpaperSettings,
        range: HourRange,
        rotation: f64,
    ) -> CalendarResult<Self> {
        let canvas = Canvas::new(wp.width, wp.height)?;
        let mut figure = Figure {
            canvas,
            axes: polar_in(Rect::ZERO, range, rotation),
            px_per_pt: wp.dpi / 72.0,
        };
        figure.axes = polar_in(to_px(&figure, wp.calendar_position), range, rotation);

        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        let title = TitlePlacement {
            anchors: WALLPAPER_TITLE_Y.map(|y| Point::new(WALLPAPER_TITLE_X * w, (1.0 - y) * h)),
            sizes_pt: WALLPAPER_TITLE_PT,
            align: HAlign::Right,
        };
        Ok(Self {
            kind: LayoutKind::Wallpaper,
            figure,
            title,
            footer: FooterPlan::Stacked {
                first: to_px(&figure, wp.footer),
                step: (wp.footer.height + wp.footer_gap) * h,
            },
        })
    }

    /// Non-overlapping rectangles for `count` footers, in registration order.
    ///
    /// Poster footers split the strip into equal rows, top to bottom. Wallpaper footers
    /// are stacked upward from the first slot.
    pub fn footer_areas(&self, count: usize) -> Vec<FooterArea> {
        match self.footer {
            FooterPlan::Rows(strip) => {
                let row = strip.height() / count.max(1) as f64;
                (0..count)
                    .map(|i| FooterArea {
                        rect: Rect::new(
                            strip.x0,
                            strip.y0 + row * i as f64,
                            strip.x1,
                            strip.y0 + row * (i + 1) as f64,
                        ),
                        stacked: false,
                    })
                    .collect()
            }
            FooterPlan::Stacked { first, step } => (0..count)
                .map(|i| FooterArea {
                    rect: first - Vec2::new(0.0, step * i as f64),
                    stacked: true,
                })
                .collect(),
        }
    }
}

/// Rotation that puts the first day of `month` (1..=12) at the top of the dial.
pub fn month_rotation(year: Year, month: u32) -> CalendarResult<f64> {
    let index = usize::try_from(month)
        .ok()
        .and_then(|m| m.checked_sub(1))
        .filter(|&m| m < 12)
        .ok_or_else(|| CalendarError::config(format!("month must be 1..=12, got {month}")))?;
    let start = year.month_starts()[index];
    Ok(angle_of_day(start as f64, year.days()))
}

#[cfg(test)]
#[path = "../../tests/unit/plot/layout.rs"]
mod tests;
