use std::fmt::Write as _;

use crate::foundation::core::{Canvas, Point, Rect};
use crate::render::fonts::FontBook;
use crate::render::polar::PolarAxes;
use crate::render::scene::{DrawKind, HAlign, Scene, Stroke, TextStyle};
use crate::style::color::Color;

/// `--` dash pattern in multiples of the line width.
const DASH_PATTERN: [f64; 2] = [3.7, 1.6];
/// Hairline stroke added to mesh cells so neighbouring cells do not show seams.
const MESH_SEAM_PX: f64 = 0.6;

/// Page geometry needed to turn a [`Scene`] into pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Figure {
    /// Output size in pixels.
    pub canvas: Canvas,
    /// Placement of the polar axes.
    pub axes: PolarAxes,
    /// Pixels per typographic point (`dpi / 72`).
    pub px_per_pt: f64,
}

impl Figure {
    /// Convert points to pixels.
    pub fn pt(&self, pt: f64) -> f64 {
        pt * self.px_per_pt
    }

    /// Rectangle given in figure fractions (origin bottom left) as pixels.
    pub fn frac_rect(&self, left: f64, bottom: f64, width: f64, height: f64) -> Rect {
        let w = f64::from(self.canvas.width);
        let h = f64::from(self.canvas.height);
        Rect::new(
            left * w,
            (1.0 - bottom - height) * h,
            (left + width) * w,
            (1.0 - bottom) * h,
        )
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn fill_attrs(c: Color) -> String {
    if c.a >= 1.0 {
        format!(r#"fill="{}""#, c.to_hex_rgb())
    } else {
        format!(r#"fill="{}" fill-opacity="{:.3}""#, c.to_hex_rgb(), c.a)
    }
}

fn stroke_attrs(s: &Stroke, fig: &Figure) -> String {
    let width = fig.pt(s.width_pt);
    let mut out = format!(
        r#"fill="none" stroke="{}" stroke-width="{width:.2}" stroke-linejoin="round""#,
        s.color.to_hex_rgb()
    );
    if s.color.a < 1.0 {
        let _ = write!(out, r#" stroke-opacity="{:.3}""#, s.color.a);
    }
    if s.dashed {
        let _ = write!(
            out,
            r#" stroke-dasharray="{:.2},{:.2}""#,
            DASH_PATTERN[0] * width,
            DASH_PATTERN[1] * width
        );
    }
    out
}

fn text_element(
    out: &mut String,
    at: Point,
    rotation_deg: f64,
    text: &str,
    style: &TextStyle,
    fig: &Figure,
    fonts: &FontBook,
) {
    let (x, y) = (at.x, at.y);
    let anchor = match style.align {
        HAlign::Left => "start",
        HAlign::Center => "middle",
        HAlign::Right => "end",
    };
    let weight = if style.bold { "bold" } else { "normal" };
    let _ = write!(
        out,
        r#"<text x="{x:.2}" y="{y:.2}" font-family="{}" font-size="{:.2}" font-weight="{weight}" text-anchor="{anchor}" dominant-baseline="central" xml:space="preserve" {}"#,
        escape(fonts.family(style.role)),
        fig.pt(style.size_pt),
        fill_attrs(style.color),
    );
    if rotation_deg.abs() > 1e-9 {
        let _ = write!(out, r#" transform="rotate({:.3} {x:.2} {y:.2})""#, -rotation_deg);
    }
    let _ = writeln!(out, ">{}</text>", escape(text));
}

fn mesh(out: &mut String, theta: &[f64], r: &[f64], cells: &[Color], fig: &Figure) {
    let cols = theta.len().saturating_sub(1);
    let rows = r.len().saturating_sub(1);
    if cols == 0 || rows == 0 || cells.len() < cols * rows {
        return;
    }
    for j in 0..cols {
        let mut i = 0;
        while i < rows {
            let color = cells[i * cols + j];
            let mut end = i + 1;
            while end < rows && cells[end * cols + j] == color {
                end += 1;
            }
            let path = fig
                .axes
                .sector_path(theta[j], theta[j + 1], r[i], r[end]);
            let hex = color.to_hex_rgb();
            let _ = write!(
                out,
                r#"<path d="{}" {} stroke="{hex}" stroke-width="{MESH_SEAM_PX}""#,
                path.to_svg(),
                fill_attrs(color)
            );
            if color.a < 1.0 {
                let _ = write!(out, r#" stroke-opacity="{:.3}""#, color.a);
            }
            out.push_str("/>\n");
            i = end;
        }
    }
}

/// Serialize a scene into a standalone SVG document.
///
/// Operations are written in paint order. Polar geometry is mapped through
/// [`Figure::axes`]; font families are the ones resolved by `fonts`.
pub fn scene_to_svg(scene: &Scene, fig: &Figure, fonts: &FontBook) -> String {
    let (w, h) = (fig.canvas.width, fig.canvas.height);
    let mut out = String::with_capacity(64 * scene.len() + 256);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );

    let mut gradients = 0usize;
    for op in scene.paint_order() {
        match &op.kind {
            DrawKind::Band {
                theta,
                inner,
                outer,
                fill,
            } => {
                let path = fig.axes.band_path(theta, inner, outer);
                let _ = writeln!(out, r#"<path d="{}" {}/>"#, path.to_svg(), fill_attrs(*fill));
            }
            DrawKind::Mesh { theta, r, cells } => mesh(&mut out, theta, r, cells, fig),
            DrawKind::Line { theta, r, stroke } => {
                let path = fig.axes.line_path(theta, r);
                let _ = writeln!(
                    out,
                    r#"<path d="{}" {}/>"#,
                    path.to_svg(),
                    stroke_attrs(stroke, fig)
                );
            }
            DrawKind::Marker {
                theta,
                r,
                radius_pt,
                fill,
            } => {
                let p = fig.axes.to_px(*theta, *r);
                let _ = writeln!(
                    out,
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" {}/>"#,
                    p.x,
                    p.y,
                    fig.pt(*radius_pt),
                    fill_attrs(*fill)
                );
            }
            DrawKind::PolarText {
                theta,
                r,
                text,
                style,
            } => {
                let p = fig.axes.to_px(*theta, *r);
                let rot = fig.axes.text_rotation(style.rotation_deg);
                text_element(&mut out, p, rot, text, style, fig, fonts);
            }
            DrawKind::FigureRect { rect, fill } => {
                let _ = writeln!(
                    out,
                    r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" {}/>"#,
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                    fill_attrs(*fill)
                );
            }
            DrawKind::FigureCircle {
                center,
                radius,
                fill,
            } => {
                let _ = writeln!(
                    out,
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" {}/>"#,
                    center.x,
                    center.y,
                    radius,
                    fill_attrs(*fill)
                );
            }
            DrawKind::FigureText { at, text, style } => {
                text_element(&mut out, *at, style.rotation_deg, text, style, fig, fonts);
            }
            DrawKind::ColorBar { rect, stops } => {
                gradients += 1;
                color_bar(&mut out, gradients, rect, stops);
            }
        }
    }
    out.push_str("</svg>\n");
    out
}

fn color_bar(out: &mut String, id: usize, rect: &Rect, stops: &[Color]) {
    let _ = writeln!(
        out,
        r#"<defs><linearGradient id="colorbar{id}" x1="0" y1="0" x2="1" y2="0">"#
    );
    let last = stops.len().saturating_sub(1).max(1) as f64;
    for (i, c) in stops.iter().enumerate() {
        let _ = writeln!(
            out,
            r#"<stop offset="{:.4}" stop-color="{}" stop-opacity="{:.3}"/>"#,
            i as f64 / last,
            c.to_hex_rgb(),
            c.a
        );
    }
    out.push_str("</linearGradient></defs>\n");
    let _ = writeln!(
        out,
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="url(#colorbar{id})"/>"#,
        rect.x0,
        rect.y0,
        rect.width(),
        rect.height()
    );
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
