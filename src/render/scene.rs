use crate::foundation::core::{Point, Rect};
use crate::style::color::Color;

/// Horizontal anchor of a text label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    /// Anchor at the text start.
    #[default]
    Left,
    /// Anchor at the text middle.
    Center,
    /// Anchor at the text end.
    Right,
}

/// Which configured family a text op is set in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontRole {
    /// Labels, legends and ticks.
    #[default]
    Body,
    /// Year, city and coordinates chrome.
    Title,
}

/// Text appearance. Sizes are in points; rotation is counter-clockwise degrees on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in points.
    pub size_pt: f64,
    /// Bold weight.
    pub bold: bool,
    /// Fill color (alpha included).
    pub color: Color,
    /// Horizontal anchor.
    pub align: HAlign,
    /// Counter-clockwise rotation in degrees.
    pub rotation_deg: f64,
    /// Family selection.
    pub role: FontRole,
}

impl TextStyle {
    /// Centred, unrotated body text.
    pub fn new(size_pt: f64, color: Color) -> Self {
        Self {
            size_pt,
            bold: false,
            color,
            align: HAlign::Center,
            rotation_deg: 0.0,
            role: FontRole::Body,
        }
    }

    /// Set bold weight.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set the anchor.
    pub fn align(mut self, align: HAlign) -> Self {
        self.align = align;
        self
    }

    /// Set the rotation.
    pub fn rotated(mut self, deg: f64) -> Self {
        self.rotation_deg = deg;
        self
    }

    /// Use the title family.
    pub fn title(mut self) -> Self {
        self.role = FontRole::Title;
        self
    }
}

/// Line appearance. Width in points; `dashed` uses a `--` pattern scaled by the width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Color (alpha included).
    pub color: Color,
    /// Width in points.
    pub width_pt: f64,
    /// Dashed pattern.
    pub dashed: bool,
}

impl Stroke {
    /// Solid stroke.
    pub fn solid(color: Color, width_pt: f64) -> Self {
        Self {
            color,
            width_pt,
            dashed: false,
        }
    }

    /// Dashed stroke.
    pub fn dashed(color: Color, width_pt: f64) -> Self {
        Self {
            color,
            width_pt,
            dashed: true,
        }
    }
}

/// Geometry and paint of one draw operation.
///
/// Polar variants take data angles in radians and radii on the normalized `hour / 24`
/// scale; figure variants take pixel coordinates with the origin at the top left.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawKind {
    /// Region between two radius curves sampled at the same angles.
    Band {
        /// Sample angles.
        theta: Vec<f64>,
        /// Inner radius at each angle.
        inner: Vec<f64>,
        /// Outer radius at each angle.
        outer: Vec<f64>,
        /// Fill color.
        fill: Color,
    },
    /// Colored cells between angular and radial edges; `cells` is row-major by radial row.
    Mesh {
        /// Angular cell edges.
        theta: Vec<f64>,
        /// Radial cell edges.
        r: Vec<f64>,
        /// `(theta.len() - 1) * (r.len() - 1)` cell colors.
        cells: Vec<Color>,
    },
    /// Polyline through `(theta[i], r[i])`.
    Line {
        /// Vertex angles.
        theta: Vec<f64>,
        /// Vertex radii.
        r: Vec<f64>,
        /// Line appearance.
        stroke: Stroke,
    },
    /// Filled dot.
    Marker {
        /// Angle of the centre.
        theta: f64,
        /// Radius of the centre.
        r: f64,
        /// Dot radius in points.
        radius_pt: f64,
        /// Fill color.
        fill: Color,
    },
    /// Text anchored at a polar position. Radius is not clamped to the visible range.
    PolarText {
        /// Anchor angle.
        theta: f64,
        /// Anchor radius.
        r: f64,
        /// Content.
        text: String,
        /// Appearance.
        style: TextStyle,
    },
    /// Axis-aligned filled rectangle.
    FigureRect {
        /// Pixel rectangle.
        rect: Rect,
        /// Fill color.
        fill: Color,
    },
    /// Filled circle.
    FigureCircle {
        /// Centre in pixels.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Fill color.
        fill: Color,
    },
    /// Text anchored at a pixel position.
    FigureText {
        /// Anchor in pixels.
        at: Point,
        /// Content.
        text: String,
        /// Appearance.
        style: TextStyle,
    },
    /// Horizontal gradient bar through evenly spaced stops.
    ColorBar {
        /// Pixel rectangle.
        rect: Rect,
        /// Gradient stops, left to right.
        stops: Vec<Color>,
    },
}

/// A draw operation with its stacking priority.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawOp {
    /// Higher values paint later.
    pub z: i32,
    /// Insertion order, breaking ties in `z`.
    pub seq: u32,
    /// What to draw.
    pub kind: DrawKind,
}

/// Ordered collection of draw operations shared by every layer.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    ops: Vec<DrawOp>,
}

impl Scene {
    /// Empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operation at stacking priority `z`.
    pub fn push(&mut self, z: i32, kind: DrawKind) {
        let seq = u32::try_from(self.ops.len()).unwrap_or(u32::MAX);
        self.ops.push(DrawOp { z, seq, kind });
    }

    /// Fill between two radius curves.
    pub fn fill_between(&mut self, z: i32, theta: &[f64], inner: &[f64], outer: &[f64], fill: Color) {
        self.push(
            z,
            DrawKind::Band {
                theta: theta.to_vec(),
                inner: inner.to_vec(),
                outer: outer.to_vec(),
                fill,
            },
        );
    }

    /// Polyline in polar coordinates.
    pub fn line(&mut self, z: i32, theta: Vec<f64>, r: Vec<f64>, stroke: Stroke) {
        self.push(z, DrawKind::Line { theta, r, stroke });
    }

    /// Text at a polar position.
    pub fn polar_text(&mut self, z: i32, theta: f64, r: f64, text: impl Into<String>, style: TextStyle) {
        self.push(
            z,
            DrawKind::PolarText {
                theta,
                r,
                text: text.into(),
                style,
            },
        );
    }

    /// Text at a pixel position.
    pub fn figure_text(&mut self, z: i32, at: Point, text: impl Into<String>, style: TextStyle) {
        self.push(
            z,
            DrawKind::FigureText {
                at,
                text: text.into(),
                style,
            },
        );
    }

    /// Operations in insertion order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True when nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Operations in paint order: ascending `z`, insertion order within equal `z`.
    pub fn paint_order(&self) -> Vec<&DrawOp> {
        let mut out: Vec<&DrawOp> = self.ops.iter().collect();
        out.sort_by_key(|op| (op.z, op.seq));
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
