use std::f64::consts::FRAC_PI_2;

use kurbo::BezPath;

use crate::foundation::core::{HourRange, Point};

/// Largest angular step drawn as a straight segment; longer polar segments are subdivided
/// so they follow the dial instead of cutting across it.
const MAX_SEGMENT_RAD: f64 = std::f64::consts::PI / 180.0;

/// Placement of the polar axes on the page.
///
/// Screen angle `φ = theta_offset + direction · θ` (direction −1 is clockwise) and screen
/// radius `ρ = (r − r_min) / (r_max − r_min) · radius`, so the inner limit of the visible
/// range sits at the centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarAxes {
    /// Centre in pixels.
    pub center: Point,
    /// Outer radius in pixels.
    pub radius: f64,
    /// Visible hour window.
    pub range: HourRange,
    /// Screen angle of day 0, radians counter-clockwise from the +x axis.
    pub theta_offset: f64,
    /// +1 counter-clockwise, −1 clockwise.
    pub direction: f64,
}

impl PolarAxes {
    /// Clockwise axes with day 0 at the top, shifted counter-clockwise by `rotation` radians.
    pub fn clockwise(center: Point, radius: f64, range: HourRange, rotation: f64) -> Self {
        Self {
            center,
            radius,
            range,
            theta_offset: FRAC_PI_2 + rotation,
            direction: -1.0,
        }
    }

    /// Screen angle of a data angle.
    pub fn screen_angle(&self, theta: f64) -> f64 {
        self.theta_offset + self.direction * theta
    }

    /// Screen radius of a normalized radius, unclamped.
    pub fn rho(&self, r: f64) -> f64 {
        let (lo, hi) = (self.range.r_min(), self.range.r_max());
        (r - lo) / (hi - lo) * self.radius
    }

    /// Screen radius with `r` clamped to the visible range.
    pub fn rho_clamped(&self, r: f64) -> f64 {
        let r = if r.is_finite() { r } else { self.range.r_min() };
        self.rho(r.clamp(self.range.r_min(), self.range.r_max()))
    }

    fn place(&self, theta: f64, rho: f64) -> Point {
        let phi = self.screen_angle(theta);
        Point::new(
            self.center.x + rho * phi.cos(),
            self.center.y - rho * phi.sin(),
        )
    }

    /// Pixel position, radius unclamped. Used for text.
    pub fn to_px(&self, theta: f64, r: f64) -> Point {
        self.place(theta, self.rho(r))
    }

    /// Pixel position with the radius clamped to the visible range. Used for geometry.
    pub fn to_px_clamped(&self, theta: f64, r: f64) -> Point {
        self.place(theta, self.rho_clamped(r))
    }

    /// On-screen counter-clockwise rotation of a label whose data rotation is `deg`.
    ///
    /// Data rotations are computed for the default top offset; any extra offset turns the
    /// labels with the dial.
    pub fn text_rotation(&self, deg: f64) -> f64 {
        deg + (self.theta_offset - FRAC_PI_2).to_degrees()
    }

    fn push_curve(&self, path: &mut BezPath, theta: &[f64], r: &[f64], start_new: bool) {
        let mut first = start_new;
        for (i, (&t, &rv)) in theta.iter().zip(r).enumerate() {
            if i > 0 {
                let (t0, r0) = (theta[i - 1], r[i - 1]);
                let steps = ((t - t0).abs() / MAX_SEGMENT_RAD).ceil() as usize;
                for k in 1..steps {
                    let f = k as f64 / steps as f64;
                    path.line_to(self.to_px_clamped(t0 + (t - t0) * f, r0 + (rv - r0) * f));
                }
            }
            let p = self.to_px_clamped(t, rv);
            if first {
                path.move_to(p);
                first = false;
            } else {
                path.line_to(p);
            }
        }
    }

    /// Closed outline of the region between `inner` and `outer`, both sampled at `theta`.
    pub fn band_path(&self, theta: &[f64], inner: &[f64], outer: &[f64]) -> BezPath {
        let n = theta.len().min(inner.len()).min(outer.len());
        let mut path = BezPath::new();
        if n == 0 {
            return path;
        }
        self.push_curve(&mut path, &theta[..n], &outer[..n], true);
        let rev_t: Vec<f64> = theta[..n].iter().rev().copied().collect();
        let rev_r: Vec<f64> = inner[..n].iter().rev().copied().collect();
        self.push_curve(&mut path, &rev_t, &rev_r, false);
        path.close_path();
        path
    }

    /// Open polyline through `(theta[i], r[i])`.
    pub fn line_path(&self, theta: &[f64], r: &[f64]) -> BezPath {
        let mut path = BezPath::new();
        self.push_curve(&mut path, theta, r, true);
        path
    }

    /// Closed annular sector between two angles and two radii.
    pub fn sector_path(&self, t0: f64, t1: f64, r0: f64, r1: f64) -> BezPath {
        self.band_path(&[t0, t1], &[r0, r0], &[r1, r1])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/polar.rs"]
mod tests;
