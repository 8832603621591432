use serde::{Deserialize, Serialize};

use crate::style::color::Color;

/// Continuous palette sampled on `0..=1`, built from evenly spaced color stops.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Colormap {
    name: String,
    stops: Vec<Color>,
}

const COOLWARM: &[&str] = &[
    "#3b4cc0", "#688aef", "#99baff", "#c9d8ef", "#edd1c2", "#f7a789", "#e36a53", "#b40426",
];
const RDYLBU: &[&str] = &[
    "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee090", "#ffffbf", "#e0f3f8", "#abd9e9",
    "#74add1", "#4575b4", "#313695",
];
const BLUES: &[&str] = &[
    "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#08519c",
    "#08306b",
];
const VIRIDIS: &[&str] = &[
    "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779", "#6ece58",
    "#b5de2b", "#fde725",
];
const PLASMA: &[&str] = &[
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];

impl Colormap {
    /// Build a colormap from explicit stops. At least two stops are required.
    pub fn from_stops(name: impl Into<String>, stops: Vec<Color>) -> Result<Self, String> {
        if stops.len() < 2 {
            return Err("colormap needs at least two color stops".to_owned());
        }
        Ok(Self {
            name: name.into(),
            stops,
        })
    }

    /// Look up a built-in colormap. A `_r` suffix reverses it.
    pub fn named(name: &str) -> Result<Self, String> {
        let (base, reversed) = match name.strip_suffix("_r") {
            Some(b) => (b, true),
            None => (name, false),
        };
        let table = match base.to_ascii_lowercase().as_str() {
            "coolwarm" => COOLWARM,
            "rdylbu" => RDYLBU,
            "blues" => BLUES,
            "viridis" => VIRIDIS,
            "plasma" => PLASMA,
            _ => return Err(format!("unknown colormap \"{name}\"")),
        };
        let mut stops = table
            .iter()
            .map(|hex| Color::parse(hex))
            .collect::<Result<Vec<_>, _>>()?;
        if reversed {
            stops.reverse();
        }
        Self::from_stops(name, stops)
    }

    /// Name the colormap was built from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evenly spaced stops, low end first.
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// Sample the colormap; `t` is clamped to `0..=1`.
    pub fn sample(&self, t: f64) -> Color {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let segments = (self.stops.len() - 1) as f64;
        let pos = t * segments;
        let i = (pos.floor() as usize).min(self.stops.len() - 2);
        self.stops[i].lerp(self.stops[i + 1], pos - i as f64)
    }

    /// Sample through a linear normalization of `value` onto `[min, max]`.
    pub fn map(&self, value: f64, norm: Normalize) -> Color {
        self.sample(norm.apply(value))
    }
}

/// Linear normalization of a value range onto `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalize {
    /// Value mapped to 0.
    pub min: f64,
    /// Value mapped to 1.
    pub max: f64,
}

impl Normalize {
    /// Map `v` into `0..=1`. A degenerate range maps everything to 0.
    pub fn apply(self, v: f64) -> f64 {
        let span = self.max - self.min;
        if span.abs() < f64::EPSILON {
            return 0.0;
        }
        ((v - self.min) / span).clamp(0.0, 1.0)
    }
}

impl<'de> Deserialize<'de> for Colormap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Name(String),
            Stops(Vec<Color>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Name(n) => Self::named(&n).map_err(serde::de::Error::custom),
            Repr::Stops(s) => Self::from_stops("custom", s).map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/colormap.rs"]
mod tests;
