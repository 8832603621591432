use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA color with normalized `0..=1` channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Build a color from straight-alpha channels.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Parse `#RRGGBB`, `#RRGGBBAA` or a CSS color name.
    pub fn parse(s: &str) -> Result<Self, String> {
        let t = s.trim();
        if t.starts_with('#') {
            return parse_hex(t);
        }
        named(t).ok_or_else(|| format!("unknown color \"{t}\""))
    }

    /// Return a copy with alpha multiplied by `opacity`.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            a: (self.a * opacity).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Linear interpolation between `self` (t = 0) and `other` (t = 1).
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Quantize to straight-alpha RGBA8.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }

    /// `#rrggbb` form used in SVG paint attributes. Alpha is emitted separately.
    pub fn to_hex_rgb(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Every spelling a settings document may use for a colour.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorDoc {
    Css(String),
    Rgba {
        r: f64,
        g: f64,
        b: f64,
        #[serde(default = "opaque")]
        a: f64,
    },
    Hsla {
        h: f64,
        s: f64,
        l: f64,
        #[serde(default = "opaque")]
        a: f64,
    },
    Channels(Vec<f64>),
}

fn opaque() -> f64 {
    1.0
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        match ColorDoc::deserialize(deserializer)? {
            ColorDoc::Css(text) => Self::parse(&text).map_err(D::Error::custom),
            ColorDoc::Rgba { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            ColorDoc::Hsla { h, s, l, a } => Ok(from_hsla(h, s, l, a)),
            ColorDoc::Channels(channels) => match *channels.as_slice() {
                [r, g, b] => Ok(Self::rgb(r, g, b)),
                [r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
                _ => Err(D::Error::custom(format!(
                    "colour channel list needs 3 or 4 values, got {}",
                    channels.len()
                ))),
            },
        }
    }
}

fn parse_hex(text: &str) -> Result<Color, String> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    let well_formed =
        matches!(digits.len(), 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit());
    if !well_formed {
        return Err(format!("\"{text}\" is not a #RRGGBB or #RRGGBBAA colour"));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[2 * i..2 * i + 2], 16)
            .map(|v| f64::from(v) / 255.0)
            .map_err(|e| format!("\"{text}\": {e}"))
    };
    let alpha = if digits.len() == 8 { channel(3)? } else { 1.0 };
    Ok(Color::rgba(channel(0)?, channel(1)?, channel(2)?, alpha))
}

fn named(name: &str) -> Option<Color> {
    let gray = |v: f64| Color::rgb(v, v, v);
    let color = match name.to_ascii_lowercase().as_str() {
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "red" => Color::rgb(1.0, 0.0, 0.0),
        "green" => Color::rgb(0.0, 128.0 / 255.0, 0.0),
        "blue" => Color::rgb(0.0, 0.0, 1.0),
        "gray" | "grey" => gray(128.0 / 255.0),
        "lightgray" | "lightgrey" => gray(211.0 / 255.0),
        "darkgray" | "darkgrey" => gray(169.0 / 255.0),
        "orange" => Color::rgb(1.0, 165.0 / 255.0, 0.0),
        "yellow" => Color::rgb(1.0, 1.0, 0.0),
        "navy" => Color::rgb(0.0, 0.0, 128.0 / 255.0),
        "gold" => Color::rgb(1.0, 215.0 / 255.0, 0.0),
        "transparent" | "none" => Color::rgba(0.0, 0.0, 0.0, 0.0),
        _ => return None,
    };
    Some(color)
}

/// HSL to RGB through chroma and the hue sextant. Hue in degrees, the rest in `0..=1`.
fn from_hsla(h: f64, s: f64, l: f64, a: f64) -> Color {
    let sextant = h.rem_euclid(360.0) / 60.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let second = chroma * (1.0 - (sextant % 2.0 - 1.0).abs());
    let (r, g, b) = match sextant as u32 {
        0 => (chroma, second, 0.0),
        1 => (second, chroma, 0.0),
        2 => (0.0, chroma, second),
        3 => (0.0, second, chroma),
        4 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };
    let m = l - chroma / 2.0;
    Color::rgba(r + m, g + m, b + m, a)
}

#[cfg(test)]
#[path = "../../tests/unit/style/color.rs"]
mod tests;
