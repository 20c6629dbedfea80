//! Color types for the ambient network.
//!
//! Configuration colors are 8-bit RGB triples ([`Rgb`]) that serialize as
//! `[r, g, b]` arrays. Drawing primitives carry an [`Rgba`], whose alpha
//! uses the same 0-255 scale so that opacities like `180` read the same in
//! configuration, tests and rendering code.

use crate::error::NetError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 8-bit sRGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// 8-bit sRGB color with a fractional alpha on a 0-255 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in [0, 255].
    pub a: f64,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a slice of exactly three 0-255 components.
    ///
    /// Returns `NetError::InvalidColor` for the wrong arity or an out-of-range
    /// component.
    pub fn from_components(components: &[u64]) -> Result<Self, NetError> {
        let [r, g, b] = components else {
            return Err(NetError::InvalidColor(format!(
                "expected 3 components, got {}",
                components.len()
            )));
        };
        let channel = |v: u64, name: &str| {
            u8::try_from(v)
                .map_err(|_| NetError::InvalidColor(format!("{name} component {v} exceeds 255")))
        };
        Ok(Self {
            r: channel(*r, "red")?,
            g: channel(*g, "green")?,
            b: channel(*b, "blue")?,
        })
    }

    /// Parses a hex color string like "#0f1116" or "0f1116" (case insensitive).
    pub fn from_hex(hex: &str) -> Result<Self, NetError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(NetError::InvalidColor(format!(
                "expected 6 hex digits, got '{hex}'"
            )));
        }
        let parse = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| NetError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Self {
            r: parse(0..2, "red")?,
            g: parse(2..4, "green")?,
            b: parse(4..6, "blue")?,
        })
    }

    /// Formats as `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Attaches an opacity, clamped to [0, 255].
    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 255.0) },
        }
    }

    /// Fully opaque version of this color.
    pub fn opaque(self) -> Rgba {
        self.with_alpha(255.0)
    }
}

impl Rgba {
    /// Opacity as a fraction in [0, 1].
    pub fn alpha_fraction(&self) -> f64 {
        self.a / 255.0
    }

    /// Drops the alpha channel.
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// CSS `rgba()` string, as accepted by a 2D canvas context.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.4})",
            self.r,
            self.g,
            self.b,
            self.alpha_fraction()
        )
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.r, self.g, self.b].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let components = Vec::<u64>::deserialize(deserializer)?;
        Rgb::from_components(&components).map_err(serde::de::Error::custom)
    }
}
