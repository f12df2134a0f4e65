//! Colors
//!
//! Colors are stored as linear RGBA floats. In configuration files they are
//! written as hex strings (`"#RRGGBB"` or `"#RRGGBBAA"`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// A color string that is not `#RRGGBB` or `#RRGGBBAA`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color `{0}`: expected #RRGGBB or #RRGGBBAA")]
pub struct ParseColorError(pub String);

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Scale the current alpha by `factor` (clamped to 0..=1)
    pub fn fade(mut self, factor: f32) -> Self {
        self.a *= factor.clamp(0.0, 1.0);
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linear interpolation between two colors
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }

    fn channel(value: f32) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let digits = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| err())?;

        Ok(if digits.len() == 6 {
            Color::from_hex(value)
        } else {
            Color::from_hex(value >> 8).with_alpha((value & 0xFF) as f32 / 255.0)
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}",
            Self::channel(self.r),
            Self::channel(self.g),
            Self::channel(self.b)
        )?;
        if self.a < 1.0 {
            write!(f, "{:02X}", Self::channel(self.a))?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb_and_rgba() {
        let c: Color = "#FF0000".parse().unwrap();
        assert_eq!(c, Color::RED);

        let c: Color = "#00000000".parse().unwrap();
        assert_eq!(c, Color::TRANSPARENT);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("FF0000".parse::<Color>().is_err());
        assert!("#FFF".parse::<Color>().is_err());
        assert!("#GG0000".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_uses_hex() {
        assert_eq!(Color::WHITE.to_string(), "#FFFFFF");
        assert_eq!(Color::BLACK.with_alpha(0.0).to_string(), "#00000000");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::from_hex(0x336699)).unwrap();
        assert_eq!(json, "\"#336699\"");

        let err = serde_json::from_str::<Color>("\"blue\"").unwrap_err();
        assert!(err.to_string().contains("invalid color"));
    }

    #[test]
    fn test_lerp_and_fade() {
        let mid = Color::lerp(&Color::BLACK, &Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < f32::EPSILON);
        assert_eq!(Color::WHITE.fade(0.25).a, 0.25);
        assert_eq!(Color::WHITE.fade(2.0).a, 1.0);
    }
}
