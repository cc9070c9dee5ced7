//! Wheel segment colors
//!
//! Colors are `#RRGGBB` values. The contrast resolver picks a readable
//! label color for a given segment background using perceptual luminance.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::WheelError;

/// Foreground color used on dark segment backgrounds
pub const CONTRAST_LIGHT: &str = "#ffffff";
/// Foreground color used on light segment backgrounds
pub const CONTRAST_DARK: &str = "#000000";

/// Luminance threshold separating "light" from "dark" backgrounds
const LUMINANCE_THRESHOLD: f32 = 0.5;

/// An RGB color in `#RRGGBB` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string
    pub fn parse(s: &str) -> Result<Self, WheelError> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| WheelError::InvalidColorFormat(s.to_string()))?;
        // from_str_radix tolerates a leading `+`, so check digits directly
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(WheelError::InvalidColorFormat(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| WheelError::InvalidColorFormat(s.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Canonical lowercase hex form, e.g. `#ff6384`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceptual luminance in [0, 1] (ITU-R BT.601 weights)
    pub fn luminance(self) -> f32 {
        (0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32) / 255.0
    }

    /// Readable label color for this background: white on dark, black on light
    pub fn contrast_color(self) -> &'static str {
        if self.luminance() <= LUMINANCE_THRESHOLD {
            CONTRAST_LIGHT
        } else {
            CONTRAST_DARK
        }
    }

    /// Draw a uniformly random color, used to suggest the next item's color
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            r: rng.random::<u8>(),
            g: rng.random::<u8>(),
            b: rng.random::<u8>(),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = WheelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_parse_roundtrip() {
        let c = Color::parse("#FF6384").unwrap();
        assert_eq!(c, Color::new(0xff, 0x63, 0x84));
        assert_eq!(c.to_hex(), "#ff6384");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["ff6384", "#ff638", "#ff63845", "#gg6384", "", "#", "#+1+2+3", "#-1-2-3"] {
            assert!(matches!(
                Color::parse(bad),
                Err(WheelError::InvalidColorFormat(_))
            ));
        }
    }

    #[test]
    fn test_contrast_is_two_valued() {
        assert_eq!(Color::new(0, 0, 0).contrast_color(), CONTRAST_LIGHT);
        assert_eq!(Color::new(255, 255, 255).contrast_color(), CONTRAST_DARK);
        // Saturated blue is perceptually dark despite a high channel value
        assert_eq!(Color::new(0, 0, 255).contrast_color(), CONTRAST_LIGHT);
        // Pure green is perceptually light
        assert_eq!(Color::new(0, 255, 0).contrast_color(), CONTRAST_DARK);
    }

    #[test]
    fn test_contrast_deterministic() {
        let c = Color::parse("#36a2eb").unwrap();
        assert_eq!(c.contrast_color(), c.contrast_color());
    }

    #[test]
    fn test_random_color_is_valid_hex() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..32 {
            let c = Color::random(&mut rng);
            let hex = c.to_hex();
            assert_eq!(hex.len(), 7);
            assert_eq!(Color::parse(&hex).unwrap(), c);
        }
    }
}
