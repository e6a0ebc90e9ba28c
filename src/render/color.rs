//! Color parsing and shading utilities.

use std::{fmt, str::FromStr};

use anyhow::{anyhow, ensure, Context, Result};

/// Shading factor applied per step of `darker` / `brighter`.
const DARKER: f64 = 0.7;

/// Simple opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline] pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Darken by `k` steps, scaling every channel by 0.7^k.
    pub fn darker(self, k: f64) -> Self { self.scale(DARKER.powf(k)) }

    /// Brighten by `k` steps, scaling every channel by (1/0.7)^k, saturating at 255.
    pub fn brighter(self, k: f64) -> Self { self.scale((1.0 / DARKER).powf(k)) }

    fn scale(self, factor: f64) -> Self {
        let channel = |c: u8| (c as f64 * factor).round().clamp(0.0, 255.0) as u8;
        Self { r: channel(self.r), g: channel(self.g), b: channel(self.b) }
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional).
    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        ensure!(hex.is_ascii(), "[Rgb::from_str] invalid color '{s}'");

        let digits = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => hex.to_string(),
            _ => return Err(anyhow!("[Rgb::from_str] expected #rgb or #rrggbb, got '{s}'")),
        };

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16)
            .with_context(|| format!("[Rgb::from_str] invalid hex digits in '{s}'"));

        Ok(Self { r: channel(0)?, g: channel(2)?, b: channel(4)? })
    }
}

impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!("#45bae8".parse::<Rgb>().unwrap(), Rgb::new(0x45, 0xba, 0xe8));
        assert_eq!("ff595f".parse::<Rgb>().unwrap(), Rgb::new(0xff, 0x59, 0x5f));
        assert_eq!("#fff".parse::<Rgb>().unwrap(), Rgb::WHITE);
        assert_eq!("#ccc".parse::<Rgb>().unwrap(), Rgb::new(0xcc, 0xcc, 0xcc));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#gggggg".parse::<Rgb>().is_err());
        assert!("".parse::<Rgb>().is_err());
        assert!("#ééé".parse::<Rgb>().is_err());
    }

    #[test]
    fn display_round_trips_as_css_hex() {
        assert_eq!(Rgb::new(0x29, 0x2d, 0x39).to_string(), "#292d39");
    }

    #[test]
    fn darker_scales_by_seven_tenths() {
        assert_eq!(Rgb::new(100, 200, 10).darker(1.0), Rgb::new(70, 140, 7));
        assert_eq!(Rgb::new(100, 200, 10).darker(2.0), Rgb::new(49, 98, 5));
        assert_eq!(Rgb::WHITE.darker(0.0), Rgb::WHITE);
    }

    #[test]
    fn brighter_saturates() {
        assert_eq!(Rgb::WHITE.brighter(1.0), Rgb::WHITE);
        // 0x45 = 69 -> 98.57 -> 99, 0xba = 186 -> 265.7 -> 255, 0xe8 = 232 -> 255
        assert_eq!(Rgb::new(0x45, 0xba, 0xe8).brighter(1.0), Rgb::new(99, 255, 255));
    }
}
