use crate::{GradientError, GradientResult};
use image::Rgb;
use std::{fmt, str::FromStr};

/// An 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Fill outside the inscribed circle. Not configurable.
    pub const BACKGROUND: Color = Color::from_rgb(220, 220, 220);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB`, either case
    pub fn from_hex(hex: &str) -> GradientResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GradientError::InvalidColorFormat(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| GradientError::InvalidColorFormat(hex.to_string()))
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Color {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Self::from_rgb(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb(color.channels())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#00AEC9").unwrap(), Color::from_rgb(0, 174, 201));
        assert_eq!(Color::from_hex("0D6586").unwrap(), Color::from_rgb(13, 101, 134));
        assert_eq!(Color::from_hex("#ffffff").unwrap(), Color::from_rgb(255, 255, 255));
        assert_eq!("#0d6586".parse::<Color>().unwrap(), Color::from_rgb(13, 101, 134));
    }

    #[test]
    fn test_from_hex_invalid() {
        for hex in ["", "#", "#FFF", "#12345", "#1234567", "GG0000", "#00AEC", "##00AEC9", "+1+2+3", "é00AE"] {
            match Color::from_hex(hex) {
                Err(GradientError::InvalidColorFormat(s)) => assert_eq!(s, hex),
                other => panic!("{hex:?} should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::from_rgb(0, 174, 201).to_string(), "#00AEC9");
        assert_eq!(Color::BACKGROUND.to_string(), "#DCDCDC");
    }

    #[test]
    fn test_into_rgb() {
        let px: Rgb<u8> = Color::from_rgb(1, 2, 3).into();
        assert_eq!(px, Rgb([1, 2, 3]));
        assert_eq!(Color::from([4, 5, 6]), Color::from_rgb(4, 5, 6));
    }
}
