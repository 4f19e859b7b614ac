//! LED color handling
//!
//! Items store their color as `#rrggbb` text; the device only takes a hue.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// 24-bit RGB color parsed from `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl HexColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    pub fn from_array([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }

    /// HSL hue in whole degrees, [0, 360)
    pub fn hue(self) -> u16 {
        rgb_to_hue(self.red, self.green, self.blue)
    }
}

impl FromStr for HexColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ConfigError::InvalidColor(s.to_string()))
        };

        Ok(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// HSL hue of an RGB triple using the max/min channel formula
///
/// Achromatic colors (all channels equal) have hue 0.
pub fn rgb_to_hue(red: u8, green: u8, blue: u8) -> u16 {
    let r = f64::from(red) / 255.0;
    let g = f64::from(green) / 255.0;
    let b = f64::from(blue) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max == min {
        return 0;
    }

    let d = max - min;
    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    // Rounding 359.5 and above lands on 360, which is the same angle as 0
    (sector * 60.0).round() as u16 % 360
}

/// Hue for `#rrggbb` text
pub fn hex_to_hue(hex: &str) -> Result<u16, ConfigError> {
    Ok(hex.parse::<HexColor>()?.hue())
}
