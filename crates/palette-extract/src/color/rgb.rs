//! 8-bit RGB colors and their packed 24-bit form
//!
//! [`PackedColor`] is the dense, hashable key every per-color table in the
//! pipeline is indexed by. [`Rgb`] is the unpacked byte triple used for
//! conversion and output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::palette::ParseColorError;

/// A 24-bit color value `(r << 16) | (g << 8) | b`.
///
/// The inner value is always below `2^24`; the only fallible constructor
/// is [`PackedColor::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackedColor(u32);

impl PackedColor {
    /// Largest representable value (`0xFFFFFF`).
    pub const MAX: u32 = 0x00FF_FFFF;

    /// Wrap a raw value, rejecting anything outside `[0, 2^24)`.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_extract::PackedColor;
    ///
    /// assert!(PackedColor::new(0xFF0000).is_some());
    /// assert!(PackedColor::new(0x0100_0000).is_none());
    /// ```
    #[inline]
    pub fn new(value: u32) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    /// Pack three channel bytes.
    #[inline]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Raw 24-bit value.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Unpack into channel bytes.
    #[inline]
    pub fn rgb(self) -> Rgb {
        Rgb::new((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

impl From<Rgb> for PackedColor {
    fn from(rgb: Rgb) -> Self {
        rgb.pack()
    }
}

impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rgb().to_hex())
    }
}

/// A gamma-encoded sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from channel bytes.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into the 24-bit histogram key.
    #[inline]
    pub fn pack(self) -> PackedColor {
        PackedColor::from_rgb(self.r, self.g, self.b)
    }

    /// Channel bytes as `[r, g, b]`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Uppercase `#RRGGBB` representation.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_extract::Rgb;
    ///
    /// assert_eq!(Rgb::new(255, 128, 0).to_hex(), "#FF8000");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl From<PackedColor> for Rgb {
    fn from(packed: PackedColor) -> Self {
        packed.rgb()
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB` (case-insensitive,
    /// surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: 0xF -> 0xFF
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
