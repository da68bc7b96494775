//! Theme color type.
//!
//! The engine treats each tool's color as opaque theme data owned by the
//! embedding settings store: it is carried through to snapshots unmodified.
//! The one place channels are read is the particle simulator, which mixes
//! burst colors between the activated tool's color and a decorative
//! palette.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The string is not 6 hex digits (after an optional leading `#`).
    #[error("expected 6 hex digits, got {0} characters")]
    InvalidLength(usize),
    /// A character was not a hex digit.
    #[error("invalid hex digit in color string")]
    InvalidDigit,
}

/// A 24-bit RGB color.
///
/// # Example
///
/// ```rust
/// use marina::Rgb;
///
/// let rust = Rgb::from_hex("#BF4D14").unwrap();
/// assert_eq!(rust, Rgb::new(191, 77, 20));
/// assert_eq!(rust.to_hex(), "#bf4d14");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` or `rrggbb` hex string.
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return Err(ParseColorError::InvalidLength(hex.len()));
        }
        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| ParseColorError::InvalidDigit)?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| ParseColorError::InvalidDigit)?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| ParseColorError::InvalidDigit)?;
        Ok(Self { r, g, b })
    }

    /// Formats the color as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear interpolation between two colors, channel-wise.
    ///
    /// `t` is clamped to `[0, 1]`; a non-finite `t` returns `self`.
    #[must_use]
    pub fn mix(&self, other: Rgb, t: f64) -> Rgb {
        if !t.is_finite() {
            return *self;
        }
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            let mixed = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            mixed.round() as u8
        };
        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
