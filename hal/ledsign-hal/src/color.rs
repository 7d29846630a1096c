//! LED colors
//!
//! Each dot on the sign holds a red and a green LED. Lighting both gives
//! orange, lighting neither leaves the dot dark.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Color of a single dot
///
/// The discriminants are the values shifted into the sign's color
/// registers. `0` is always off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Color {
    /// Dot off
    #[default]
    Blank = 0,
    /// Red LED only
    Red = 1,
    /// Green LED only
    Green = 2,
    /// Red and green together
    Orange = 3,
}

/// Error returned when a color name or code is not recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseColorError;

impl Color {
    /// All colors, in register order
    pub const ALL: [Color; 4] = [Color::Blank, Color::Red, Color::Green, Color::Orange];

    /// Register value for this color
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a color by register value
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Color::Blank),
            1 => Some(Color::Red),
            2 => Some(Color::Green),
            3 => Some(Color::Orange),
            _ => None,
        }
    }

    /// Lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Color::Blank => "blank",
            Color::Red => "red",
            Color::Green => "green",
            Color::Orange => "orange",
        }
    }

    /// Check if the dot is lit
    pub const fn is_lit(self) -> bool {
        !matches!(self, Color::Blank)
    }

    /// Whether the red LED is on for this color
    pub const fn red(self) -> bool {
        self.code() & 0b01 != 0
    }

    /// Whether the green LED is on for this color
    pub const fn green(self) -> bool {
        self.code() & 0b10 != 0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts names (any case) or the numeric register codes
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return Color::from_code(code).ok_or(ParseColorError);
        }

        Color::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .or_else(|| s.eq_ignore_ascii_case("none").then_some(Color::Blank))
            .ok_or(ParseColorError)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown color (expected red, green, orange, blank or 0-3)")
    }
}
