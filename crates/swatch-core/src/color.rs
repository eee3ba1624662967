/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Color information and parsing
//!
//! Colors arrive as `#RRGGBB` strings from the pass payload.
//! Parsing never decides a fallback on its own, [`Rgb::from_hex`]
//! reports the failure and [`parse_color_or`] lets the call site
//! pick the color to use instead.
use core::fmt;

use log::{log, Level};

/// An 8-bit red, green, blue triple
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

/// Reasons a color string was rejected
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColorParseError {
    /// The string was empty, or only contained `#`
    Empty,
    /// Not exactly six hex digits after the optional `#`
    InvalidLength(usize),
    /// A character that isn't a hex digit
    InvalidHex(char)
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty color string"),
            Self::InvalidLength(len) => {
                write!(f, "expected 6 hex digits but found {len} characters")
            }
            Self::InvalidHex(c) => write!(f, "invalid hex digit {c:?}")
        }
    }
}

impl std::error::Error for ColorParseError {}

impl Rgb {
    /// Fallback for pass color fields
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Fallback for generated icons, also used in place of black
    /// so icons stay visible on dark passes
    pub const DARK_GRAY: Rgb = Rgb::new(51, 51, 51);

    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Return the components in `[r, g, b]` order, the order
    /// they are laid out in an RGB scanline
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Parse a `#RRGGBB` or `RRGGBB` color, case insensitive
    ///
    /// # Example
    /// ```
    /// use swatch_core::color::Rgb;
    /// assert_eq!(Rgb::from_hex("#1A2b3C"), Ok(Rgb::new(26, 43, 60)));
    /// assert!(Rgb::from_hex("#12345").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Rgb, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if digits.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let count = digits.chars().count();

        if count != 6 {
            return Err(ColorParseError::InvalidLength(count));
        }
        // six chars, and each must be ascii hex, so byte indexing below is safe
        if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(c));
        }
        let bytes = digits.as_bytes();

        Ok(Rgb {
            r: (nibble(bytes[0]) << 4) | nibble(bytes[1]),
            g: (nibble(bytes[2]) << 4) | nibble(bytes[3]),
            b: (nibble(bytes[4]) << 4) | nibble(bytes[5])
        })
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Rgb::new(value[0], value[1], value[2])
    }
}

/// Formats as a CSS style `rgb(r,g,b)` string, which is how
/// pass color fields carry colors.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

const fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0
    }
}

/// Parse `hex`, returning `default` if it isn't a valid color
///
/// This never fails, different call sites use different
/// defaults, see [`Rgb::BLACK`] and [`Rgb::DARK_GRAY`]
pub fn parse_color_or(hex: &str, default: Rgb) -> Rgb {
    parse_color_or_log(hex, default, Level::Debug)
}

/// Same as [`parse_color_or`], reporting the fallback at `level`
pub fn parse_color_or_log(hex: &str, default: Rgb, level: Level) -> Rgb {
    match Rgb::from_hex(hex) {
        Ok(color) => color,
        Err(err) => {
            log!(level, "Could not parse color {hex:?} ({err}), using {default}");
            default
        }
    }
}

/// Render a pass color field, malformed input becomes black
///
/// ```
/// use swatch_core::color::css_rgb;
/// assert_eq!(css_rgb("#E50914"), "rgb(229,9,20)");
/// assert_eq!(css_rgb("red"), "rgb(0,0,0)");
/// ```
pub fn css_rgb(hex: &str) -> String {
    parse_color_or(hex, Rgb::BLACK).to_string()
}
