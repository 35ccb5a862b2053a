#![forbid(unsafe_code)]

//! RGB color value type and `#RRGGBB` parsing.

use std::fmt;
use std::str::FromStr;

/// RGB color (opaque, 8 bits per channel).
///
/// Two colors with equal channel values are interchangeable; there is no
/// identity beyond the channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` literal (7 characters, hex digits, case-insensitive).
    ///
    /// # Errors
    /// Returns [`ParseColorError`] when the literal deviates from that shape.
    pub fn parse_hex(s: &str) -> Result<Self, ParseColorError> {
        if s.len() != 7 {
            return Err(ParseColorError::BadLength(s.len()));
        }
        let Some(digits) = s.strip_prefix('#') else {
            return Err(ParseColorError::MissingHash);
        };
        // from_str_radix tolerates a leading '+', so screen the digits first.
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::BadHexDigit);
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ParseColorError::BadHexDigit)
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Channel intensities scaled to [0,1], in RGB order.
    #[must_use]
    pub fn channels(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

/// Failure to parse a `#RRGGBB` color literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    /// Literal is not exactly 7 characters long.
    BadLength(usize),
    /// Literal does not start with `#`.
    MissingHash,
    /// A channel is not two hex digits.
    BadHexDigit,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadLength(len) => {
                write!(f, "expected 7-character #RRGGBB literal, got {len} characters")
            }
            Self::MissingHash => write!(f, "color literal must start with '#'"),
            Self::BadHexDigit => write!(f, "color channels must be hex digits"),
        }
    }
}

impl std::error::Error for ParseColorError {}
