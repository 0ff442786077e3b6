//! Canonical color value and format tags.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// Textual notation a color can be read from or rendered to.
///
/// Declaration order is the order the CLI menus present the formats in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsv,
    Hsl,
}

impl ColorFormat {
    /// All supported formats, in menu order.
    pub const ALL: [Self; 4] = [Self::Hex, Self::Rgb, Self::Hsv, Self::Hsl];

    /// Lowercase tag used in prompts and messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsv => "hsv",
            Self::Hsl => "hsl",
        }
    }

    /// Example input literal shown when prompting for a value.
    pub fn example(self) -> &'static str {
        match self {
            Self::Hex => "#FF8800",
            Self::Rgb => "(255, 136, 0)",
            Self::Hsv => "(40, 100%, 100%)",
            Self::Hsl => "(40, 100%, 50%)",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColorFormat {
    type Err = ColorError;

    /// The only place a free-form tag enters the type system; anything
    /// outside the four supported values is rejected here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsv" => Ok(Self::Hsv),
            "hsl" => Ok(Self::Hsl),
            other => Err(ColorError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A color in exactly one of the three canonical models.
///
/// RGB channels are normalized to [0,1]; hue is in degrees [0,360);
/// saturation, lightness and value are fractions in [0,1]. Parsing does not
/// clamp, so out-of-range components flow through the math unchecked. A
/// value is constructed once and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb { r: f64, g: f64, b: f64 },
    Hsl { h: f64, s: f64, l: f64 },
    Hsv { h: f64, s: f64, v: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_tags_round_trip() {
        for format in ColorFormat::ALL {
            assert_eq!(format.label().parse::<ColorFormat>().unwrap(), format);
        }
    }

    #[test]
    fn format_tag_is_case_insensitive() {
        assert_eq!("HSL".parse::<ColorFormat>().unwrap(), ColorFormat::Hsl);
        assert_eq!(" Hex ".parse::<ColorFormat>().unwrap(), ColorFormat::Hex);
    }

    #[test]
    fn unknown_format_tag_is_rejected() {
        let err = "cmyk".parse::<ColorFormat>().unwrap_err();
        assert!(matches!(err, ColorError::UnsupportedFormat(tag) if tag == "cmyk"));
    }

    #[test]
    fn every_format_has_an_example() {
        for format in ColorFormat::ALL {
            assert!(!format.example().is_empty());
        }
    }
}
