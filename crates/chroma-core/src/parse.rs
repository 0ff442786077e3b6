//! Textual color parsing.
//!
//! Each format has its own grammar, kept deliberately loose: rgb input may
//! be `(255, 136, 0)`, `255,136,0`, or free-form text containing exactly
//! three integers, and hsl/hsv fractions accept both `50%` and `0.5`.
//! Components are not range-checked; whatever parses flows downstream.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::error::{ColorError, ColorResult};
use crate::model::{Color, ColorFormat};

static DIGIT_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digit pattern"));

/// Parse `input` in the given source format into a canonical [`Color`].
pub fn parse(format: ColorFormat, input: &str) -> ColorResult<Color> {
    trace!(%format, input, "parsing color value");
    let input = input.trim();
    match format {
        ColorFormat::Hex => parse_hex(input),
        ColorFormat::Rgb => parse_rgb(input),
        ColorFormat::Hsl => {
            let (h, s, l) = parse_triplet(input, format)?;
            Ok(Color::Hsl { h, s, l })
        }
        ColorFormat::Hsv => {
            let (h, s, v) = parse_triplet(input, format)?;
            Ok(Color::Hsv { h, s, v })
        }
    }
}

fn parse_hex(input: &str) -> ColorResult<Color> {
    let digits = input.trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(ColorError::InvalidFormat(
            "hex value must be 6 digits".to_string(),
        ));
    }

    let byte_at = |i: usize| -> ColorResult<f64> {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map(|byte| f64::from(byte) / 255.0)
            .map_err(|_| ColorError::InvalidFormat("hex value has non-hex digits".to_string()))
    };

    Ok(Color::Rgb {
        r: byte_at(0)?,
        g: byte_at(2)?,
        b: byte_at(4)?,
    })
}

// Integers are pulled out of the surrounding text wholesale, so any
// separator style works as long as exactly three show up.
fn parse_rgb(input: &str) -> ColorResult<Color> {
    let nums: Vec<f64> = DIGIT_RUNS
        .find_iter(input)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect();
    if nums.len() != 3 {
        return Err(ColorError::InvalidFormat(
            "rgb requires 3 integers".to_string(),
        ));
    }

    Ok(Color::Rgb {
        r: nums[0] / 255.0,
        g: nums[1] / 255.0,
        b: nums[2] / 255.0,
    })
}

fn parse_triplet(input: &str, format: ColorFormat) -> ColorResult<(f64, f64, f64)> {
    let inner = input.trim_matches(['(', ')']);
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ColorError::InvalidFormat(format!(
            "{format} requires 3 values"
        )));
    }

    let h = parts[0].parse::<f64>().map_err(|_| {
        ColorError::InvalidFormat(format!("{format} hue is not a number: {}", parts[0]))
    })?;
    let s = percentage_or_fraction(parts[1], format)?;
    let third = percentage_or_fraction(parts[2], format)?;
    Ok((h, s, third))
}

/// `50%` → 0.5; a bare number is taken as an already-normalized fraction.
fn percentage_or_fraction(token: &str, format: ColorFormat) -> ColorResult<f64> {
    let parsed = if let Some(percent) = token.strip_suffix('%') {
        percent.trim().parse::<f64>().map(|p| p / 100.0)
    } else {
        token.parse::<f64>()
    };
    parsed.map_err(|_| {
        ColorError::InvalidFormat(format!("{format} component is not a number: {token}"))
    })
}
