//! Color model conversion math.
//!
//! Standard RGB ↔ HSL / HSV formulas over normalized f64 components. All
//! functions are pure; out-of-range inputs pass through the math unchecked.
//! HSL ↔ HSV conversions route through RGB so there is a single set of
//! formulas to keep correct.

use crate::model::Color;

/// RGB → HSL. Channels in [0,1]; returns (hue degrees, saturation, lightness).
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = hue(r, g, b, max, delta);
    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    (h, s, l)
}

/// RGB → HSV. Channels in [0,1]; returns (hue degrees, saturation, value).
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = hue(r, g, b, max, delta);
    let s = if max == 0.0 { 0.0 } else { delta / max };

    (h, s, max)
}

/// HSL → RGB. Hue in degrees, saturation/lightness in [0,1].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let m = l - c / 2.0;
    sector_to_rgb(h, c, m)
}

/// HSV → RGB. Hue in degrees, saturation/value in [0,1].
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let c = v * s;
    let m = v - c;
    sector_to_rgb(h, c, m)
}

// Piecewise hue shared by both RGB decompositions. Gray (delta == 0) pins
// hue to 0; negative sectors wrap into [0,360).
fn hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let h = if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    h.rem_euclid(360.0)
}

// Map a hue sector back to RGB given chroma `c` and lightness offset `m`.
fn sector_to_rgb(h: f64, c: f64, m: f64) -> (f64, f64, f64) {
    let h = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    (r + m, g + m, b + m)
}

impl Color {
    /// The RGB channels of this color, converting first if needed.
    pub fn rgb_components(self) -> (f64, f64, f64) {
        match self {
            Self::Rgb { r, g, b } => (r, g, b),
            Self::Hsl { h, s, l } => hsl_to_rgb(h, s, l),
            Self::Hsv { h, s, v } => hsv_to_rgb(h, s, v),
        }
    }

    /// The HSL components of this color, converting first if needed.
    pub fn hsl_components(self) -> (f64, f64, f64) {
        match self {
            Self::Hsl { h, s, l } => (h, s, l),
            other => {
                let (r, g, b) = other.rgb_components();
                rgb_to_hsl(r, g, b)
            }
        }
    }

    /// The HSV components of this color, converting first if needed.
    pub fn hsv_components(self) -> (f64, f64, f64) {
        match self {
            Self::Hsv { h, s, v } => (h, s, v),
            other => {
                let (r, g, b) = other.rgb_components();
                rgb_to_hsv(r, g, b)
            }
        }
    }

    /// Convert to the RGB model (identity if already RGB).
    pub fn to_rgb(self) -> Self {
        let (r, g, b) = self.rgb_components();
        Self::Rgb { r, g, b }
    }

    /// Convert to the HSL model (identity if already HSL).
    pub fn to_hsl(self) -> Self {
        let (h, s, l) = self.hsl_components();
        Self::Hsl { h, s, l }
    }

    /// Convert to the HSV model (identity if already HSV).
    pub fn to_hsv(self) -> Self {
        let (h, s, v) = self.hsv_components();
        Self::Hsv { h, s, v }
    }
}
