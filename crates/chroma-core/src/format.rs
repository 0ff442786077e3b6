//! Rendering canonical colors to text.

use tracing::trace;

use crate::model::{Color, ColorFormat};

/// Render `color` in the target notation, converting models first if needed.
pub fn render(color: Color, target: ColorFormat) -> String {
    trace!(%target, "rendering color value");
    match target {
        ColorFormat::Hex => {
            let (r, g, b) = scaled_bytes(color);
            format!("#{r:02X}{g:02X}{b:02X}")
        }
        ColorFormat::Rgb => {
            let (r, g, b) = scaled_bytes(color);
            format!("rgb({r}, {g}, {b})")
        }
        ColorFormat::Hsl => {
            let (h, s, l) = color.hsl_components();
            format!(
                "hsl({}, {}%, {}%)",
                round2(h),
                round2(s * 100.0),
                round2(l * 100.0)
            )
        }
        ColorFormat::Hsv => {
            let (h, s, v) = color.hsv_components();
            format!(
                "hsv({}, {}%, {}%)",
                round2(h),
                round2(s * 100.0),
                round2(v * 100.0)
            )
        }
    }
}

// Truncating scale to the 0-255 byte range; the cast saturates on
// out-of-range channels.
fn scaled_bytes(color: Color) -> (u8, u8, u8) {
    let (r, g, b) = color.rgb_components();
    ((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_uppercase_and_zero_padded() {
        let color = Color::Rgb {
            r: 1.0,
            g: 136.0 / 255.0,
            b: 0.0,
        };
        assert_eq!(render(color, ColorFormat::Hex), "#FF8800");

        let dark = Color::Rgb {
            r: 0.0,
            g: 10.0 / 255.0,
            b: 1.0 / 255.0,
        };
        assert_eq!(render(dark, ColorFormat::Hex), "#000A01");
    }

    #[test]
    fn byte_scaling_truncates() {
        // 0.999 * 255 = 254.745; truncation keeps 254.
        let color = Color::Rgb {
            r: 0.999,
            g: 0.0,
            b: 0.0,
        };
        assert_eq!(render(color, ColorFormat::Rgb), "rgb(254, 0, 0)");
    }

    #[test]
    fn rgb_renders_decimal_integers() {
        let color = Color::Rgb {
            r: 1.0,
            g: 136.0 / 255.0,
            b: 0.0,
        };
        assert_eq!(render(color, ColorFormat::Rgb), "rgb(255, 136, 0)");
    }

    #[test]
    fn hsl_renders_rounded_percentages() {
        // rgb(128, 128, 0) is hue 60 with lightness 25.098...%.
        let color = Color::Rgb {
            r: 128.0 / 255.0,
            g: 128.0 / 255.0,
            b: 0.0,
        };
        assert_eq!(render(color, ColorFormat::Hsl), "hsl(60, 100%, 25.1%)");
    }

    #[test]
    fn whole_numbers_render_without_decimals() {
        let color = Color::Hsl {
            h: 40.0,
            s: 1.0,
            l: 0.5,
        };
        assert_eq!(render(color, ColorFormat::Hsl), "hsl(40, 100%, 50%)");
    }

    #[test]
    fn hsv_renders_value_not_lightness() {
        let color = Color::Hsl {
            h: 40.0,
            s: 1.0,
            l: 0.5,
        };
        assert_eq!(render(color, ColorFormat::Hsv), "hsv(40, 100%, 100%)");
    }

    #[test]
    fn identity_target_skips_conversion() {
        let color = Color::Hsv {
            h: 123.45,
            s: 0.6789,
            v: 0.5,
        };
        assert_eq!(render(color, ColorFormat::Hsv), "hsv(123.45, 67.89%, 50%)");
    }
}
