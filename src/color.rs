//! Conversion of normalized Figma colors to CSS strings.
//!
//! Opaque colors render as `#rrggbb`; anything with alpha other than exactly
//! 1 renders as `rgba(R, G, B, A)` with the alpha passed through untouched.
//! Channels are not clamped, so out-of-range input yields out-of-range digits.

use crate::figma::api_types::Color;

pub const DEFAULT_SHADOW_COLOR: &str = "rgba(0,0,0,0.25)";

/// `#RRGGBB` from channels in `[0, 1]`.
pub fn to_hex(r: f64, g: f64, b: f64) -> String {
    format!("#{}{}{}", channel_hex(r), channel_hex(g), channel_hex(b))
}

pub fn to_rgba_or_hex(r: f64, g: f64, b: f64, a: f64) -> String {
    if a == 1.0 {
        return to_hex(r, g, b);
    }
    format!(
        "rgba({}, {}, {}, {})",
        scale_channel(r),
        scale_channel(g),
        scale_channel(b),
        a
    )
}

/// Color string for a Figma color with an extra opacity multiplier.
pub fn color_string(color: &Color, opacity: f64) -> String {
    to_rgba_or_hex(color.r, color.g, color.b, color.a * opacity)
}

fn scale_channel(value: f64) -> i64 {
    (value * 255.0).round() as i64
}

fn channel_hex(value: f64) -> String {
    let n = scale_channel(value);
    let digits = if n < 0 {
        format!("-{:x}", n.unsigned_abs())
    } else {
        format!("{:x}", n)
    };
    format!("{digits:0>2}")
}
