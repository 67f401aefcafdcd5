//! Hex color utilities.
//!
//! Everything the themes derive from `primaryColor` goes through here: the
//! inverted secondary color, translucent tints, and the pastel page
//! background used by the Soft Modern theme.
//!
//! Parsing is strict (`#rrggbb` or `rrggbb`, case-insensitive). Renderers
//! never see the error: they go through [`parse_or_neutral`] /
//! [`invert_or_neutral`], which log and substitute [`NEUTRAL_COLOR`] so a
//! typo in the config can't take a page down.

use thiserror::Error;

/// Fallback used when a configured color cannot be parsed.
pub const NEUTRAL_COLOR: &str = "#10b981";

/// Blend factor toward white for pastel backgrounds.
const PASTEL_MIX: f64 = 0.7;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color: {0:?} (expected 6 hex digits, optional leading '#')")]
    InvalidColorFormat(String),
}

/// An sRGB triple with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parse a 6-digit hex color. The leading `#` is optional.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidColorFormat(hex.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ColorError::InvalidColorFormat(hex.to_string()))
    };
    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Format channels as a lowercase `#rrggbb` string.
///
/// Channels are rounded to the nearest integer and clamped to `0..=255`.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    format!("#{:02x}{:02x}{:02x}", to_channel(r), to_channel(g), to_channel(b))
}

fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Invert each channel of a hex color.
pub fn invert_color(hex: &str) -> Result<String, ColorError> {
    let Rgb { r, g, b } = hex_to_rgb(hex)?;
    Ok(rgb_to_hex(
        f64::from(255 - r),
        f64::from(255 - g),
        f64::from(255 - b),
    ))
}

/// Blend a color toward white, returning a CSS `rgb()` expression.
pub fn to_pastel(rgb: Rgb) -> String {
    let mix = |c: u8| {
        let c = f64::from(c);
        (c + (255.0 - c) * PASTEL_MIX).round() as u8
    };
    format!("rgb({}, {}, {})", mix(rgb.r), mix(rgb.g), mix(rgb.b))
}

/// Parse a color for decorative use, falling back to [`NEUTRAL_COLOR`].
pub fn parse_or_neutral(hex: &str) -> Rgb {
    hex_to_rgb(hex).unwrap_or_else(|err| {
        tracing::warn!(%err, fallback = NEUTRAL_COLOR, "using neutral color");
        neutral_rgb()
    })
}

/// Invert a color for decorative use, falling back to the inverted neutral.
pub fn invert_or_neutral(hex: &str) -> String {
    invert_color(hex).unwrap_or_else(|err| {
        tracing::warn!(%err, fallback = NEUTRAL_COLOR, "inverting neutral color instead");
        let Rgb { r, g, b } = neutral_rgb();
        rgb_to_hex(
            f64::from(255 - r),
            f64::from(255 - g),
            f64::from(255 - b),
        )
    })
}

fn neutral_rgb() -> Rgb {
    Rgb {
        r: 0x10,
        g: 0xb9,
        b: 0x81,
    }
}

/// Append a two-digit alpha suffix to a hex color (`#rrggbb` → `#rrggbbaa`).
///
/// Invalid input is replaced by the neutral color so the result is always
/// a well-formed CSS color.
pub fn with_alpha(hex: &str, alpha: &str) -> String {
    let Rgb { r, g, b } = parse_or_neutral(hex);
    format!("#{r:02x}{g:02x}{b:02x}{alpha}")
}
