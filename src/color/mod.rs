//! Canonical color representation
//!
//! A color is a set of channels tagged with the mode they are expressed in,
//! plus an alpha channel in [0, 1]. Mode conversion and luminance are
//! delegated to the `palette` crate, generic CSS parsing to `csscolorparser`.

mod convert;
mod format;

pub use format::{format_color, FormatMode};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mode a color's channels are stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// sRGB (default for every parsed color)
    #[default]
    Rgb,
    Hsl,
    Hsv,
    /// OKLCH, the lightness/chroma/hue form of OKLab
    Oklch,
}

impl ColorMode {
    pub const ALL: [Self; 4] = [Self::Rgb, Self::Hsl, Self::Hsv, Self::Oklch];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
            Self::Oklch => "oklch",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a mode or format name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown color mode: {0}")]
pub struct UnknownModeError(pub String);

impl FromStr for ColorMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" | "rgba" => Ok(Self::Rgb),
            "hsl" | "hsla" => Ok(Self::Hsl),
            "hsv" | "hsva" => Ok(Self::Hsv),
            "oklch" => Ok(Self::Oklch),
            other => Err(UnknownModeError(other.to_string())),
        }
    }
}

/// Channel values of a color in one mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Channels {
    /// sRGB channels in [0, 1]
    Rgb { r: f32, g: f32, b: f32 },
    /// Hue in degrees, saturation and lightness in [0, 1]
    Hsl { h: f32, s: f32, l: f32 },
    /// Hue in degrees, saturation and value in [0, 1]
    Hsv { h: f32, s: f32, v: f32 },
    /// Lightness in [0, 1], chroma (roughly [0, 0.4]), hue in degrees
    Oklch { l: f32, c: f32, h: f32 },
}

impl Channels {
    pub const fn mode(&self) -> ColorMode {
        match self {
            Self::Rgb { .. } => ColorMode::Rgb,
            Self::Hsl { .. } => ColorMode::Hsl,
            Self::Hsv { .. } => ColorMode::Hsv,
            Self::Oklch { .. } => ColorMode::Oklch,
        }
    }

    /// The three channel values in declaration order
    pub const fn values(&self) -> [f32; 3] {
        match *self {
            Self::Rgb { r, g, b } => [r, g, b],
            Self::Hsl { h, s, l } => [h, s, l],
            Self::Hsv { h, s, v } => [h, s, v],
            Self::Oklch { l, c, h } => [l, c, h],
        }
    }
}

/// A resolved color: mode-tagged channels plus alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanonicalColor {
    pub channels: Channels,
    /// Opacity in [0, 1] for parsed colors
    pub alpha: f32,
}

impl CanonicalColor {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn new(channels: Channels, alpha: f32) -> Self {
        Self { channels, alpha }
    }

    /// Opaque sRGB color from channels in [0, 1]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, alpha: f32) -> Self {
        Self {
            channels: Channels::Rgb { r, g, b },
            alpha,
        }
    }

    /// Opaque sRGB color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Parse any CSS color literal (hex, named, rgb(), hsl(), ...).
    ///
    /// The result is always in RGB mode with channels snapped to 8 bits,
    /// the same precision an `rgb(...)` literal carries.
    #[allow(clippy::cast_possible_truncation)]
    pub fn parse_css(input: &str) -> Option<Self> {
        let parsed = csscolorparser::parse(input).ok()?;
        let [r, g, b, _] = parsed.to_rgba8();
        let mut color = Self::from_rgb8(r, g, b);
        color.alpha = (parsed.a as f32).clamp(0.0, 1.0);
        Some(color)
    }

    pub const fn mode(&self) -> ColorMode {
        self.channels.mode()
    }

    /// Same color expressed in `mode`, alpha unchanged
    #[must_use]
    pub fn to_mode(&self, mode: ColorMode) -> Self {
        if self.mode() == mode {
            return *self;
        }
        let rgb = convert::to_srgb(self.channels);
        Self::new(convert::from_srgb(rgb, mode), self.alpha)
    }

    /// sRGB channels in [0, 1], clamped to gamut
    pub fn to_rgb(&self) -> [f32; 3] {
        let rgb = convert::to_srgb(self.channels);
        [
            rgb.red.clamp(0.0, 1.0),
            rgb.green.clamp(0.0, 1.0),
            rgb.blue.clamp(0.0, 1.0),
        ]
    }

    /// sRGB channels as bytes
    pub fn to_rgb8(&self) -> [u8; 3] {
        self.to_rgb().map(unit_to_byte)
    }

    /// Alpha as a byte, for 8-digit hex output
    pub fn alpha8(&self) -> u8 {
        unit_to_byte(self.alpha)
    }

    /// WCAG 2.x relative luminance in [0, 1]
    pub fn luminance(&self) -> f32 {
        let [r, g, b] = self.to_rgb();
        convert::relative_luminance(r, g, b)
    }

    /// Perceived (YIQ) brightness in [0, 255]
    pub fn brightness(&self) -> f32 {
        let [r, g, b] = self.to_rgb().map(|c| c * 255.0);
        (r * 299.0 + g * 587.0 + b * 114.0) / 1000.0
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
