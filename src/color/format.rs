//! Text output for canonical colors
//!
//! Output is lowercase and CSS-like:
//! - `hex`: `#rrggbb` (alpha dropped)
//! - `hex8`: `#rrggbbaa`
//! - `rgb`: `rgb(r, g, b)`, or `rgba(r, g, b, a)` when alpha < 1
//! - `hsl`: `hsl(h, s%, l%)`, or `hsla(...)` when alpha < 1
//! - `hsv`: `hsv(h, s%, v%)`, or `hsva(...)` when alpha < 1
//! - `oklch`: `oklch(l c h)`, or `oklch(l c h / a)` when alpha < 1

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{CanonicalColor, ColorMode, UnknownModeError};

/// Text formats a color can be rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatMode {
    Hex,
    Hex8,
    Rgb,
    Hsl,
    Hsv,
    Oklch,
}

impl FormatMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Hex8 => "hex8",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
            Self::Oklch => "oklch",
        }
    }
}

impl From<ColorMode> for FormatMode {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Rgb => Self::Rgb,
            ColorMode::Hsl => Self::Hsl,
            ColorMode::Hsv => Self::Hsv,
            ColorMode::Oklch => Self::Oklch,
        }
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "hex8" => Ok(Self::Hex8),
            other => other.parse::<ColorMode>().map(Self::from),
        }
    }
}

/// Render `color` as text in `mode`
pub fn format_color(color: &CanonicalColor, mode: FormatMode) -> String {
    let translucent = color.alpha < 1.0;
    let alpha = number(color.alpha.clamp(0.0, 1.0), 2);

    match mode {
        FormatMode::Hex => {
            let [r, g, b] = color.to_rgb8();
            format!("#{r:02x}{g:02x}{b:02x}")
        }
        FormatMode::Hex8 => {
            let [r, g, b] = color.to_rgb8();
            let a = color.alpha8();
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
        FormatMode::Rgb => {
            let [r, g, b] = color.to_rgb8();
            if translucent {
                format!("rgba({r}, {g}, {b}, {alpha})")
            } else {
                format!("rgb({r}, {g}, {b})")
            }
        }
        FormatMode::Hsl => {
            let [h, s, l] = color.to_mode(ColorMode::Hsl).channels.values();
            let (h, s, l) = (number(h, 2), number(s * 100.0, 2), number(l * 100.0, 2));
            if translucent {
                format!("hsla({h}, {s}%, {l}%, {alpha})")
            } else {
                format!("hsl({h}, {s}%, {l}%)")
            }
        }
        FormatMode::Hsv => {
            let [h, s, v] = color.to_mode(ColorMode::Hsv).channels.values();
            let (h, s, v) = (number(h, 0), number(s * 100.0, 0), number(v * 100.0, 0));
            if translucent {
                format!("hsva({h}, {s}%, {v}%, {alpha})")
            } else {
                format!("hsv({h}, {s}%, {v}%)")
            }
        }
        FormatMode::Oklch => {
            let [l, c, h] = color.to_mode(ColorMode::Oklch).channels.values();
            let (l, c, h) = (number(l, 3), number(c, 3), number(h, 2));
            if translucent {
                format!("oklch({l} {c} {h} / {alpha})")
            } else {
                format!("oklch({l} {c} {h})")
            }
        }
    }
}

/// Round to `decimals` places; `Display` on f32 then drops trailing zeros.
fn number(v: f32, decimals: i32) -> f32 {
    let scale = 10f32.powi(decimals);
    // adding 0.0 turns -0.0 into 0.0
    (v * scale).round() / scale + 0.0
}
