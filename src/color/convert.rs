//! Mode conversion on top of the `palette` crate
//!
//! Every conversion goes through sRGB. OKLCH passes through OKLab since
//! that is the space `palette` converts to and from RGB.
//!
//! Conversions are unclamped: an OKLCH color outside the sRGB gamut keeps
//! its hue and chroma through an RGB round trip. Clamping happens only when
//! channels are read out as output.

use palette::convert::FromColorUnclamped;
use palette::{Hsl, Hsv, LinSrgb, Oklab, Oklch, Srgb};

use super::{Channels, ColorMode};

pub(super) fn to_srgb(channels: Channels) -> Srgb {
    match channels {
        Channels::Rgb { r, g, b } => Srgb::new(r, g, b),
        Channels::Hsl { h, s, l } => {
            let hsl: Hsl = Hsl::new(h, s, l);
            Srgb::from_color_unclamped(hsl)
        }
        Channels::Hsv { h, s, v } => {
            let hsv: Hsv = Hsv::new(h, s, v);
            Srgb::from_color_unclamped(hsv)
        }
        Channels::Oklch { l, c, h } => {
            let lch: Oklch = Oklch::new(l, c, h);
            let lab: Oklab = Oklab::from_color_unclamped(lch);
            Srgb::from_color_unclamped(lab)
        }
    }
}

pub(super) fn from_srgb(rgb: Srgb, mode: ColorMode) -> Channels {
    match mode {
        ColorMode::Rgb => Channels::Rgb {
            r: rgb.red,
            g: rgb.green,
            b: rgb.blue,
        },
        ColorMode::Hsl => {
            let hsl: Hsl = Hsl::from_color_unclamped(rgb);
            Channels::Hsl {
                h: hsl.hue.into_positive_degrees(),
                s: hsl.saturation,
                l: hsl.lightness,
            }
        }
        ColorMode::Hsv => {
            let hsv: Hsv = Hsv::from_color_unclamped(rgb);
            Channels::Hsv {
                h: hsv.hue.into_positive_degrees(),
                s: hsv.saturation,
                v: hsv.value,
            }
        }
        ColorMode::Oklch => {
            let lab: Oklab = Oklab::from_color_unclamped(rgb);
            let lch: Oklch = Oklch::from_color_unclamped(lab);
            Channels::Oklch {
                l: lch.l,
                c: lch.chroma,
                h: lch.hue.into_positive_degrees(),
            }
        }
    }
}

/// WCAG relative luminance of gamma-encoded sRGB channels
pub(super) fn relative_luminance(r: f32, g: f32, b: f32) -> f32 {
    let linear: LinSrgb = Srgb::new(r, g, b).into_linear();
    0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_oklch_of_white_is_full_lightness() {
        let white: Srgb = Srgb::new(1.0, 1.0, 1.0);
        let [l, c, _] = from_srgb(white, ColorMode::Oklch).values();
        assert!((l - 1.0).abs() < 1e-3);
        assert!(c < 1e-3);
    }

    #[test]
    fn test_hsv_to_srgb() {
        let rgb = to_srgb(Channels::Hsv {
            h: 120.0,
            s: 1.0,
            v: 1.0,
        });
        assert!(rgb.red.abs() < 1e-4);
        assert!((rgb.green - 1.0).abs() < 1e-4);
        assert!(rgb.blue.abs() < 1e-4);
    }

    #[test]
    fn test_out_of_gamut_oklch_round_trips() {
        // vivid cyan-blue at high lightness falls outside sRGB
        let rgb = to_srgb(Channels::Oklch {
            l: 0.92,
            c: 0.2,
            h: 259.0,
        });
        let channels = [rgb.red, rgb.green, rgb.blue];
        assert!(channels.iter().any(|v| !(0.0..=1.0).contains(v)));

        let [l, c, h] = from_srgb(rgb, ColorMode::Oklch).values();
        assert!((l - 0.92).abs() < 1e-3);
        assert!((c - 0.2).abs() < 1e-3);
        assert!((h - 259.0).abs() < 0.1);
    }

    #[test]
    fn test_mid_gray_luminance() {
        // 50% sRGB gray is ~21.6% linear light
        let y = relative_luminance(0.5, 0.5, 0.5);
        assert!((y - 0.214).abs() < 0.01);
    }
}
