//! Resolved color values
//!
//! `ColorValue` owns one `CanonicalColor`. Lightness, saturation and alpha
//! adjustments mutate it in place; everything else (mode conversion,
//! inversion, hue schemes) returns a new value.

use std::fmt;

use crate::color::{format_color, CanonicalColor, Channels, ColorMode, FormatMode};
use crate::parser;
use crate::store::PaletteStore;
use crate::types::InvertOptions;

/// A resolved color with derived queries and transforms
#[derive(Debug, Clone, PartialEq)]
pub struct ColorValue {
    color: CanonicalColor,
}

impl ColorValue {
    pub const fn new(color: CanonicalColor) -> Self {
        Self { color }
    }

    pub const fn color(&self) -> &CanonicalColor {
        &self.color
    }

    pub const fn into_color(self) -> CanonicalColor {
        self.color
    }

    pub const fn mode(&self) -> ColorMode {
        self.color.mode()
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Perceived brightness below the midpoint
    pub fn is_dark(&self) -> bool {
        self.brightness() / 255.0 < 0.5
    }

    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    /// Perceived (YIQ) brightness, 0-255
    pub fn brightness(&self) -> f32 {
        self.color.brightness()
    }

    /// WCAG relative luminance, 0-1
    pub fn luminance(&self) -> f32 {
        self.color.luminance()
    }

    pub fn red(&self) -> u8 {
        self.color.to_rgb8()[0]
    }

    pub fn green(&self) -> u8 {
        self.color.to_rgb8()[1]
    }

    pub fn blue(&self) -> u8 {
        self.color.to_rgb8()[2]
    }

    pub const fn alpha(&self) -> f32 {
        self.color.alpha
    }

    /// Set alpha from a percentage.
    ///
    /// The value is stored as `percent / 100` without clamping; only parsed
    /// opacity suffixes are clamped.
    pub fn set_alpha(&mut self, percent: f32) -> &mut Self {
        self.color.alpha = percent / 100.0;
        self
    }

    /// OKLCH lightness, 0-1
    pub fn lightness(&self) -> f32 {
        self.color.to_mode(ColorMode::Oklch).channels.values()[0]
    }

    // ---------------------------------------------------------------------
    // Lightness
    // ---------------------------------------------------------------------

    /// Raise OKLCH lightness by `amount` percentage points; `None` does nothing
    pub fn lighten(&mut self, amount: Option<f32>) -> &mut Self {
        if let Some(amount) = amount {
            let l = self.lightness();
            self.set_lightness(l + amount / 100.0);
        }
        self
    }

    /// Lower OKLCH lightness by `amount` percentage points; `None` does nothing
    pub fn darken(&mut self, amount: Option<f32>) -> &mut Self {
        if let Some(amount) = amount {
            let l = self.lightness();
            self.set_lightness(l - amount / 100.0);
        }
        self
    }

    /// Set OKLCH lightness (clamped to [0, 1]), keeping chroma, hue, alpha and mode.
    ///
    /// At either end of the range chroma drops to zero, so full lightness is
    /// white and zero lightness is black.
    pub fn set_lightness(&mut self, value: f32) -> &mut Self {
        let mode = self.mode();
        let [_, c, h] = self.color.to_mode(ColorMode::Oklch).channels.values();
        let l = value.clamp(0.0, 1.0);
        let c = if l <= 0.0 || l >= 1.0 { 0.0 } else { c };
        let adjusted = CanonicalColor::new(Channels::Oklch { l, c, h }, self.color.alpha);
        self.color = adjusted.to_mode(mode);
        self
    }

    // ---------------------------------------------------------------------
    // Saturation and hue (HSL space)
    // ---------------------------------------------------------------------

    pub fn saturate(&mut self, amount: f32) -> &mut Self {
        self.color = self.map_hsl(|_, s, _| (None, Some(s + amount / 100.0)));
        self
    }

    pub fn desaturate(&mut self, amount: f32) -> &mut Self {
        self.color = self.map_hsl(|_, s, _| (None, Some(s - amount / 100.0)));
        self
    }

    /// Shift every RGB channel up by `amount` percent of full scale, clamped
    pub fn brighten(&mut self, amount: f32) -> &mut Self {
        let mode = self.mode();
        let step = (255.0 * amount / 100.0).round();
        let [r, g, b] = self
            .color
            .to_rgb8()
            .map(|c| (f32::from(c) + step).clamp(0.0, 255.0) / 255.0);
        self.color = CanonicalColor::rgba(r, g, b, self.color.alpha).to_mode(mode);
        self
    }

    /// Fully desaturated copy
    #[must_use]
    pub fn greyscale(&self) -> Self {
        let mut grey = self.clone();
        grey.desaturate(100.0);
        grey
    }

    /// Copy with the hue rotated by `degrees`
    #[must_use]
    pub fn spin(&self, degrees: f32) -> Self {
        Self::new(self.map_hsl(|h, _, _| (Some(h + degrees), None)))
    }

    #[must_use]
    pub fn complement(&self) -> Self {
        self.spin(180.0)
    }

    pub fn split_complement(&self) -> [Self; 3] {
        [self.clone(), self.spin(72.0), self.spin(216.0)]
    }

    pub fn triad(&self) -> [Self; 3] {
        [self.clone(), self.spin(120.0), self.spin(240.0)]
    }

    pub fn tetrad(&self) -> [Self; 4] {
        [
            self.clone(),
            self.spin(90.0),
            self.spin(180.0),
            self.spin(270.0),
        ]
    }

    /// `results` colors spaced `360 / slices` degrees apart, centered on this one
    pub fn analogous(&self, results: usize, slices: usize) -> Vec<Self> {
        if results == 0 || slices == 0 {
            return Vec::new();
        }
        let part = 360.0 / slices as f32;
        let start = -(part * results as f32 / 2.0).floor();

        let mut out = vec![self.clone()];
        out.extend((1..results).map(|i| self.spin(start + part * i as f32)));
        out
    }

    /// `results` colors sharing hue and saturation, stepping HSV value
    pub fn monochromatic(&self, results: usize) -> Vec<Self> {
        if results == 0 {
            return Vec::new();
        }
        let mode = self.mode();
        let [h, s, v] = self.color.to_mode(ColorMode::Hsv).channels.values();
        let step = 1.0 / results as f32;

        (0..results)
            .map(|i| {
                let v = if i == 0 { v } else { (v + step * i as f32) % 1.0 };
                let hsv = CanonicalColor::new(Channels::Hsv { h, s, v }, self.color.alpha);
                Self::new(hsv.to_mode(mode))
            })
            .collect()
    }

    fn map_hsl(&self, f: impl FnOnce(f32, f32, f32) -> (Option<f32>, Option<f32>)) -> CanonicalColor {
        let mode = self.mode();
        let [h, s, l] = self.color.to_mode(ColorMode::Hsl).channels.values();
        let (new_h, new_s) = f(h, s, l);
        let h = new_h.map_or(h, |h| h.rem_euclid(360.0));
        let s = new_s.map_or(s, |s| s.clamp(0.0, 1.0));
        CanonicalColor::new(Channels::Hsl { h, s, l }, self.color.alpha).to_mode(mode)
    }

    // ---------------------------------------------------------------------
    // Inversion and conversion
    // ---------------------------------------------------------------------

    /// `options.dark` for dark colors (default black), `options.light` otherwise
    /// (default white), resolved against the shipped palette.
    #[must_use]
    pub fn invert(&self, options: Option<&InvertOptions>) -> Self {
        self.invert_in(options, &PaletteStore::builtin())
    }

    /// `invert`, resolving replacement tokens against `store`
    #[must_use]
    pub fn invert_in(&self, options: Option<&InvertOptions>, store: &PaletteStore) -> Self {
        let (token, fallback) = if self.is_dark() {
            (options.and_then(|o| o.dark.as_ref()), CanonicalColor::BLACK)
        } else {
            (options.and_then(|o| o.light.as_ref()), CanonicalColor::WHITE)
        };
        let color = token
            .and_then(|t| parser::parse_token(t, store))
            .unwrap_or(fallback);
        Self::new(color)
    }

    /// Copy converted to `mode`; this value is unchanged
    #[must_use]
    pub fn to_mode(&self, mode: ColorMode) -> Self {
        Self::new(self.color.to_mode(mode))
    }

    /// Render as text; `None` uses the current mode
    pub fn format(&self, mode: Option<FormatMode>) -> String {
        format_color(&self.color, mode.unwrap_or_else(|| self.mode().into()))
    }

    pub fn to_hex(&self) -> String {
        self.format(Some(FormatMode::Hex))
    }

    pub fn to_hex8(&self) -> String {
        self.format(Some(FormatMode::Hex8))
    }

    pub fn to_rgb(&self) -> String {
        self.format(Some(FormatMode::Rgb))
    }

    pub fn to_hsl(&self) -> String {
        self.format(Some(FormatMode::Hsl))
    }

    pub fn to_hsv(&self) -> String {
        self.format(Some(FormatMode::Hsv))
    }

    pub fn to_oklch(&self) -> String {
        self.format(Some(FormatMode::Oklch))
    }
}

impl From<CanonicalColor> for ColorValue {
    fn from(color: CanonicalColor) -> Self {
        Self::new(color)
    }
}

/// RGB text form
impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rgb())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]
mod tests {
    use super::*;

    fn rgb8(r: u8, g: u8, b: u8) -> ColorValue {
        ColorValue::new(CanonicalColor::from_rgb8(r, g, b))
    }

    #[test]
    fn test_dark_light_split() {
        assert!(rgb8(0, 0, 0).is_dark());
        assert!(rgb8(255, 255, 255).is_light());
        assert!(rgb8(43, 127, 255).is_dark());
        assert!(rgb8(254, 242, 242).is_light());
    }

    #[test]
    fn test_channels() {
        let c = rgb8(43, 127, 255);
        assert_eq!((c.red(), c.green(), c.blue()), (43, 127, 255));
    }

    #[test]
    fn test_set_alpha_is_not_clamped() {
        let mut c = rgb8(1, 2, 3);
        c.set_alpha(40.0);
        assert_eq!(c.alpha(), 0.4);
        c.set_alpha(250.0);
        assert_eq!(c.alpha(), 2.5);
    }

    #[test]
    fn test_lighten_none_is_noop() {
        let mut c = rgb8(43, 127, 255);
        let before = c.clone();
        c.lighten(None).darken(None);
        assert_eq!(c, before);
    }

    #[test]
    fn test_lighten_full_is_white() {
        let mut c = rgb8(43, 127, 255);
        c.lighten(Some(100.0));
        assert_eq!(c.to_hex(), "#ffffff");
    }

    #[test]
    fn test_darken_full_is_black() {
        let mut c = rgb8(43, 127, 255);
        c.darken(Some(100.0));
        assert_eq!(c.to_hex(), "#000000");
    }

    #[test]
    fn test_lighten_raises_lightness_keeps_alpha_and_mode() {
        let mut c = rgb8(43, 127, 255);
        c.set_alpha(50.0);
        let before = c.lightness();
        c.lighten(Some(10.0));
        assert!(c.lightness() > before);
        assert_eq!(c.alpha(), 0.5);
        assert_eq!(c.mode(), ColorMode::Rgb);
    }

    #[test]
    fn test_set_lightness_clamps() {
        let mut c = rgb8(43, 127, 255);
        c.set_lightness(3.0);
        assert_eq!(c.to_hex(), "#ffffff");
        c.set_lightness(-1.0);
        assert_eq!(c.to_hex(), "#000000");
    }

    #[test]
    fn test_invert_defaults() {
        assert_eq!(rgb8(10, 10, 10).invert(None).to_hex(), "#000000");
        assert_eq!(rgb8(250, 250, 250).invert(None).to_hex(), "#ffffff");
    }

    #[test]
    fn test_invert_with_options_and_fallback() {
        let opts = InvertOptions::new().dark("slate-50").light("not a color");
        assert_eq!(rgb8(10, 10, 10).invert(Some(&opts)).to_hex(), "#f8fafc");
        assert_eq!(rgb8(250, 250, 250).invert(Some(&opts)).to_hex(), "#ffffff");
    }

    #[test]
    fn test_to_mode_leaves_original() {
        let c = rgb8(255, 0, 0);
        let hsl = c.to_mode(ColorMode::Hsl);
        assert_eq!(c.mode(), ColorMode::Rgb);
        assert_eq!(hsl.mode(), ColorMode::Hsl);
        assert_eq!(hsl.format(None), "hsl(0, 100%, 50%)");
        assert_eq!(c.format(None), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_complement_of_red_is_cyan() {
        assert_eq!(rgb8(255, 0, 0).complement().to_hex(), "#00ffff");
    }

    #[test]
    fn test_triad_and_tetrad_hues() {
        let triad = rgb8(255, 0, 0).triad();
        assert_eq!(triad[1].to_hex(), "#00ff00");
        assert_eq!(triad[2].to_hex(), "#0000ff");
        assert_eq!(rgb8(255, 0, 0).tetrad().len(), 4);
    }

    #[test]
    fn test_greyscale() {
        let grey = rgb8(255, 0, 0).greyscale();
        assert_eq!(grey.red(), grey.green());
        assert_eq!(grey.green(), grey.blue());
    }

    #[test]
    fn test_saturate_clamps() {
        let mut c = rgb8(191, 64, 64);
        c.saturate(100.0);
        assert_eq!(c.to_hex(), "#ff0000");
    }

    #[test]
    fn test_brighten_shifts_channels() {
        let mut c = rgb8(100, 20, 250);
        c.set_alpha(50.0);
        c.brighten(20.0);
        assert_eq!((c.red(), c.green(), c.blue()), (151, 71, 255));
        assert_eq!(c.alpha(), 0.5);

        c.brighten(-100.0);
        assert_eq!(c.to_hex(), "#000000");
    }

    #[test]
    fn test_brighten_keeps_mode() {
        let mut c = rgb8(10, 10, 10).to_mode(ColorMode::Hsl);
        c.brighten(10.0);
        assert_eq!(c.mode(), ColorMode::Hsl);
        assert_eq!(c.to_hex(), "#242424");
    }

    #[test]
    fn test_analogous_count_and_first() {
        let base = rgb8(255, 0, 0);
        let colors = base.analogous(6, 30);
        assert_eq!(colors.len(), 6);
        assert_eq!(colors[0], base);
        assert!(base.analogous(0, 30).is_empty());
    }

    #[test]
    fn test_monochromatic_keeps_hue() {
        let colors = rgb8(255, 0, 0).monochromatic(4);
        assert_eq!(colors.len(), 4);
        for c in &colors {
            assert_eq!(c.green(), c.blue());
        }
    }

    #[test]
    fn test_display_is_rgb() {
        assert_eq!(rgb8(1, 2, 3).to_string(), "rgb(1, 2, 3)");
    }
}
