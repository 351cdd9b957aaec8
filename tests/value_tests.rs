//! Color value queries and transforms through the service
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::indexing_slicing
)]

use proptest::prelude::*;
use test_case::test_case;
use twcolor::{ColorMode, ColorService, ColorValue, FormatMode, InvertOptions, LodAmount};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn rgb_token(r: u8, g: u8, b: u8) -> String {
    format!("rgb({r}, {g}, {b})")
}

#[test_case("white", false)]
#[test_case("black", true)]
#[test_case("yellow-200", false)]
#[test_case("slate-900", true)]
#[test_case("blue-950", true)]
#[test_case("#ffffff/10", false; "alpha does not affect lightness class")]
fn test_is_dark(token: &str, dark: bool) {
    let svc = ColorService::new();
    assert_eq!(svc.is_dark(token), dark);
    assert_eq!(svc.is_light(token), !dark);
}

#[test]
fn test_unresolvable_is_neither_light_nor_dark() {
    let svc = ColorService::new();
    assert!(!svc.is_dark("nope-500"));
    assert!(!svc.is_light("nope-500"));
}

#[test]
fn test_lighten_darken_without_amount_is_noop() {
    let svc = ColorService::new();
    let base = svc.resolve("emerald-600").unwrap();
    assert_eq!(svc.lighten("emerald-600", None).unwrap(), base);
    assert_eq!(svc.darken("emerald-600", None).unwrap(), base);
}

#[test]
fn test_lighten_darken_move_lightness() {
    let svc = ColorService::new();
    let base = svc.resolve("slate-500").unwrap().lightness();

    let lighter = svc.lighten("slate-500", Some(10.0)).unwrap();
    assert!(approx(lighter.lightness(), base + 0.1));

    let darker = svc.darken("slate-500", Some(10.0)).unwrap();
    assert!(approx(darker.lightness(), base - 0.1));
}

#[test]
fn test_lighten_saturates_at_white() {
    let value = ColorService::new().lighten("blue-500", Some(200.0)).unwrap();
    assert_eq!(value.to_hex(), "#ffffff");
}

#[test]
fn test_darken_saturates_at_black() {
    let value = ColorService::new().darken("blue-500", Some(200.0)).unwrap();
    assert_eq!(value.to_hex(), "#000000");
}

fn oklch(value: &ColorValue) -> [f32; 3] {
    value.to_mode(ColorMode::Oklch).color().channels.values()
}

#[test]
fn test_lighten_then_darken_returns_original() {
    let svc = ColorService::new();
    let base = svc.resolve("blue-500").unwrap();
    let [base_l, base_c, base_h] = oklch(&base);

    let mut value = base.clone();
    value.lighten(Some(30.0));
    let [l, c, h] = oklch(&value);
    assert!(approx(l, base_l + 0.3));
    assert!(approx(c, base_c));
    assert!((h - base_h).abs() < 0.1);

    value.darken(Some(30.0));
    assert_eq!(value.to_hex(), "#2b7fff");
}

#[test]
fn test_lighten_keeps_alpha() {
    let value = ColorService::new().lighten("#dc2626/50", Some(5.0)).unwrap();
    assert_eq!(value.alpha(), 0.5);
}

#[test]
fn test_lighten_or_darken_split_amounts() {
    let svc = ColorService::new();
    let amount = LodAmount::from((30.0, 5.0));

    let white = svc.lighten_or_darken("white", Some(amount)).unwrap();
    assert!(approx(white.lightness(), 0.95));

    let black = svc.lighten_or_darken("black", Some(amount)).unwrap();
    assert!(approx(black.lightness(), 0.3));
}

#[test]
fn test_invert_defaults_to_black_and_white() {
    let svc = ColorService::new();
    assert_eq!(svc.invert("slate-900", None).unwrap().to_hex(), "#000000");
    assert_eq!(svc.invert("yellow-100", None).unwrap().to_hex(), "#ffffff");
    assert!(svc.invert("nope-500", None).is_none());
}

#[test]
fn test_invert_with_replacements() {
    let svc = ColorService::new();
    let options = InvertOptions::new().light("slate-900").dark("#fafafa");

    let from_light = svc.invert("white", Some(&options)).unwrap();
    assert_eq!(from_light, svc.resolve("slate-900").unwrap());

    let from_dark = svc.invert("black", Some(&options)).unwrap();
    assert_eq!(from_dark.to_hex(), "#fafafa");
}

#[test]
fn test_invert_unresolvable_replacement_falls_back() {
    let svc = ColorService::new();
    let options = InvertOptions::new().light("bogus-123").dark("bogus-456");
    assert_eq!(svc.invert("white", Some(&options)).unwrap().to_hex(), "#ffffff");
    assert_eq!(svc.invert("black", Some(&options)).unwrap().to_hex(), "#000000");
}

#[test]
fn test_to_mode_leaves_original() {
    let value = ColorService::new().resolve("red-600").unwrap();
    let hsl = value.to_mode(ColorMode::Hsl);
    assert_eq!(value.mode(), ColorMode::Rgb);
    assert_eq!(hsl.mode(), ColorMode::Hsl);
    assert_eq!(hsl.to_hex(), value.to_hex());
}

#[test_case(FormatMode::Hex, "#dc2626")]
#[test_case(FormatMode::Hex8, "#dc262680")]
#[test_case(FormatMode::Rgb, "rgba(220, 38, 38, 0.5)")]
fn test_format_modes(mode: FormatMode, expected: &str) {
    let value = ColorService::new().resolve("#dc2626/50").unwrap();
    assert_eq!(value.format(Some(mode)), expected);
}

#[test]
fn test_format_defaults_to_current_mode() {
    let value = ColorService::new().resolve("red").unwrap();
    assert_eq!(value.format(None), "rgb(255, 0, 0)");
    assert_eq!(value.to_mode(ColorMode::Hsl).format(None), "hsl(0, 100%, 50%)");
}

#[test]
fn test_set_alpha_is_not_clamped() {
    let mut value = ColorService::new().resolve("white").unwrap();
    value.set_alpha(150.0);
    assert_eq!(value.alpha(), 1.5);
}

#[test]
fn test_hue_schemes() {
    let red = ColorService::new().resolve("#ff0000").unwrap();
    assert_eq!(red.complement().to_hex(), "#00ffff");

    let triad = red.triad();
    assert_eq!(triad[1].to_hex(), "#00ff00");
    assert_eq!(triad[2].to_hex(), "#0000ff");

    assert_eq!(red.tetrad().len(), 4);
    assert_eq!(red.analogous(6, 30).len(), 6);
    assert_eq!(red.greyscale().to_hex(), "#808080");
}

proptest! {
    #[test]
    fn prop_dark_xor_light(r: u8, g: u8, b: u8) {
        let svc = ColorService::new();
        let token = rgb_token(r, g, b);
        prop_assert_eq!(svc.is_dark(token.as_str()), !svc.is_light(token.as_str()));
    }

    #[test]
    fn prop_lighten_or_darken_moves_toward_middle(r: u8, g: u8, b: u8, amount in 1.0f32..40.0) {
        let svc = ColorService::new();
        let token = rgb_token(r, g, b);
        let base: ColorValue = svc.resolve(token.as_str()).unwrap();
        let moved = svc.lighten_or_darken(token.as_str(), Some(LodAmount::Uniform(amount))).unwrap();

        if base.is_light() {
            prop_assert!(moved.lightness() <= base.lightness() + 1e-4);
        } else {
            prop_assert!(moved.lightness() >= base.lightness() - 1e-4);
        }
    }
}
