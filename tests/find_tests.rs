//! Palette filtering
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use test_case::test_case;
use twcolor::{ColorService, FindOptions, COLOR_TONES};

const FAMILIES: usize = 22;

#[test]
fn test_single_tone_bounds_return_one_per_family() {
    let found = ColorService::new().find(&FindOptions::new().min_tone(50).max_tone(50));
    assert_eq!(found.len(), FAMILIES);
}

#[test]
fn test_default_options_return_whole_palette() {
    let found = ColorService::new().find(&FindOptions::default());
    assert_eq!(found.len(), FAMILIES * COLOR_TONES.len());
}

#[test]
fn test_order_is_name_then_tone() {
    let svc = ColorService::new();
    let found = svc.find(&FindOptions::new().colors(["slate", "amber"]));
    assert_eq!(found.len(), 2 * COLOR_TONES.len());

    // amber sorts before slate, tones ascend within each family
    assert_eq!(found[0], svc.resolve("amber-50").unwrap());
    assert_eq!(found[10], svc.resolve("amber-950").unwrap());
    assert_eq!(found[11], svc.resolve("slate-50").unwrap());
    assert_eq!(found[21], svc.resolve("slate-950").unwrap());
}

#[test_case(FindOptions::new().colors(["blue"]), 11; "one family")]
#[test_case(FindOptions::new().colors(["BLUE", " red "]), 22; "names are normalized")]
#[test_case(FindOptions::new().colors(["blurple"]), 0; "unknown family")]
#[test_case(FindOptions::new().tones([500]), 22; "one tone")]
#[test_case(FindOptions::new().tones([500, 550]), 22; "off ladder tone matches nothing extra")]
#[test_case(FindOptions::new().min_tone(300).max_tone(700), 22 * 5; "tone range")]
#[test_case(FindOptions::new().min_tone(900), 22 * 2; "min only")]
#[test_case(FindOptions::new().max_tone(100), 22 * 2; "max only")]
#[test_case(FindOptions::new().min_tone(700).max_tone(300), 0; "inverted range")]
#[test_case(FindOptions::new().tones([100, 900]).min_tone(200), 22; "tones and bounds combine")]
#[test_case(FindOptions::new().min_tone(0).max_tone(0), 22 * 11; "zero bounds are unset")]
fn test_filter_counts(options: FindOptions, expected: usize) {
    assert_eq!(ColorService::new().find(&options).len(), expected);
}

#[test]
fn test_found_colors_are_opaque() {
    let found = ColorService::new().find(&FindOptions::new().colors(["rose"]));
    assert!(found.iter().all(|c| c.alpha() >= 1.0));
}

#[test]
fn test_find_is_deterministic() {
    let svc = ColorService::new();
    let options = FindOptions::new().tones([200, 800]);
    assert_eq!(svc.find(&options), svc.find(&options));
}
