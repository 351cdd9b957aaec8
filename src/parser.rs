//! Color token parsing
//!
//! A string token is tried against three forms, in order:
//! - hex: `#rgb`, `#rrggbb`, ... optionally followed by `/<opacity>`
//! - palette tone: `<name>-<tone>` optionally followed by `/<opacity>`
//! - anything else the CSS parser understands (`white`, `rgb(...)`, `hsl(...)`)
//!
//! A palette reference that is not in the store does not fall through to
//! the CSS parser. Opacity is an integer percentage; the resulting alpha is
//! clamped to [0, 1].

use tracing::trace;

use crate::color::CanonicalColor;
use crate::store::{PaletteStore, Tone};
use crate::types::Token;

/// A color literal split from its opacity suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorLiteral {
    /// Literal to hand to the CSS parser
    pub color: String,
    /// Opacity percentage override, if any
    pub opacity: Option<i64>,
}

/// Resolve `token` to a canonical color, `None` if it is empty or unrecognized
pub fn parse_token(token: &Token, store: &PaletteStore) -> Option<CanonicalColor> {
    if token.is_empty() {
        return None;
    }
    match token {
        Token::Value(value) => Some(*value.color()),
        Token::Resolved(color) => Some(*color),
        Token::Literal(literal) => parse_str(literal, store),
    }
}

/// Resolve a string token
pub fn parse_str(input: &str, store: &PaletteStore) -> Option<CanonicalColor> {
    if input.is_empty() {
        return None;
    }

    let Some(literal) = split_color_string(&input.to_lowercase(), store) else {
        trace!(token = input, "Unresolvable color token");
        return None;
    };

    let Some(mut color) = CanonicalColor::parse_css(&literal.color) else {
        trace!(token = input, literal = %literal.color, "Color literal rejected");
        return None;
    };

    if let Some(opacity) = literal.opacity {
        color.alpha = opacity_to_alpha(opacity);
    }

    Some(color)
}

/// Split a lowercased token into the literal to parse and its opacity.
///
/// Palette references are replaced by the stored literal. Returns `None`
/// for unknown palette references and for strings the CSS parser rejects.
pub fn split_color_string(input: &str, store: &PaletteStore) -> Option<ColorLiteral> {
    if input.starts_with('#') {
        let mut parts = input.split('/');
        let hex = parts.next().unwrap_or_default();
        return Some(ColorLiteral {
            color: hex.to_string(),
            opacity: parts.next().and_then(parse_int_prefix),
        });
    }

    if looks_like_palette_ref(input) {
        let mut parts = input.split('/');
        let reference = parts.next().unwrap_or_default();
        // palette colors are opaque unless the token says otherwise
        let opacity = parts.next().and_then(parse_int_prefix).unwrap_or(100);

        let mut segments = reference.split('-');
        let name = segments.next().unwrap_or_default().trim();
        let tone = segments
            .next()
            .and_then(parse_int_prefix)
            .and_then(|t| Tone::try_from(t).ok())?;

        let stored = store.lookup(name, tone)?;
        return Some(ColorLiteral {
            color: stored.to_string(),
            opacity: Some(opacity),
        });
    }

    // hex digits need their '#'; "bad" or "cafe" are words, not colors
    if is_bare_hex(input) {
        return None;
    }

    // normalize through RGB so the result carries 8-bit channels
    let parsed = CanonicalColor::parse_css(input)?;
    Some(ColorLiteral {
        color: crate::color::format_color(&parsed, crate::color::FormatMode::Rgb),
        opacity: None,
    })
}

/// `opacity` percent as alpha, clamped to [0, 1]
pub fn opacity_to_alpha(opacity: i64) -> f32 {
    if opacity < 0 {
        return 0.0;
    }
    (opacity as f32 / 100.0).min(1.0)
}

/// Letters, a dash, then a digit, anywhere in the string
fn looks_like_palette_ref(input: &str) -> bool {
    input
        .as_bytes()
        .windows(3)
        .any(|w| matches!(w, [a, b'-', d] if a.is_ascii_alphabetic() && d.is_ascii_digit()))
}

/// 3, 4, 6 or 8 hex digits with no leading `#`
fn is_bare_hex(input: &str) -> bool {
    matches!(input.len(), 3 | 4 | 6 | 8) && input.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Leading integer of `s`, ignoring leading whitespace and trailing junk.
///
/// `"50"` -> 50, `" 7.5"` -> 7, `"-3x"` -> -3, `"x"` -> None.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, s.get(1..)?),
        Some(b'+') => (false, s.get(1..)?),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else { break };
        value = value.saturating_mul(10).saturating_add(i64::from(d));
        seen = true;
    }

    seen.then_some(if negative { -value } else { value })
}
