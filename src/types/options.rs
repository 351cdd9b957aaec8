use serde::{Deserialize, Serialize};

use super::Token;
use crate::store::Tone;

/// Filters for `find` and `random`.
///
/// Every field is optional; unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FindOptions {
    /// Family names to include (case-insensitive), default all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    /// Tones to include, default the whole ladder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tones: Option<Vec<Tone>>,
    /// Lowest tone to include, default 50
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_tone: Option<Tone>,
    /// Highest tone to include, default 950
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tone: Option<Tone>,
}

impl FindOptions {
    pub const DEFAULT_MIN_TONE: Tone = 50;
    pub const DEFAULT_MAX_TONE: Tone = 950;

    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn tones<I: IntoIterator<Item = Tone>>(mut self, tones: I) -> Self {
        self.tones = Some(tones.into_iter().collect());
        self
    }

    #[must_use]
    pub const fn min_tone(mut self, tone: Tone) -> Self {
        self.min_tone = Some(tone);
        self
    }

    #[must_use]
    pub const fn max_tone(mut self, tone: Tone) -> Self {
        self.max_tone = Some(tone);
        self
    }

    /// Lower bound after defaults; 0 counts as unset
    pub fn effective_min_tone(&self) -> Tone {
        self.min_tone
            .filter(|t| *t != 0)
            .unwrap_or(Self::DEFAULT_MIN_TONE)
    }

    /// Upper bound after defaults; 0 counts as unset
    pub fn effective_max_tone(&self) -> Tone {
        self.max_tone
            .filter(|t| *t != 0)
            .unwrap_or(Self::DEFAULT_MAX_TONE)
    }
}

/// `FindOptions` plus an optional seed for deterministic picks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RandomOptions {
    #[serde(flatten)]
    pub find: FindOptions,
    /// Seed string; absent or empty means a non-deterministic pick
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
}

impl RandomOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    #[must_use]
    pub fn find(mut self, find: FindOptions) -> Self {
        self.find = find;
        self
    }
}

impl From<FindOptions> for RandomOptions {
    fn from(find: FindOptions) -> Self {
        Self { find, seed: None }
    }
}

/// Replacement colors for `invert`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvertOptions {
    /// Returned for light colors, default white
    pub light: Option<Token>,
    /// Returned for dark colors, default black
    pub dark: Option<Token>,
}

impl InvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn light(mut self, token: impl Into<Token>) -> Self {
        self.light = Some(token.into());
        self
    }

    #[must_use]
    pub fn dark(mut self, token: impl Into<Token>) -> Self {
        self.dark = Some(token.into());
        self
    }
}

/// Step for `lighten_or_darken`: one amount for both directions, or one each
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LodAmount {
    Uniform(f32),
    Split {
        lighten: Option<f32>,
        darken: Option<f32>,
    },
}

impl LodAmount {
    pub const fn lighten_amount(self) -> Option<f32> {
        match self {
            Self::Uniform(amount) => Some(amount),
            Self::Split { lighten, .. } => lighten,
        }
    }

    pub const fn darken_amount(self) -> Option<f32> {
        match self {
            Self::Uniform(amount) => Some(amount),
            Self::Split { darken, .. } => darken,
        }
    }
}

impl From<f32> for LodAmount {
    fn from(amount: f32) -> Self {
        Self::Uniform(amount)
    }
}

impl From<(f32, f32)> for LodAmount {
    fn from((lighten, darken): (f32, f32)) -> Self {
        Self::Split {
            lighten: Some(lighten),
            darken: Some(darken),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_find_defaults() {
        let opts = FindOptions::new();
        assert_eq!(opts.effective_min_tone(), 50);
        assert_eq!(opts.effective_max_tone(), 950);
    }

    #[test]
    fn test_zero_bounds_fall_back() {
        let opts = FindOptions::new().min_tone(0).max_tone(0);
        assert_eq!(opts.effective_min_tone(), 50);
        assert_eq!(opts.effective_max_tone(), 950);
    }

    #[test]
    fn test_random_options_json() {
        let opts: RandomOptions =
            serde_json::from_str(r#"{"colors":["Blue"],"minTone":300,"seed":"abc"}"#).unwrap();
        assert_eq!(opts.find.colors, Some(vec!["Blue".to_string()]));
        assert_eq!(opts.find.min_tone, Some(300));
        assert_eq!(opts.find.max_tone, None);
        assert_eq!(opts.seed.as_deref(), Some("abc"));
    }

    #[test]
    fn test_lod_amount_json() {
        let uniform: LodAmount = serde_json::from_str("10").unwrap();
        assert_eq!(uniform, LodAmount::Uniform(10.0));

        let split: LodAmount = serde_json::from_str(r#"{"lighten":5,"darken":20}"#).unwrap();
        assert_eq!(split.lighten_amount(), Some(5.0));
        assert_eq!(split.darken_amount(), Some(20.0));
    }

    #[test]
    fn test_lod_amount_pair() {
        let amount = LodAmount::from((5.0, 15.0));
        assert_eq!(amount.lighten_amount(), Some(5.0));
        assert_eq!(amount.darken_amount(), Some(15.0));
    }
}
