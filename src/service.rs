//! Color service
//!
//! Public entry point: resolves tokens against a palette store, filters the
//! palette and picks colors from it.

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, warn};

use crate::config::ServiceConfig;
use crate::error::{Result, TwColorError};
use crate::parser;
use crate::store::{normalize_name, PaletteStore};
use crate::types::{FindOptions, InvertOptions, LodAmount, RandomOptions, Token};
use crate::value::ColorValue;

/// Resolves, transforms and queries palette colors
#[derive(Debug, Clone)]
pub struct ColorService {
    store: Arc<PaletteStore>,
    invert_defaults: InvertOptions,
}

impl Default for ColorService {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorService {
    /// Service over the shipped palette
    pub fn new() -> Self {
        Self::with_store(PaletteStore::builtin())
    }

    pub fn with_store(store: Arc<PaletteStore>) -> Self {
        Self {
            store,
            invert_defaults: InvertOptions::default(),
        }
    }

    /// Service built from a loaded configuration
    ///
    /// # Errors
    /// Returns `InvalidTone` if the configured palette uses a tone off the ladder.
    pub fn with_config(config: &ServiceConfig) -> Result<Self> {
        let store = config.build_store()?;
        Ok(Self {
            store: Arc::new(store),
            invert_defaults: config.invert.to_options(),
        })
    }

    pub fn store(&self) -> &PaletteStore {
        &self.store
    }

    /// Palette colors matching `options`, by family name then tone.
    ///
    /// Entries whose stored literal does not parse are skipped.
    pub fn find(&self, options: &FindOptions) -> Vec<ColorValue> {
        let wanted: Option<Vec<String>> = options
            .colors
            .as_ref()
            .map(|names| names.iter().map(|n| normalize_name(n)).collect());
        let tones = options
            .tones
            .as_deref()
            .unwrap_or_else(|| self.store.color_tones());
        let (min_tone, max_tone) = (options.effective_min_tone(), options.effective_max_tone());

        let mut found = Vec::new();
        for name in self.store.color_names() {
            if wanted.as_ref().is_some_and(|w| !w.contains(name)) {
                continue;
            }
            let Some(family) = self.store.tones_of(name) else {
                continue;
            };
            for (tone, literal) in family {
                if !tones.contains(tone) || *tone < min_tone || *tone > max_tone {
                    continue;
                }
                if let Some(color) = parser::parse_str(literal, &self.store) {
                    found.push(ColorValue::new(color));
                }
            }
        }
        found
    }

    /// Resolve `token`, `None` if it is empty or unrecognized
    pub fn resolve(&self, token: impl Into<Token>) -> Option<ColorValue> {
        parser::parse_token(&token.into(), &self.store).map(ColorValue::new)
    }

    /// Resolve `token`, falling back to `fallback` when it does not resolve
    pub fn resolve_or(
        &self,
        token: impl Into<Token>,
        fallback: impl Into<Token>,
    ) -> Option<ColorValue> {
        self.resolve(token).or_else(|| self.resolve(fallback))
    }

    /// Pick one color from `find(options)`.
    ///
    /// With a non-empty seed the pick is deterministic: the seed's UTF-16
    /// code units are summed, divided by 100, and used as an index that
    /// wraps around the results.
    ///
    /// # Errors
    /// Returns `EmptySelection` when the filters match nothing.
    pub fn random(&self, options: &RandomOptions) -> Result<ColorValue> {
        let mut results = self.find(&options.find);
        if results.is_empty() {
            warn!(
                colors = ?options.find.colors,
                tones = ?options.find.tones,
                "Random pick over an empty selection"
            );
            return Err(TwColorError::EmptySelection {
                colors: options.find.colors.clone(),
                min_tone: options.find.effective_min_tone(),
                max_tone: options.find.effective_max_tone(),
            });
        }

        let index = match options.seed.as_deref().filter(|s| !s.is_empty()) {
            Some(seed) => seeded_index(seed, results.len()),
            None => rand::thread_rng().gen_range(0..results.len()),
        };
        debug!(index, candidates = results.len(), "Picked palette color");
        Ok(results.swap_remove(index))
    }

    pub fn is_light(&self, token: impl Into<Token>) -> bool {
        self.resolve(token).is_some_and(|c| c.is_light())
    }

    pub fn is_dark(&self, token: impl Into<Token>) -> bool {
        self.resolve(token).is_some_and(|c| c.is_dark())
    }

    /// Resolve and lighten; `None` amount leaves the color as is
    pub fn lighten(&self, token: impl Into<Token>, amount: Option<f32>) -> Option<ColorValue> {
        let mut color = self.resolve(token)?;
        color.lighten(amount);
        Some(color)
    }

    /// Resolve and darken; `None` amount leaves the color as is
    pub fn darken(&self, token: impl Into<Token>, amount: Option<f32>) -> Option<ColorValue> {
        let mut color = self.resolve(token)?;
        color.darken(amount);
        Some(color)
    }

    /// Darken light colors, lighten dark ones
    pub fn lighten_or_darken(
        &self,
        token: impl Into<Token>,
        amount: Option<LodAmount>,
    ) -> Option<ColorValue> {
        let mut color = self.resolve(token)?;
        if color.is_light() {
            color.darken(amount.and_then(LodAmount::darken_amount));
        } else {
            color.lighten(amount.and_then(LodAmount::lighten_amount));
        }
        Some(color)
    }

    /// Resolve and invert. Without `options` the configured defaults apply.
    pub fn invert(
        &self,
        token: impl Into<Token>,
        options: Option<&InvertOptions>,
    ) -> Option<ColorValue> {
        let color = self.resolve(token)?;
        Some(color.invert_in(Some(options.unwrap_or(&self.invert_defaults)), &self.store))
    }
}

/// Index picked by a seed string over `len` results (`len` > 0)
pub fn seeded_index(seed: &str, len: usize) -> usize {
    let sum: u64 = seed.encode_utf16().map(u64::from).sum();
    let step = sum / 100;
    u64::try_from(len)
        .ok()
        .filter(|l| *l > 0)
        .and_then(|l| usize::try_from(step % l).ok())
        .unwrap_or(0)
}
