//! Palette store
//!
//! Holds the name -> tone -> color literal table. The table is merged from
//! one or more dataset layers the first time it is read and is immutable
//! afterwards. The shipped store is process-wide.

pub mod data;

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::error::{Result, TwColorError};

/// A tone step of a color family (one of `COLOR_TONES`)
pub type Tone = u16;

/// The fixed tone ladder, lightest to darkest
pub const COLOR_TONES: [Tone; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Tone -> color literal for one family
pub type ToneMap = BTreeMap<Tone, String>;

/// Family name -> tones, as supplied by a dataset layer
pub type PaletteData = BTreeMap<String, ToneMap>;

/// Whether `tone` is on the ladder
pub fn is_tone(tone: Tone) -> bool {
    COLOR_TONES.contains(&tone)
}

/// Lookup table built once from dataset layers
#[derive(Debug)]
pub struct PaletteStore {
    layers: Vec<PaletteData>,
    colors: OnceLock<PaletteData>,
    names: OnceLock<Vec<String>>,
}

static BUILTIN: OnceLock<Arc<PaletteStore>> = OnceLock::new();

impl PaletteStore {
    /// Store over `layers`, merged lazily in order.
    ///
    /// A family in a later layer replaces that family from earlier layers.
    pub fn from_layers(layers: Vec<PaletteData>) -> Self {
        Self {
            layers,
            colors: OnceLock::new(),
            names: OnceLock::new(),
        }
    }

    /// Like `from_layers`, rejecting tones that are not on the ladder
    pub fn try_from_layers(layers: Vec<PaletteData>) -> Result<Self> {
        if let Some(tone) = layers
            .iter()
            .flat_map(|layer| layer.values())
            .flat_map(|tones| tones.keys())
            .find(|tone| !is_tone(**tone))
        {
            return Err(TwColorError::InvalidTone(*tone));
        }
        Ok(Self::from_layers(layers))
    }

    /// The process-wide store over the shipped datasets
    pub fn builtin() -> Arc<Self> {
        Arc::clone(BUILTIN.get_or_init(|| Arc::new(Self::from_layers(data::builtin_layers()))))
    }

    /// The merged table, keyed by lowercased, trimmed family name
    pub fn colors(&self) -> &PaletteData {
        self.colors.get_or_init(|| {
            let mut merged = PaletteData::new();
            for layer in &self.layers {
                for (name, tones) in layer {
                    merged.insert(normalize_name(name), tones.clone());
                }
            }
            debug!(
                layers = self.layers.len(),
                families = merged.len(),
                "Built palette table"
            );
            merged
        })
    }

    /// Distinct family names, sorted ascending
    pub fn color_names(&self) -> &[String] {
        self.names.get_or_init(|| {
            let mut names: Vec<String> = self.colors().keys().map(|n| normalize_name(n)).collect();
            names.sort();
            names.dedup();
            names
        })
    }

    /// The tone ladder
    pub const fn color_tones(&self) -> &'static [Tone] {
        &COLOR_TONES
    }

    /// Literal stored for `name` at `tone`; the name is matched case-insensitively
    pub fn lookup(&self, name: &str, tone: Tone) -> Option<&str> {
        self.colors()
            .get(&normalize_name(name))?
            .get(&tone)
            .map(String::as_str)
    }

    /// Tones of one family, in table order
    pub fn tones_of(&self, name: &str) -> Option<&ToneMap> {
        self.colors().get(&normalize_name(name))
    }
}

impl Default for PaletteStore {
    fn default() -> Self {
        Self::from_layers(data::builtin_layers())
    }
}

pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
