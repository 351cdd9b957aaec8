//! Service configuration
//!
//! Loaded from JSON. Every field is optional:
//!
//! ```json
//! {
//!   "builtin": true,
//!   "colors": { "brand": { "500": "#ff5500", "700": "#aa3300" } },
//!   "invert": { "light": "slate-900", "dark": "slate-50" }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::store::{data, PaletteData, PaletteStore};
use crate::types::InvertOptions;

/// Configuration for `ColorService::with_config`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceConfig {
    /// Include the shipped palette datasets
    pub builtin: bool,
    /// Extra dataset layer merged after the shipped ones
    pub colors: PaletteData,
    /// Replacement colors used by `invert` when the caller passes none
    pub invert: InvertConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            colors: PaletteData::new(),
            invert: InvertConfig::default(),
        }
    }
}

/// Default light/dark replacement tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvertConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
}

impl InvertConfig {
    pub fn to_options(&self) -> InvertOptions {
        InvertOptions {
            light: self.light.as_deref().map(Into::into),
            dark: self.dark.as_deref().map(Into::into),
        }
    }
}

impl ServiceConfig {
    /// Parse configuration from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `Json` if the text is not a valid configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, `Json` if it cannot be parsed
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        debug!(
            path = %path.display(),
            families = config.colors.len(),
            builtin = config.builtin,
            "Loaded service config"
        );
        Ok(config)
    }

    /// Palette store over the configured layers
    ///
    /// # Errors
    ///
    /// Returns `InvalidTone` if the extra layer uses a tone off the ladder
    pub fn build_store(&self) -> Result<PaletteStore> {
        let mut layers = if self.builtin {
            data::builtin_layers()
        } else {
            Vec::new()
        };
        if !self.colors.is_empty() {
            layers.push(self.colors.clone());
        }
        PaletteStore::try_from_layers(layers)
    }
}
