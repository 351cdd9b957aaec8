//! twcolor - Tailwind-style color tokens and palette queries
//!
//! Resolves color tokens into a uniform color value and queries a palette
//! of named color families:
//! - Hex with an opacity suffix (`#dc2626/50`)
//! - Palette tones (`blue-500`, `slate-900/25`)
//! - Any CSS color (`white`, `rgb(0 0 0)`, `hsl(200, 50%, 40%)`)
//! - Filtering, seeded random picks, lighten/darken and light/dark inversion
//!
//! # Usage
//!
//! ```
//! use twcolor::{ColorService, FindOptions};
//!
//! let service = ColorService::new();
//! let blue = service.resolve("blue-500").unwrap();
//! assert_eq!(blue.to_rgb(), "rgb(43, 127, 255)");
//!
//! let fifties = service.find(&FindOptions::new().tones([50]));
//! assert_eq!(fifties.len(), 22);
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod parser;
pub mod service;
pub mod store;
pub mod types;
pub mod value;

pub use color::{CanonicalColor, Channels, ColorMode, FormatMode};
pub use config::{InvertConfig, ServiceConfig};
pub use error::{Result, TwColorError};
pub use service::ColorService;
pub use store::{PaletteStore, Tone, COLOR_TONES};
pub use types::*;
pub use value::ColorValue;

/// Get the version of the library
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
