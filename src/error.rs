//! Structured error types for twcolor.
//!
//! Unresolvable tokens are not errors: every resolving API returns `Option`.
//! Only selections that cannot produce a value, and bad configuration,
//! surface here.

/// All errors that can occur in twcolor queries and configuration.
#[derive(Debug, thiserror::Error)]
pub enum TwColorError {
    /// A `random` query whose filters matched no palette entry.
    #[error("No palette colors match the selection (colors: {colors:?}, tones {min_tone}..={max_tone})")]
    EmptySelection {
        /// Requested family names, or `None` for all families.
        colors: Option<Vec<String>>,
        /// Lower tone bound after defaults were applied.
        min_tone: u16,
        /// Upper tone bound after defaults were applied.
        max_tone: u16,
    },

    /// A configured dataset uses a tone outside the fixed ladder.
    #[error("Invalid tone {0}: expected one of 50, 100..900, 950")]
    InvalidTone(u16),

    /// Configuration JSON could not be read.
    #[error("Config parsing: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TwColorError>;
