//! Error types for token generation.
//!
//! Only caller mistakes surface here: malformed colors, colliding token
//! names, unknown export formats. Gamut overflow is resolved by clipping
//! and WCAG failure is a normal result, so neither has a variant.

use thiserror::Error;
use tint_color::ColorError;

/// Main error type for the token engine.
#[derive(Error, Debug)]
pub enum TokenError {
    /// A palette entry failed schema validation.
    #[error("invalid color for token '{name}': {source}")]
    InvalidToken {
        name: String,
        #[source]
        source: ColorError,
    },

    /// Two tokens would be emitted under the same name or identifier.
    #[error("duplicate token '{0}'")]
    DuplicateToken(String),

    /// Export format string not recognized.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// WCAG level string not recognized.
    #[error("unknown WCAG level '{0}' (expected AA or AAA)")]
    InvalidLevel(String),

    /// TOML configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// JSON serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TokenError>;
