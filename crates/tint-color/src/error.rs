// SPDX-License-Identifier: MIT
//
// Color errors — malformed input at the API boundary.
//
// Out-of-gamut colors are not errors; see `gamut`.

use thiserror::Error;

/// Error produced when a color value cannot be accepted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// The string is not `#RGB` / `#RRGGBB` hex.
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),

    /// A channel lies outside the schema bounds.
    #[error("{channel} {value} out of range [{min}, {max}]")]
    OutOfRange {
        channel: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A channel is NaN or infinite.
    #[error("{channel} is not a finite number")]
    NotFinite { channel: &'static str },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ColorError>;
