// SPDX-License-Identifier: MIT
//
// tint-color — OKLCH color math for the tint token engine.
//
// The working space is OKLCH: lightness, chroma and hue, perceptually
// uniform, so a fixed lightness step looks like the same step anywhere on
// the wheel. Output is 8-bit sRGB (for WCAG arithmetic) and hex strings
// (for exporters).
//
// Everything here is a pure function on `Copy` values. No allocation
// happens outside hex formatting, and nothing can fail except parsing and
// explicit validation.

pub mod color;
pub mod error;
pub mod gamut;

pub use color::{Lch, MAX_CHROMA, Rgb, hex_to_lch, lch_to_hex, lch_to_rgb, rgb_to_lch};
pub use error::{ColorError, Result};
pub use gamut::{CHROMA_STEP, clip_to_gamut, in_gamut};
