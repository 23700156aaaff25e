//! # tint-tokens — OKLCH Design Token Engine
//!
//! Turns a handful of seed colors into complete, accessible design tokens:
//! tonal scales, semantic UI roles, component state palettes, and export
//! files for CSS, DTCG JSON and Tailwind.
//!
//! # Architecture
//!
//! ```text
//! seed colors (Lch)
//!     │
//!     ▼
//! scale.rs:      11-step lightness ramp per seed (50 … 950)
//!     │
//!     ├──▶ semantic.rs:   12 UI roles for light / dark mode
//!     │        │
//!     │        ▼
//!     │    export.rs:     CSS variables, DTCG JSON, Tailwind config
//!     │
//!     ├──▶ generator.rs:  tokens with ids, cache, dark variants,
//!     │                   css / json / js / ts exports
//!     │
//!     └──▶ components.rs: 8 component recipes (button, input, …)
//!
//! contrast.rs:   WCAG luminance, ratios, AA/AAA checks (used throughout)
//! config.rs:     GeneratorConfig and the tint.toml document
//! ```
//!
//! # Color Space
//!
//! All derivation happens in OKLCH via [`tint_color`]. Out-of-gamut seeds
//! are desaturated by the generator before any scale is built; contrast
//! math runs on the quantized 8-bit sRGB result.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod components;
pub mod config;
pub mod contrast;
pub mod error;
pub mod export;
pub mod generator;
pub mod scale;
pub mod semantic;

pub use components::{ComponentKind, ComponentTheme, component_theme, generate_component_themes};
pub use config::{GeneratorConfig, SeedColor, SemanticConfig, TintConfig};
pub use contrast::{
    AccessibilityCheck, TextSize, WcagLevel, auto_adjust_contrast, check_compliance, contrast_ratio,
    relative_luminance, suggest_adjustment, validate_pair,
};
pub use error::{Result, TokenError};
pub use export::{CssOptions, TailwindFlavor, format_oklch, to_css, to_dtcg, to_tailwind_config};
pub use generator::{ExportFormat, Token, TokenGenerator, TokenMetadata, generate_token, generate_token_id};
pub use scale::{ColorScale, Step, generate_scale, generate_scales};
pub use semantic::{Mode, SemanticTokenSet, map_tokens};
