//! Configuration — generator switches and the `tint.toml` document.
//!
//! ```toml
//! [generator]
//! generate_dark_mode = true
//! wcag_level = "AAA"
//!
//! [palette]
//! primary = { l = 0.55, c = 0.12, h = 250 }
//! slate = "#64748b"
//!
//! [semantic]
//! primary = "primary"       # palette name ...
//! neutral = "slate"
//! accent = "#f59e0b"        # ... or a literal hex color
//!
//! [css]
//! prefix = "ds"
//! ```
//!
//! Every section is optional. Palette order is preserved so exports list
//! tokens in the order they were written.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tint_color::{ColorError, Lch};

use crate::contrast::WcagLevel;
use crate::error::{Result, TokenError};
use crate::export::CssOptions;
use crate::semantic::{Mode, SemanticTokenSet, map_tokens};

// ---------------------------------------------------------------------------
// GeneratorConfig
// ---------------------------------------------------------------------------

/// Switches fixed at [`TokenGenerator`](crate::TokenGenerator) construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Also emit a `<name>-dark` token per entry.
    #[serde(default)]
    pub generate_dark_mode: bool,
    /// Attach a contrast check against white to every token.
    #[serde(default = "default_true")]
    pub validate_wcag: bool,
    #[serde(default)]
    pub wcag_level: WcagLevel,
}

const fn default_true() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generate_dark_mode: false,
            validate_wcag: true,
            wcag_level: WcagLevel::AA,
        }
    }
}

// ---------------------------------------------------------------------------
// SeedColor
// ---------------------------------------------------------------------------

/// A color as written in config: an inline `{ l, c, h }` table or a string.
///
/// Strings are hex colors in `[palette]`. In `[semantic]` they may also
/// name a palette entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedColor {
    Lch(Lch),
    Text(String),
}

impl SeedColor {
    /// Resolve to a color, without palette lookup.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidHex`] if a string is not a hex color.
    pub fn resolve(&self) -> tint_color::Result<Lch> {
        match self {
            Self::Lch(color) => Ok(*color),
            Self::Text(hex) => Lch::from_hex(hex),
        }
    }

    /// Resolve a string against `palette` first, then as hex.
    fn resolve_in(&self, palette: &IndexMap<String, Lch>) -> tint_color::Result<Lch> {
        match self {
            Self::Text(name) if palette.contains_key(name) => Ok(palette[name]),
            _ => self.resolve(),
        }
    }
}

// ---------------------------------------------------------------------------
// SemanticConfig
// ---------------------------------------------------------------------------

/// Seeds for [`map_tokens`], by palette name or literal color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SemanticConfig {
    pub primary: SeedColor,
    pub neutral: SeedColor,
    #[serde(default)]
    pub secondary: Option<SeedColor>,
    #[serde(default)]
    pub destructive: Option<SeedColor>,
    #[serde(default)]
    pub accent: Option<SeedColor>,
}

impl SemanticConfig {
    /// Resolve every seed against `palette` and map the roles for `mode`.
    ///
    /// # Errors
    ///
    /// [`TokenError::InvalidToken`] naming the role whose seed is neither a
    /// palette entry nor a valid color.
    pub fn token_set(&self, mode: Mode, palette: &IndexMap<String, Lch>) -> Result<SemanticTokenSet> {
        let required = |role: &str, seed: &SeedColor| resolve_role(role, seed, palette);
        let optional = |role: &str, seed: Option<&SeedColor>| seed.map(|s| required(role, s)).transpose();

        Ok(map_tokens(
            mode,
            required("primary", &self.primary)?,
            required("neutral", &self.neutral)?,
            optional("secondary", self.secondary.as_ref())?,
            optional("destructive", self.destructive.as_ref())?,
            optional("accent", self.accent.as_ref())?,
        ))
    }
}

fn resolve_role(role: &str, seed: &SeedColor, palette: &IndexMap<String, Lch>) -> Result<Lch> {
    seed.resolve_in(palette)
        .and_then(Lch::validate)
        .map_err(|source| TokenError::InvalidToken { name: role.to_string(), source })
}

// ---------------------------------------------------------------------------
// TintConfig
// ---------------------------------------------------------------------------

/// The `tint.toml` document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TintConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub palette: IndexMap<String, SeedColor>,
    #[serde(default)]
    pub semantic: Option<SemanticConfig>,
    #[serde(default)]
    pub css: CssOptions,
}

impl TintConfig {
    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// [`TokenError::Config`] on malformed TOML or unexpected shapes.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Resolve `[palette]` into colors, in document order.
    ///
    /// Colors are not range-checked here; the generator does that.
    ///
    /// # Errors
    ///
    /// [`TokenError::InvalidToken`] for an entry whose string is not a hex
    /// color.
    pub fn palette(&self) -> Result<IndexMap<String, Lch>> {
        self.palette
            .iter()
            .map(|(name, seed)| {
                seed.resolve()
                    .map(|color| (name.clone(), color))
                    .map_err(|source: ColorError| TokenError::InvalidToken { name: name.clone(), source })
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
