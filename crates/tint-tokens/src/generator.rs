//! Token generator — palette in, tokens and serialized exports out.
//!
//! ```text
//! name + Lch
//!     │
//!     ▼
//! validate     l ∈ [0,1], c ∈ [0,0.5], finite; hue normalized
//!     │
//!     ▼
//! cache lookup (name, color) ──hit──▶ cached token
//!     │ miss
//!     ▼
//! clip_to_gamut → generate_scale → generate_token_id
//!     │
//!     ▼
//! optional `<name>-dark` variant (lightness flipped to 1 - l)
//! ```
//!
//! The cache is owned by one [`TokenGenerator`] and only ever grows until
//! [`TokenGenerator::clear_cache`]. Ids are a pure function of name and
//! clipped color, so clearing the cache never changes ids or values; only
//! `metadata.generated` is refreshed.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tint_color::{Lch, Rgb, clip_to_gamut};
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::contrast::{AccessibilityCheck, TextSize, validate_pair};
use crate::error::{Result, TokenError};
use crate::scale::{ColorScale, generate_scale};

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A generated design token.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: String,
    pub name: String,
    /// Seed color after gamut clipping.
    pub value: Lch,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<ColorScale>,
    pub metadata: TokenMetadata,
}

/// Provenance attached to every token.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    pub generated: DateTime<Utc>,
    pub dark_mode: bool,
    /// Chroma had to be reduced to fit the sRGB cube.
    pub gamut_clipped: bool,
    /// Value checked against white. Present when WCAG validation is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<AccessibilityCheck>,
}

/// Deterministic id for `name` at `color`.
///
/// `{name}-{l:.3}-{c:.3}-{h:.0}`, lowercased, with every character outside
/// `[a-z0-9-]` replaced by `-`.
#[must_use]
pub fn generate_token_id(name: &str, color: Lch) -> String {
    let raw = format!("{name}-{:.3}-{:.3}-{:.0}", color.l, color.c, color.h);
    raw.to_lowercase()
        .chars()
        .map(|ch| if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' { ch } else { '-' })
        .collect()
}

/// Build a single token: validate, clip, derive the scale, assign the id.
///
/// # Errors
///
/// [`TokenError::InvalidToken`] when lightness or chroma is out of range or
/// any channel is not finite.
pub fn generate_token(name: &str, color: Lch) -> Result<Token> {
    let color = validate(name, color)?;
    let clipped = clip_to_gamut(color);

    Ok(Token {
        id: generate_token_id(name, clipped),
        name: name.to_string(),
        value: clipped,
        scale: Some(generate_scale(clipped)),
        metadata: TokenMetadata {
            generated: Utc::now(),
            dark_mode: false,
            gamut_clipped: clipped.c.to_bits() != color.c.to_bits(),
            accessibility: None,
        },
    })
}

fn validate(name: &str, color: Lch) -> Result<Lch> {
    color.validate().map_err(|source| TokenError::InvalidToken { name: name.to_string(), source })
}

/// Cheap dark-mode approximation: every lightness becomes `1 - l`.
fn dark_variant(token: &Token) -> Token {
    let flip = |c: Lch| c.with_lightness(1.0 - c.l);
    Token {
        id: format!("{}-dark", token.id),
        name: format!("{}-dark", token.name),
        value: flip(token.value),
        scale: token.scale.map(|s| s.map(flip)),
        metadata: TokenMetadata { dark_mode: true, ..token.metadata.clone() },
    }
}

// ---------------------------------------------------------------------------
// ExportFormat
// ---------------------------------------------------------------------------

/// Direct export targets of [`TokenGenerator::export_tokens`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Css,
    Json,
    Js,
    Ts,
}

impl ExportFormat {
    pub const ALL: [Self; 4] = [Self::Css, Self::Json, Self::Js, Self::Ts];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Json => "json",
            Self::Js => "js",
            Self::Ts => "ts",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == lower)
            .ok_or_else(|| TokenError::UnsupportedFormat(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// TokenGenerator
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    name: String,
    color: [u64; 3],
    dark: bool,
}

impl CacheKey {
    fn new(name: &str, color: Lch) -> Self {
        Self {
            name: name.to_string(),
            color: [color.l.to_bits(), color.c.to_bits(), color.h.to_bits()],
            dark: false,
        }
    }

    fn dark(&self) -> Self {
        Self { dark: true, ..self.clone() }
    }
}

/// Generates tokens with an owned, per-instance cache.
///
/// Not internally synchronized: share across threads behind a `Mutex`.
#[derive(Debug, Default)]
pub struct TokenGenerator {
    config: GeneratorConfig,
    cache: FxHashMap<CacheKey, Token>,
}

impl TokenGenerator {
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config, cache: FxHashMap::default() }
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Number of cached tokens, dark variants included.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Generate one token per palette entry, in palette order.
    ///
    /// With dark mode enabled each token is followed by its `<name>-dark`
    /// variant. An empty palette yields an empty list.
    ///
    /// # Errors
    ///
    /// [`TokenError::InvalidToken`] for the first entry that fails
    /// validation. Entries before it stay cached.
    ///
    /// [`TokenError::DuplicateToken`] when dark mode is on and the palette
    /// already holds an entry named `<name>-dark`.
    pub fn generate_tokens(&mut self, palette: &IndexMap<String, Lch>) -> Result<Vec<Token>> {
        let config = self.config;
        if config.generate_dark_mode {
            if let Some(name) = palette.keys().find(|name| palette.contains_key(&format!("{name}-dark"))) {
                return Err(TokenError::DuplicateToken(format!("{name}-dark")));
            }
        }
        let mut tokens = Vec::with_capacity(palette.len() * if config.generate_dark_mode { 2 } else { 1 });

        for (name, &color) in palette {
            let color = validate(name, color)?;
            let key = CacheKey::new(name, color);

            let base = if let Some(token) = self.cache.get(&key) {
                debug!(token = %name, "token cache hit");
                token.clone()
            } else {
                debug!(token = %name, "token cache miss");
                let mut token = generate_token(name, color)?;
                token.metadata.accessibility = assess(token.value, &config);
                self.cache.insert(key.clone(), token.clone());
                token
            };

            if config.generate_dark_mode {
                let dark = self
                    .cache
                    .entry(key.dark())
                    .or_insert_with(|| {
                        let mut token = dark_variant(&base);
                        token.metadata.accessibility = assess(token.value, &config);
                        token
                    })
                    .clone();
                tokens.push(base);
                tokens.push(dark);
            } else {
                tokens.push(base);
            }
        }

        Ok(tokens)
    }

    /// Generate (or reuse) tokens for `palette` and serialize them.
    ///
    /// # Errors
    ///
    /// Validation errors from [`generate_tokens`](Self::generate_tokens),
    /// [`TokenError::DuplicateToken`] when two names map to the same JS
    /// identifier, or [`TokenError::Json`] if JSON serialization fails.
    pub fn export_tokens(&mut self, palette: &IndexMap<String, Lch>, format: ExportFormat) -> Result<String> {
        let tokens = self.generate_tokens(palette)?;
        match format {
            ExportFormat::Css => Ok(tokens_to_css(&tokens)),
            ExportFormat::Json => tokens_to_json(&tokens),
            ExportFormat::Js => {
                unique_idents(&tokens)?;
                Ok(tokens_to_js(&tokens))
            }
            ExportFormat::Ts => {
                unique_idents(&tokens)?;
                Ok(tokens_to_ts(&tokens))
            }
        }
    }

    /// [`export_tokens`](Self::export_tokens) with the format given as a
    /// string.
    ///
    /// # Errors
    ///
    /// [`TokenError::UnsupportedFormat`] for anything other than
    /// `css`, `json`, `js` or `ts`.
    pub fn export_tokens_str(&mut self, palette: &IndexMap<String, Lch>, format: &str) -> Result<String> {
        let format = format.parse()?;
        self.export_tokens(palette, format)
    }

    /// Drop every cached token.
    pub fn clear_cache(&mut self) {
        debug!(entries = self.cache.len(), "token cache cleared");
        self.cache.clear();
    }
}

fn assess(value: Lch, config: &GeneratorConfig) -> Option<AccessibilityCheck> {
    config
        .validate_wcag
        .then(|| validate_pair(value.to_rgb(), Rgb::WHITE, config.wcag_level, TextSize::Normal))
}

// ---------------------------------------------------------------------------
// Direct exports
// ---------------------------------------------------------------------------

fn scale_entries(token: &Token) -> impl Iterator<Item = (String, String)> + '_ {
    token.scale.iter().flat_map(ColorScale::iter).map(|(step, c)| (step.to_string(), c.to_hex()))
}

/// `:root { --name: #hex; --name-step: #hex; … }`.
#[must_use]
pub fn tokens_to_css(tokens: &[Token]) -> String {
    let mut lines = vec![":root {".to_string()];
    for token in tokens {
        lines.push(format!("  --{}: {};", token.name, token.value.to_hex()));
        for (step, hex) in scale_entries(token) {
            lines.push(format!("  --{}-{step}: {hex};", token.name));
        }
    }
    lines.push("}".to_string());
    lines.join("\n")
}

#[derive(Serialize)]
struct JsonToken {
    value: String,
    oklch: Lch,
    scale: IndexMap<String, String>,
}

/// `{ "<name>": { "value", "oklch", "scale" } }`, pretty-printed.
///
/// # Errors
///
/// [`TokenError::Json`] if serialization fails.
pub fn tokens_to_json(tokens: &[Token]) -> Result<String> {
    let output: IndexMap<&str, JsonToken> = tokens
        .iter()
        .map(|token| {
            let entry = JsonToken {
                value: token.value.to_hex(),
                oklch: token.value,
                scale: scale_entries(token).collect(),
            };
            (token.name.as_str(), entry)
        })
        .collect();
    Ok(serde_json::to_string_pretty(&output)?)
}

/// ES module with one constant and one scale object per token.
#[must_use]
pub fn tokens_to_js(tokens: &[Token]) -> String {
    let mut lines = vec!["// Generated design tokens".to_string()];
    for token in tokens {
        let ident = js_ident(&token.name);
        lines.push(format!("export const {ident} = '{}';", token.value.to_hex()));
        lines.push(format!("export const {ident}Scale = {{"));
        for (step, hex) in scale_entries(token) {
            lines.push(format!("  '{step}': '{hex}',"));
        }
        lines.push("};".to_string());
    }
    lines.join("\n")
}

/// Same as [`tokens_to_js`] with `as const` on every literal.
#[must_use]
pub fn tokens_to_ts(tokens: &[Token]) -> String {
    let mut lines = vec!["// Generated design tokens".to_string(), String::new()];
    for token in tokens {
        let ident = js_ident(&token.name);
        lines.push(format!("export const {ident} = '{}' as const;", token.value.to_hex()));
        lines.push(format!("export const {ident}Scale = {{"));
        for (step, hex) in scale_entries(token) {
            lines.push(format!("  '{step}': '{hex}' as const,"));
        }
        lines.push("} as const;".to_string());
        lines.push(String::new());
    }
    lines.join("\n")
}

/// `primary-dark` and `primary_dark` both become `primaryDark`.
fn unique_idents(tokens: &[Token]) -> Result<()> {
    let mut seen = FxHashSet::default();
    for token in tokens {
        if !seen.insert(js_ident(&token.name)) {
            return Err(TokenError::DuplicateToken(token.name.clone()));
        }
    }
    Ok(())
}

/// Lower camel case identifier: `primary-dark` → `primaryDark`.
fn js_ident(name: &str) -> String {
    let mut ident = String::with_capacity(name.len());
    for (i, part) in name.split(|ch: char| !ch.is_ascii_alphanumeric()).filter(|p| !p.is_empty()).enumerate() {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            if i == 0 {
                ident.push(first.to_ascii_lowercase());
            } else {
                ident.push(first.to_ascii_uppercase());
            }
            ident.extend(chars);
        }
    }
    if ident.is_empty() || ident.starts_with(|ch: char| ch.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::WcagLevel;
    use crate::scale::Step;
    use pretty_assertions::assert_eq;

    fn seed() -> Lch {
        Lch::new(0.5, 0.15, 220.0)
    }

    fn palette(entries: &[(&str, Lch)]) -> IndexMap<String, Lch> {
        entries.iter().map(|(n, c)| ((*n).to_string(), *c)).collect()
    }

    fn dark_config() -> GeneratorConfig {
        GeneratorConfig { generate_dark_mode: true, ..GeneratorConfig::default() }
    }

    // ── Ids ──────────────────────────────────────────────────

    #[test]
    fn id_format() {
        assert_eq!(generate_token_id("primary", seed()), "primary-0-500-0-150-220");
        assert_eq!(generate_token_id("Brand Blue", seed()), "brand-blue-0-500-0-150-220");
    }

    #[test]
    fn id_is_deterministic_and_distinct() {
        let a = generate_token_id("primary", seed());
        assert_eq!(a, generate_token_id("primary", seed()));
        assert_ne!(a, generate_token_id("secondary", seed()));
        assert_ne!(a, generate_token_id("primary", Lch::new(0.6, 0.15, 220.0)));
    }

    #[test]
    fn id_ignores_sign_of_zero_hue() {
        let id = generate_token_id("p", Lch::new(0.5, 0.1, 0.0));
        assert_eq!(id, "p-0-500-0-100-0");
        assert_eq!(generate_token_id("p", Lch::new(0.5, 0.1, -0.0)), id);
    }

    #[test]
    fn id_charset() {
        let id = generate_token_id("Ünïcode_Name!", seed());
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'), "{id}");
    }

    // ── Single token ─────────────────────────────────────────

    #[test]
    fn token_in_gamut_is_not_clipped() {
        let token = generate_token("primary", Lch::new(0.6, 0.05, 150.0)).unwrap();
        assert!(!token.metadata.gamut_clipped);
        assert!(!token.metadata.dark_mode);
        let scale = token.scale.unwrap();
        assert_eq!(scale[Step::S500], token.value);
    }

    #[test]
    fn token_out_of_gamut_is_clipped() {
        let token = generate_token("vivid", Lch::new(0.5, 0.45, 220.0)).unwrap();
        assert!(token.metadata.gamut_clipped);
        assert!(token.value.c < 0.45);
        assert!(token.value.in_gamut());
    }

    #[test]
    fn token_rejects_out_of_range() {
        let err = generate_token("bad", Lch { l: 1.2, c: 0.1, h: 0.0 }).unwrap_err();
        assert!(matches!(err, TokenError::InvalidToken { ref name, .. } if name == "bad"));
        assert!(generate_token("bad", Lch { l: 0.5, c: 0.6, h: 0.0 }).is_err());
        assert!(generate_token("bad", Lch { l: 0.5, c: 0.1, h: f64::NAN }).is_err());
    }

    #[test]
    fn token_normalizes_hue() {
        let token = generate_token("wrap", Lch { l: 0.5, c: 0.1, h: -140.0 }).unwrap();
        assert!((token.value.h - 220.0).abs() < 1e-9);
    }

    // ── Generator ────────────────────────────────────────────

    #[test]
    fn empty_palette() {
        let mut generator = TokenGenerator::default();
        assert!(generator.generate_tokens(&IndexMap::new()).unwrap().is_empty());
    }

    #[test]
    fn preserves_palette_order() {
        let mut generator = TokenGenerator::default();
        let p = palette(&[("zeta", seed()), ("alpha", seed())]);
        let names: Vec<String> = generator.generate_tokens(&p).unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn accessibility_follows_config() {
        let p = palette(&[("primary", seed())]);
        let mut on = TokenGenerator::default();
        let check = on.generate_tokens(&p).unwrap()[0].metadata.accessibility.clone().unwrap();
        assert_eq!(check.wcag_level, WcagLevel::AA);
        assert_eq!(check.background, Some(Rgb::WHITE));

        let mut off = TokenGenerator::new(GeneratorConfig { validate_wcag: false, ..GeneratorConfig::default() });
        assert!(off.generate_tokens(&p).unwrap()[0].metadata.accessibility.is_none());
    }

    #[test]
    fn dark_variant_flips_lightness() {
        let mut generator = TokenGenerator::new(dark_config());
        let tokens = generator.generate_tokens(&palette(&[("primary", seed())])).unwrap();
        assert_eq!(tokens.len(), 2);

        let (base, dark) = (&tokens[0], &tokens[1]);
        assert_eq!(dark.name, "primary-dark");
        assert_eq!(dark.id, format!("{}-dark", base.id));
        assert!(dark.metadata.dark_mode);
        assert!((dark.value.l - (1.0 - base.value.l)).abs() < 1e-12);
        assert_eq!(dark.value.c.to_bits(), base.value.c.to_bits());

        let (bs, ds) = (base.scale.unwrap(), dark.scale.unwrap());
        for ((_, b), (_, d)) in bs.iter().zip(ds.iter()) {
            assert!((d.l - (1.0 - b.l)).abs() < 1e-12);
            assert_eq!(d.h.to_bits(), b.h.to_bits());
        }
    }

    #[test]
    fn cache_hit_returns_same_tokens() {
        let mut generator = TokenGenerator::new(dark_config());
        let p = palette(&[("primary", seed())]);
        let first = generator.generate_tokens(&p).unwrap();
        assert_eq!(generator.cache_len(), 2);
        let second = generator.generate_tokens(&p).unwrap();
        assert_eq!(first, second);
        assert_eq!(generator.cache_len(), 2);
    }

    #[test]
    fn clear_cache_keeps_ids_and_values() {
        let mut generator = TokenGenerator::default();
        let p = palette(&[("primary", seed()), ("vivid", Lch::new(0.5, 0.45, 220.0))]);
        let before = generator.generate_tokens(&p).unwrap();
        generator.clear_cache();
        assert_eq!(generator.cache_len(), 0);
        let after = generator.generate_tokens(&p).unwrap();
        for (a, b) in before.iter().zip(&after) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.value, b.value);
            assert_eq!(a.scale, b.scale);
        }
    }

    #[test]
    fn invalid_entry_fails_generation() {
        let mut generator = TokenGenerator::default();
        let p = palette(&[("ok", seed()), ("bad", Lch { l: -0.1, c: 0.1, h: 0.0 })]);
        assert!(matches!(generator.generate_tokens(&p), Err(TokenError::InvalidToken { .. })));
    }

    // ── Formats ──────────────────────────────────────────────

    #[test]
    fn format_parsing() {
        assert_eq!("css".parse::<ExportFormat>().unwrap(), ExportFormat::Css);
        assert_eq!(" TS ".parse::<ExportFormat>().unwrap(), ExportFormat::Ts);
        assert!(matches!("yaml".parse::<ExportFormat>(), Err(TokenError::UnsupportedFormat(s)) if s == "yaml"));
    }

    #[test]
    fn css_export_shape() {
        let mut generator = TokenGenerator::default();
        let css = generator.export_tokens(&palette(&[("primary", seed())]), ExportFormat::Css).unwrap();
        let value = generate_token("primary", seed()).unwrap().value;
        let lines: Vec<&str> = css.lines().collect();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], ":root {");
        assert_eq!(lines[1], format!("  --primary: {};", value.to_hex()));
        assert!(lines[2].starts_with("  --primary-50: #"));
        assert!(lines[12].starts_with("  --primary-950: #"));
        assert_eq!(lines[13], "}");
    }

    #[test]
    fn json_export_shape() {
        let mut generator = TokenGenerator::default();
        let json = generator.export_tokens(&palette(&[("primary", seed())]), ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let clipped = generate_token("primary", seed()).unwrap().value;
        assert_eq!(value["primary"]["value"], clipped.to_hex());
        assert_eq!(value["primary"]["scale"].as_object().unwrap().len(), 11);
        assert!((value["primary"]["oklch"]["l"].as_f64().unwrap() - 0.5).abs() < 1e-12);
        assert!(json.starts_with("{\n  \"primary\""));
    }

    #[test]
    fn js_and_ts_exports() {
        let mut generator = TokenGenerator::new(dark_config());
        let p = palette(&[("primary", seed())]);

        let js = generator.export_tokens(&p, ExportFormat::Js).unwrap();
        assert!(js.starts_with("// Generated design tokens\nexport const primary = '#"));
        assert!(js.contains("export const primaryScale = {\n  '50': '#"));
        assert!(js.contains("export const primaryDark = '#"));
        assert!(js.ends_with("};"));

        let ts = generator.export_tokens(&p, ExportFormat::Ts).unwrap();
        assert!(ts.starts_with("// Generated design tokens\n\nexport const primary = '#"));
        assert!(ts.contains("' as const;\n"));
        assert!(ts.contains("  '500': '#"));
        assert!(ts.contains("} as const;\n"));
    }

    #[test]
    fn exports_are_byte_identical() {
        let p = palette(&[("primary", seed()), ("accent", Lch::new(0.7, 0.2, 30.0))]);
        for format in ExportFormat::ALL {
            let mut generator = TokenGenerator::new(dark_config());
            let a = generator.export_tokens(&p, format).unwrap();
            generator.clear_cache();
            let b = generator.export_tokens(&p, format).unwrap();
            assert_eq!(a, b, "{format}");
        }
    }

    #[test]
    fn unsupported_string_format() {
        let mut generator = TokenGenerator::default();
        let p = palette(&[("primary", seed())]);
        assert!(generator.export_tokens_str(&p, "json").is_ok());
        assert!(matches!(generator.export_tokens_str(&p, "scss"), Err(TokenError::UnsupportedFormat(_))));
    }

    #[test]
    fn identifiers_are_camel_case() {
        assert_eq!(js_ident("primary"), "primary");
        assert_eq!(js_ident("primary-dark"), "primaryDark");
        assert_eq!(js_ident("brand_blue-dark"), "brandBlueDark");
        assert_eq!(js_ident("9tails"), "_9tails");
        assert_eq!(js_ident("--"), "_");
    }

    #[test]
    fn dark_name_taken_by_palette_entry() {
        let p = palette(&[("primary", seed()), ("primary-dark", Lch::new(0.3, 0.1, 220.0))]);
        let mut generator = TokenGenerator::new(dark_config());
        assert!(matches!(
            generator.generate_tokens(&p),
            Err(TokenError::DuplicateToken(ref name)) if name == "primary-dark"
        ));
        assert!(matches!(generator.export_tokens(&p, ExportFormat::Json), Err(TokenError::DuplicateToken(_))));

        // Without dark variants the two entries are distinct.
        let mut generator = TokenGenerator::default();
        assert_eq!(generator.generate_tokens(&p).unwrap().len(), 2);
    }

    #[test]
    fn colliding_identifiers_rejected_for_js() {
        let p = palette(&[("brand-blue", seed()), ("brand_blue", Lch::new(0.3, 0.1, 220.0))]);
        let mut generator = TokenGenerator::default();
        for format in [ExportFormat::Js, ExportFormat::Ts] {
            assert!(matches!(
                generator.export_tokens(&p, format),
                Err(TokenError::DuplicateToken(ref name)) if name == "brand_blue"
            ));
        }
        assert!(generator.export_tokens(&p, ExportFormat::Css).is_ok());
        assert!(generator.export_tokens(&p, ExportFormat::Json).is_ok());
    }
}
