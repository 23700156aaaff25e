//! Semantic exporters — CSS custom properties, DTCG JSON, Tailwind config.
//!
//! Each exporter is an independent string builder over the same inputs:
//! a light [`SemanticTokenSet`], an optional dark one, and any number of
//! named [`ColorScale`]s. Output order follows role order and then scale
//! insertion order, so identical input is byte-identical output.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tint_color::Lch;

use crate::error::Result;
use crate::scale::ColorScale;
use crate::semantic::SemanticTokenSet;

/// `oklch(L% C H)` with lightness as a percentage (2 decimals), chroma to
/// 3 decimals, hue to whole degrees.
#[must_use]
pub fn format_oklch(color: Lch) -> String {
    format!("oklch({:.2}% {:.3} {:.0})", color.l * 100.0, color.c, color.h)
}

// ---------------------------------------------------------------------------
// CSS
// ---------------------------------------------------------------------------

/// Options for [`to_css`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssOptions {
    /// Emit `--{prefix}-name` instead of `--name`.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Drop newlines, indentation and the spaces around `:` and `{`.
    #[serde(default)]
    pub minify: bool,
}

impl CssOptions {
    fn var(&self, name: &str) -> String {
        match self.prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => format!("--{prefix}-{name}"),
            _ => format!("--{name}"),
        }
    }
}

/// Custom properties under `:root`, plus a `.dark` block when `dark` is
/// given. Scales are emitted as `--name-step` in the `:root` block.
#[must_use]
pub fn to_css(
    light: &SemanticTokenSet,
    dark: Option<&SemanticTokenSet>,
    scales: &IndexMap<String, ColorScale>,
    options: &CssOptions,
) -> String {
    let mut root: Vec<(String, Lch)> = light.iter().map(|(role, c)| (options.var(role), c)).collect();
    for (name, scale) in scales {
        root.extend(scale.iter().map(|(step, c)| (options.var(&format!("{name}-{step}")), c)));
    }

    let mut blocks = vec![css_block(":root", &root, options.minify)];
    if let Some(dark) = dark {
        let vars: Vec<(String, Lch)> = dark.iter().map(|(role, c)| (options.var(role), c)).collect();
        blocks.push(css_block(".dark", &vars, options.minify));
    }

    if options.minify { blocks.concat() } else { blocks.join("\n\n") + "\n" }
}

fn css_block(selector: &str, vars: &[(String, Lch)], minify: bool) -> String {
    if minify {
        let body: String = vars.iter().map(|(var, c)| format!("{var}:{};", format_oklch(*c))).collect();
        format!("{selector}{{{body}}}")
    } else {
        let mut lines = vec![format!("{selector} {{")];
        lines.extend(vars.iter().map(|(var, c)| format!("  {var}: {};", format_oklch(*c))));
        lines.push("}".to_string());
        lines.join("\n")
    }
}

// ---------------------------------------------------------------------------
// DTCG
// ---------------------------------------------------------------------------

fn dtcg_color(color: Lch) -> Value {
    json!({ "$type": "color", "$value": format_oklch(color) })
}

/// Insert `value` at `key`, merging object entries when the key exists.
fn merge_into(map: &mut Map<String, Value>, key: &str, value: Value) {
    if let Value::Object(extra) = &value {
        if let Some(Value::Object(existing)) = map.get_mut(key) {
            existing.extend(extra.clone());
            return;
        }
    }
    map.insert(key.to_string(), value);
}

/// Design Tokens Community Group JSON.
///
/// Roles become `{ "$type": "color", "$value": "oklch(…)" }` objects,
/// scales become groups keyed by step, the dark set nests under `"dark"`.
///
/// # Errors
///
/// [`TokenError::Json`](crate::TokenError::Json) if serialization fails.
pub fn to_dtcg(
    light: &SemanticTokenSet,
    dark: Option<&SemanticTokenSet>,
    scales: &IndexMap<String, ColorScale>,
) -> Result<String> {
    let mut root = Map::new();
    for (role, color) in light.iter() {
        root.insert(role.to_string(), dtcg_color(color));
    }
    for (name, scale) in scales {
        let steps: Map<String, Value> = scale.iter().map(|(step, c)| (step.to_string(), dtcg_color(c))).collect();
        merge_into(&mut root, name, Value::Object(steps));
    }
    if let Some(dark) = dark {
        let group: Map<String, Value> = dark.iter().map(|(role, c)| (role.to_string(), dtcg_color(c))).collect();
        merge_into(&mut root, "dark", Value::Object(group));
    }
    Ok(serde_json::to_string_pretty(&Value::Object(root))?)
}

// ---------------------------------------------------------------------------
// Tailwind
// ---------------------------------------------------------------------------

/// Module syntax for [`to_tailwind_config`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TailwindFlavor {
    /// `module.exports = { … };`
    #[default]
    Js,
    /// `export default { … } satisfies Config;`
    Ts,
}

enum Entry {
    Hex(String),
    Group(IndexMap<String, Entry>),
}

impl Entry {
    fn write(&self, out: &mut Vec<String>, key: &str, indent: usize) {
        let pad = "  ".repeat(indent);
        match self {
            Self::Hex(hex) => out.push(format!("{pad}'{key}': '{hex}',")),
            Self::Group(entries) => {
                out.push(format!("{pad}'{key}': {{"));
                for (k, v) in entries {
                    v.write(out, k, indent + 1);
                }
                out.push(format!("{pad}}},"));
            }
        }
    }
}

/// Tailwind config with `theme.extend.colors` filled from hex values.
///
/// A role sharing a scale's name becomes that scale's `DEFAULT`. A dark set
/// adds a nested `dark` group and `darkMode: 'class'`.
#[must_use]
pub fn to_tailwind_config(
    light: &SemanticTokenSet,
    dark: Option<&SemanticTokenSet>,
    scales: &IndexMap<String, ColorScale>,
    flavor: TailwindFlavor,
) -> String {
    let mut colors: IndexMap<String, Entry> =
        light.iter().map(|(role, c)| (role.to_string(), Entry::Hex(c.to_hex()))).collect();

    for (name, scale) in scales {
        let mut group: IndexMap<String, Entry> = IndexMap::new();
        if let Some(Entry::Hex(hex)) = colors.get(name) {
            group.insert("DEFAULT".to_string(), Entry::Hex(hex.clone()));
        }
        group.extend(scale.iter().map(|(step, c)| (step.to_string(), Entry::Hex(c.to_hex()))));
        colors.insert(name.clone(), Entry::Group(group));
    }

    if let Some(dark) = dark {
        let group = dark.iter().map(|(role, c)| (role.to_string(), Entry::Hex(c.to_hex()))).collect();
        colors.insert("dark".to_string(), Entry::Group(group));
    }

    let mut lines = match flavor {
        TailwindFlavor::Js => vec![
            "/** @type {import('tailwindcss').Config} */".to_string(),
            "module.exports = {".to_string(),
        ],
        TailwindFlavor::Ts => vec![
            "import type { Config } from 'tailwindcss';".to_string(),
            String::new(),
            "export default {".to_string(),
        ],
    };
    if dark.is_some() {
        lines.push("  darkMode: 'class',".to_string());
    }
    lines.push("  content: [],".to_string());
    lines.push("  theme: {".to_string());
    lines.push("    extend: {".to_string());
    lines.push("      colors: {".to_string());
    for (key, entry) in &colors {
        entry.write(&mut lines, key, 4);
    }
    lines.push("      },".to_string());
    lines.push("    },".to_string());
    lines.push("  },".to_string());
    lines.push(match flavor {
        TailwindFlavor::Js => "};".to_string(),
        TailwindFlavor::Ts => "} satisfies Config;".to_string(),
    });

    lines.join("\n") + "\n"
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
