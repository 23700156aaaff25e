//! Semantic token mapping — the bridge from seed colors to UI roles.
//!
//! Takes a primary and a neutral seed (plus optional secondary, destructive
//! and accent colors), derives their scales through [`scale`], and assigns
//! concrete colors to twelve fixed roles for a light or dark surface.
//!
//! Background and foreground keep a lightness ratio of at least 4.5 in both
//! modes. The scale table already satisfies this for ordinary neutral seeds;
//! the cap below enforces it for the rest.
//!
//! [`scale`]: crate::scale

use std::fmt;

use serde::{Deserialize, Serialize};
use tint_color::Lch;

use crate::scale::{Step, generate_scale};

/// Minimum background/foreground lightness ratio.
pub const MIN_LIGHTNESS_RATIO: f64 = 4.5;

/// Fallback destructive color: a saturated mid red.
pub const DEFAULT_DESTRUCTIVE: Lch = Lch { l: 0.5, c: 0.18, h: 25.0 };

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Surface mode a semantic set is built for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

// ---------------------------------------------------------------------------
// SemanticTokenSet
// ---------------------------------------------------------------------------

/// Concrete colors for the twelve UI roles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SemanticTokenSet {
    // ── Surfaces ──────────────────────────────────────────────
    pub background: Lch,
    pub foreground: Lch,

    // ── Brand ─────────────────────────────────────────────────
    pub primary: Lch,
    pub secondary: Lch,
    pub muted: Lch,
    pub accent: Lch,
    pub destructive: Lch,

    // ── Chrome ────────────────────────────────────────────────
    pub border: Lch,
    pub input: Lch,
    pub ring: Lch,

    // ── Containers ────────────────────────────────────────────
    pub card: Lch,
    pub popover: Lch,
}

impl SemanticTokenSet {
    /// Role names in emission order.
    pub const ROLES: [&'static str; 12] = [
        "background",
        "foreground",
        "primary",
        "secondary",
        "muted",
        "accent",
        "destructive",
        "border",
        "input",
        "ring",
        "card",
        "popover",
    ];

    /// `(role, color)` pairs in [`ROLES`](Self::ROLES) order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Lch)> + '_ {
        Self::ROLES.into_iter().filter_map(|role| self.get(role).map(|c| (role, c)))
    }

    /// Look up a role by name.
    #[must_use]
    pub fn get(&self, role: &str) -> Option<Lch> {
        let color = match role {
            "background" => self.background,
            "foreground" => self.foreground,
            "primary" => self.primary,
            "secondary" => self.secondary,
            "muted" => self.muted,
            "accent" => self.accent,
            "destructive" => self.destructive,
            "border" => self.border,
            "input" => self.input,
            "ring" => self.ring,
            "card" => self.card,
            "popover" => self.popover,
            _ => return None,
        };
        Some(color)
    }
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

/// Map seed colors onto the semantic roles for `mode`.
///
/// - `secondary` defaults to `primary` at 30% chroma
/// - `destructive` defaults to [`DEFAULT_DESTRUCTIVE`]
/// - `accent` defaults to primary-400
///
/// Dark mode inverts the neutral roles and lifts the brand colors so they
/// stay visible on a dark surface.
#[must_use]
pub fn map_tokens(
    mode: Mode,
    primary: Lch,
    neutral: Lch,
    secondary: Option<Lch>,
    destructive: Option<Lch>,
    accent: Option<Lch>,
) -> SemanticTokenSet {
    let primary_scale = generate_scale(primary);
    let neutral_scale = generate_scale(neutral);

    let base = Seeds {
        primary: primary_scale[Step::S500],
        secondary: secondary.unwrap_or_else(|| primary.scale_chroma(0.3)),
        destructive: destructive.unwrap_or(DEFAULT_DESTRUCTIVE),
        accent: accent.unwrap_or(primary_scale[Step::S400]),
    };

    match mode {
        Mode::Light => light(&base, |s| neutral_scale[s]),
        Mode::Dark => dark(&base, |s| neutral_scale[s]),
    }
}

struct Seeds {
    primary: Lch,
    secondary: Lch,
    destructive: Lch,
    accent: Lch,
}

fn light(seeds: &Seeds, neutral: impl Fn(Step) -> Lch) -> SemanticTokenSet {
    let background = neutral(Step::S50);
    let fg = neutral(Step::S900);
    let foreground = fg.with_lightness(fg.l.min(background.l / MIN_LIGHTNESS_RATIO));
    let border = neutral(Step::S200);

    SemanticTokenSet {
        background,
        foreground,
        primary: seeds.primary,
        secondary: seeds.secondary,
        muted: neutral(Step::S100),
        accent: seeds.accent,
        destructive: seeds.destructive,
        border,
        input: border,
        ring: seeds.primary,
        card: background,
        popover: background,
    }
}

fn dark(seeds: &Seeds, neutral: impl Fn(Step) -> Lch) -> SemanticTokenSet {
    let foreground = neutral(Step::S50);
    let bg = neutral(Step::S900);
    let background = bg.with_lightness(bg.l.min(foreground.l / MIN_LIGHTNESS_RATIO));
    let surface = neutral(Step::S800);
    let primary = lift(seeds.primary, 0.20, 0.80);

    SemanticTokenSet {
        background,
        foreground,
        primary,
        secondary: lift(seeds.secondary, 0.20, 0.80),
        muted: surface,
        accent: lift(seeds.accent, 0.15, 0.75),
        destructive: lift(seeds.destructive, 0.15, 0.75),
        border: surface,
        input: surface,
        ring: primary,
        card: background,
        popover: background,
    }
}

/// Raise lightness by `amount` up to `cap`. Never darkens.
fn lift(color: Lch, amount: f64, cap: f64) -> Lch {
    color.with_lightness((color.l + amount).min(cap).max(color.l))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
