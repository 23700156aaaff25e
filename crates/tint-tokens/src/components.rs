//! Component theme recipes — named multi-state palettes from one seed.
//!
//! Eight fixed recipes, each a pure function of the seed color. Some only
//! borrow the seed's hue (card, checkbox and radio backgrounds) and some
//! ignore it entirely (badge, alert and link use fixed status hues).
//!
//! Every theme carries WCAG AA checks of its foreground colors against a
//! white surface.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use tint_color::{Lch, Rgb};

use crate::contrast::{AccessibilityCheck, TextSize, WcagLevel, validate_pair};

/// Upper bound for the input focus ring chroma.
const FOCUS_MAX_CHROMA: f64 = 0.4;

/// Status hues shared by badge and alert: info, success, warning, error.
const STATUS_HUES: [(&str, f64); 4] = [("info", 220.0), ("success", 140.0), ("warning", 60.0), ("error", 0.0)];

// ---------------------------------------------------------------------------
// ComponentTheme
// ---------------------------------------------------------------------------

/// A named set of state colors plus their accessibility checks.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComponentTheme {
    pub name: &'static str,
    pub states: IndexMap<&'static str, Lch>,
    pub accessibility: Vec<AccessibilityCheck>,
}

impl ComponentTheme {
    /// Color for `state`, if the recipe defines it.
    #[must_use]
    pub fn state(&self, state: &str) -> Option<Lch> {
        self.states.get(state).copied()
    }
}

fn against_white(color: Lch) -> AccessibilityCheck {
    validate_pair(color.to_rgb(), Rgb::WHITE, WcagLevel::AA, TextSize::Normal)
}

fn theme(name: &'static str, states: &[(&'static str, Lch)], checked: &[Lch]) -> ComponentTheme {
    ComponentTheme {
        name,
        states: states.iter().copied().collect(),
        accessibility: checked.iter().copied().map(against_white).collect(),
    }
}

// ---------------------------------------------------------------------------
// ComponentKind
// ---------------------------------------------------------------------------

/// The eight recipe kinds, in generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Button,
    Input,
    Card,
    Badge,
    Alert,
    Link,
    Checkbox,
    Radio,
}

impl ComponentKind {
    /// All kinds, in the order [`generate_component_themes`] emits them.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Button,
            Self::Input,
            Self::Card,
            Self::Badge,
            Self::Alert,
            Self::Link,
            Self::Checkbox,
            Self::Radio,
        ]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Input => "input",
            Self::Card => "card",
            Self::Badge => "badge",
            Self::Alert => "alert",
            Self::Link => "link",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
        }
    }

    /// Look up a kind by its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }

    /// Run this recipe on `seed`.
    #[must_use]
    pub fn theme(self, seed: Lch) -> ComponentTheme {
        match self {
            Self::Button => button(seed),
            Self::Input => input(seed),
            Self::Card => card(seed),
            Self::Badge => status("badge", 0.15, [0.5, 0.5, 0.6, 0.5]),
            Self::Alert => status("alert", 0.08, [0.9, 0.9, 0.92, 0.9]),
            Self::Link => link(),
            Self::Checkbox => checkbox(seed),
            Self::Radio => radio(seed),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Recipes
// ---------------------------------------------------------------------------

fn button(seed: Lch) -> ComponentTheme {
    theme(
        "button",
        &[
            ("default", seed),
            ("hover", seed.scale_lightness(0.9)),
            ("active", seed.scale_lightness(0.8)),
            ("disabled", seed.scale_lightness(1.3).scale_chroma(0.5)),
        ],
        &[seed],
    )
}

fn input(seed: Lch) -> ComponentTheme {
    theme(
        "input",
        &[
            ("default", seed),
            ("focus", seed.with_chroma((seed.c * 1.2).min(FOCUS_MAX_CHROMA))),
            ("error", Lch { l: 0.5, c: 0.15, h: 0.0 }),
            ("disabled", Lch { l: 0.7, c: 0.05, h: seed.h }),
        ],
        &[seed],
    )
}

fn card(seed: Lch) -> ComponentTheme {
    theme(
        "card",
        &[
            ("background", Lch { l: 0.98, c: 0.02, h: seed.h }),
            ("border", Lch { l: 0.85, c: 0.05, h: seed.h }),
            ("shadow", Lch { l: 0.3, c: 0.02, h: seed.h }),
        ],
        &[seed],
    )
}

/// Badge and alert: four fixed status hues, seed ignored.
fn status(name: &'static str, chroma: f64, lightness: [f64; 4]) -> ComponentTheme {
    let states: Vec<(&'static str, Lch)> = STATUS_HUES
        .iter()
        .zip(lightness)
        .map(|(&(state, h), l)| (state, Lch { l, c: chroma, h }))
        .collect();
    let colors: Vec<Lch> = states.iter().map(|&(_, c)| c).collect();
    theme(name, &states, &colors)
}

fn link() -> ComponentTheme {
    let default = Lch { l: 0.4, c: 0.15, h: 220.0 };
    theme(
        "link",
        &[
            ("default", default),
            ("hover", default.with_lightness(0.35)),
            ("visited", Lch { h: 280.0, ..default }),
            ("active", default.with_lightness(0.3)),
        ],
        &[default],
    )
}

fn checkbox(seed: Lch) -> ComponentTheme {
    theme(
        "checkbox",
        &[
            ("unchecked", Lch { l: 0.95, c: 0.02, h: seed.h }),
            ("checked", seed),
            ("indeterminate", seed.scale_lightness(0.9)),
        ],
        &[seed],
    )
}

fn radio(seed: Lch) -> ComponentTheme {
    theme("radio", &[("unselected", Lch { l: 0.95, c: 0.02, h: seed.h }), ("selected", seed)], &[seed])
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Run all eight recipes on `seed`.
#[must_use]
pub fn generate_component_themes(seed: Lch) -> Vec<ComponentTheme> {
    ComponentKind::all().iter().map(|kind| kind.theme(seed)).collect()
}

/// Run a single recipe by name. Returns `None` for unknown names.
#[must_use]
pub fn component_theme(name: &str, seed: Lch) -> Option<ComponentTheme> {
    ComponentKind::from_name(name).map(|kind| kind.theme(seed))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
