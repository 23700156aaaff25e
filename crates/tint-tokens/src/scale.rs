//! Lightness scales — an 11-step tonal ramp from one seed color.
//!
//! Steps follow the familiar 50…950 convention. Lightness comes from a
//! hand-tuned table above the seed and from seed-relative ratios below it:
//!
//! ```text
//!  50  100  200  300  400 | 500  | 600      700      800      900      950
//! .98  .95  .88  .78  .65 | seed | ×.85≥.35 ×.70≥.25 ×.55≥.15 ×.40≥.10 ×.25≥.05
//! ```
//!
//! Light steps never drop below the seed and dark steps never rise above
//! it, so lightness is non-increasing from 50 to 950 for every seed. Step
//! 500 is the seed itself.
//!
//! Chroma rolls off at the extremes: halved above lightness 0.9, cut by
//! 30% below 0.2. Hue is the seed's on every step.

use std::fmt;
use std::ops::Index;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tint_color::{Lch, MAX_CHROMA};
use tracing::trace;

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

/// One of the eleven scale positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Step {
    /// All steps, lightest first.
    pub const ALL: [Self; 11] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
        Self::S950,
    ];

    /// Numeric key (`50`, `100`, … `950`).
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
            Self::S950 => 950,
        }
    }

    /// Look up a step by its numeric key.
    #[must_use]
    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }

    const fn index(self) -> usize {
        self as usize
    }

    /// Target lightness for this step given the seed lightness.
    fn lightness(self, seed_l: f64) -> f64 {
        let light = |table: f64| table.max(seed_l);
        let dark = |ratio: f64, floor: f64| (seed_l * ratio).max(floor).min(seed_l);
        match self {
            Self::S50 => light(0.98),
            Self::S100 => light(0.95),
            Self::S200 => light(0.88),
            Self::S300 => light(0.78),
            Self::S400 => light(0.65),
            Self::S500 => seed_l,
            Self::S600 => dark(0.85, 0.35),
            Self::S700 => dark(0.70, 0.25),
            Self::S800 => dark(0.55, 0.15),
            Self::S900 => dark(0.40, 0.10),
            Self::S950 => dark(0.25, 0.05),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ---------------------------------------------------------------------------
// ColorScale
// ---------------------------------------------------------------------------

/// An 11-step tonal ramp. Always complete: every [`Step`] has a color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScale {
    steps: [Lch; 11],
}

impl ColorScale {
    /// Color at `step`.
    #[must_use]
    pub const fn get(&self, step: Step) -> Lch {
        self.steps[step.index()]
    }

    /// `(step, color)` pairs, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (Step, Lch)> + '_ {
        Step::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    /// Apply `f` to every step, producing a new scale.
    #[must_use]
    pub fn map(&self, f: impl Fn(Lch) -> Lch) -> Self {
        Self { steps: self.steps.map(f) }
    }
}

impl Index<Step> for ColorScale {
    type Output = Lch;

    fn index(&self, step: Step) -> &Lch {
        &self.steps[step.index()]
    }
}

impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.steps.len()))?;
        for (step, color) in self.iter() {
            map.serialize_entry(&step.to_string(), &color)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Derive the 11-step scale for `seed`.
///
/// Every output is clamped to lightness [0, 1] and chroma [0, 0.5].
#[must_use]
pub fn generate_scale(seed: Lch) -> ColorScale {
    let seed_l = seed.l.clamp(0.0, 1.0);
    let seed_c = seed.c.clamp(0.0, MAX_CHROMA);

    let steps = Step::ALL.map(|step| {
        let l = step.lightness(seed_l).clamp(0.0, 1.0);
        let c = if step == Step::S500 {
            seed_c
        } else if l > 0.9 {
            seed_c * 0.5
        } else if l < 0.2 {
            seed_c * 0.7
        } else {
            seed_c
        };
        Lch { l, c: c.clamp(0.0, MAX_CHROMA), h: seed.h }
    });

    trace!(?seed, "generated scale");
    ColorScale { steps }
}

/// Derive a scale for every entry of a named palette.
#[must_use]
pub fn generate_scales(palette: &IndexMap<String, Lch>) -> IndexMap<String, ColorScale> {
    palette
        .iter()
        .map(|(name, &seed)| (name.clone(), generate_scale(seed)))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
