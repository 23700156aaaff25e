//! WCAG 2.x contrast computation and compliance checks.
//!
//! Luminance and contrast are defined on 8-bit sRGB:
//!
//! - relative luminance: linearize each channel (piecewise sRGB transfer),
//!   then `L = 0.2126 R + 0.7152 G + 0.0722 B`
//! - contrast ratio: `(L_lighter + 0.05) / (L_darker + 0.05)`, in [1, 21]
//!
//! | level | normal text | large text |
//! |-------|-------------|------------|
//! | AA    | 4.5         | 3.0        |
//! | AAA   | 7.0         | 4.5        |
//!
//! A ratio exactly at the threshold passes. Failing a check is a normal
//! result carried in [`AccessibilityCheck::passed`], never an error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tint_color::color::srgb_to_linear;
use tint_color::{Lch, Rgb};

use crate::error::TokenError;

/// Lightness increment used by [`suggest_adjustment`].
pub const ADJUSTMENT_STEP: f64 = 0.1;

// ---------------------------------------------------------------------------
// Levels
// ---------------------------------------------------------------------------

/// WCAG conformance level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum WcagLevel {
    #[default]
    AA,
    AAA,
}

impl WcagLevel {
    /// Minimum contrast ratio for this level and text size.
    #[must_use]
    pub const fn threshold(self, size: TextSize) -> f64 {
        match (self, size) {
            (Self::AA, TextSize::Normal) | (Self::AAA, TextSize::Large) => 4.5,
            (Self::AA, TextSize::Large) => 3.0,
            (Self::AAA, TextSize::Normal) => 7.0,
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AA => "AA",
            Self::AAA => "AAA",
        })
    }
}

impl FromStr for WcagLevel {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AA" => Ok(Self::AA),
            "AAA" => Ok(Self::AAA),
            _ => Err(TokenError::InvalidLevel(s.to_string())),
        }
    }
}

/// Text size class. WCAG "large" is ≥ 18pt, or ≥ 14pt bold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

impl From<bool> for TextSize {
    /// `true` means large text.
    fn from(is_large: bool) -> Self {
        if is_large { Self::Large } else { Self::Normal }
    }
}

// ---------------------------------------------------------------------------
// AccessibilityCheck
// ---------------------------------------------------------------------------

/// Outcome of a WCAG contrast check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityCheck {
    /// Contrast ratio in [1, 21].
    pub contrast_ratio: f64,
    pub wcag_level: WcagLevel,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Rgb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Rgb>,
}

// ---------------------------------------------------------------------------
// Luminance and contrast
// ---------------------------------------------------------------------------

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_srgb();
    let r_lin = srgb_to_linear(r);
    let g_lin = srgb_to_linear(g);
    let b_lin = srgb_to_linear(b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// The result is in [1.0, 21.0] and independent of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let lighter = la.max(lb);
    let darker = la.min(lb);
    (lighter + 0.05) / (darker + 0.05)
}

/// Classify a contrast ratio against a WCAG level.
///
/// `passed` is `ratio >= threshold`.
#[must_use]
pub fn check_compliance(ratio: f64, level: WcagLevel, size: TextSize) -> AccessibilityCheck {
    AccessibilityCheck {
        contrast_ratio: ratio,
        wcag_level: level,
        passed: ratio >= level.threshold(size),
        foreground: None,
        background: None,
    }
}

/// Check a foreground/background pair, echoing both colors in the result.
#[must_use]
pub fn validate_pair(fg: Rgb, bg: Rgb, level: WcagLevel, size: TextSize) -> AccessibilityCheck {
    AccessibilityCheck {
        foreground: Some(fg),
        background: Some(bg),
        ..check_compliance(contrast_ratio(fg, bg), level, size)
    }
}

/// Suggest a new OKLCH lightness that moves a failing pair apart.
///
/// Returns `None` when the pair already passes `level` for normal text.
/// Otherwise picks whichever of `fg`/`bg` has more room before its nearest
/// extreme (0 or 1) and moves it [`ADJUSTMENT_STEP`] away from the other
/// color: the lighter one lightens, the darker one darkens. The result is
/// clamped to [0, 1].
///
/// This is a best-effort hint. A single step does not guarantee the
/// adjusted pair will pass; callers may apply it repeatedly.
#[must_use]
pub fn suggest_adjustment(fg: Rgb, bg: Rgb, level: WcagLevel) -> Option<f64> {
    if validate_pair(fg, bg, level, TextSize::Normal).passed {
        return None;
    }

    let fg_l = Lch::from(fg).l;
    let bg_l = Lch::from(bg).l;
    let room = |l: f64| l.min(1.0 - l);

    let (subject, other) = if room(fg_l) >= room(bg_l) {
        (fg_l, bg_l)
    } else {
        (bg_l, fg_l)
    };

    let target = if subject >= other {
        subject + ADJUSTMENT_STEP
    } else {
        subject - ADJUSTMENT_STEP
    };
    Some(target.clamp(0.0, 1.0))
}

/// Find a lightness at which `color` meets `level` (normal text) on `bg`.
///
/// Returns `color` unchanged when it already passes. Otherwise bisects
/// OKLCH lightness between the original and black or white, whichever
/// contrasts more with `bg`, for `max_iterations` rounds and keeps the
/// passing lightness closest to the original. Chroma and hue are kept;
/// contrast is measured on the 8-bit color. `None` when even the extreme
/// fails, e.g. AAA on a mid-gray background.
#[must_use]
pub fn auto_adjust_contrast(color: Lch, bg: Rgb, level: WcagLevel, max_iterations: u32) -> Option<Lch> {
    let threshold = level.threshold(TextSize::Normal);
    let passes = |l: f64| contrast_ratio(color.with_lightness(l).to_rgb(), bg) >= threshold;

    if passes(color.l) {
        return Some(color);
    }

    let extreme = if contrast_ratio(Rgb::BLACK, bg) >= contrast_ratio(Rgb::WHITE, bg) { 0.0 } else { 1.0 };
    if !passes(extreme) {
        return None;
    }

    // `best` always passes, `near` never does.
    let (mut best, mut near) = (extreme, color.l);
    for _ in 0..max_iterations {
        let mid = (best + near) * 0.5;
        if passes(mid) {
            best = mid;
        } else {
            near = mid;
        }
    }
    Some(color.with_lightness(best))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn hex(s: &str) -> Rgb {
        Rgb::from_hex(s).unwrap()
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance(Rgb::BLACK);
        assert!(approx_eq(lum, 0.0, 1e-9), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Rgb::WHITE);
        assert!(approx_eq(lum, 1.0, 1e-9), "White luminance: {lum}");
    }

    #[test]
    fn luminance_primaries_match_coefficients() {
        assert!(approx_eq(relative_luminance(Rgb::new(255, 0, 0)), 0.2126, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 255, 0)), 0.7152, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 0, 255)), 0.0722, 1e-9));
    }

    #[test]
    fn luminance_linear_segment() {
        // 10/255 ≈ 0.0392 is below the 0.04045 breakpoint.
        let lum = relative_luminance(Rgb::new(10, 10, 10));
        assert!(approx_eq(lum, 10.0 / 255.0 / 12.92, 1e-12));
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        for c in [Rgb::BLACK, Rgb::WHITE, hex("#3b82f6")] {
            assert!(approx_eq(contrast_ratio(c, c), 1.0, 1e-12));
        }
    }

    #[test]
    fn contrast_is_symmetric() {
        let pairs = [
            (hex("#cc3344"), hex("#1a1a66")),
            (hex("#ffffff"), hex("#767676")),
            (hex("#00ff00"), hex("#ff00ff")),
        ];
        for (a, b) in pairs {
            assert_eq!(contrast_ratio(a, b).to_bits(), contrast_ratio(b, a).to_bits());
        }
    }

    #[test]
    fn contrast_known_values() {
        assert!(approx_eq(contrast_ratio(hex("#767676"), Rgb::WHITE), 4.54, 0.01));
        assert!(approx_eq(contrast_ratio(hex("#ff0000"), Rgb::WHITE), 3.99, 0.01));
        assert!(approx_eq(contrast_ratio(hex("#1e293b"), Rgb::WHITE), 14.62, 0.05));
    }

    // ── Compliance ──────────────────────────────────────────────────

    #[test]
    fn compliance_boundary_passes() {
        assert!(check_compliance(4.5, WcagLevel::AA, TextSize::Normal).passed);
        assert!(!check_compliance(4.499, WcagLevel::AA, TextSize::Normal).passed);
    }

    #[test]
    fn compliance_thresholds() {
        assert!(check_compliance(3.0, WcagLevel::AA, TextSize::Large).passed);
        assert!(!check_compliance(2.99, WcagLevel::AA, TextSize::Large).passed);
        assert!(check_compliance(7.0, WcagLevel::AAA, TextSize::Normal).passed);
        assert!(!check_compliance(6.99, WcagLevel::AAA, TextSize::Normal).passed);
        assert!(check_compliance(4.5, WcagLevel::AAA, TextSize::Large).passed);
    }

    #[test]
    fn validate_pair_echoes_colors() {
        let fg = hex("#111111");
        let bg = Rgb::WHITE;
        let check = validate_pair(fg, bg, WcagLevel::AAA, TextSize::Normal);
        assert_eq!(check.foreground, Some(fg));
        assert_eq!(check.background, Some(bg));
        assert_eq!(check.wcag_level, WcagLevel::AAA);
        assert!(check.passed);
        assert!(check.contrast_ratio > 18.0);
    }

    #[test]
    fn level_parsing() {
        assert_eq!("aa".parse::<WcagLevel>().unwrap(), WcagLevel::AA);
        assert_eq!("AAA".parse::<WcagLevel>().unwrap(), WcagLevel::AAA);
        assert!("A".parse::<WcagLevel>().is_err());
    }

    #[test]
    fn check_serializes_camel_case() {
        let check = check_compliance(5.0, WcagLevel::AA, TextSize::Normal);
        let json = serde_json::to_string(&check).unwrap();
        assert!(json.contains("\"contrastRatio\":5.0"));
        assert!(json.contains("\"wcagLevel\":\"AA\""));
        assert!(!json.contains("foreground"));
    }

    // ── suggest_adjustment ──────────────────────────────────────────

    #[test]
    fn suggestion_none_when_compliant() {
        assert_eq!(suggest_adjustment(Rgb::BLACK, Rgb::WHITE, WcagLevel::AAA), None);
    }

    #[test]
    fn suggestion_darkens_darker_color() {
        // Mid gray on white: fg has more room, and is the darker one.
        let fg = hex("#999999");
        let fg_l = Lch::from(fg).l;
        let target = suggest_adjustment(fg, Rgb::WHITE, WcagLevel::AA).unwrap();
        assert!(approx_eq(target, fg_l - ADJUSTMENT_STEP, 1e-9));
    }

    #[test]
    fn suggestion_lightens_lighter_color() {
        // Mid gray on black: fg is the lighter one, moves toward white.
        let fg = hex("#444444");
        let fg_l = Lch::from(fg).l;
        let target = suggest_adjustment(fg, Rgb::BLACK, WcagLevel::AA).unwrap();
        assert!(approx_eq(target, fg_l + ADJUSTMENT_STEP, 1e-9));
    }

    #[test]
    fn suggestion_targets_background_when_it_has_more_room() {
        // Near-white fg on a mid-gray bg: bg has more room and darkens.
        let fg = hex("#f5f5f5");
        let bg = hex("#aaaaaa");
        let bg_l = Lch::from(bg).l;
        let target = suggest_adjustment(fg, bg, WcagLevel::AA).unwrap();
        assert!(approx_eq(target, bg_l - ADJUSTMENT_STEP, 1e-9));
    }

    // ── auto_adjust_contrast ────────────────────────────────────────

    #[test]
    fn auto_adjust_keeps_compliant_color() {
        let color = Lch::new(0.2, 0.1, 220.0);
        assert_eq!(auto_adjust_contrast(color, Rgb::WHITE, WcagLevel::AA, 20), Some(color));
    }

    #[test]
    fn auto_adjust_darkens_on_light_background() {
        let color = Lch::new(0.7, 0.15, 220.0);
        let adjusted = auto_adjust_contrast(color, Rgb::WHITE, WcagLevel::AA, 20).unwrap();
        assert!(adjusted.l < color.l, "should darken: {adjusted:?}");
        assert!(adjusted.l > 0.4, "should stay near the threshold: {adjusted:?}");
        assert_eq!(adjusted.c.to_bits(), color.c.to_bits());
        assert_eq!(adjusted.h.to_bits(), color.h.to_bits());
        assert!(contrast_ratio(adjusted.to_rgb(), Rgb::WHITE) >= 4.5);
    }

    #[test]
    fn auto_adjust_lightens_on_dark_background() {
        let color = Lch::new(0.3, 0.1, 120.0);
        let adjusted = auto_adjust_contrast(color, Rgb::BLACK, WcagLevel::AA, 20).unwrap();
        assert!(adjusted.l > color.l, "should lighten: {adjusted:?}");
        assert!(contrast_ratio(adjusted.to_rgb(), Rgb::BLACK) >= 4.5);
    }

    #[test]
    fn auto_adjust_reaches_aaa() {
        let color = Lch::gray(0.8);
        let adjusted = auto_adjust_contrast(color, Rgb::WHITE, WcagLevel::AAA, 32).unwrap();
        assert!(contrast_ratio(adjusted.to_rgb(), Rgb::WHITE) >= 7.0);
        // A little lighter no longer passes.
        assert!(contrast_ratio(adjusted.lighten(0.01).to_rgb(), Rgb::WHITE) < 7.0);
    }

    #[test]
    fn auto_adjust_impossible_pair() {
        // #777777 reaches at most ~4.7:1 against either extreme.
        let bg = hex("#777777");
        assert_eq!(auto_adjust_contrast(Lch::gray(0.6), bg, WcagLevel::AAA, 20), None);
        assert!(auto_adjust_contrast(Lch::gray(0.6), bg, WcagLevel::AA, 20).is_some());
    }

    #[test]
    fn suggestion_is_clamped() {
        let target = suggest_adjustment(hex("#fefefe"), Rgb::WHITE, WcagLevel::AA).unwrap();
        assert!((0.0..=1.0).contains(&target));
    }
}
