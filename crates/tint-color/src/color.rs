// SPDX-License-Identifier: MIT
//
// tint color system — OKLCH working space, 8-bit sRGB output.
//
// Channel names (l, c, h, r, g, b, a, s, m) follow the published formulas.
#![allow(clippy::many_single_char_names)]
//
// Every token, scale and semantic role is computed in OKLCH, where equal
// numerical steps produce equal visual steps. sRGB only appears at the
// edges: hex strings for exporters and 8-bit channels for WCAG arithmetic.
//
// Round trip:
//
//   OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB (gamma) ↔ 8-bit RGB / hex
//
// Values that fall outside the sRGB cube are clamped when quantized. Use
// [`crate::gamut`] to desaturate instead of clamping.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

/// Upper bound of the chroma range accepted by [`Lch::validate`].
pub const MAX_CHROMA: f64 = 0.5;

// ─── Lch ─────────────────────────────────────────────────────────────────────

/// A perceptual color in OKLCH space.
///
/// OKLCH is the cylindrical form of Björn Ottosson's Oklab. Lightness runs
/// from 0 (black) to 1 (white), chroma from 0 (gray) upward, and hue is an
/// angle in degrees.
///
/// `Lch` is an immutable value: every operation returns a new color.
///
/// # Examples
///
/// ```
/// use tint_color::Lch;
///
/// let sky = Lch::new(0.5, 0.15, 220.0);
/// let hover = sky.darken(0.05);
/// assert!(hover.l < sky.l);
///
/// // Hue is circular: out-of-range angles are normalized.
/// assert_eq!(Lch::new(0.5, 0.1, -30.0).h, 330.0);
///
/// let white = Lch::from_hex("#FFFFFF").unwrap();
/// assert_eq!(white.to_hex(), "#ffffff");
/// ```
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct Lch {
    /// Perceived lightness, 0 is black and 1 is white.
    pub l: f64,

    /// Chroma (colorfulness): 0.0 (gray) to ~0.37 for the most vivid sRGB
    /// colors. Values above that exist but cannot be displayed.
    pub c: f64,

    /// Hue angle in degrees, 0.0 to 360.0.
    /// Roughly: 30° red, 110° yellow, 150° green, 250° blue.
    pub h: f64,
}

impl Lch {
    // ─── Construction ────────────────────────────────────────────────────

    /// Create a color from OKLCH values, normalizing the hue to [0, 360).
    ///
    /// Lightness and chroma are stored as given. Use [`validate`](Self::validate)
    /// at API boundaries that must reject out-of-range input.
    #[inline]
    #[must_use]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h: normalize_hue(h) }
    }

    /// Create a pure gray at the given OKLCH lightness.
    #[inline]
    #[must_use]
    pub const fn gray(lightness: f64) -> Self {
        Self { l: lightness, c: 0.0, h: 0.0 }
    }

    /// `l = 0`, gray.
    pub const BLACK: Self = Self::gray(0.0);

    /// `l = 1`, gray.
    pub const WHITE: Self = Self::gray(1.0);

    /// Parse a hex string (`#RGB` or `#RRGGBB`, `#` optional, any case).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] if the string is not a hex color.
    pub fn from_hex(s: &str) -> Result<Self> {
        parse_hex(s)
            .map(rgb_to_lch)
            .ok_or_else(|| ColorError::InvalidHex(s.to_string()))
    }

    /// Check that the color lies inside the token schema bounds.
    ///
    /// Lightness must be in [0, 1] and chroma in [0, [`MAX_CHROMA`]]; every
    /// channel must be finite. Hue is circular, so any finite angle passes
    /// and is normalized.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::NotFinite`] or [`ColorError::OutOfRange`].
    pub fn validate(self) -> Result<Self> {
        check_channel("lightness", self.l, 0.0, 1.0)?;
        check_channel("chroma", self.c, 0.0, MAX_CHROMA)?;
        if !self.h.is_finite() {
            return Err(ColorError::NotFinite { channel: "hue" });
        }
        Ok(Self::new(self.l, self.c, self.h))
    }

    /// Chroma too small to show as a hue.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < 1e-5
    }

    // ─── Adjustments ─────────────────────────────────────────────────────

    /// `l + amount`, kept in [0, 1].
    #[inline]
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        Self { l: (self.l + amount).clamp(0.0, 1.0), ..self }
    }

    /// `l - amount`, kept in [0, 1].
    #[inline]
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        Self { l: (self.l - amount).clamp(0.0, 1.0), ..self }
    }

    /// Replace `l`, kept in [0, 1].
    #[inline]
    #[must_use]
    pub const fn with_lightness(self, l: f64) -> Self {
        Self { l: l.clamp(0.0, 1.0), ..self }
    }

    /// Multiply lightness by `factor` (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub fn scale_lightness(self, factor: f64) -> Self {
        self.with_lightness(self.l * factor)
    }

    /// Set chroma to an absolute value (clamped to 0.0–[`MAX_CHROMA`]).
    #[inline]
    #[must_use]
    pub const fn with_chroma(self, c: f64) -> Self {
        Self { c: c.clamp(0.0, MAX_CHROMA), ..self }
    }

    /// Multiply chroma by `factor` (clamped to 0.0–[`MAX_CHROMA`]).
    #[inline]
    #[must_use]
    pub fn scale_chroma(self, factor: f64) -> Self {
        self.with_chroma(self.c * factor)
    }

    /// Rotate the hue; the result wraps.
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        Self { h: normalize_hue(self.h + degrees), ..self }
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Convert to gamma-encoded sRGB floats, unclamped.
    ///
    /// Out-of-gamut colors produce components below 0.0 or above 1.0.
    #[must_use]
    pub fn to_srgb_unclamped(self) -> (f64, f64, f64) {
        oklch_to_srgb(self.l, self.c, self.h)
    }

    /// Convert to 8-bit sRGB. Channels outside the cube are clamped.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = self.to_srgb_unclamped();
        Rgb::new(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert to a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl fmt::Debug for Lch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lch({:.4}, {:.4}, {:.1})", self.l, self.c, self.h)
    }
}

impl fmt::Display for Lch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl PartialEq for Lch {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f64 = 1e-9;
        (self.l - other.l).abs() < EPS
            && (self.c - other.c).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Lch {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit-per-channel sRGB color.
///
/// The `u8` channels make the [0, 255] range a type-level guarantee.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Parse a hex string (`#RGB` or `#RRGGBB`, `#` optional, any case).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] if the string is not a hex color.
    pub fn from_hex(s: &str) -> Result<Self> {
        parse_hex(s).ok_or_else(|| ColorError::InvalidHex(s.to_string()))
    }

    /// Channels as floats in 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Convert to OKLCH.
    #[must_use]
    pub fn to_lch(self) -> Lch {
        rgb_to_lch(self)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Lch> for Rgb {
    fn from(color: Lch) -> Self {
        color.to_rgb()
    }
}

impl From<Rgb> for Lch {
    fn from(rgb: Rgb) -> Self {
        rgb.to_lch()
    }
}

// ─── Public Conversion Functions ─────────────────────────────────────────────

/// OKLCH → 8-bit sRGB, clamping out-of-gamut channels.
///
/// `l = 1, c = 0` yields exactly `(255, 255, 255)`; `l = 0, c = 0` yields
/// exactly `(0, 0, 0)`.
#[must_use]
pub fn lch_to_rgb(color: Lch) -> Rgb {
    color.to_rgb()
}

/// 8-bit sRGB → OKLCH.
///
/// Grays (`r == g == b`) come back with chroma ≈ 0; their hue is
/// meaningless and reported as 0.
#[must_use]
pub fn rgb_to_lch(rgb: Rgb) -> Lch {
    let (r, g, b) = rgb.to_srgb();
    let (l, c, h) = srgb_to_oklch(r, g, b);
    Lch { l, c, h }
}

/// OKLCH → lowercase `#rrggbb`.
#[must_use]
pub fn lch_to_hex(color: Lch) -> String {
    color.to_hex()
}

/// `#rrggbb` / `#rgb` (any case, `#` optional) → OKLCH.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] if the string is not a hex color.
pub fn hex_to_lch(s: &str) -> Result<Lch> {
    Lch::from_hex(s)
}

// ─── Oklab Math ─────────────────────────────────────────────────────────────
//
// Matrices and constants: https://bottosson.github.io/posts/oklab/

/// Wrap a hue angle into [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // -1e-17 rem 360 rounds to 360.0, and -0.0 survives rem_euclid.
    if h >= 360.0 || h == 0.0 { 0.0 } else { h }
}

/// Distance between two hues in degrees, at most 180.
#[inline]
#[must_use]
pub fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

fn check_channel(channel: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ColorError::NotFinite { channel });
    }
    if !(min..=max).contains(&value) {
        return Err(ColorError::OutOfRange { channel, value, min, max });
    }
    Ok(())
}

// ─── Polar ↔ Cartesian ──────────────────────────────────────────────────────

/// Chroma/hue to the a, b axes.
#[inline]
fn oklch_to_oklab_ab(c: f64, h: f64) -> (f64, f64) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

/// a, b axes to chroma/hue. Grays report hue 0.
#[inline]
fn oklab_ab_to_oklch(a: f64, b: f64) -> (f64, f64) {
    let c = a.hypot(b);
    let h = if c < 1e-8 {
        0.0
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };
    (c, h)
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────────────
//
// Both directions pass through cone-response (LMS) space.

/// Oklab to linear sRGB. Channels are unclamped.
#[inline]
fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    // LMS′
    let l_ = 0.215_803_757_3_f64.mul_add(b, 0.396_337_777_4_f64.mul_add(a, l_ok));
    let m_ = 0.063_854_172_8_f64.mul_add(-b, 0.105_561_345_8_f64.mul_add(-a, l_ok));
    let s_ = 1.291_485_548_0_f64.mul_add(-b, 0.089_484_177_5_f64.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 0.230_969_929_2_f64.mul_add(s, 4.076_741_662_1_f64.mul_add(l, -(3.307_711_591_3 * m)));
    let g = 0.341_319_396_5_f64.mul_add(-s, (-1.268_438_004_6_f64).mul_add(l, 2.609_757_401_1 * m));
    let bl = 1.707_614_701_0_f64.mul_add(s, (-0.004_196_086_3_f64).mul_add(l, -(0.703_418_614_7 * m)));

    (r, g, bl)
}

/// Linear sRGB to Oklab.
#[inline]
fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let l = 0.051_445_992_9_f64.mul_add(b, 0.412_221_470_8_f64.mul_add(r, 0.536_332_536_3 * g));
    let m = 0.107_396_956_6_f64.mul_add(b, 0.211_903_498_2_f64.mul_add(r, 0.680_699_545_1 * g));
    let s = 0.629_978_700_5_f64.mul_add(b, 0.088_302_461_9_f64.mul_add(r, 0.281_718_837_6 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let l_ok = 0.004_072_046_8_f64.mul_add(-s_, 0.210_454_255_3_f64.mul_add(l_, 0.793_617_785_0 * m_));
    let a = 0.450_593_709_9_f64.mul_add(s_, 1.977_998_495_1_f64.mul_add(l_, -(2.428_592_205_0 * m_)));
    let b_ok = 0.808_675_766_0_f64.mul_add(-s_, 0.025_904_037_1_f64.mul_add(l_, 0.782_771_766_2 * m_));

    (l_ok, a, b_ok)
}

// ─── Transfer Function ──────────────────────────────────────────────────────
//
// WCAG luminance is a weighted sum of linear channels, so contrast math
// calls `srgb_to_linear` directly.

/// Encode one linear channel with the sRGB curve.
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Decode one gamma-encoded channel. Breakpoint 0.04045, as in WCAG 2.x.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Whole Pipeline ─────────────────────────────────────────────────────────

/// Gamma-encoded unit channels to (l, c, h).
fn srgb_to_oklch(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let lr = srgb_to_linear(r);
    let lg = srgb_to_linear(g);
    let lb = srgb_to_linear(b);
    let (l, a, b_ok) = linear_srgb_to_oklab(lr, lg, lb);
    let (c, h) = oklab_ab_to_oklch(a, b_ok);
    (l.clamp(0.0, 1.0), c, h)
}

/// (l, c, h) to gamma-encoded channels. Out-of-gamut input leaves [0, 1].
fn oklch_to_srgb(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let (a, b) = oklch_to_oklab_ab(c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

// ─── Hex ────────────────────────────────────────────────────────────────────

/// `#rgb` or `#rrggbb`, hash optional, surrounding whitespace ignored.
fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Unit channel to byte, rounded and saturated.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
