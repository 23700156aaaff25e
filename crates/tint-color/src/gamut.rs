// SPDX-License-Identifier: MIT
//
// Gamut clipping — bring OKLCH colors back inside the 8-bit sRGB cube.
//
// A valid OKLCH request can still describe a color no display can show
// (high chroma at extreme lightness, or vivid cyans). That is an expected
// runtime condition, not a caller bug, so it is resolved by desaturating:
// chroma steps down in fixed 0.01 increments until every channel lands
// inside [0, 255] or chroma reaches zero. Hue and lightness never move.
//
// The loop is bounded by `c / CHROMA_STEP` iterations (50 for the schema
// maximum of 0.5) and cannot fail: a zero-chroma gray with lightness in
// [0, 1] is always displayable.

use tracing::debug;

use crate::color::Lch;

/// Chroma decrement per clipping iteration.
pub const CHROMA_STEP: f64 = 0.01;

/// Whether `color` quantizes into the 8-bit sRGB cube without clamping.
///
/// Each unclamped gamma-encoded channel, scaled to 0–255 and rounded to the
/// nearest integer, must lie in [0, 255].
#[must_use]
pub fn in_gamut(color: Lch) -> bool {
    let (r, g, b) = color.to_srgb_unclamped();
    channel_in_range(r) && channel_in_range(g) && channel_in_range(b)
}

#[inline]
fn channel_in_range(v: f64) -> bool {
    let scaled = v * 255.0;
    (-0.5..255.5).contains(&scaled)
}

/// Reduce chroma until `color` fits in the sRGB cube.
///
/// Returns the input unchanged when it is already displayable. Otherwise
/// chroma becomes `max(0, c - n * CHROMA_STEP)` for the smallest `n` that
/// lands in gamut. Never fails and always terminates.
#[must_use]
pub fn clip_to_gamut(color: Lch) -> Lch {
    if in_gamut(color) {
        return color;
    }

    let mut clipped = color;
    let mut n = 0u32;
    while clipped.c > 0.0 {
        n += 1;
        let c = f64::from(n).mul_add(-CHROMA_STEP, color.c).max(0.0);
        clipped = Lch { c, ..color };
        if in_gamut(clipped) {
            break;
        }
    }

    debug!(
        from = color.c,
        to = clipped.c,
        steps = n,
        "gamut clip at l={:.3} h={:.0}",
        color.l,
        color.h
    );
    clipped
}

impl Lch {
    /// Whether this color is displayable in 8-bit sRGB. See [`in_gamut`].
    #[inline]
    #[must_use]
    pub fn in_gamut(self) -> bool {
        in_gamut(self)
    }

    /// Desaturate into the sRGB cube. See [`clip_to_gamut`].
    #[inline]
    #[must_use]
    pub fn clip_to_gamut(self) -> Self {
        clip_to_gamut(self)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
