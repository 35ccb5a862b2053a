#![forbid(unsafe_code)]

//! WCAG relative luminance and contrast-ratio arithmetic.
//!
//! The transfer function, channel weights, and the 0.05 contrast offset are
//! normative values from the WCAG 2.0 relative-luminance definition; the two
//! solvers are closed-form inversions of the contrast formula, not searches.

use crate::rgb::Rgb;

/// Offset added to both luminances in the contrast formula (WCAG 2.0).
pub const CONTRAST_OFFSET: f64 = 0.05;

/// Below this encoded value the sRGB transfer function is linear.
const SRGB_LINEAR_THRESHOLD: f64 = 0.03928;

/// BT.709 channel weights as adopted by WCAG.
const WEIGHT_R: f64 = 0.2126;
const WEIGHT_G: f64 = 0.7152;
const WEIGHT_B: f64 = 0.0722;

/// Remove sRGB gamma encoding from one channel intensity.
///
/// Both branches and the threshold are normative; contrast results are only
/// correct to WCAG precision if they match exactly.
///
/// # Panics
/// Panics when `c` is outside [0,1] — a contract violation by the caller,
/// not a recoverable condition.
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    assert!(
        (0.0..=1.0).contains(&c),
        "sRGB channel intensity out of range: {c}"
    );
    if c <= SRGB_LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, in [0,1].
#[must_use]
pub fn luminance(color: Rgb) -> f64 {
    let [r, g, b] = color.channels();
    WEIGHT_R * srgb_to_linear(r) + WEIGHT_G * srgb_to_linear(g) + WEIGHT_B * srgb_to_linear(b)
}

/// Either a precomputed luminance or a color whose luminance is still needed.
///
/// Contrast-level operations accept both, so callers that already hold a
/// luminance scalar never pay for a second conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LumaSource {
    /// A luminance value, trusted to be meaningful (normally in [0,1]).
    Value(f64),
    /// A color; luminance is computed on resolution.
    Color(Rgb),
}

impl LumaSource {
    /// Resolve to a luminance scalar.
    #[must_use]
    pub fn resolve(self) -> f64 {
        match self {
            Self::Value(l) => l,
            Self::Color(color) => luminance(color),
        }
    }
}

impl From<f64> for LumaSource {
    fn from(l: f64) -> Self {
        Self::Value(l)
    }
}

impl From<Rgb> for LumaSource {
    fn from(color: Rgb) -> Self {
        Self::Color(color)
    }
}

/// WCAG contrast ratio between two colors or luminances, in [1,21].
///
/// Order-independent: the lighter luminance always lands in the numerator.
/// Luminances outside [0,1] are not validated here.
#[must_use]
pub fn contrast(a: impl Into<LumaSource>, b: impl Into<LumaSource>) -> f64 {
    let la = a.into().resolve();
    let lb = b.into().resolve();
    let lighter = la.max(lb);
    let darker = la.min(lb);
    (lighter + CONTRAST_OFFSET) / (darker + CONTRAST_OFFSET)
}

/// The luminance with equal contrast to both references.
///
/// Solving `(l + a)/(ld + a) = (lb + a)/(l + a)` for `l` and discarding the
/// negative root gives `sqrt(a² + lb·a + ld·a + lb·ld) − a`. The result
/// always lies between the two reference luminances.
#[must_use]
pub fn neutral_luminance(a: impl Into<LumaSource>, b: impl Into<LumaSource>) -> f64 {
    let la = a.into().resolve();
    let lb = b.into().resolve();
    let dark = la.min(lb);
    let bright = la.max(lb);
    let offset = CONTRAST_OFFSET;
    (offset * offset + bright * offset + dark * offset + bright * dark).sqrt() - offset
}

/// The luminance achieving contrast `ratio` against `reference`, assuming the
/// target is **lighter** than the reference.
///
/// For a darker target use [`desired_luminance_darker`]. The result is not
/// clamped; for large ratios against a bright reference it can exceed 1.0,
/// and callers must decide whether such a target is representable.
#[must_use]
pub fn desired_luminance(ratio: f64, reference: impl Into<LumaSource>) -> f64 {
    ratio * (reference.into().resolve() + CONTRAST_OFFSET) - CONTRAST_OFFSET
}

/// The luminance achieving contrast `ratio` against `reference`, assuming the
/// target is **darker** than the reference.
///
/// Inverse formulation of [`desired_luminance`]; equally unclamped (the
/// result drops below 0.0 once `ratio` exceeds the reference's contrast
/// against black).
#[must_use]
pub fn desired_luminance_darker(ratio: f64, reference: impl Into<LumaSource>) -> f64 {
    (reference.into().resolve() + CONTRAST_OFFSET) / ratio - CONTRAST_OFFSET
}
