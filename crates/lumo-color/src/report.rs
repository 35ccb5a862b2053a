#![forbid(unsafe_code)]

//! Structured color analysis: luminance plus contrast against backgrounds.
//!
//! This module only produces numbers. Rendering them as a console table,
//! HTML preview, or JSON document is the caller's concern.

use crate::metrics::{contrast, luminance, neutral_luminance};
use crate::rgb::Rgb;

/// Analysis of one color against every requested background.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColorEntry {
    pub color: Rgb,
    pub luminance: f64,
    /// Contrast ratios, index-aligned with [`ColorReport::backgrounds`].
    pub contrast: Vec<f64>,
}

/// Full analysis of a color set against a background set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColorReport {
    pub backgrounds: Vec<Rgb>,
    /// Luminance with equal contrast to the lightest and darkest background,
    /// when there are at least two backgrounds.
    pub neutral_luminance: Option<f64>,
    pub entries: Vec<ColorEntry>,
}

/// Analyze `colors` against `backgrounds`.
///
/// Every (color, background) cell is an independent contrast computation;
/// nothing is cached or reused across cells.
#[must_use]
pub fn analyze(colors: &[Rgb], backgrounds: &[Rgb]) -> ColorReport {
    let entries = colors
        .iter()
        .map(|&color| ColorEntry {
            color,
            luminance: luminance(color),
            contrast: backgrounds.iter().map(|&bg| contrast(color, bg)).collect(),
        })
        .collect();

    let neutral_luminance = extremes(backgrounds).map(|(dark, bright)| {
        neutral_luminance(luminance(dark), luminance(bright))
    });

    ColorReport {
        backgrounds: backgrounds.to_vec(),
        neutral_luminance,
        entries,
    }
}

/// The darkest and brightest of at least two backgrounds, by luminance.
fn extremes(backgrounds: &[Rgb]) -> Option<(Rgb, Rgb)> {
    if backgrounds.len() < 2 {
        return None;
    }
    let mut darkest = backgrounds[0];
    let mut brightest = backgrounds[0];
    for &bg in &backgrounds[1..] {
        if luminance(bg) < luminance(darkest) {
            darkest = bg;
        }
        if luminance(bg) > luminance(brightest) {
            brightest = bg;
        }
    }
    Some((darkest, brightest))
}
