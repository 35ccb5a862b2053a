#![forbid(unsafe_code)]

//! WCAG color math: relative luminance and contrast ratios for sRGB colors.
//!
//! # Role in Lumo
//! `lumo-color` is the numeric core. It owns the sRGB transfer function, the
//! relative-luminance weighting, and the contrast-ratio formula, plus the two
//! closed-form solvers derived from them. Everything here is a pure function
//! of its inputs; presentation (tables, HTML, JSON) lives in `lumo-cli`.
//!
//! # Primary responsibilities
//! - **Rgb**: opaque 24-bit color value with `#RRGGBB` parsing.
//! - **Metrics**: `srgb_to_linear`, `luminance`, `contrast`, and the
//!   neutral/desired luminance solvers.
//! - **Report**: structured per-color analysis against a set of backgrounds.

pub mod metrics;
pub mod report;
pub mod rgb;

pub use metrics::{
    CONTRAST_OFFSET, LumaSource, contrast, desired_luminance, desired_luminance_darker,
    luminance, neutral_luminance, srgb_to_linear,
};
pub use report::{ColorEntry, ColorReport, analyze};
pub use rgb::{ParseColorError, Rgb};
