#![forbid(unsafe_code)]

//! Concentric-ring logo geometry and SVG rendering.
//!
//! # Role in Lumo
//! `lumo-rings` derives the three-ring logo geometry from an explicit
//! [`LogoConfig`] and renders it as a standalone SVG document. Geometry is
//! validated before anything is derived; an invalid radius or stroke width
//! never produces a (possibly misleading) document.
//!
//! # Primary responsibilities
//! - **LogoConfig**: named configuration with documented defaults.
//! - **RingGeometry**: outer/middle/inner radii, extent, and viewbox size.
//! - **SVG rendering**: the fixed three-circle document.

pub mod geometry;
pub mod svg;

pub use geometry::{LogoConfig, LogoError, Ring, RingBounds, RingGeometry};
pub use svg::render_svg;
