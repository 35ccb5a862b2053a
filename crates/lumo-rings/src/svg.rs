#![forbid(unsafe_code)]

//! SVG document rendering for the three-ring logo.

use std::fmt::Write as _;

use crate::geometry::{LogoConfig, LogoError, Ring};

/// Render the logo as a standalone SVG document.
///
/// The document is a square viewbox centered on the origin containing exactly
/// three unfilled circles, outermost first. The configuration is validated
/// first; nothing is emitted for an invalid one.
///
/// # Errors
/// Propagates [`LogoError`] from geometry validation.
pub fn render_svg(config: &LogoConfig) -> Result<String, LogoError> {
    let geometry = config.geometry()?;
    let extent = geometry.extent;
    let size = geometry.size();
    let stroke_width = geometry.stroke_width;

    let mut doc = String::new();
    doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n");
    let _ = writeln!(
        doc,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" \
         viewBox=\"-{extent} -{extent} {size} {size}\" \
         width=\"{size}\" height=\"{size}\">"
    );
    for (ring, color) in Ring::ALL.iter().zip(config.palette) {
        let _ = writeln!(
            doc,
            "<circle r=\"{}\" stroke=\"{color}\" stroke-width=\"{stroke_width}\" \
             fill-opacity=\"0.0\"/>",
            geometry.radius(*ring)
        );
    }
    doc.push_str("</svg>\n");
    Ok(doc)
}
