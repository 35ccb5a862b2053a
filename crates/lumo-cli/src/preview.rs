#![forbid(unsafe_code)]

//! HTML preview of analyzed colors over each background.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use lumo_color::Rgb;
use tracing::debug;

/// Colors worth previewing: every analyzed color that is not itself one of
/// the backgrounds (a white block on the white swatch shows nothing).
#[must_use]
pub fn preview_colors(colors: &[Rgb], backgrounds: &[Rgb]) -> Vec<Rgb> {
    colors
        .iter()
        .copied()
        .filter(|color| !backgrounds.contains(color))
        .collect()
}

/// Build the preview document: one block per background, each containing a
/// labeled swatch per color.
#[must_use]
pub fn build_preview(colors: &[Rgb], backgrounds: &[Rgb]) -> String {
    let mut html = String::new();
    html.push_str(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <title>Color Preview</title>\n\
         <style>\n\
         body { background: #c0c0c0; font-family: monospace; line-height: 1.5em }\n\
         body > div { margin: 1em; padding: 1em; max-width: 15em }\n\
         div > div { margin: 1em; text-align: center }\n\
         </style>\n\
         </head>\n\
         <body>\n",
    );

    for bg in backgrounds {
        html.push('\n');
        let _ = writeln!(html, "<div style=\"background: {bg}\">");
        for color in colors {
            let _ = writeln!(html, "  <div style=\"background: {color}\">{color}</div>");
        }
        html.push_str("</div>\n");
    }

    html.push_str("\n</body>\n</html>\n");
    html
}

/// Write the preview document to `path`.
///
/// # Errors
/// Propagates filesystem errors.
pub fn write_preview(
    path: impl AsRef<Path>,
    colors: &[Rgb],
    backgrounds: &[Rgb],
) -> io::Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), colors = colors.len(), "writing preview");
    fs::write(path, build_preview(colors, backgrounds))
}
