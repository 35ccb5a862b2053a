#![forbid(unsafe_code)]

//! Argument parsing and console output for the `lumo-colors` tool.

use std::env;
use std::io;
use std::process;

use lumo_color::{ColorReport, Rgb, analyze};
use tracing::debug;

use crate::preview;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
lumo-colors — WCAG luminance and contrast analysis for sRGB colors

USAGE:
    lumo-colors [OPTIONS] [#RRGGBB ...]

With no colors given, analyzes the default brand set:
    #ffffff #ec0304 #028902 #166bff #000000

Each color is reported with its relative luminance and its contrast ratio
against a white and a black background, preceded by the neutral luminance
(the luminance with equal contrast to both backgrounds).

OPTIONS:
    --out=PATH     HTML preview filename (default: color-preview.html)
    --no-preview   Skip writing the HTML preview
    --json         Emit the report as JSON on stdout instead of the table
    --help, -h     Show this help message
    --version, -V  Show version

ENVIRONMENT VARIABLES:
    LUMO_COLORS_OUT          Override --out
    LUMO_COLORS_NO_PREVIEW   Skip the preview (1/true)
    LUMO_COLORS_JSON         JSON output (1/true)
    LUMO_LOG                 Tracing filter for diagnostics on stderr";

/// Colors analyzed when none are given on the command line.
pub const DEFAULT_COLORS: [Rgb; 5] = [
    Rgb::WHITE,
    Rgb::new(0xec, 0x03, 0x04),
    Rgb::new(0x02, 0x89, 0x02),
    Rgb::new(0x16, 0x6b, 0xff),
    Rgb::BLACK,
];

/// Backgrounds every color is contrasted against, lightest first.
pub const BACKGROUNDS: [Rgb; 2] = [Rgb::WHITE, Rgb::BLACK];

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    /// Colors to analyze.
    pub colors: Vec<Rgb>,
    /// HTML preview filename.
    pub out: String,
    /// Write the HTML preview at all.
    pub preview: bool,
    /// Emit JSON instead of the console table.
    pub json: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
            out: "color-preview.html".into(),
            preview: true,
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Help,
    Version,
    InvalidColor { arg: String, reason: String },
    UnknownFlag(String),
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables override defaults; explicit flags override both.
    /// Prints help/version or a usage error and exits as appropriate.
    #[must_use]
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(ParseError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(ParseError::Version) => {
                println!("lumo-colors {VERSION}");
                process::exit(0);
            }
            Err(ParseError::InvalidColor { arg, reason }) => {
                eprintln!("Invalid color {arg}: {reason}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
            Err(ParseError::UnknownFlag(flag)) => {
                eprintln!("Unknown argument: {flag}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(val) = get_env("LUMO_COLORS_OUT")
            && !val.trim().is_empty()
        {
            opts.out = val;
        }
        if let Some(val) = get_env("LUMO_COLORS_NO_PREVIEW") {
            let enabled = val == "1" || val.eq_ignore_ascii_case("true");
            opts.preview = !enabled;
        }
        if let Some(val) = get_env("LUMO_COLORS_JSON") {
            let enabled = val == "1" || val.eq_ignore_ascii_case("true");
            opts.json = enabled;
        }

        let mut explicit_colors = Vec::new();
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => return Err(ParseError::Help),
                "--version" | "-V" => return Err(ParseError::Version),
                "--no-preview" => opts.preview = false,
                "--json" => opts.json = true,
                other => {
                    if let Some(val) = other.strip_prefix("--out=") {
                        opts.out = val.to_string();
                    } else if other.starts_with("--") {
                        return Err(ParseError::UnknownFlag(other.to_string()));
                    } else {
                        let color = Rgb::parse_hex(other).map_err(|e| {
                            ParseError::InvalidColor {
                                arg: other.to_string(),
                                reason: e.to_string(),
                            }
                        })?;
                        explicit_colors.push(color);
                    }
                }
            }
        }
        if !explicit_colors.is_empty() {
            opts.colors = explicit_colors;
        }

        Ok(opts)
    }
}

/// Format the report the way the console tool prints it.
#[must_use]
pub fn format_console_report(report: &ColorReport) -> String {
    let mut out = String::new();
    if let Some(neutral) = report.neutral_luminance {
        out.push_str(&format!("Neutral luminance: {neutral}\n\n"));
    }
    for entry in &report.entries {
        out.push_str(&format!("{}: lum: {:.4}", entry.color, entry.luminance));
        for (ratio, bg) in entry.contrast.iter().zip(&report.backgrounds) {
            out.push_str(&format!("; vs {bg}: {ratio:5.2}"));
        }
        out.push('\n');
    }
    out
}

/// Analyze, print, and (unless disabled) write the HTML preview.
///
/// # Errors
/// Propagates I/O failures from writing the preview file.
pub fn run(opts: &Opts) -> io::Result<()> {
    debug!(colors = opts.colors.len(), json = opts.json, "analyzing colors");
    let report = analyze(&opts.colors, &BACKGROUNDS);

    if opts.json {
        // Serialization of these plain data types cannot fail.
        let json = serde_json::to_string_pretty(&report).expect("report serializes");
        println!("{json}");
        return Ok(());
    }

    print!("{}", format_console_report(&report));

    if opts.preview {
        let shown = preview::preview_colors(&opts.colors, &BACKGROUNDS);
        preview::write_preview(&opts.out, &shown, &BACKGROUNDS)?;
        println!();
        println!("Preview written to: {}", opts.out);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_with_env<I, S>(
        args: I,
        env_pairs: &[(&'static str, &'static str)],
    ) -> Result<Opts, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = std::collections::HashMap::new();
        for (key, value) in env_pairs {
            map.insert(*key, *value);
        }
        Opts::parse_from_env_and_args(args, |key| map.get(key).map(|value| (*value).to_string()))
    }

    // --- parsing tests ---

    #[test]
    fn default_opts() {
        let opts = parse_with_env(Vec::<String>::new(), &[]).expect("parse");
        assert_eq!(opts.colors, DEFAULT_COLORS.to_vec());
        assert_eq!(opts.out, "color-preview.html");
        assert!(opts.preview);
        assert!(!opts.json);
    }

    #[test]
    fn positional_colors_replace_defaults() {
        let opts = parse_with_env(["#ec0304", "#166BFF"], &[]).expect("parse");
        assert_eq!(
            opts.colors,
            vec![Rgb::new(0xec, 0x03, 0x04), Rgb::new(0x16, 0x6b, 0xff)]
        );
    }

    #[test]
    fn invalid_color_is_reported_with_the_argument() {
        let err = parse_with_env(["#nothex"], &[]);
        assert!(
            matches!(err, Err(ParseError::InvalidColor { ref arg, .. }) if arg == "#nothex"),
            "expected InvalidColor for #nothex, got {err:?}"
        );
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = parse_with_env(["--mystery"], &[]);
        assert!(matches!(err, Err(ParseError::UnknownFlag(ref f)) if f == "--mystery"));
    }

    #[test]
    fn help_and_version() {
        assert_eq!(parse_with_env(["--help"], &[]), Err(ParseError::Help));
        assert_eq!(parse_with_env(["-V"], &[]), Err(ParseError::Version));
    }

    #[test]
    fn out_flag_sets_filename() {
        let opts = parse_with_env(["--out=swatches.html"], &[]).expect("parse");
        assert_eq!(opts.out, "swatches.html");
    }

    #[test]
    fn env_overrides_apply() {
        let env = [
            ("LUMO_COLORS_OUT", "env.html"),
            ("LUMO_COLORS_NO_PREVIEW", "1"),
            ("LUMO_COLORS_JSON", "true"),
        ];
        let opts = parse_with_env(Vec::<String>::new(), &env).expect("parse");
        assert_eq!(opts.out, "env.html");
        assert!(!opts.preview);
        assert!(opts.json);
    }

    #[test]
    fn flags_override_env() {
        let opts = parse_with_env(["--out=cli.html"], &[("LUMO_COLORS_OUT", "env.html")])
            .expect("parse");
        assert_eq!(opts.out, "cli.html");
    }

    // --- formatting tests ---

    #[test]
    fn console_report_lists_every_color() {
        let report = analyze(&DEFAULT_COLORS, &BACKGROUNDS);
        let text = format_console_report(&report);
        for color in DEFAULT_COLORS {
            assert!(text.contains(&color.to_string()), "missing {color}");
        }
        assert!(text.starts_with("Neutral luminance: 0.179"));
    }

    #[test]
    fn console_report_formats_extremes() {
        let report = analyze(&[Rgb::WHITE], &BACKGROUNDS);
        let text = format_console_report(&report);
        assert!(text.contains("#ffffff: lum: 1.0000"));
        assert!(text.contains("vs #ffffff:  1.00"));
        assert!(text.contains("vs #000000: 21.00"));
    }
}
