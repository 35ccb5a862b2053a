#![forbid(unsafe_code)]

//! Argument parsing and output for the `lumo-logo` tool.

use std::env;
use std::fmt::Write as _;
use std::process;

use lumo_color::Rgb;
use lumo_rings::{LogoConfig, LogoError, Ring, RingGeometry, render_svg};
use tracing::debug;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
lumo-logo — concentric-ring SVG logo generator

USAGE:
    lumo-logo [OPTIONS] [RADIUS [WIDTH [MARGIN]]]

RADIUS must be a multiple of 3 (default: 90) and WIDTH a multiple of 2
(default: 10); MARGIN adds whitespace around the outer ring (default: 0).
The SVG document goes to stdout; ring-boundary diagnostics go to stderr.

OPTIONS:
    --ring-colors=#A,#B,#C  Ring colors, outermost first
                            (default: #ec0304,#028902,#166bff)
    --help, -h              Show this help message
    --version, -V           Show version

ENVIRONMENT VARIABLES:
    LUMO_LOGO_RADIUS   Override the radius (positionals take precedence)
    LUMO_LOGO_WIDTH    Override the stroke width
    LUMO_LOGO_MARGIN   Override the margin
    LUMO_LOG           Tracing filter for diagnostics on stderr";

/// Parsed command-line options; a validated-enough `LogoConfig` candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opts {
    pub config: LogoConfig,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            config: LogoConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Help,
    Version,
    InvalidValue { what: &'static str, value: String },
    TooManyArgs(usize),
    UnknownFlag(String),
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables override defaults; positionals and flags
    /// override both. Prints help/version or a usage error and exits as
    /// appropriate.
    #[must_use]
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(ParseError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(ParseError::Version) => {
                println!("lumo-logo {VERSION}");
                process::exit(0);
            }
            Err(ParseError::InvalidValue { what, value }) => {
                eprintln!("Invalid {what}: {value}");
                eprintln!("Usage: lumo-logo [RADIUS [WIDTH [MARGIN]]]");
                process::exit(1);
            }
            Err(ParseError::TooManyArgs(count)) => {
                eprintln!("Expected at most 3 positional arguments, got {count}");
                eprintln!("Usage: lumo-logo [RADIUS [WIDTH [MARGIN]]]");
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
        let mut config = LogoConfig::default();

        if let Some(val) = get_env("LUMO_LOGO_RADIUS")
            && let Ok(n) = val.parse()
        {
            config.radius = n;
        }
        if let Some(val) = get_env("LUMO_LOGO_WIDTH")
            && let Ok(n) = val.parse()
        {
            config.stroke_width = n;
        }
        if let Some(val) = get_env("LUMO_LOGO_MARGIN")
            && let Ok(n) = val.parse()
        {
            config.margin = n;
        }

        let mut positionals = Vec::new();
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => return Err(ParseError::Help),
                "--version" | "-V" => return Err(ParseError::Version),
                other => {
                    if let Some(val) = other.strip_prefix("--ring-colors=") {
                        config.palette = parse_palette(val)?;
                    } else if other.starts_with("--") {
                        return Err(ParseError::UnknownFlag(other.to_string()));
                    } else {
                        positionals.push(other.to_string());
                    }
                }
            }
        }

        if positionals.len() > 3 {
            return Err(ParseError::TooManyArgs(positionals.len()));
        }
        let fields = [
            ("RADIUS", &mut config.radius as &mut u32),
            ("WIDTH", &mut config.stroke_width),
            ("MARGIN", &mut config.margin),
        ];
        for ((what, field), raw) in fields.into_iter().zip(&positionals) {
            *field = raw.parse().map_err(|_| ParseError::InvalidValue {
                what,
                value: raw.clone(),
            })?;
        }

        Ok(Self { config })
    }
}

fn parse_palette(raw: &str) -> Result<[Rgb; 3], ParseError> {
    let invalid = || ParseError::InvalidValue {
        what: "--ring-colors",
        value: raw.to_string(),
    };
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }
    let mut palette = [Rgb::BLACK; 3];
    for (slot, part) in palette.iter_mut().zip(parts) {
        *slot = Rgb::parse_hex(part.trim()).map_err(|_| invalid())?;
    }
    Ok(palette)
}

/// Ring-boundary diagnostics, one line for the viewbox and one per ring.
#[must_use]
pub fn diagnostics(geometry: &RingGeometry) -> String {
    let mut out = String::new();
    let size = geometry.size();
    let _ = writeln!(out, "size: {size}x{size}");
    for ring in Ring::ALL {
        let bounds = geometry.bounds(ring);
        let _ = writeln!(
            out,
            "{ring}: {} {} {}",
            bounds.inner_edge, bounds.center, bounds.outer_edge
        );
    }
    out
}

/// Validate, print diagnostics to stderr, and write the SVG to stdout.
///
/// # Errors
/// Returns the validation error; nothing is written in that case.
pub fn run(opts: &Opts) -> Result<(), LogoError> {
    let geometry = opts.config.geometry()?;
    debug!(radius = geometry.outer, size = geometry.size(), "rendering logo");

    eprint!("{}", diagnostics(&geometry));
    // Geometry was just validated; rendering cannot fail past this point.
    let svg = render_svg(&opts.config)?;
    print!("{svg}");
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
        assert_eq!(opts.config, LogoConfig::default());
    }

    #[test]
    fn positionals_in_order() {
        let opts = parse_with_env(["120", "8", "4"], &[]).expect("parse");
        assert_eq!(opts.config.radius, 120);
        assert_eq!(opts.config.stroke_width, 8);
        assert_eq!(opts.config.margin, 4);
    }

    #[test]
    fn trailing_positionals_keep_defaults() {
        let opts = parse_with_env(["120"], &[]).expect("parse");
        assert_eq!(opts.config.radius, 120);
        assert_eq!(opts.config.stroke_width, 10);
        assert_eq!(opts.config.margin, 0);
    }

    #[test]
    fn too_many_positionals() {
        let err = parse_with_env(["90", "10", "0", "7"], &[]);
        assert_eq!(err, Err(ParseError::TooManyArgs(4)));
    }

    #[test]
    fn non_numeric_positional_names_the_field() {
        let err = parse_with_env(["ninety"], &[]);
        assert!(
            matches!(err, Err(ParseError::InvalidValue { what: "RADIUS", .. })),
            "expected InvalidValue for RADIUS, got {err:?}"
        );
        let err = parse_with_env(["90", "-2"], &[]);
        assert!(matches!(
            err,
            Err(ParseError::InvalidValue { what: "WIDTH", .. })
        ));
    }

    #[test]
    fn env_overrides_apply() {
        let env = [
            ("LUMO_LOGO_RADIUS", "120"),
            ("LUMO_LOGO_WIDTH", "8"),
            ("LUMO_LOGO_MARGIN", "2"),
        ];
        let opts = parse_with_env(Vec::<String>::new(), &env).expect("parse");
        assert_eq!(opts.config.radius, 120);
        assert_eq!(opts.config.stroke_width, 8);
        assert_eq!(opts.config.margin, 2);
    }

    #[test]
    fn positionals_override_env() {
        let opts = parse_with_env(["60"], &[("LUMO_LOGO_RADIUS", "120")]).expect("parse");
        assert_eq!(opts.config.radius, 60);
    }

    #[test]
    fn ring_colors_flag() {
        let opts = parse_with_env(["--ring-colors=#111111,#222222,#333333"], &[]).expect("parse");
        assert_eq!(
            opts.config.palette,
            [
                Rgb::new(0x11, 0x11, 0x11),
                Rgb::new(0x22, 0x22, 0x22),
                Rgb::new(0x33, 0x33, 0x33)
            ]
        );
    }

    #[test]
    fn ring_colors_rejects_wrong_count_or_bad_hex() {
        assert!(parse_with_env(["--ring-colors=#111111,#222222"], &[]).is_err());
        assert!(parse_with_env(["--ring-colors=#111111,#222222,bad"], &[]).is_err());
    }

    #[test]
    fn help_and_version() {
        assert_eq!(parse_with_env(["--help"], &[]), Err(ParseError::Help));
        assert_eq!(parse_with_env(["-V"], &[]), Err(ParseError::Version));
    }

    // --- diagnostics tests ---

    #[test]
    fn diagnostics_lists_ring_boundaries() {
        let geometry = LogoConfig::default().geometry().expect("valid defaults");
        let text = diagnostics(&geometry);
        assert_eq!(
            text,
            "size: 190x190\nouter: 85 90 95\nmiddle: 55 60 65\ninner: 25 30 35\n"
        );
    }

    // --- run tests ---

    #[test]
    fn run_rejects_invalid_radius() {
        let opts = parse_with_env(["91"], &[]).expect("parse succeeds; validation is later");
        assert_eq!(run(&opts), Err(LogoError::RadiusNotDivisible(91)));
    }

    #[test]
    fn run_rejects_odd_width() {
        let opts = parse_with_env(["90", "7"], &[]).expect("parse");
        assert_eq!(run(&opts), Err(LogoError::StrokeWidthOdd(7)));
    }
}
