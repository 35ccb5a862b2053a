#![forbid(unsafe_code)]

//! Logo configuration and ring geometry derivation.

use std::fmt;

use lumo_color::Rgb;

/// Default outer radius.
pub const DEFAULT_RADIUS: u32 = 90;
/// Default stroke width.
pub const DEFAULT_STROKE_WIDTH: u32 = 10;
/// Default margin around the outer ring.
pub const DEFAULT_MARGIN: u32 = 0;

/// Brand palette, outermost ring first.
pub const DEFAULT_PALETTE: [Rgb; 3] = [
    Rgb::new(0xec, 0x03, 0x04),
    Rgb::new(0x02, 0x89, 0x02),
    Rgb::new(0x16, 0x6b, 0xff),
];

/// Logo configuration with named fields and documented defaults.
///
/// The radius must be a multiple of 3 (the middle and inner radii are exact
/// thirds) and the stroke width a multiple of 2 (ring edges land on integer
/// coordinates). Validation happens in [`LogoConfig::geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoConfig {
    /// Outer ring radius. Must be a multiple of 3.
    pub radius: u32,
    /// Stroke width of every ring. Must be a multiple of 2.
    pub stroke_width: u32,
    /// Extra whitespace around the outer ring's outer edge.
    pub margin: u32,
    /// Ring colors, outermost first.
    pub palette: [Rgb; 3],
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            stroke_width: DEFAULT_STROKE_WIDTH,
            margin: DEFAULT_MARGIN,
            palette: DEFAULT_PALETTE,
        }
    }
}

impl LogoConfig {
    /// Replace the ring palette, outermost first.
    #[must_use]
    pub const fn with_palette(mut self, palette: [Rgb; 3]) -> Self {
        self.palette = palette;
        self
    }

    /// Validate the configuration and derive the ring geometry.
    ///
    /// # Errors
    /// [`LogoError::RadiusNotDivisible`] when the radius is not a multiple of
    /// 3; [`LogoError::StrokeWidthOdd`] when the stroke width is odd.
    pub fn geometry(&self) -> Result<RingGeometry, LogoError> {
        if self.radius % 3 != 0 {
            return Err(LogoError::RadiusNotDivisible(self.radius));
        }
        if self.stroke_width % 2 != 0 {
            return Err(LogoError::StrokeWidthOdd(self.stroke_width));
        }

        let inner = self.radius / 3;
        let extent = self.radius + self.stroke_width / 2 + self.margin;
        Ok(RingGeometry {
            outer: self.radius,
            middle: 2 * inner,
            inner,
            stroke_width: self.stroke_width,
            extent,
        })
    }
}

/// The three concentric radii plus the bounding extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingGeometry {
    pub outer: u32,
    pub middle: u32,
    pub inner: u32,
    pub stroke_width: u32,
    /// Distance from the origin to the edge of the viewbox:
    /// outer radius + half the stroke + margin.
    pub extent: u32,
}

impl RingGeometry {
    /// Side length of the square viewbox.
    #[must_use]
    pub const fn size(&self) -> u32 {
        2 * self.extent
    }

    /// Radius of the given ring.
    #[must_use]
    pub const fn radius(&self, ring: Ring) -> u32 {
        match ring {
            Ring::Outer => self.outer,
            Ring::Middle => self.middle,
            Ring::Inner => self.inner,
        }
    }

    /// Stroke boundaries of the given ring: inner edge, center, outer edge.
    #[must_use]
    pub const fn bounds(&self, ring: Ring) -> RingBounds {
        let center = self.radius(ring);
        let half = self.stroke_width / 2;
        RingBounds {
            inner_edge: center.saturating_sub(half),
            center,
            outer_edge: center + half,
        }
    }
}

/// One of the three rings, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ring {
    Outer,
    Middle,
    Inner,
}

impl Ring {
    pub const ALL: [Self; 3] = [Self::Outer, Self::Middle, Self::Inner];
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outer => write!(f, "outer"),
            Self::Middle => write!(f, "middle"),
            Self::Inner => write!(f, "inner"),
        }
    }
}

/// Where a ring's stroke starts, centers, and ends, measured from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingBounds {
    pub inner_edge: u32,
    pub center: u32,
    pub outer_edge: u32,
}

/// Invalid logo configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoError {
    /// Radius is not a multiple of 3.
    RadiusNotDivisible(u32),
    /// Stroke width is not a multiple of 2.
    StrokeWidthOdd(u32),
}

impl fmt::Display for LogoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RadiusNotDivisible(radius) => {
                write!(f, "RADIUS must be a multiple of 3 (got {radius})")
            }
            Self::StrokeWidthOdd(width) => {
                write!(f, "WIDTH must be a multiple of 2 (got {width})")
            }
        }
    }
}

impl std::error::Error for LogoError {}

#[cfg(test)]
mod tests {
    use super::*;

    // --- geometry derivation tests ---

    #[test]
    fn default_geometry_is_exact() {
        let geometry = LogoConfig::default().geometry().expect("valid defaults");
        assert_eq!(geometry.outer, 90);
        assert_eq!(geometry.middle, 60);
        assert_eq!(geometry.inner, 30);
        assert_eq!(geometry.extent, 95);
        assert_eq!(geometry.size(), 190);
    }

    #[test]
    fn margin_grows_the_extent() {
        let config = LogoConfig {
            radius: 90,
            stroke_width: 10,
            margin: 5,
            ..LogoConfig::default()
        };
        let geometry = config.geometry().expect("valid");
        assert_eq!(geometry.extent, 100);
        assert_eq!(geometry.size(), 200);
    }

    #[test]
    fn zero_stroke_width_is_even() {
        let config = LogoConfig {
            stroke_width: 0,
            ..LogoConfig::default()
        };
        let geometry = config.geometry().expect("zero width is a multiple of 2");
        assert_eq!(geometry.bounds(Ring::Outer).inner_edge, 90);
        assert_eq!(geometry.bounds(Ring::Outer).outer_edge, 90);
    }

    #[test]
    fn rejects_radius_not_divisible_by_three() {
        let config = LogoConfig {
            radius: 91,
            ..LogoConfig::default()
        };
        assert_eq!(config.geometry(), Err(LogoError::RadiusNotDivisible(91)));
    }

    #[test]
    fn rejects_odd_stroke_width() {
        let config = LogoConfig {
            stroke_width: 7,
            ..LogoConfig::default()
        };
        assert_eq!(config.geometry(), Err(LogoError::StrokeWidthOdd(7)));
    }

    #[test]
    fn radius_check_runs_before_width_check() {
        let config = LogoConfig {
            radius: 91,
            stroke_width: 7,
            ..LogoConfig::default()
        };
        assert_eq!(config.geometry(), Err(LogoError::RadiusNotDivisible(91)));
    }

    // --- ring bounds tests ---

    #[test]
    fn bounds_straddle_each_radius() {
        let geometry = LogoConfig::default().geometry().expect("valid");
        assert_eq!(
            geometry.bounds(Ring::Outer),
            RingBounds {
                inner_edge: 85,
                center: 90,
                outer_edge: 95
            }
        );
        assert_eq!(
            geometry.bounds(Ring::Middle),
            RingBounds {
                inner_edge: 55,
                center: 60,
                outer_edge: 65
            }
        );
        assert_eq!(
            geometry.bounds(Ring::Inner),
            RingBounds {
                inner_edge: 25,
                center: 30,
                outer_edge: 35
            }
        );
    }

    #[test]
    fn ring_names() {
        let names: Vec<String> = Ring::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["outer", "middle", "inner"]);
    }

    #[test]
    fn error_messages_carry_the_offending_value() {
        assert!(LogoError::RadiusNotDivisible(91).to_string().contains("91"));
        assert!(LogoError::StrokeWidthOdd(7).to_string().contains('7'));
    }
}
