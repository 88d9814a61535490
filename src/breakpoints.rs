use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── Breakpoint table ───────────────────────────────────────────────────

/// A six-step viewport width scale, in pixels.
///
/// The table is advisory data for the generator functions: nothing enforces
/// ordering or uniqueness of the widths, and a custom table may use any
/// values. The canonical scale lives in [`BREAKPOINTS`].
///
/// Serializes as a flat JSON object keyed by the canonical names
/// (`mobile`, `mobileXL`, `tablet`, `laptop`, `desktop`, `wide`), so a
/// table can round-trip through design-token files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub mobile: f64,
    #[serde(rename = "mobileXL")]
    pub mobile_xl: f64,
    pub tablet: f64,
    pub laptop: f64,
    pub desktop: f64,
    pub wide: f64,
}

/// The default breakpoint scale.
pub const BREAKPOINTS: Breakpoints = Breakpoints {
    mobile: 320.0,
    mobile_xl: 480.0,
    tablet: 768.0,
    laptop: 1200.0,
    desktop: 1440.0,
    wide: 1920.0,
};

impl Default for Breakpoints {
    fn default() -> Self {
        BREAKPOINTS
    }
}

// ── Named breakpoints ──────────────────────────────────────────────────

/// One of the six named breakpoints of the default scale.
///
/// Converts into `f64`, so a variant can be passed straight to any of the
/// generator functions: `media::min_width(Breakpoint::Tablet)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    #[serde(rename = "mobileXL")]
    MobileXl,
    Tablet,
    Laptop,
    Desktop,
    Wide,
}

impl Breakpoint {
    /// Every named breakpoint, narrowest to widest.
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Mobile,
        Breakpoint::MobileXl,
        Breakpoint::Tablet,
        Breakpoint::Laptop,
        Breakpoint::Desktop,
        Breakpoint::Wide,
    ];

    /// Width of this breakpoint in the default table, in pixels.
    pub const fn width(self) -> f64 {
        match self {
            Breakpoint::Mobile => BREAKPOINTS.mobile,
            Breakpoint::MobileXl => BREAKPOINTS.mobile_xl,
            Breakpoint::Tablet => BREAKPOINTS.tablet,
            Breakpoint::Laptop => BREAKPOINTS.laptop,
            Breakpoint::Desktop => BREAKPOINTS.desktop,
            Breakpoint::Wide => BREAKPOINTS.wide,
        }
    }

    /// Canonical name, as spelled in serialized tables.
    pub const fn name(self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::MobileXl => "mobileXL",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Laptop => "laptop",
            Breakpoint::Desktop => "desktop",
            Breakpoint::Wide => "wide",
        }
    }
}

impl From<Breakpoint> for f64 {
    fn from(breakpoint: Breakpoint) -> f64 {
        breakpoint.width()
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a string that names no known breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown breakpoint name {0:?} (expected one of: mobile, mobileXL, tablet, laptop, desktop, wide)")]
pub struct ParseBreakpointError(String);

impl FromStr for Breakpoint {
    type Err = ParseBreakpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mobile" => Ok(Breakpoint::Mobile),
            "mobileXL" => Ok(Breakpoint::MobileXl),
            "tablet" => Ok(Breakpoint::Tablet),
            "laptop" => Ok(Breakpoint::Laptop),
            "desktop" => Ok(Breakpoint::Desktop),
            "wide" => Ok(Breakpoint::Wide),
            other => Err(ParseBreakpointError(other.to_string())),
        }
    }
}
