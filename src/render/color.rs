//! ANSI colors and severity thresholds.
//!
//! Severity is derived from the progress ratio of a range channel. The
//! thresholds are named constants with compile-time ordering assertions so a
//! misordered configuration fails the build, not the operator.

use core::fmt::{self, Write};

/// Ratio magnitude at which a channel enters the warning band.
pub const WARNING_RATIO: f32 = 0.6;

/// Ratio magnitude at which a channel enters the critical band.
/// Critical supersedes warning.
pub const CRITICAL_RATIO: f32 = 0.8;

const _: () = assert!(WARNING_RATIO < CRITICAL_RATIO);

/// ANSI SGR color code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AnsiCode {
    /// Green foreground.
    Green = 32,
    /// Yellow foreground.
    Yellow = 33,
    /// Red foreground.
    Red = 31,
}

impl AnsiCode {
    /// Write `text` wrapped in this color followed by a reset.
    pub fn paint<W: Write>(self, out: &mut W, text: &str) -> fmt::Result {
        write!(out, "\x1b[{}m{}\x1b[0m", self as u8, text)
    }
}

/// Display severity of a rendered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Within the normal operating band.
    Nominal,
    /// Approaching a range bound.
    Warning,
    /// At or beyond the critical band.
    Critical,
}

impl Severity {
    /// Classify a progress ratio. The ratio is not clamped upstream, so the
    /// magnitude is used: a value far below the minimum (ratio well under 0)
    /// is as alarming as one far above the maximum.
    pub fn for_ratio(ratio: f32) -> Self {
        let magnitude = if ratio < 0.0 { -ratio } else { ratio };
        if magnitude >= CRITICAL_RATIO {
            Severity::Critical
        } else if magnitude >= WARNING_RATIO {
            Severity::Warning
        } else {
            Severity::Nominal
        }
    }

    /// Terminal color for this severity.
    pub const fn color(self) -> AnsiCode {
        match self {
            Severity::Nominal => AnsiCode::Green,
            Severity::Warning => AnsiCode::Yellow,
            Severity::Critical => AnsiCode::Red,
        }
    }
}
