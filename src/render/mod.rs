//! Rendering module for axis-monitor.
//!
//! Turns decoded telemetry into color-annotated text lines for the terminal
//! display framework: range bars with threshold coloring, the motor status
//! line, and the rotating alert line.

mod color;
mod element;
mod range;
mod status;

pub use color::{AnsiCode, Severity, CRITICAL_RATIO, WARNING_RATIO};
pub use element::{AlertLine, Element};
pub use range::RangeBar;
pub use status::StatusLine;

/// A rendered, color-annotated display line.
///
/// Sized for the widest permitted layout plus color escape sequences.
pub type RenderedLine = heapless::String<256>;
