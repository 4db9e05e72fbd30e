//! Motor status line rendering.

use crate::error::Result;
use crate::state::MotorState;

use super::color::{AnsiCode, Severity};
use super::RenderedLine;

/// Renders the motor state label behind a fixed prefix, colored by state.
///
/// An unknown ordinal leaves the previously rendered text in place and
/// surfaces the error to the caller; guessing a state on an operational
/// dashboard is unsafe, and a stale-but-true status beats a wrong one.
#[derive(Debug, Clone)]
pub struct StatusLine {
    prefix: &'static str,
    /// Last successfully rendered line, retained across decode failures.
    line: RenderedLine,
}

impl StatusLine {
    /// Create a status line with the given static prefix.
    pub fn new(prefix: &'static str) -> Self {
        let mut line = RenderedLine::new();
        let _ = line.push_str(prefix);
        Self { prefix, line }
    }

    /// Resolve and render a raw state ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DecodeError::InvalidState`] for ordinals outside
    /// {0..4}; the displayed text is left unchanged in that case.
    pub fn update(&mut self, code: i64) -> Result<()> {
        let state = MotorState::from_code(code)?;

        let mut line = RenderedLine::new();
        let _ = line.push_str(self.prefix);
        let _ = Self::color_for(state).paint(&mut line, state.label());
        self.line = line;
        Ok(())
    }

    /// Coloring policy: DISABLED warns, FAULTED is critical, everything
    /// else is nominal.
    fn color_for(state: MotorState) -> AnsiCode {
        let severity = match state {
            MotorState::Disabled => Severity::Warning,
            MotorState::Faulted => Severity::Critical,
            _ => Severity::Nominal,
        };
        severity.color()
    }

    /// The current rendered line.
    pub fn render(&self) -> RenderedLine {
        self.line.clone()
    }
}
